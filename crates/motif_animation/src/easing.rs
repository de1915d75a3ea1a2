//! Easing curves for timed animations

/// An easing curve mapping linear progress (0.0..=1.0) to eased progress
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    Linear,
    /// Cubic acceleration from rest
    EaseIn,
    /// Cubic deceleration to rest
    EaseOut,
    /// Accelerate then decelerate
    #[default]
    EaseInOut,
    /// CSS-style curve through control points (x1, y1) and (x2, y2)
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Evaluate the curve at `t`, clamping input to 0.0..=1.0
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t * t,
            Easing::EaseOut => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
            Easing::CubicBezier(x1, y1, x2, y2) => {
                // Invert x(s) = t by bisection, then evaluate y(s). The x
                // polynomial is monotonic for control x values in [0, 1].
                let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
                for _ in 0..24 {
                    let mid = (lo + hi) / 2.0;
                    if bezier_component(*x1, *x2, mid) < t {
                        lo = mid;
                    } else {
                        hi = mid;
                    }
                }
                bezier_component(*y1, *y2, (lo + hi) / 2.0)
            }
        }
    }
}

/// One axis of a cubic bezier anchored at 0 and 1
fn bezier_component(c1: f32, c2: f32, s: f32) -> f32 {
    let u = 1.0 - s;
    3.0 * u * u * s * c1 + 3.0 * u * s * s * c2 + s * s * s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        for easing in [
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
        ] {
            assert_eq!(easing.apply(0.0), 0.0, "{easing:?} at 0");
            assert_eq!(easing.apply(1.0), 1.0, "{easing:?} at 1");
        }
    }

    #[test]
    fn test_input_clamped() {
        assert_eq!(Easing::EaseInOut.apply(-0.5), 0.0);
        assert_eq!(Easing::EaseInOut.apply(1.5), 1.0);
    }

    #[test]
    fn test_monotonic() {
        for easing in [Easing::EaseIn, Easing::EaseOut, Easing::EaseInOut] {
            let mut prev = 0.0;
            for i in 1..=100 {
                let v = easing.apply(i as f32 / 100.0);
                assert!(v >= prev, "{easing:?} not monotonic at step {i}");
                prev = v;
            }
        }
    }

    #[test]
    fn test_ease_in_out_midpoint() {
        assert!((Easing::EaseInOut.apply(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_cubic_bezier_linear_control_points() {
        let linear = Easing::CubicBezier(0.25, 0.25, 0.75, 0.75);
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            assert!((linear.apply(t) - t).abs() < 1e-3, "bezier linear at {t}");
        }
    }

    #[test]
    fn test_cubic_bezier_matches_css_ease_shape() {
        // The CSS "ease" curve accelerates early and lands gently.
        let ease = Easing::CubicBezier(0.25, 0.1, 0.25, 1.0);
        assert!((ease.apply(0.0)).abs() < 1e-3);
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-3);
        assert!(ease.apply(0.5) > 0.5);
    }
}
