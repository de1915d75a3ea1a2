//! Cross-fade switcher
//!
//! A two-valued scene selects between a plain text label and an icon glyph;
//! switching renders a timed cross-dissolve instead of an instant swap.

use motif_core::State;
use motif_layout::prelude::*;

use crate::SQUARE_SIZE;

/// Tag on the demo's button
pub const BUTTON_TAG: &str = "toggle-scene";
/// Tag on the text variant
pub const TEXT_SCENE_TAG: &str = "scene-text";
/// Tag on the icon variant
pub const ICON_SCENE_TAG: &str = "scene-icon";

/// The two scenes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DemoScene {
    #[default]
    Text,
    Icon,
}

impl DemoScene {
    /// The other member of the domain
    pub fn toggled(self) -> Self {
        match self {
            DemoScene::Text => DemoScene::Icon,
            DemoScene::Icon => DemoScene::Text,
        }
    }
}

pub struct CrossfadeDemo {
    scene: State<DemoScene>,
    fade: Crossfade<DemoScene>,
}

impl CrossfadeDemo {
    pub fn new(handle: SchedulerHandle) -> Self {
        Self {
            scene: State::new(DemoScene::default()),
            fade: Crossfade::new(handle, DemoScene::default()),
        }
    }

    fn render_scene(scene: DemoScene) -> Div {
        match scene {
            DemoScene::Text => div()
                .tag(TEXT_SCENE_TAG)
                .child(text("Phone").size(32.0)),
            DemoScene::Icon => div()
                .tag(ICON_SCENE_TAG)
                .child(icon(IconGlyph::Phone).square(SQUARE_SIZE)),
        }
    }

    /// Build the demo's element tree for the current frame
    pub fn view(&mut self) -> Div {
        self.fade.set_scene(self.scene.get());

        let scene = self.scene.clone();
        div()
            .flex_col()
            .items_center()
            .gap(16.0)
            .child(
                button("Toggle")
                    .on_click(move || {
                        scene.update(|s| *s = s.toggled());
                    })
                    .tag(BUTTON_TAG),
            )
            .child(self.fade.content(Self::render_scene))
    }

    pub fn scene(&self) -> DemoScene {
        self.scene.get()
    }

    pub fn is_animating(&self) -> bool {
        self.fade.is_animating()
    }
}
