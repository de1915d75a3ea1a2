//! Headless demo runner
//!
//! Picks a demo, presses its toggle, and runs the frame loop, logging the
//! presentation state as the animation settles:
//!
//! ```text
//! motif-demos --demo box-transition --presses 1 --frames 120 --fps 60
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use motif_demos::{DemoApp, DemoScreen};

#[derive(Parser, Debug)]
#[command(name = "motif-demos", about = "Motif animation basics, headless")]
struct Args {
    /// Which demo to run
    #[arg(long, value_enum, default_value_t = DemoScreen::Color)]
    demo: DemoScreen,

    /// Toggle presses before the frame loop starts
    #[arg(long, default_value_t = 1)]
    presses: u32,

    /// Frames to run after pressing
    #[arg(long, default_value_t = 180)]
    frames: u32,

    /// Simulated frame rate
    #[arg(long, default_value_t = 60)]
    fps: u32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let mut app = DemoApp::new(args.demo);
    tracing::info!(demo = ?args.demo, "starting: {}", app.describe());

    for _ in 0..args.presses {
        app.press_toggle()?;
    }
    app.run_frames(args.frames, args.fps)?;

    tracing::info!(demo = ?args.demo, "settled: {}", app.describe());
    Ok(())
}
