use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use track_reveal::animation::timing::frames_to_saturation;
use track_reveal::config::AppConfig;
use track_reveal::headless::run_headless;
use track_reveal::track::{TrackPoints, TRACK_POINTS};
use track_reveal::App;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file to load instead of ./config.ron
    #[arg(long)]
    config: Option<PathBuf>,

    /// Run without a window and print the final animation state
    #[arg(long)]
    headless: bool,

    /// Frames to simulate in headless mode (default: until the stroke saturates)
    #[arg(long, requires = "headless")]
    frames: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = AppConfig::load_from(args.config.as_deref())?;

    let default_filter = if config.debug.verbose_logging {
        "debug"
    } else {
        "info"
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();
    log::debug!("Effective configuration:\n{}", config.to_ron()?);

    // The track is validated once up front; a bad track is fatal
    let track = TrackPoints::from_pairs(&TRACK_POINTS).context("Invalid track definition")?;

    if args.headless {
        let frames = args
            .frames
            .unwrap_or_else(|| frames_to_saturation(track.len()));
        let report = run_headless(track, frames)?;
        log::info!("Headless run finished:\n{}", report.to_ron()?);
        return Ok(());
    }

    log::info!("Starting Track Reveal");
    pollster::block_on(run(&config, track))
}

async fn run(config: &AppConfig, track: TrackPoints) -> anyhow::Result<()> {
    let (app, event_loop) = App::new(config, track).await?;
    App::run(event_loop, app)
}
