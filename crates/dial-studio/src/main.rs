//! Dial studio: puts a live clock on disk.
//!
//! Usage: `dial-studio [OUT_DIR] [--seconds SECONDS]`
//!
//! Attaches a clock to `OUT_DIR/clock.svg` (rewritten ~30 times a second),
//! keeps it running for the requested time, detaches, and snapshots the last
//! frame to `OUT_DIR/clock.png`.

mod config;
mod file_sink;
mod raster;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use dial_clock::prelude::*;
use dial_engine::logging::{LoggingConfig, init_logging};

use crate::config::StudioConfig;
use crate::file_sink::SvgFileSink;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = StudioConfig::parse();
    std::fs::create_dir_all(config.out_dir())
        .with_context(|| format!("failed to create {}", config.out_dir().display()))?;

    let svg_path = config.svg_path();
    let sink = SvgFileSink::new(
        &svg_path,
        SvgWriter::default().with_display_width(config.display_width),
    );

    let mut clock = RefreshScheduler::new(IntervalTimer::new("dial-refresh"), Arc::new(LocalClock), sink);
    clock.start().context("failed to attach clock")?;
    log::info!("writing {} for {:?}", svg_path.display(), config.run_for);

    std::thread::sleep(config.run_for);
    clock.stop();

    if clock.render_now() != FrameOutcome::Presented {
        log::warn!("final frame was not written; snapshot may be stale");
    }

    let png_path = config.png_path();
    raster::svg_to_png(&svg_path, &png_path, config.raster_width)?;
    log::info!("snapshot saved to {}", png_path.display());

    Ok(())
}
