use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;

fn parse_seconds(s: &str) -> Result<Duration, String> {
    let secs: f64 = s.parse().map_err(|e| format!("'{s}' is not a number of seconds: {e}"))?;
    Duration::try_from_secs_f64(secs).map_err(|e| format!("'{s}' is out of range: {e}"))
}

/// Studio run configuration.
#[derive(Debug, Clone, PartialEq, Parser)]
#[command(name = "dial-studio", about = "Run a live analog clock into an SVG file, then snapshot it to PNG.")]
pub struct StudioConfig {
    /// Directory receiving `clock.svg` (live) and `clock.png` (final frame).
    #[arg(default_value = ".")]
    pub out_dir: PathBuf,

    #[arg(
        long = "seconds",
        value_name = "SECONDS",
        default_value = "3",
        value_parser = parse_seconds,
        help = "Keep the clock attached for <SECONDS>."
    )]
    pub run_for: Duration,

    #[arg(long, default_value_t = 200.0, help = "Intrinsic width of the SVG document.")]
    pub display_width: f32,

    #[arg(long, default_value_t = 400, value_parser = clap::value_parser!(u32).range(1..), help = "Pixel width of the PNG snapshot.")]
    pub raster_width: u32,
}

impl StudioConfig {
    pub fn svg_path(&self) -> PathBuf {
        self.out_dir.join("clock.svg")
    }

    pub fn png_path(&self) -> PathBuf {
        self.out_dir.join("clock.png")
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }
}
