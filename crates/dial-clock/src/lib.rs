//! Dial clock — a live analog clock face on top of `dial-engine`.
//!
//! Three pieces:
//! - [`angles`]: wall-clock time → hand rotations
//! - [`face`]: rotations + fixed geometry → an ordered draw list
//! - [`scheduler`]: re-sample and re-render on a fixed period
//!
//! # Quick start
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use dial_clock::prelude::*;
//!
//! /// Logs the size of every frame's SVG document.
//! struct LogSink;
//!
//! impl RenderSink for LogSink {
//!     fn present(&mut self, frame: &mut DrawList) -> anyhow::Result<()> {
//!         let svg = SvgWriter::default().write(frame);
//!         log::info!("frame: {} bytes of svg", svg.len());
//!         Ok(())
//!     }
//! }
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut clock = RefreshScheduler::new(IntervalTimer::default(), Arc::new(LocalClock), LogSink);
//!     clock.start()?; // attach
//!     std::thread::sleep(Duration::from_secs(1));
//!     clock.stop(); // detach
//!     Ok(())
//! }
//! ```

pub mod angles;
pub mod face;
pub mod scheduler;
pub mod style;
pub mod timestamp;

pub use face::FaceComposer;
pub use scheduler::RefreshScheduler;

/// The types a host needs to put a clock on screen.
pub mod prelude {
    pub use crate::angles::{HandAngles, hour_angle, minute_angle, second_angle};
    pub use crate::face::{FaceComposer, FaceDecoration};
    pub use crate::scheduler::{FrameOutcome, RefreshScheduler, SharedSink};
    pub use crate::style::{FaceStyle, HandColor, HandSpec, HandStyle, REFRESH_PERIOD};
    pub use crate::timestamp::{FixedClock, LocalClock, Timestamp, WallClock};

    pub use dial_engine::render::{RenderSink, SvgWriter};
    pub use dial_engine::scene::DrawList;
    pub use dial_engine::time::{IntervalTimer, Timer};
}
