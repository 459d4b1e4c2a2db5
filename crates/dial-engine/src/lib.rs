//! Dial engine crate.
//!
//! Renderer-agnostic building blocks for vector scenes: geometry, paint, an
//! ordered draw stream, an SVG backend behind the `RenderSink` contract, a
//! periodic timer, and logger setup for hosts.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod time;
