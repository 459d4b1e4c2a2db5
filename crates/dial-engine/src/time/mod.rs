//! Time subsystem.
//!
//! Provides the periodic scheduling primitive used to drive re-renders,
//! decoupled from any UI runtime. Intended usage:
//! - one [`Timer`] owner per refreshing component
//! - `schedule()` on attach, `cancel()` with the returned handle on detach

mod interval;

pub use interval::{IntervalHandle, IntervalTimer, TickFn, Timer};
