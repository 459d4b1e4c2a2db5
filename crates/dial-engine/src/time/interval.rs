use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use anyhow::{Context, Result, ensure};

/// Callback invoked on every timer tick.
pub type TickFn = Box<dyn FnMut() + Send + 'static>;

/// Repeating-timer contract: `schedule(period, callback) -> handle`, `cancel(handle)`.
///
/// Implementations must guarantee that ticks of one schedule never overlap and
/// that no tick runs once `cancel` has returned.
pub trait Timer {
    type Handle;

    /// Starts invoking `tick` every `period` until cancelled.
    fn schedule(&mut self, period: Duration, tick: TickFn) -> Result<Self::Handle>;

    /// Stops a schedule. Consumes the handle, so a schedule is cancelled at most once.
    fn cancel(&mut self, handle: Self::Handle);
}

/// Thread-backed repeating timer.
///
/// Each schedule owns one named thread that sleeps until the next deadline and
/// runs the callback on it. Deadlines advance in fixed steps from the start
/// instant so the rate does not drift with callback duration; if a callback
/// overruns, missed deadlines are skipped rather than queued.
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    thread_name: String,
}

impl IntervalTimer {
    pub fn new(thread_name: impl Into<String>) -> Self {
        Self { thread_name: thread_name.into() }
    }
}

impl Default for IntervalTimer {
    fn default() -> Self {
        Self::new("dial-interval")
    }
}

/// Live schedule created by [`IntervalTimer`].
#[derive(Debug)]
pub struct IntervalHandle {
    stop_tx: mpsc::Sender<()>,
    thread: JoinHandle<()>,
}

impl Timer for IntervalTimer {
    type Handle = IntervalHandle;

    fn schedule(&mut self, period: Duration, mut tick: TickFn) -> Result<IntervalHandle> {
        ensure!(!period.is_zero(), "interval period must be non-zero");

        let (stop_tx, stop_rx) = mpsc::channel::<()>();

        let thread = thread::Builder::new()
            .name(self.thread_name.clone())
            .spawn(move || {
                let mut next = Instant::now() + period;
                loop {
                    let wait = next.saturating_duration_since(Instant::now());
                    match stop_rx.recv_timeout(wait) {
                        Err(RecvTimeoutError::Timeout) => {}
                        // Explicit stop, or the handle was dropped.
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }

                    tick();

                    next += period;
                    let now = Instant::now();
                    if next <= now {
                        let behind = now.duration_since(next).as_nanos() / period.as_nanos();
                        let skipped = u32::try_from(behind).unwrap_or(u32::MAX).saturating_add(1);
                        log::trace!("interval overrun; skipping {skipped} tick(s)");
                        next += period.saturating_mul(skipped);
                    }
                }
            })
            .context("failed to spawn interval timer thread")?;

        log::debug!("interval scheduled every {period:?} on '{}'", self.thread_name);
        Ok(IntervalHandle { stop_tx, thread })
    }

    fn cancel(&mut self, handle: IntervalHandle) {
        // The thread may already have exited; a failed send is fine.
        let _ = handle.stop_tx.send(());

        if handle.thread.thread().id() == thread::current().id() {
            // Cancelled from inside its own tick: the loop exits once the tick returns.
            return;
        }

        if handle.thread.join().is_err() {
            log::warn!("interval timer thread '{}' panicked", self.thread_name);
        }
    }
}
