//! Periodic re-rendering of the clock face.
//!
//! ```text
//!           start()              stop() / drop
//!   Idle ─────────────▶ Running ─────────────▶ Idle
//!                        │   ▲
//!                        └───┘ every period: sample → compose → present
//! ```

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use anyhow::{Context, Result};
use dial_engine::render::RenderSink;
use dial_engine::time::Timer;

use crate::face::FaceComposer;
use crate::style::REFRESH_PERIOD;
use crate::timestamp::WallClock;

/// Render sink shared between the scheduler and its timer callback.
pub type SharedSink = Arc<Mutex<dyn RenderSink + Send>>;

/// What happened to one frame.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FrameOutcome {
    Presented,
    /// The sink could not take the frame; it was dropped.
    SinkUnavailable,
    /// The sink rejected the frame; it was dropped.
    Failed,
}

/// Everything one tick needs, captured by value in the timer callback.
struct FrameTask {
    composer: Arc<FaceComposer>,
    clock: Arc<dyn WallClock>,
    sink: SharedSink,
    frame_index: u64,
}

impl FrameTask {
    fn run(&mut self) -> FrameOutcome {
        let now = self.clock.now();
        let mut frame = self.composer.compose_frame(now);
        let index = self.frame_index;
        self.frame_index = self.frame_index.wrapping_add(1);

        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        if !sink.is_available() {
            log::debug!("render sink unavailable; dropping frame {index}");
            return FrameOutcome::SinkUnavailable;
        }

        match sink.present(&mut frame) {
            Ok(()) => {
                log::trace!("presented frame {index} for {now:?}");
                FrameOutcome::Presented
            }
            Err(e) => {
                log::warn!("failed to present frame {index}: {e:#}");
                FrameOutcome::Failed
            }
        }
    }
}

enum State<H> {
    Idle,
    Running(H),
}

/// Owns the refresh timer of one clock face.
///
/// `start()` attaches the clock (Idle → Running), `stop()` detaches it
/// (Running → Idle). Every tick samples the wall clock afresh, so a restarted
/// clock carries nothing over from its previous run.
pub struct RefreshScheduler<T: Timer> {
    timer: T,
    state: State<T::Handle>,
    period: Duration,
    composer: Arc<FaceComposer>,
    clock: Arc<dyn WallClock>,
    sink: SharedSink,
}

impl<T: Timer> RefreshScheduler<T> {
    /// Creates an idle scheduler with the default face and refresh period.
    pub fn new<S>(timer: T, clock: Arc<dyn WallClock>, sink: S) -> Self
    where
        S: RenderSink + Send + 'static,
    {
        Self {
            timer,
            state: State::Idle,
            period: REFRESH_PERIOD,
            composer: Arc::new(FaceComposer::default()),
            clock,
            sink: Arc::new(Mutex::new(sink)),
        }
    }

    /// Replaces the face composer. Takes effect on the next `start()`.
    pub fn with_composer(mut self, composer: FaceComposer) -> Self {
        self.composer = Arc::new(composer);
        self
    }

    /// Overrides the refresh period. Takes effect on the next `start()`.
    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        matches!(self.state, State::Running(_))
    }

    #[inline]
    pub fn period(&self) -> Duration {
        self.period
    }

    fn task(&self) -> FrameTask {
        FrameTask {
            composer: Arc::clone(&self.composer),
            clock: Arc::clone(&self.clock),
            sink: Arc::clone(&self.sink),
            frame_index: 0,
        }
    }

    /// Attaches the clock: starts the repeating refresh.
    ///
    /// No-op while already running. If the timer cannot be scheduled the
    /// scheduler stays idle and the error is returned; calling `start()` again
    /// later is the recovery path.
    pub fn start(&mut self) -> Result<()> {
        if self.is_running() {
            return Ok(());
        }

        let mut task = self.task();
        let handle = self
            .timer
            .schedule(self.period, Box::new(move || {
                task.run();
            }))
            .context("failed to schedule clock refresh")?;

        self.state = State::Running(handle);
        log::info!("clock attached; refreshing every {:?}", self.period);
        Ok(())
    }

    /// Detaches the clock: cancels the refresh.
    ///
    /// Once this returns no further frame reaches the sink. No-op while idle.
    pub fn stop(&mut self) {
        if let State::Running(handle) = std::mem::replace(&mut self.state, State::Idle) {
            self.timer.cancel(handle);
            log::info!("clock detached");
        }
    }

    /// Samples, composes and presents a single frame right away, independent
    /// of the timer.
    pub fn render_now(&self) -> FrameOutcome {
        self.task().run()
    }
}

impl<T: Timer> Drop for RefreshScheduler<T> {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    use anyhow::bail;
    use dial_engine::render::SvgWriter;
    use dial_engine::scene::DrawList;
    use dial_engine::time::{IntervalTimer, TickFn};

    use crate::timestamp::{FixedClock, Timestamp};

    // ── doubles ───────────────────────────────────────────────────────────

    #[derive(Default)]
    struct ManualState {
        next_id: u64,
        active: Vec<(u64, TickFn)>,
        scheduled: Vec<Duration>,
        cancelled: usize,
        refuse: bool,
    }

    /// Timer whose ticks fire only when the test says so.
    #[derive(Clone, Default)]
    struct ManualTimer(Arc<Mutex<ManualState>>);

    impl ManualTimer {
        fn fire(&self) {
            let mut state = self.0.lock().unwrap();
            for (_, tick) in state.active.iter_mut() {
                tick();
            }
        }

        fn active(&self) -> usize {
            self.0.lock().unwrap().active.len()
        }

        fn refuse(&self, refuse: bool) {
            self.0.lock().unwrap().refuse = refuse;
        }
    }

    impl Timer for ManualTimer {
        type Handle = u64;

        fn schedule(&mut self, period: Duration, tick: TickFn) -> Result<u64> {
            let mut state = self.0.lock().unwrap();
            if state.refuse {
                bail!("no timer available");
            }
            let id = state.next_id;
            state.next_id += 1;
            state.active.push((id, tick));
            state.scheduled.push(period);
            Ok(id)
        }

        fn cancel(&mut self, handle: u64) {
            let mut state = self.0.lock().unwrap();
            state.active.retain(|(id, _)| *id != handle);
            state.cancelled += 1;
        }
    }

    /// Sink recording every presented document.
    #[derive(Clone, Default)]
    struct RecordingSink {
        frames: Arc<Mutex<Vec<String>>>,
        offline: Arc<AtomicBool>,
        reject: Arc<AtomicBool>,
    }

    impl RecordingSink {
        fn count(&self) -> usize {
            self.frames.lock().unwrap().len()
        }

        fn last(&self) -> Option<String> {
            self.frames.lock().unwrap().last().cloned()
        }
    }

    impl RenderSink for RecordingSink {
        fn is_available(&self) -> bool {
            !self.offline.load(Ordering::SeqCst)
        }

        fn present(&mut self, frame: &mut DrawList) -> Result<()> {
            if self.reject.load(Ordering::SeqCst) {
                bail!("display went away");
            }
            let svg = SvgWriter::default().write(frame);
            self.frames.lock().unwrap().push(svg);
            Ok(())
        }
    }

    fn t(h: u8, m: u8, s: u8) -> Timestamp {
        Timestamp::new(h, m, s).unwrap()
    }

    fn fixture() -> (RefreshScheduler<ManualTimer>, ManualTimer, RecordingSink, Arc<FixedClock>) {
        let timer = ManualTimer::default();
        let sink = RecordingSink::default();
        let clock = Arc::new(FixedClock::new(t(3, 0, 0)));
        let scheduler = RefreshScheduler::new(timer.clone(), clock.clone(), sink.clone());
        (scheduler, timer, sink, clock)
    }

    // ── lifecycle ─────────────────────────────────────────────────────────

    #[test]
    fn starts_idle_and_schedules_at_thirty_hertz() {
        let (mut scheduler, timer, sink, _) = fixture();
        assert!(!scheduler.is_running());
        assert_eq!(timer.active(), 0);

        scheduler.start().unwrap();
        assert!(scheduler.is_running());
        assert_eq!(scheduler.period(), REFRESH_PERIOD);
        assert_eq!(timer.0.lock().unwrap().scheduled, vec![REFRESH_PERIOD]);
        assert_eq!(sink.count(), 0);
    }

    #[test]
    fn each_tick_presents_one_frame() {
        let (mut scheduler, timer, sink, _) = fixture();
        scheduler.start().unwrap();

        timer.fire();
        timer.fire();
        timer.fire();
        assert_eq!(sink.count(), 3);
    }

    #[test]
    fn no_frames_after_stop() {
        let (mut scheduler, timer, sink, _) = fixture();
        scheduler.start().unwrap();
        timer.fire();

        scheduler.stop();
        assert!(!scheduler.is_running());
        timer.fire();
        timer.fire();
        assert_eq!(sink.count(), 1);
        assert_eq!(timer.0.lock().unwrap().cancelled, 1);
    }

    #[test]
    fn restart_resumes_with_a_fresh_sample() {
        let (mut scheduler, timer, sink, clock) = fixture();
        scheduler.start().unwrap();
        timer.fire();
        let before = sink.last().unwrap();
        scheduler.stop();

        clock.set(t(9, 45, 30));
        scheduler.start().unwrap();
        timer.fire();

        assert_eq!(sink.count(), 2);
        assert_ne!(sink.last().unwrap(), before);
    }

    #[test]
    fn frames_follow_the_wall_clock() {
        let (mut scheduler, timer, sink, clock) = fixture();
        scheduler.start().unwrap();

        clock.set(t(12, 0, 0));
        timer.fire();
        let noon = sink.last().unwrap();

        clock.set(t(12, 0, 15));
        timer.fire();
        let quarter_past = sink.last().unwrap();

        // Second hand moved from 12 to 3 o'clock.
        assert!(noon.contains(r##"<line x1="50" y1="50" x2="50" y2="10" stroke="#000000" stroke-width="0.5"/>"##));
        assert!(quarter_past.contains(r##"<line x1="50" y1="50" x2="90" y2="50" stroke="#000000" stroke-width="0.5"/>"##));
    }

    #[test]
    fn start_and_stop_are_idempotent() {
        let (mut scheduler, timer, _, _) = fixture();
        scheduler.start().unwrap();
        scheduler.start().unwrap();
        assert_eq!(timer.active(), 1);

        scheduler.stop();
        scheduler.stop();
        assert_eq!(timer.0.lock().unwrap().cancelled, 1);
    }

    #[test]
    fn dropping_a_running_scheduler_cancels_its_timer() {
        let (mut scheduler, timer, _, _) = fixture();
        scheduler.start().unwrap();
        drop(scheduler);
        assert_eq!(timer.active(), 0);
    }

    // ── degraded environments ─────────────────────────────────────────────

    #[test]
    fn unschedulable_timer_leaves_scheduler_idle() {
        let (mut scheduler, timer, sink, _) = fixture();
        timer.refuse(true);
        assert!(scheduler.start().is_err());
        assert!(!scheduler.is_running());

        timer.refuse(false);
        scheduler.start().unwrap();
        timer.fire();
        assert_eq!(sink.count(), 1);
    }

    #[test]
    fn unavailable_sink_drops_the_tick_only() {
        let (mut scheduler, timer, sink, _) = fixture();
        scheduler.start().unwrap();

        sink.offline.store(true, Ordering::SeqCst);
        timer.fire();
        assert_eq!(sink.count(), 0);
        assert!(scheduler.is_running());

        sink.offline.store(false, Ordering::SeqCst);
        timer.fire();
        assert_eq!(sink.count(), 1);
    }

    #[test]
    fn render_now_reports_outcome() {
        let (scheduler, _, sink, _) = fixture();
        assert_eq!(scheduler.render_now(), FrameOutcome::Presented);

        sink.offline.store(true, Ordering::SeqCst);
        assert_eq!(scheduler.render_now(), FrameOutcome::SinkUnavailable);

        sink.offline.store(false, Ordering::SeqCst);
        sink.reject.store(true, Ordering::SeqCst);
        assert_eq!(scheduler.render_now(), FrameOutcome::Failed);
        assert_eq!(sink.count(), 1);
    }

    // ── real timer ────────────────────────────────────────────────────────

    #[test]
    fn interval_timer_stops_delivering_after_stop() {
        #[derive(Clone, Default)]
        struct CountingSink(Arc<AtomicUsize>);

        impl RenderSink for CountingSink {
            fn present(&mut self, _frame: &mut DrawList) -> Result<()> {
                self.0.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }
        }

        let sink = CountingSink::default();
        let mut scheduler = RefreshScheduler::new(
            IntervalTimer::new("clock-test"),
            Arc::new(FixedClock::new(t(8, 0, 0))),
            sink.clone(),
        )
        .with_period(Duration::from_millis(2));
        assert_eq!(scheduler.period(), Duration::from_millis(2));

        scheduler.start().unwrap();
        let deadline = std::time::Instant::now() + Duration::from_secs(5);
        while sink.0.load(Ordering::SeqCst) < 2 && std::time::Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(1));
        }
        scheduler.stop();

        let delivered = sink.0.load(Ordering::SeqCst);
        assert!(delivered >= 2);
        std::thread::sleep(Duration::from_millis(20));
        assert_eq!(sink.0.load(Ordering::SeqCst), delivered);
    }
}
