//! Fixed-rate frame scheduling on a background timeline.
//!
//! [`FrameScheduler::start`] moves an animation and the pixel sink onto
//! a spawned thread that steps at a fixed cadence; [`ScheduleHandle::stop`]
//! cancels it, waits for the thread to exit and hands the sink back.
//! Because the sink travels with the timeline, two timelines can never
//! write it concurrently: the next animation cannot start until the
//! previous one has returned the sink.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use log::{debug, error};

use crate::animation::{AnimationKind, AnimationSlot};
use crate::error::ShowError;
use crate::sink::{PixelSink, SinkError};

/// Reset frame timing instead of catching up once we fall behind by this
/// many periods. Prevents catch-up bursts after long stalls.
const MAX_DRIFT_PERIODS: u32 = 2;

/// Frame pacer with drift correction.
///
/// Tracks the deadline of the next frame so the sleep between steps
/// accounts for step execution time and the cadence drifts minimally.
struct FramePacer {
    next_frame: Instant,
    period: Duration,
}

impl FramePacer {
    fn new(period: Duration) -> Self {
        Self {
            next_frame: Instant::now(),
            period,
        }
    }

    /// How long to sleep until the next frame (zero if behind schedule).
    fn until_next_frame(&mut self, now: Instant) -> Duration {
        if now > self.next_frame + self.period * MAX_DRIFT_PERIODS {
            self.next_frame = now;
        }
        self.next_frame += self.period;
        self.next_frame.saturating_duration_since(now)
    }
}

/// Spawns fixed-rate animation timelines.
pub struct FrameScheduler;

impl FrameScheduler {
    /// Start stepping `animation` at `fps` frames per second on its own
    /// timeline.
    ///
    /// The first step executes immediately, not after the first sleep.
    /// Fails with [`ShowError::InvalidFrameRate`] for a zero rate and
    /// [`ShowError::SchedulerUnavailable`] when the thread cannot be
    /// spawned; in the latter case no handle exists and the sink is lost
    /// with the failed spawn, which is fatal anyway.
    pub fn start<S>(
        mut animation: AnimationSlot,
        mut sink: S,
        fps: u32,
    ) -> Result<ScheduleHandle<S>, ShowError>
    where
        S: PixelSink + Send + 'static,
    {
        let kind = animation.kind();
        if fps == 0 {
            return Err(ShowError::InvalidFrameRate { kind });
        }
        let period = Duration::from_micros(1_000_000 / u64::from(fps));

        let cancel = Arc::new(AtomicBool::new(false));
        let cancelled = Arc::clone(&cancel);
        let join = thread::Builder::new()
            .name(format!("frame-{kind}"))
            .spawn(move || {
                let mut pacer = FramePacer::new(period);
                loop {
                    animation.step(&mut sink)?;
                    sink.flush()?;
                    // The flag is checked at most once per period on both
                    // sides of the sleep, so a stop is honored without an
                    // extra trailing step.
                    if cancelled.load(Ordering::Acquire) {
                        break;
                    }
                    thread::sleep(pacer.until_next_frame(Instant::now()));
                    if cancelled.load(Ordering::Acquire) {
                        break;
                    }
                }
                Ok(sink)
            })
            .map_err(ShowError::SchedulerUnavailable)?;

        debug!("started {kind} timeline at {fps} fps");
        Ok(ScheduleHandle {
            kind,
            cancel,
            join: Some(join),
        })
    }
}

/// Owner of one running animation timeline.
///
/// Stopping consumes the handle, so a second stop is unrepresentable.
/// Dropping an un-stopped handle still cancels and joins the timeline,
/// discarding the sink.
pub struct ScheduleHandle<S: PixelSink> {
    kind: AnimationKind,
    cancel: Arc<AtomicBool>,
    join: Option<JoinHandle<Result<S, SinkError>>>,
}

impl<S: PixelSink> ScheduleHandle<S> {
    /// Signal cancellation and block until the timeline has exited.
    ///
    /// Returns the sink once no step is in flight. A sink write failure
    /// that terminated the timeline early surfaces here.
    pub fn stop(mut self) -> Result<S, ShowError> {
        debug!("stopping {} timeline", self.kind);
        self.join_timeline()
    }

    fn join_timeline(&mut self) -> Result<S, ShowError> {
        self.cancel.store(true, Ordering::Release);
        match self.join.take() {
            Some(handle) => match handle.join() {
                Ok(outcome) => Ok(outcome?),
                Err(_) => Err(ShowError::TimelinePanicked),
            },
            // Only reachable through Drop, which always takes the handle.
            None => Err(ShowError::TimelinePanicked),
        }
    }
}

impl<S: PixelSink> Drop for ScheduleHandle<S> {
    fn drop(&mut self) {
        if self.join.is_some() {
            if let Err(err) = self.join_timeline() {
                error!("{} timeline failed during teardown: {err}", self.kind);
            }
        }
    }
}
