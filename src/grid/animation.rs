//! Animated scrolling driven by an injected clock and frame scheduler.
//!
//! At most one animation runs at a time. Starting a new one cancels the
//! pending frame of the previous animation, so a late callback for it is
//! recognised by its stale [`FrameHandle`] and ignored.

use std::time::Instant;

use tracing::debug;

use super::{geometry::Offset, item::ItemIndex};

/// Source of the current time in milliseconds.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Wall clock measured from its creation.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Clock that only moves when told to.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualClock {
    now: f64,
}

impl ManualClock {
    pub fn advance(&mut self, ms: f64) {
        self.now += ms;
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now
    }
}

/// Identifies one requested frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHandle(u64);

/// "Run this on the next display refresh" and its cancellation.
pub trait FrameScheduler {
    fn request_frame(&mut self) -> FrameHandle;
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Scheduler holding a single pending frame; the host drains it on refresh.
#[derive(Debug, Default)]
pub struct FrameSlot {
    next_id: u64,
    pending: Option<FrameHandle>,
}

impl FrameSlot {
    pub const fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    /// Take the pending frame so the host can deliver it.
    pub fn take_due(&mut self) -> Option<FrameHandle> {
        self.pending.take()
    }
}

impl FrameScheduler for FrameSlot {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        if let Some(replaced) = self.pending.replace(handle) {
            debug!(?replaced, ?handle, "Replacing pending frame");
        }
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
        }
    }
}

/// One in-flight scroll animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    pub start_offset: Offset,
    pub target_offset: Offset,
    pub start_time: f64,
    pub target_index: ItemIndex,
    pub frame: FrameHandle,
}

impl Animation {
    /// Linear progress in `[0, 1]`.
    pub fn progress(&self, now: f64, duration: f64) -> f64 {
        if duration <= 0.0 {
            return 1.0;
        }
        ((now - self.start_time) / duration).clamp(0.0, 1.0)
    }

    /// Interpolated offset; exactly the target once progress reaches 1.
    pub fn offset_at(&self, progress: f64) -> Offset {
        if progress >= 1.0 {
            self.target_offset
        } else {
            self.start_offset.lerp(self.target_offset, progress)
        }
    }
}

/// Result of one animation frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    pub offset: Offset,
    pub focus: ItemIndex,
    pub finished: bool,
}

/// `Idle` when `running` is `None`, `Running` otherwise.
#[derive(Debug, Clone)]
pub struct Animator {
    duration_ms: f64,
    running: Option<Animation>,
}

impl Animator {
    pub const DEFAULT_DURATION_MS: f64 = 300.0;

    pub const fn new(duration_ms: f64) -> Self {
        Self {
            duration_ms,
            running: None,
        }
    }

    pub const fn is_running(&self) -> bool {
        self.running.is_some()
    }

    pub const fn current(&self) -> Option<&Animation> {
        self.running.as_ref()
    }

    /// Start animating towards `target_offset`, superseding any running animation.
    pub fn start(
        &mut self,
        scheduler: &mut impl FrameScheduler,
        now: f64,
        start_offset: Offset,
        target_offset: Offset,
        target_index: ItemIndex,
    ) {
        if let Some(previous) = self.running.take() {
            scheduler.cancel_frame(previous.frame);
            debug!(
                previous_target = previous.target_index,
                target_index, "Superseding running animation"
            );
        }
        let frame = scheduler.request_frame();
        self.running = Some(Animation {
            start_offset,
            target_offset,
            start_time: now,
            target_index,
            frame,
        });
        debug!(?start_offset, ?target_offset, target_index, "Animation started");
    }

    /// Advance the animation for a delivered frame.
    ///
    /// Returns `None` when idle or when `frame` belongs to a superseded
    /// animation.
    pub fn tick(
        &mut self,
        scheduler: &mut impl FrameScheduler,
        frame: FrameHandle,
        now: f64,
    ) -> Option<Tick> {
        let animation = self.running.as_mut()?;
        if animation.frame != frame {
            debug!(?frame, expected = ?animation.frame, "Ignoring stale frame");
            return None;
        }

        let progress = animation.progress(now, self.duration_ms);
        let tick = Tick {
            offset: animation.offset_at(progress),
            focus: animation.target_index,
            finished: progress >= 1.0,
        };

        if tick.finished {
            debug!(target_index = tick.focus, "Animation finished");
            self.running = None;
        } else {
            animation.frame = scheduler.request_frame();
        }
        Some(tick)
    }

    /// Drop the running animation and its pending frame.
    pub fn cancel(&mut self, scheduler: &mut impl FrameScheduler) {
        if let Some(animation) = self.running.take() {
            scheduler.cancel_frame(animation.frame);
            debug!(target_index = animation.target_index, "Animation cancelled");
        }
    }
}
