// clock.rs - Fixed-rate stepping driven by the host's frame callbacks

use std::time::{Duration, Instant};

use crate::error::{LifeError, Result};

/// Token for one scheduled frame callback. Only the most recently issued
/// handle is honoured; `stop` invalidates it immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

/// What a frame callback should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// One generation is due.
    Step,
    /// Too early; wait for the next frame.
    Idle,
    /// The handle was cancelled or superseded.
    Cancelled,
}

/// Paces simulation steps at `fps` regardless of how often the host calls back.
///
/// When a step is due, the reference time moves to `now - (elapsed % interval)`
/// rather than to `now`, so the leftover fraction of an interval carries over
/// and the long-run rate does not drift with coarse callback timing.
#[derive(Debug)]
pub struct SimulationClock {
    interval: Duration,
    reference: Instant,
    pending: Option<FrameHandle>,
    next_handle: u64,
}

impl SimulationClock {
    pub fn new(fps: f64) -> Result<Self> {
        Ok(Self {
            interval: interval_for(fps)?,
            reference: Instant::now(),
            pending: None,
            next_handle: 0,
        })
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn set_fps(&mut self, fps: f64) -> Result<()> {
        self.interval = interval_for(fps)?;
        Ok(())
    }

    pub fn is_running(&self) -> bool {
        self.pending.is_some()
    }

    /// Handle the host should pass to its next frame callback.
    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    /// Arms the first frame. Returns `None` if the clock is already running.
    pub fn start(&mut self, now: Instant) -> Option<FrameHandle> {
        if self.pending.is_some() {
            return None;
        }
        self.reference = now;
        Some(self.schedule())
    }

    /// Drops the pending handle; callbacks carrying it become no-ops.
    pub fn stop(&mut self) {
        self.pending = None;
    }

    /// Frame callback. Re-arms the next frame and reports whether to step.
    pub fn poll(&mut self, handle: FrameHandle, now: Instant) -> Tick {
        if self.pending != Some(handle) {
            return Tick::Cancelled;
        }
        self.schedule();

        let delta = now.saturating_duration_since(self.reference);
        if delta > self.interval {
            let carry = delta.as_nanos() % self.interval.as_nanos();
            self.reference = now - Duration::from_nanos(carry as u64);
            Tick::Step
        } else {
            Tick::Idle
        }
    }

    fn schedule(&mut self) -> FrameHandle {
        self.next_handle += 1;
        let handle = FrameHandle(self.next_handle);
        self.pending = Some(handle);
        handle
    }
}

/// Tick interval for `fps`; rejects rates whose interval is not a
/// representable, non-zero `Duration`.
pub(crate) fn interval_for(fps: f64) -> Result<Duration> {
    if !fps.is_finite() || fps <= 0.0 {
        return Err(LifeError::InvalidConfiguration(format!(
            "fps must be a positive number, got {fps}"
        )));
    }
    let interval = Duration::try_from_secs_f64(1.0 / fps).map_err(|e| {
        LifeError::InvalidConfiguration(format!("fps {fps} is too low: {e}"))
    })?;
    if interval.is_zero() {
        return Err(LifeError::InvalidConfiguration(format!(
            "fps {fps} is too high: interval rounds to zero"
        )));
    }
    Ok(interval)
}
