//! Answer countdown
//!
//! The timer is polled, never ticked: remaining time is derived from the
//! clock on every query.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::consts::{ANSWER_DURATION_SECS, LOW_TIME_SECS};

/// Source of the current instant
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    origin: Instant,
    offset: Rc<Cell<Duration>>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            offset: Rc::new(Cell::new(Duration::ZERO)),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.offset.set(self.offset.get() + by);
    }

    pub fn advance_secs(&self, secs: f32) {
        self.advance(Duration::from_secs_f32(secs));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + self.offset.get()
    }
}

/// Fixed-duration countdown, restarted at the start of every answer phase
pub struct RoundTimer {
    clock: Box<dyn Clock>,
    started: Option<Instant>,
    duration: Duration,
}

impl std::fmt::Debug for RoundTimer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoundTimer")
            .field("started", &self.started)
            .field("duration", &self.duration)
            .finish()
    }
}

impl RoundTimer {
    pub fn new(clock: Box<dyn Clock>, duration_secs: f32) -> Self {
        let duration = Duration::try_from_secs_f32(duration_secs).unwrap_or_else(|e| {
            log::warn!("Answer time {} unusable ({}), using default", duration_secs, e);
            Duration::from_secs_f32(ANSWER_DURATION_SECS)
        });
        Self {
            clock,
            started: None,
            duration,
        }
    }

    pub fn start(&mut self) {
        self.started = Some(self.clock.now());
    }

    pub fn duration_secs(&self) -> f32 {
        self.duration.as_secs_f32()
    }

    /// Seconds left, clamped at zero. A timer that was never started has none.
    pub fn remaining(&self) -> f32 {
        let Some(started) = self.started else {
            return 0.0;
        };
        let elapsed = self.clock.now().saturating_duration_since(started);
        self.duration.saturating_sub(elapsed).as_secs_f32()
    }

    pub fn is_expired(&self) -> bool {
        self.remaining() <= 0.0
    }

    /// Remaining time as a fraction of the duration, for progress bars
    pub fn fraction_remaining(&self) -> f32 {
        let total = self.duration_secs();
        if total <= 0.0 {
            return 0.0;
        }
        (self.remaining() / total).clamp(0.0, 1.0)
    }

    pub fn is_running_low(&self) -> bool {
        self.remaining() <= LOW_TIME_SECS
    }
}
