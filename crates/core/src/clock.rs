//! Session clock.
//!
//! The clock is driven by the host loop through [`Clock::tick`] with the
//! elapsed milliseconds since the previous tick. It reports a new display value
//! once per whole second.

use crate::types::{ClockDisplay, TIMER_TICK_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Clock {
    elapsed_ms: u64,
    running: bool,
    stopped: bool,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting from zero.
    pub fn start(&mut self) {
        self.elapsed_ms = 0;
        self.running = true;
        self.stopped = false;
    }

    /// Freeze the clock.
    ///
    /// Returns true only for the call that actually stopped a running clock.
    pub fn stop(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.running = false;
        self.stopped = true;
        true
    }

    /// Stop and zero the clock.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// True once a started clock has been stopped.
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_ms / TIMER_TICK_MS as u64
    }

    pub fn display(&self) -> ClockDisplay {
        ClockDisplay::from_secs(self.elapsed_secs())
    }

    /// Advance a running clock.
    ///
    /// Returns the new display value when the whole-second count changed.
    pub fn tick(&mut self, elapsed_ms: u32) -> Option<ClockDisplay> {
        if !self.running {
            return None;
        }
        let before = self.elapsed_secs();
        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms as u64);
        (self.elapsed_secs() != before).then(|| self.display())
    }
}
