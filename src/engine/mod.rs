//! Timer engine module for the Pomodoro Timer.
//!
//! This module contains the core timing functionality:
//! - `timer`: the timer state machine
//! - `clock`: monotonic clock sources injected by the driver
//! - `TickHook`: the per-iteration extension point

pub mod clock;
pub mod timer;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use timer::{PhaseEnd, Timer};

/// Called by the session driver once per iteration while the timer runs.
///
/// Receives the timer by shared reference, so a hook can observe but never
/// change timing state.
pub trait TickHook {
    /// Observes the timer at `now_ms`.
    fn on_tick(&mut self, timer: &Timer, now_ms: u64);
}

/// The default hook: does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTick;

impl TickHook for NoopTick {
    fn on_tick(&mut self, _timer: &Timer, _now_ms: u64) {}
}
