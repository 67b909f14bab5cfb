//! Timer engine for the Pomodoro Timer.
//!
//! This module provides the core timer functionality:
//! - State transitions (Stopped → Running ⇄ Paused → Stopped)
//! - Elapsed/remaining time as a pure function of stored state and `now`
//! - Phase advance (Focus → Break/LongBreak → Focus) with cycle counting
//!
//! The engine never reads a clock. Every query and transition receives a
//! monotonic `now` in milliseconds, and every transition is total: calls that
//! make no sense in the current state are ignored.

use crate::types::{TimerConfig, TimerMode, TimerPhase, TimerState};

// ============================================================================
// RunState
// ============================================================================

/// Timing state, tagged by run state so each variant carries only the fields
/// that are meaningful for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunState {
    Stopped,
    Running { started_at: u64, accumulated: u64 },
    Paused { accumulated: u64 },
}

impl RunState {
    fn banked(&self) -> u64 {
        match *self {
            RunState::Stopped => 0,
            RunState::Running { accumulated, .. } | RunState::Paused { accumulated } => accumulated,
        }
    }
}

// ============================================================================
// PhaseEnd
// ============================================================================

/// Outcome of [`Timer::advance_phase`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseEnd {
    /// Phase that just ended
    pub phase: TimerPhase,
    /// Time spent in the ended phase, in milliseconds
    pub elapsed_ms: u64,
    /// Phase now running
    pub next: TimerPhase,
}

// ============================================================================
// Timer
// ============================================================================

/// A single Pomodoro/stopwatch timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timer {
    mode: TimerMode,
    phase: TimerPhase,
    run: RunState,
    config: TimerConfig,
    completed_focus_sessions: u32,
}

impl Timer {
    /// Creates a stopped Pomodoro timer in the Focus phase.
    pub fn new(config: TimerConfig) -> Self {
        Self {
            mode: TimerMode::Pomodoro,
            phase: TimerPhase::Focus,
            run: RunState::Stopped,
            config,
            completed_focus_sessions: 0,
        }
    }

    /// Starts counting from `now`.
    ///
    /// Valid in any state. Banked time is kept, so starting a paused timer
    /// behaves like resuming it.
    pub fn start(&mut self, now_ms: u64) {
        self.run = RunState::Running {
            started_at: now_ms,
            accumulated: self.run.banked(),
        };
    }

    /// Banks the current running interval and freezes the timer.
    ///
    /// No-op unless running.
    pub fn pause(&mut self, now_ms: u64) {
        if let RunState::Running {
            started_at,
            accumulated,
        } = self.run
        {
            self.run = RunState::Paused {
                accumulated: accumulated.saturating_add(now_ms.saturating_sub(started_at)),
            };
        }
    }

    /// Continues a paused timer from `now`.
    ///
    /// No-op unless paused.
    pub fn resume(&mut self, now_ms: u64) {
        if let RunState::Paused { accumulated } = self.run {
            self.run = RunState::Running {
                started_at: now_ms,
                accumulated,
            };
        }
    }

    /// Pauses a running timer or resumes a paused one. No-op when stopped.
    pub fn toggle_pause(&mut self, now_ms: u64) {
        match self.run {
            RunState::Running { .. } => self.pause(now_ms),
            RunState::Paused { .. } => self.resume(now_ms),
            RunState::Stopped => {}
        }
    }

    /// Stops the timer and discards banked time.
    pub fn stop(&mut self) {
        self.run = RunState::Stopped;
    }

    /// Switches mode, resetting to the mode's initial phase, stopped.
    pub fn set_mode(&mut self, mode: TimerMode) {
        self.mode = mode;
        self.phase = mode.initial_phase();
        self.run = RunState::Stopped;
    }

    /// Jumps to `phase`, stopped with no banked time.
    pub fn set_phase(&mut self, phase: TimerPhase) {
        self.phase = phase;
        self.run = RunState::Stopped;
    }

    /// Per-iteration hook. Does nothing and never mutates the timer.
    pub fn tick(&self, _now_ms: u64) {}

    /// Elapsed time in the current phase.
    ///
    /// While paused this is the value banked at the moment of pausing; after
    /// a stop it is 0.
    pub fn elapsed_ms(&self, now_ms: u64) -> u64 {
        match self.run {
            RunState::Running {
                started_at,
                accumulated,
            } => accumulated.saturating_add(now_ms.saturating_sub(started_at)),
            RunState::Paused { accumulated } => accumulated,
            RunState::Stopped => 0,
        }
    }

    /// Time left in the current phase, floored at 0. Always 0 for a stopwatch.
    pub fn remaining_ms(&self, now_ms: u64) -> u64 {
        if self.mode == TimerMode::Stopwatch {
            return 0;
        }
        self.phase_duration_ms()
            .saturating_sub(self.elapsed_ms(now_ms))
    }

    /// True when a Pomodoro phase has run out. A stopwatch never completes.
    pub fn is_complete(&self, now_ms: u64) -> bool {
        self.mode == TimerMode::Pomodoro && self.remaining_ms(now_ms) == 0
    }

    /// Configured length of the current phase in milliseconds.
    pub fn phase_duration_ms(&self) -> u64 {
        u64::from(self.config.phase_seconds(self.phase)) * 1000
    }

    /// Ends the current phase and starts the next one running at `now`.
    ///
    /// Finishing Focus counts a completed session and moves to a long break
    /// on every `cycles_per_long_break`-th session, a short break otherwise.
    /// Any other phase moves to Focus.
    pub fn advance_phase(&mut self, now_ms: u64) -> PhaseEnd {
        let ended = self.phase;
        let elapsed_ms = self.elapsed_ms(now_ms);

        self.phase = if ended == TimerPhase::Focus {
            self.completed_focus_sessions += 1;
            let cycles = self.config.cycles_per_long_break.max(1);
            if self.completed_focus_sessions % cycles == 0 {
                TimerPhase::LongBreak
            } else {
                TimerPhase::Break
            }
        } else {
            TimerPhase::Focus
        };

        self.run = RunState::Running {
            started_at: now_ms,
            accumulated: 0,
        };

        PhaseEnd {
            phase: ended,
            elapsed_ms,
            next: self.phase,
        }
    }

    /// Current mode.
    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    /// Current phase.
    pub fn phase(&self) -> TimerPhase {
        self.phase
    }

    /// Current run state.
    pub fn state(&self) -> TimerState {
        match self.run {
            RunState::Stopped => TimerState::Stopped,
            RunState::Running { .. } => TimerState::Running,
            RunState::Paused { .. } => TimerState::Paused,
        }
    }

    /// Returns true if the timer is counting.
    pub fn is_running(&self) -> bool {
        matches!(self.run, RunState::Running { .. })
    }

    /// Returns true if the timer is paused.
    pub fn is_paused(&self) -> bool {
        matches!(self.run, RunState::Paused { .. })
    }

    /// Number of fully finished focus phases.
    pub fn completed_focus_sessions(&self) -> u32 {
        self.completed_focus_sessions
    }

    /// Timer configuration.
    pub fn config(&self) -> &TimerConfig {
        &self.config
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new(TimerConfig::default())
    }
}

// ============================================================================
// Tests
// ============================================================================
