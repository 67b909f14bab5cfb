//! Output for the Pomodoro Timer.
//!
//! A [`Renderer`] receives one [`Frame`] per driver iteration plus every
//! phase-end record. Implementations:
//! - `terminal`: full-screen big-digit clock (crossterm)
//! - `line`: verbose, basic and quiet line output
//!
//! The engine has no rendering dependency; frames are plain values.

pub mod font;
pub mod line;
pub mod terminal;

use anyhow::Result;
use clap::ValueEnum;

use crate::engine::Timer;
use crate::types::{format_clock, PhaseEndRecord, TimerMode, TimerPhase, TimerState};

pub use line::{LineRenderer, LineStyle};
pub use terminal::TerminalRenderer;

// ============================================================================
// Frame
// ============================================================================

/// Everything a renderer needs to draw one iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Fixed-width `MM:SS` clock: remaining time, or elapsed for a stopwatch
    pub clock: String,
    /// Current mode
    pub mode: TimerMode,
    /// Current phase
    pub phase: TimerPhase,
    /// Current run state
    pub state: TimerState,
    /// Remaining milliseconds
    pub remaining_ms: u64,
    /// Elapsed milliseconds
    pub elapsed_ms: u64,
    /// Completed focus sessions
    pub completed_focus_sessions: u32,
    /// Note edit buffer while the note editor is open
    pub note_input: Option<String>,
}

impl Frame {
    /// Captures the timer at `now_ms`.
    pub fn capture(timer: &Timer, now_ms: u64, note_input: Option<&str>) -> Self {
        let remaining_ms = timer.remaining_ms(now_ms);
        let elapsed_ms = timer.elapsed_ms(now_ms);
        let shown = match timer.mode() {
            TimerMode::Stopwatch => elapsed_ms,
            TimerMode::Pomodoro => remaining_ms,
        };

        Self {
            clock: format_clock(shown),
            mode: timer.mode(),
            phase: timer.phase(),
            state: timer.state(),
            remaining_ms,
            elapsed_ms,
            completed_focus_sessions: timer.completed_focus_sessions(),
            note_input: note_input.map(str::to_string),
        }
    }
}

// ============================================================================
// Renderer
// ============================================================================

/// Format of phase-end records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// `phase_end=FOCUS duration=25:00 note="" reason=timeout`
    #[default]
    Text,
    /// One JSON object per record
    Json,
}

impl LogFormat {
    /// Formats a record as a single line.
    pub fn format(&self, record: &PhaseEndRecord) -> Result<String> {
        Ok(match self {
            LogFormat::Text => record.to_string(),
            LogFormat::Json => record.to_json()?,
        })
    }
}

/// Draws frames and reports phase ends.
pub trait Renderer {
    /// Draws one iteration.
    fn draw(&mut self, frame: &Frame) -> Result<()>;

    /// Reports a completed or skipped phase.
    fn phase_ended(&mut self, record: &PhaseEndRecord) -> Result<()>;

    /// Called once when the session ends.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}
