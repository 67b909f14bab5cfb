//! Core data types for the Pomodoro Timer.
//!
//! This module defines the data structures used for:
//! - Timer mode, phase and run state
//! - Timer configuration with validation
//! - Phase-end records written when a phase finishes or is skipped
//! - Keyboard keys and the commands they map to

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// TimerMode
// ============================================================================

/// Selects whether phases have fixed durations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerMode {
    /// Focus/break cycle with fixed durations
    #[default]
    Pomodoro,
    /// Counts up without ever completing
    Stopwatch,
}

impl TimerMode {
    /// Returns the string representation of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerMode::Pomodoro => "pomodoro",
            TimerMode::Stopwatch => "stopwatch",
        }
    }

    /// Returns the other mode.
    pub fn toggled(self) -> Self {
        match self {
            TimerMode::Pomodoro => TimerMode::Stopwatch,
            TimerMode::Stopwatch => TimerMode::Pomodoro,
        }
    }

    /// Returns the phase a timer enters when switched to this mode.
    pub fn initial_phase(self) -> TimerPhase {
        match self {
            TimerMode::Pomodoro => TimerPhase::Focus,
            TimerMode::Stopwatch => TimerPhase::Stopwatch,
        }
    }
}

// ============================================================================
// TimerPhase
// ============================================================================

/// Represents the current segment of the timer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimerPhase {
    /// Focused work session
    #[default]
    Focus,
    /// Short break
    Break,
    /// Long break (after every N focus sessions)
    LongBreak,
    /// The undifferentiated stopwatch segment
    Stopwatch,
}

impl TimerPhase {
    /// Returns the display name used by renderers and phase-end records.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerPhase::Focus => "FOCUS",
            TimerPhase::Break => "BREAK",
            TimerPhase::LongBreak => "LONG_BREAK",
            TimerPhase::Stopwatch => "STOPWATCH",
        }
    }

    /// Returns true for either kind of break.
    pub fn is_break(&self) -> bool {
        matches!(self, TimerPhase::Break | TimerPhase::LongBreak)
    }
}

impl fmt::Display for TimerPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// TimerState
// ============================================================================

/// Run state of the timer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimerState {
    /// Not counting; no banked time
    #[default]
    Stopped,
    /// Counting from a monotonic anchor
    Running,
    /// Frozen at the time banked when paused
    Paused,
}

impl TimerState {
    /// Returns the display name of the state.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerState::Stopped => "STOPPED",
            TimerState::Running => "RUNNING",
            TimerState::Paused => "PAUSED",
        }
    }
}

impl fmt::Display for TimerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// TimerConfig
// ============================================================================

/// Errors reported when validating a [`TimerConfig`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A phase duration was zero.
    #[error("{0}の時間は1秒以上で指定してください")]
    ZeroDuration(&'static str),

    /// Long breaks would never be scheduled.
    #[error("長い休憩までのサイクル数は1以上で指定してください")]
    ZeroCycles,
}

/// Configured segment lengths, in whole seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerConfig {
    /// Focus duration in seconds
    pub focus_seconds: u32,
    /// Short break duration in seconds
    pub break_seconds: u32,
    /// Long break duration in seconds
    pub long_break_seconds: u32,
    /// Number of focus sessions between long breaks
    pub cycles_per_long_break: u32,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            focus_seconds: 25 * 60,
            break_seconds: 5 * 60,
            long_break_seconds: 15 * 60,
            cycles_per_long_break: 4,
        }
    }
}

impl TimerConfig {
    /// Sets the focus duration in minutes.
    pub fn with_focus_minutes(mut self, minutes: u32) -> Self {
        self.focus_seconds = minutes.saturating_mul(60);
        self
    }

    /// Sets the short break duration in minutes.
    pub fn with_break_minutes(mut self, minutes: u32) -> Self {
        self.break_seconds = minutes.saturating_mul(60);
        self
    }

    /// Sets the long break duration in minutes.
    pub fn with_long_break_minutes(mut self, minutes: u32) -> Self {
        self.long_break_seconds = minutes.saturating_mul(60);
        self
    }

    /// Sets how many focus sessions precede a long break.
    pub fn with_cycles(mut self, cycles: u32) -> Self {
        self.cycles_per_long_break = cycles;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.focus_seconds == 0 {
            return Err(ConfigError::ZeroDuration("作業"));
        }
        if self.break_seconds == 0 {
            return Err(ConfigError::ZeroDuration("休憩"));
        }
        if self.long_break_seconds == 0 {
            return Err(ConfigError::ZeroDuration("長い休憩"));
        }
        if self.cycles_per_long_break == 0 {
            return Err(ConfigError::ZeroCycles);
        }
        Ok(())
    }

    /// Returns the configured length of `phase` in seconds.
    ///
    /// Phases without a configured length fall back to the focus duration.
    pub fn phase_seconds(&self, phase: TimerPhase) -> u32 {
        match phase {
            TimerPhase::Focus => self.focus_seconds,
            TimerPhase::Break => self.break_seconds,
            TimerPhase::LongBreak => self.long_break_seconds,
            TimerPhase::Stopwatch => self.focus_seconds,
        }
    }
}

// ============================================================================
// Phase-end records
// ============================================================================

/// Why a phase ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdvanceReason {
    /// The phase ran out of time
    Timeout,
    /// The user skipped to the next phase
    Skip,
}

impl AdvanceReason {
    /// Returns the string representation of the reason.
    pub fn as_str(&self) -> &'static str {
        match self {
            AdvanceReason::Timeout => "timeout",
            AdvanceReason::Skip => "skip",
        }
    }
}

/// One line of the phase log, emitted whenever a phase completes or is skipped.
///
/// The text form is
/// `phase_end=FOCUS duration=25:00 note="..." reason=timeout`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseEndRecord {
    /// Phase that ended
    pub phase: TimerPhase,
    /// Time spent in the phase, in milliseconds
    pub elapsed_ms: u64,
    /// Note attached while the phase was running (may be empty)
    pub note: String,
    /// Why the phase ended
    pub reason: AdvanceReason,
}

#[derive(Serialize)]
struct PhaseEndJson<'a> {
    phase: TimerPhase,
    duration: String,
    note: &'a str,
    reason: AdvanceReason,
}

impl PhaseEndRecord {
    /// Returns the elapsed time as `MM:SS` (minutes are not clamped).
    pub fn duration(&self) -> String {
        let (minutes, seconds) = split_minutes_seconds(self.elapsed_ms);
        format!("{:02}:{:02}", minutes, seconds)
    }

    /// Serializes the record as a single-line JSON object.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&PhaseEndJson {
            phase: self.phase,
            duration: self.duration(),
            note: &self.note,
            reason: self.reason,
        })
    }
}

impl fmt::Display for PhaseEndRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "phase_end={} duration={} note=\"{}\" reason={}",
            self.phase,
            self.duration(),
            self.note,
            self.reason.as_str()
        )
    }
}

// ============================================================================
// Keys and commands
// ============================================================================

/// A single key read from an input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A character key
    Char(char),
    /// Enter / Return
    Enter,
    /// Escape
    Esc,
    /// Backspace or Delete
    Backspace,
    /// The input source is exhausted
    Eof,
}

/// Commands accepted by the session driver outside note editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Leave the session
    Quit,
    /// Pause when running, resume when paused
    TogglePause,
    /// End the current phase now
    Skip,
    /// Start editing the note
    BeginNote,
    /// Switch between Pomodoro and Stopwatch
    ToggleMode,
}

impl Command {
    /// Maps a key to a command. Unbound keys return `None`.
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Char('q' | 'Q') | Key::Eof => Some(Command::Quit),
            Key::Char(' ') => Some(Command::TogglePause),
            Key::Char('n' | 'N') => Some(Command::Skip),
            Key::Char('i' | 'I') => Some(Command::BeginNote),
            Key::Char('m' | 'M') => Some(Command::ToggleMode),
            _ => None,
        }
    }
}

// ============================================================================
// Time formatting
// ============================================================================

/// Splits milliseconds into whole minutes and the remaining seconds.
///
/// Uses truncating division.
pub fn split_minutes_seconds(ms: u64) -> (u64, u64) {
    let total_seconds = ms / 1000;
    (total_seconds / 60, total_seconds % 60)
}

/// Formats milliseconds as a fixed-width 5-character `MM:SS` clock.
///
/// Minutes wrap at 100 so the string never grows.
pub fn format_clock(ms: u64) -> String {
    let (minutes, seconds) = split_minutes_seconds(ms);
    format!("{:02}:{:02}", minutes % 100, seconds % 60)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ------------------------------------------------------------------------
    // TimerMode / TimerPhase / TimerState Tests
    // ------------------------------------------------------------------------

    mod enum_tests {
        use super::*;

        #[test]
        fn test_defaults() {
            assert_eq!(TimerMode::default(), TimerMode::Pomodoro);
            assert_eq!(TimerPhase::default(), TimerPhase::Focus);
            assert_eq!(TimerState::default(), TimerState::Stopped);
        }

        #[test]
        fn test_mode_toggled() {
            assert_eq!(TimerMode::Pomodoro.toggled(), TimerMode::Stopwatch);
            assert_eq!(TimerMode::Stopwatch.toggled(), TimerMode::Pomodoro);
        }

        #[test]
        fn test_mode_initial_phase() {
            assert_eq!(TimerMode::Pomodoro.initial_phase(), TimerPhase::Focus);
            assert_eq!(TimerMode::Stopwatch.initial_phase(), TimerPhase::Stopwatch);
        }

        #[test]
        fn test_phase_names() {
            assert_eq!(TimerPhase::Focus.as_str(), "FOCUS");
            assert_eq!(TimerPhase::Break.as_str(), "BREAK");
            assert_eq!(TimerPhase::LongBreak.as_str(), "LONG_BREAK");
            assert_eq!(TimerPhase::Stopwatch.as_str(), "STOPWATCH");
        }

        #[test]
        fn test_state_names() {
            assert_eq!(TimerState::Running.as_str(), "RUNNING");
            assert_eq!(TimerState::Paused.as_str(), "PAUSED");
            // Stopped has its own label, never "BREAK"
            assert_eq!(TimerState::Stopped.as_str(), "STOPPED");
        }

        #[test]
        fn test_phase_serializes_as_display_name() {
            let json = serde_json::to_string(&TimerPhase::LongBreak).unwrap();
            assert_eq!(json, "\"LONG_BREAK\"");

            let phase: TimerPhase = serde_json::from_str("\"BREAK\"").unwrap();
            assert_eq!(phase, TimerPhase::Break);
        }

        #[test]
        fn test_is_break() {
            assert!(!TimerPhase::Focus.is_break());
            assert!(TimerPhase::Break.is_break());
            assert!(TimerPhase::LongBreak.is_break());
            assert!(!TimerPhase::Stopwatch.is_break());
        }
    }

    // ------------------------------------------------------------------------
    // TimerConfig Tests
    // ------------------------------------------------------------------------

    mod timer_config_tests {
        use super::*;

        #[test]
        fn test_default_values() {
            let config = TimerConfig::default();
            assert_eq!(config.focus_seconds, 1500);
            assert_eq!(config.break_seconds, 300);
            assert_eq!(config.long_break_seconds, 900);
            assert_eq!(config.cycles_per_long_break, 4);
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_builder_pattern() {
            let config = TimerConfig::default()
                .with_focus_minutes(50)
                .with_break_minutes(10)
                .with_long_break_minutes(30)
                .with_cycles(3);

            assert_eq!(config.focus_seconds, 3000);
            assert_eq!(config.break_seconds, 600);
            assert_eq!(config.long_break_seconds, 1800);
            assert_eq!(config.cycles_per_long_break, 3);
        }

        #[test]
        fn test_validate_zero_focus() {
            let config = TimerConfig {
                focus_seconds: 0,
                ..Default::default()
            };
            let err = config.validate().unwrap_err();
            assert_eq!(err, ConfigError::ZeroDuration("作業"));
            assert!(err.to_string().contains("作業"));
        }

        #[test]
        fn test_validate_zero_breaks() {
            let config = TimerConfig {
                break_seconds: 0,
                ..Default::default()
            };
            assert_eq!(config.validate(), Err(ConfigError::ZeroDuration("休憩")));

            let config = TimerConfig {
                long_break_seconds: 0,
                ..Default::default()
            };
            assert_eq!(
                config.validate(),
                Err(ConfigError::ZeroDuration("長い休憩"))
            );
        }

        #[test]
        fn test_validate_zero_cycles() {
            let config = TimerConfig::default().with_cycles(0);
            assert_eq!(config.validate(), Err(ConfigError::ZeroCycles));
        }

        #[test]
        fn test_phase_seconds() {
            let config = TimerConfig::default();
            assert_eq!(config.phase_seconds(TimerPhase::Focus), 1500);
            assert_eq!(config.phase_seconds(TimerPhase::Break), 300);
            assert_eq!(config.phase_seconds(TimerPhase::LongBreak), 900);
            // No configured length: falls back to focus
            assert_eq!(config.phase_seconds(TimerPhase::Stopwatch), 1500);
        }
    }

    // ------------------------------------------------------------------------
    // PhaseEndRecord Tests
    // ------------------------------------------------------------------------

    mod phase_end_record_tests {
        use super::*;

        fn record(elapsed_ms: u64, note: &str, reason: AdvanceReason) -> PhaseEndRecord {
            PhaseEndRecord {
                phase: TimerPhase::Focus,
                elapsed_ms,
                note: note.to_string(),
                reason,
            }
        }

        #[test]
        fn test_text_format_timeout() {
            let line = record(1_500_000, "", AdvanceReason::Timeout).to_string();
            assert_eq!(line, "phase_end=FOCUS duration=25:00 note=\"\" reason=timeout");
        }

        #[test]
        fn test_text_format_skip_with_note() {
            let mut rec = record(65_999, "wrote tests", AdvanceReason::Skip);
            rec.phase = TimerPhase::LongBreak;
            assert_eq!(
                rec.to_string(),
                "phase_end=LONG_BREAK duration=01:05 note=\"wrote tests\" reason=skip"
            );
        }

        #[test]
        fn test_duration_minutes_not_clamped() {
            let rec = record(125 * 60 * 1000, "", AdvanceReason::Timeout);
            assert_eq!(rec.duration(), "125:00");
        }

        #[test]
        fn test_json_format() {
            let json = record(61_000, "a \"quoted\" note", AdvanceReason::Skip)
                .to_json()
                .unwrap();
            let value: serde_json::Value = serde_json::from_str(&json).unwrap();
            assert_eq!(value["phase"], "FOCUS");
            assert_eq!(value["duration"], "01:01");
            assert_eq!(value["note"], "a \"quoted\" note");
            assert_eq!(value["reason"], "skip");
        }
    }

    // ------------------------------------------------------------------------
    // Command Tests
    // ------------------------------------------------------------------------

    mod command_tests {
        use super::*;

        #[test]
        fn test_from_key_both_cases() {
            assert_eq!(Command::from_key(Key::Char('q')), Some(Command::Quit));
            assert_eq!(Command::from_key(Key::Char('Q')), Some(Command::Quit));
            assert_eq!(Command::from_key(Key::Char('n')), Some(Command::Skip));
            assert_eq!(Command::from_key(Key::Char('N')), Some(Command::Skip));
            assert_eq!(Command::from_key(Key::Char('i')), Some(Command::BeginNote));
            assert_eq!(Command::from_key(Key::Char('I')), Some(Command::BeginNote));
            assert_eq!(Command::from_key(Key::Char('m')), Some(Command::ToggleMode));
        }

        #[test]
        fn test_space_toggles_pause() {
            assert_eq!(Command::from_key(Key::Char(' ')), Some(Command::TogglePause));
        }

        #[test]
        fn test_eof_quits() {
            assert_eq!(Command::from_key(Key::Eof), Some(Command::Quit));
        }

        #[test]
        fn test_unbound_keys() {
            assert_eq!(Command::from_key(Key::Char('x')), None);
            assert_eq!(Command::from_key(Key::Enter), None);
            assert_eq!(Command::from_key(Key::Esc), None);
            assert_eq!(Command::from_key(Key::Backspace), None);
        }
    }

    // ------------------------------------------------------------------------
    // Formatting Tests
    // ------------------------------------------------------------------------

    mod format_tests {
        use super::*;

        #[test]
        fn test_split_truncates() {
            assert_eq!(split_minutes_seconds(0), (0, 0));
            assert_eq!(split_minutes_seconds(999), (0, 0));
            assert_eq!(split_minutes_seconds(59_999), (0, 59));
            assert_eq!(split_minutes_seconds(60_000), (1, 0));
        }

        #[test]
        fn test_format_clock() {
            assert_eq!(format_clock(0), "00:00");
            assert_eq!(format_clock(1_499_000), "24:59");
            assert_eq!(format_clock(1_500_000), "25:00");
        }

        #[test]
        fn test_format_clock_wraps_minutes() {
            // 100 minutes 5 seconds renders as 00:05
            assert_eq!(format_clock((100 * 60 + 5) * 1000), "00:05");
            assert_eq!(format_clock(125 * 60 * 1000).len(), 5);
        }
    }
}
