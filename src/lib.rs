//! Pomodoro Timer Library
//!
//! This library provides the core functionality for the `pomod` terminal timer.
//! It includes:
//! - Timer engine with an injectable monotonic clock
//! - Session driver that turns keys into timer transitions
//! - Renderers for the big-digit screen and line-oriented output
//! - CLI flag parsing and display utilities
//! - Type definitions for configuration, phases and phase-end records

pub mod cli;
pub mod engine;
pub mod render;
pub mod session;
pub mod types;

// Re-export commonly used types for convenience
pub use types::{
    AdvanceReason, Command, ConfigError, Key, PhaseEndRecord, TimerConfig, TimerMode, TimerPhase,
    TimerState,
};

// Re-export engine types
pub use engine::{Clock, ManualClock, MonotonicClock, NoopTick, PhaseEnd, TickHook, Timer};

// Re-export renderer types
pub use render::{Frame, LineRenderer, LineStyle, LogFormat, Renderer, TerminalRenderer};

// Re-export session types
pub use session::{
    run_demo, DemoOptions, Flow, InputSource, NoteEditor, ScriptedInput, Session, StdinInput,
    TerminalInput,
};
