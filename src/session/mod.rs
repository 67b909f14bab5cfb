//! Session module for the Pomodoro Timer.
//!
//! This module drives a timer from user input:
//! - `driver`: the poll loop owning the timer
//! - `input`: non-blocking key sources (terminal, stdin, scripted)
//! - `note`: the note editor
//! - `demo`: a headless scripted run on a simulated clock

pub mod demo;
pub mod driver;
pub mod input;
pub mod note;

pub use demo::{run_demo, DemoOptions};
pub use driver::{Flow, Session};
pub use input::{InputSource, ScriptedInput, StdinInput, TerminalInput};
pub use note::{NoteEditor, NoteOutcome, NOTE_CAPACITY};
