//! Headless demo: a scripted session on a simulated clock.
//!
//! Each iteration advances the clock by one second and nothing sleeps, so a
//! full focus/break cycle finishes instantly. The script pauses for a minute,
//! attaches a note, and skips the first focus phase.

use std::io::Write;

use anyhow::Result;

use super::driver::{Flow, Session};
use super::input::ScriptedInput;
use crate::engine::{ManualClock, Timer};
use crate::render::{LineRenderer, LineStyle, LogFormat, Renderer};
use crate::types::{Key, TimerConfig, TimerMode, TimerPhase};

/// Simulated milliseconds per iteration.
pub const DEMO_STEP_MS: u64 = 1000;

/// Note attached by the demo script.
pub const DEMO_NOTE: &str = "demo note";

/// Settings for [`run_demo`].
#[derive(Debug, Clone)]
pub struct DemoOptions {
    /// Timer configuration
    pub config: TimerConfig,
    /// Starting mode
    pub mode: TimerMode,
    /// Stop after this many phase ends
    pub phases: u32,
    /// Phase-end record format
    pub format: LogFormat,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            config: TimerConfig::default(),
            mode: TimerMode::Pomodoro,
            phases: 4,
            format: LogFormat::Text,
        }
    }
}

fn demo_script() -> Vec<Vec<Key>> {
    let mut steps = vec![Vec::new(); 301];
    steps[3] = vec![Key::Char(' ')];
    steps[63] = vec![Key::Char(' ')];
    steps[120] = std::iter::once(Key::Char('i'))
        .chain(DEMO_NOTE.chars().map(Key::Char))
        .chain(std::iter::once(Key::Enter))
        .collect();
    steps[300] = vec![Key::Char('n')];
    steps
}

/// Runs the demo, writing phase-end records and `Done.` to `out`.
///
/// Returns the writer once the requested number of phases has ended, or
/// when the iteration budget runs out (a stopwatch never ends on its own).
pub fn run_demo<W: Write>(options: &DemoOptions, out: W) -> Result<W> {
    let script = demo_script();
    let longest_phase = [
        TimerPhase::Focus,
        TimerPhase::Break,
        TimerPhase::LongBreak,
    ]
    .iter()
    .map(|&phase| u64::from(options.config.phase_seconds(phase)))
    .max()
    .unwrap_or(0);
    let max_iterations =
        u64::from(options.phases) * (longest_phase + 1) + script.len() as u64;

    let mut timer = Timer::new(options.config.clone());
    if options.mode != timer.mode() {
        timer.set_mode(options.mode);
    }

    let clock = ManualClock::new(0);
    let mut session = Session::new(
        timer,
        clock.clone(),
        ScriptedInput::from_steps(script),
        LineRenderer::new(out, LineStyle::Quiet, options.format),
    );

    tracing::info!(phases = options.phases, max_iterations, "demo started");
    for _ in 0..max_iterations {
        if session.step()? == Flow::Quit || session.phases_ended() >= options.phases {
            break;
        }
        clock.advance(DEMO_STEP_MS);
    }

    let mut renderer = session.into_renderer();
    renderer.finish()?;
    Ok(renderer.into_inner())
}
