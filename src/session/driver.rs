//! Session driver: the poll loop that owns the timer.
//!
//! Each iteration reads the clock, ticks the timer and advances a finished
//! phase, drains pending keys, dispatches commands, and draws a frame.

use std::time::Duration;

use anyhow::Result;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info};

use super::input::InputSource;
use super::note::{NoteEditor, NoteOutcome};
use crate::engine::{Clock, NoopTick, TickHook, Timer};
use crate::render::{Frame, Renderer};
use crate::types::{AdvanceReason, Command, Key, PhaseEndRecord};

/// Whether the loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Run another iteration
    Continue,
    /// The user quit or input ended
    Quit,
}

/// Drives one timer from a clock, an input source and a renderer.
pub struct Session<C, I, R> {
    timer: Timer,
    clock: C,
    input: I,
    renderer: R,
    notes: NoteEditor,
    hook: Box<dyn TickHook>,
    paused_for_note: bool,
    phases_ended: u32,
}

impl<C, I, R> Session<C, I, R>
where
    C: Clock,
    I: InputSource,
    R: Renderer,
{
    /// Creates a session and starts the timer at the clock's current time.
    pub fn new(mut timer: Timer, clock: C, input: I, renderer: R) -> Self {
        let now = clock.now_ms();
        timer.start(now);
        info!(
            mode = timer.mode().as_str(),
            phase = %timer.phase(),
            "timer started"
        );

        Self {
            timer,
            clock,
            input,
            renderer,
            notes: NoteEditor::new(),
            hook: Box::new(NoopTick),
            paused_for_note: false,
            phases_ended: 0,
        }
    }

    /// Replaces the per-iteration tick hook.
    pub fn with_tick_hook(mut self, hook: impl TickHook + 'static) -> Self {
        self.hook = Box::new(hook);
        self
    }

    /// Runs iterations every `poll_interval` until the user quits.
    ///
    /// The renderer is finished even when an iteration fails.
    pub async fn run(&mut self, poll_interval: Duration) -> Result<()> {
        let result = self.poll_loop(poll_interval).await;
        let finished = self.renderer.finish();
        info!(
            completed_focus_sessions = self.timer.completed_focus_sessions(),
            "session ended"
        );
        result.and(finished)
    }

    async fn poll_loop(&mut self, poll_interval: Duration) -> Result<()> {
        let mut ticker = interval(poll_interval.max(Duration::from_millis(1)));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            ticker.tick().await;
            if self.step()? == Flow::Quit {
                return Ok(());
            }
        }
    }

    /// Performs exactly one iteration without sleeping.
    pub fn step(&mut self) -> Result<Flow> {
        let now = self.clock.now_ms();

        if self.timer.is_running() && !self.notes.is_editing() {
            self.timer.tick(now);
            self.hook.on_tick(&self.timer, now);
            if self.timer.is_complete(now) {
                self.advance(now, AdvanceReason::Timeout)?;
            }
        }

        while let Some(key) = self.input.poll_key()? {
            if key == Key::Eof {
                debug!("input ended");
                return self.quit_with_frame(now);
            }
            if self.notes.is_editing() {
                self.handle_note_key(key, now);
                continue;
            }
            if let Some(command) = Command::from_key(key) {
                if self.dispatch(command, now)? == Flow::Quit {
                    return self.quit_with_frame(now);
                }
            }
        }

        self.draw(now)?;
        Ok(Flow::Continue)
    }

    fn quit_with_frame(&mut self, now: u64) -> Result<Flow> {
        self.draw(now)?;
        Ok(Flow::Quit)
    }

    fn dispatch(&mut self, command: Command, now: u64) -> Result<Flow> {
        debug!(?command, "command");
        match command {
            Command::Quit => return Ok(Flow::Quit),
            Command::TogglePause => self.timer.toggle_pause(now),
            Command::Skip => self.advance(now, AdvanceReason::Skip)?,
            Command::BeginNote => {
                self.notes.begin();
                if self.timer.is_running() {
                    self.timer.pause(now);
                    self.paused_for_note = true;
                }
            }
            Command::ToggleMode => {
                let mode = self.timer.mode().toggled();
                self.timer.set_mode(mode);
                self.timer.start(now);
                info!(mode = mode.as_str(), "mode switched");
            }
        }
        Ok(Flow::Continue)
    }

    fn handle_note_key(&mut self, key: Key, now: u64) {
        match self.notes.handle_key(key) {
            NoteOutcome::Editing => {}
            outcome @ (NoteOutcome::Committed | NoteOutcome::Cancelled) => {
                debug!(?outcome, note = self.notes.note(), "note editor closed");
                if self.paused_for_note {
                    self.timer.resume(now);
                    self.paused_for_note = false;
                }
            }
        }
    }

    fn advance(&mut self, now: u64, reason: AdvanceReason) -> Result<()> {
        let end = self.timer.advance_phase(now);
        let record = PhaseEndRecord {
            phase: end.phase,
            elapsed_ms: end.elapsed_ms,
            note: self.notes.take_note(),
            reason,
        };
        self.phases_ended += 1;
        // Advancing always leaves the timer running
        self.paused_for_note = false;

        info!(
            phase = %end.phase,
            next = %end.next,
            duration = %record.duration(),
            reason = reason.as_str(),
            "phase ended"
        );
        self.renderer.phase_ended(&record)
    }

    fn draw(&mut self, now: u64) -> Result<()> {
        let note_input = self.notes.is_editing().then(|| self.notes.buffer());
        let frame = Frame::capture(&self.timer, now, note_input);
        self.renderer.draw(&frame)
    }

    /// The timer owned by this session.
    pub fn timer(&self) -> &Timer {
        &self.timer
    }

    /// The note editor.
    pub fn notes(&self) -> &NoteEditor {
        &self.notes
    }

    /// The renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Number of phases that have ended by timeout or skip.
    pub fn phases_ended(&self) -> u32 {
        self.phases_ended
    }

    /// Consumes the session, returning the renderer.
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

// ============================================================================
// Tests
// ============================================================================
