//! Full-screen interactive renderer.
//!
//! Draws the phase header, a big-digit clock, the note prompt and the key
//! help on the alternate screen. Phase-end records are shown on screen and
//! replayed to the normal screen once the terminal is restored.

use std::io::Write;

use anyhow::{Context, Result};
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};

use super::font::{big_rows, GLYPH_HEIGHT};
use super::{Frame, LogFormat, Renderer};
use crate::types::{PhaseEndRecord, TimerPhase, TimerState};

const CLOCK_ROW: u16 = 2;
const NOTE_ROW: u16 = CLOCK_ROW + GLYPH_HEIGHT as u16;
const HELP_ROW: u16 = NOTE_ROW + 1;
const LAST_RECORD_ROW: u16 = HELP_ROW + 2;

/// Key help shown under the clock.
pub const KEY_HELP: &str = "keys: [space] pause [n] next [i] note [m] mode [q] quit";

/// Big-digit renderer owning raw mode and the alternate screen.
pub struct TerminalRenderer<W: Write> {
    out: W,
    format: LogFormat,
    active: bool,
    records: Vec<String>,
}

impl<W: Write> TerminalRenderer<W> {
    /// Enables raw mode and switches to the alternate screen.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be initialised; the terminal is
    /// left as it was.
    pub fn new(mut out: W, format: LogFormat) -> Result<Self> {
        terminal::enable_raw_mode().context("端末をrawモードにできませんでした")?;
        if let Err(e) = execute!(out, EnterAlternateScreen, Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(e).context("代替スクリーンに切り替えられませんでした");
        }
        tracing::debug!("terminal initialized");

        Ok(Self {
            out,
            format,
            active: true,
            records: Vec::new(),
        })
    }

    fn restore(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        execute!(self.out, Show, LeaveAlternateScreen).context("端末の復元に失敗しました")?;
        terminal::disable_raw_mode().context("rawモードの解除に失敗しました")?;
        tracing::debug!("terminal restored");
        Ok(())
    }
}

/// Foreground colour for a frame: paused overrides the phase colour.
pub fn frame_color(frame: &Frame) -> Color {
    if frame.state == TimerState::Paused {
        return Color::Rgb { r: 255, g: 255, b: 0 };
    }
    match frame.phase {
        TimerPhase::Focus => Color::Rgb { r: 0, g: 255, b: 0 },
        TimerPhase::Break => Color::Rgb { r: 255, g: 0, b: 0 },
        TimerPhase::LongBreak => Color::Rgb { r: 255, g: 0, b: 255 },
        TimerPhase::Stopwatch => Color::Rgb { r: 255, g: 255, b: 255 },
    }
}

/// Screen lines for a frame as `(row, text)` pairs.
pub fn layout(frame: &Frame) -> Vec<(u16, String)> {
    let mut lines = Vec::with_capacity(GLYPH_HEIGHT + 3);
    lines.push((0, format!("Phase: {}  State: {}", frame.phase, frame.state)));
    for (i, row) in big_rows(&frame.clock).into_iter().enumerate() {
        lines.push((CLOCK_ROW + i as u16, row));
    }
    if let Some(note) = &frame.note_input {
        lines.push((NOTE_ROW, format!("Note: {}_", note)));
    }
    lines.push((HELP_ROW, KEY_HELP.to_string()));
    lines
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn draw(&mut self, frame: &Frame) -> Result<()> {
        queue!(
            self.out,
            Clear(ClearType::All),
            SetForegroundColor(frame_color(frame))
        )?;
        for (row, text) in layout(frame) {
            queue!(self.out, MoveTo(0, row), Print(text))?;
        }
        if let Some(last) = self.records.last() {
            queue!(self.out, MoveTo(0, LAST_RECORD_ROW), Print(last))?;
        }
        queue!(self.out, ResetColor)?;
        self.out.flush().context("画面の描画に失敗しました")?;
        Ok(())
    }

    fn phase_ended(&mut self, record: &PhaseEndRecord) -> Result<()> {
        self.records.push(self.format.format(record)?);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.restore()?;
        for line in &self.records {
            write!(self.out, "\n{}\n", line)?;
        }
        write!(self.out, "\nDone.\n")?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> Drop for TerminalRenderer<W> {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}
