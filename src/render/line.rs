//! Line-oriented output for the verbose, basic and headless variants.

use std::io::Write;

use anyhow::{Context, Result};

use super::{Frame, LogFormat, Renderer};
use crate::types::{split_minutes_seconds, PhaseEndRecord};

/// How each frame is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    /// One status line per iteration
    Verbose,
    /// A single status line rewritten in place
    Basic,
    /// No status lines; phase-end records only
    Quiet,
}

/// Writes status lines and phase-end records to any writer.
#[derive(Debug)]
pub struct LineRenderer<W: Write> {
    out: W,
    style: LineStyle,
    format: LogFormat,
}

impl<W: Write> LineRenderer<W> {
    /// Creates a renderer writing to `out`.
    pub fn new(out: W, style: LineStyle, format: LogFormat) -> Self {
        Self { out, style, format }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Formats the status text shared by the verbose and basic styles.
    pub fn status_text(frame: &Frame) -> String {
        let (rem_min, rem_sec) = split_minutes_seconds(frame.remaining_ms);
        format!(
            "remaining={:02}:{:02} elapsed={}s phase={} state={}",
            rem_min,
            rem_sec,
            frame.elapsed_ms / 1000,
            frame.phase,
            frame.state
        )
    }
}

impl<W: Write> Renderer for LineRenderer<W> {
    fn draw(&mut self, frame: &Frame) -> Result<()> {
        match self.style {
            LineStyle::Verbose => {
                writeln!(self.out, "{}", Self::status_text(frame))?;
            }
            LineStyle::Basic => {
                write!(self.out, "\r{}   ", Self::status_text(frame))?;
                self.out.flush().context("出力のフラッシュに失敗しました")?;
            }
            LineStyle::Quiet => {}
        }
        Ok(())
    }

    fn phase_ended(&mut self, record: &PhaseEndRecord) -> Result<()> {
        let line = self.format.format(record)?;
        match self.format {
            LogFormat::Text => write!(self.out, "\n{}\n", line)?,
            LogFormat::Json => {
                if self.style == LineStyle::Basic {
                    writeln!(self.out)?;
                }
                writeln!(self.out, "{}", line)?;
            }
        }
        self.out.flush().context("出力のフラッシュに失敗しました")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        write!(self.out, "\nDone.\n")?;
        self.out.flush().context("出力のフラッシュに失敗しました")?;
        Ok(())
    }
}
