//! Non-blocking key sources for the session driver.
//!
//! Every source returns immediately: `Ok(None)` means no key is waiting.

use std::collections::VecDeque;
use std::io::{self, BufRead};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use crossbeam_channel::{Receiver, TryRecvError};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::types::Key;

/// A source of keys polled once per driver iteration.
pub trait InputSource {
    /// Returns the next waiting key without blocking.
    fn poll_key(&mut self) -> Result<Option<Key>>;
}

// ============================================================================
// TerminalInput
// ============================================================================

/// Reads key presses from the terminal through crossterm.
///
/// The terminal must already be in raw mode.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl TerminalInput {
    /// Creates a terminal input source.
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for TerminalInput {
    fn poll_key(&mut self) -> Result<Option<Key>> {
        if !event::poll(Duration::ZERO).context("キー入力の確認に失敗しました")? {
            return Ok(None);
        }
        match event::read().context("キー入力の読み取りに失敗しました")? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                // Raw mode swallows SIGINT, so Ctrl-C ends input instead
                if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
                {
                    return Ok(Some(Key::Eof));
                }
                Ok(map_key_code(key.code))
            }
            _ => Ok(None),
        }
    }
}

fn map_key_code(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Esc),
        KeyCode::Backspace | KeyCode::Delete => Some(Key::Backspace),
        _ => None,
    }
}

// ============================================================================
// StdinInput
// ============================================================================

/// Reads line-buffered standard input on a background thread.
///
/// Each line becomes its characters followed by Enter. A line of the form
/// `i <text>` opens the note editor with `<text>` and commits it. When stdin
/// closes, the source reports [`Key::Eof`].
#[derive(Debug)]
pub struct StdinInput {
    rx: Receiver<Key>,
}

impl StdinInput {
    /// Spawns the reader thread.
    pub fn spawn() -> Result<Self> {
        let (tx, rx) = crossbeam_channel::unbounded();

        thread::Builder::new()
            .name("stdin-keys".to_string())
            .spawn(move || {
                let stdin = io::stdin();
                for line in stdin.lock().lines() {
                    let line = match line {
                        Ok(line) => line,
                        Err(e) => {
                            tracing::warn!("標準入力の読み取りに失敗しました: {}", e);
                            break;
                        }
                    };
                    for key in decode_line(&line) {
                        if tx.send(key).is_err() {
                            return;
                        }
                    }
                }
                tracing::debug!("stdin closed");
            })
            .context("入力スレッドの起動に失敗しました")?;

        Ok(Self { rx })
    }

    /// Wraps an existing receiver; a disconnected channel means end of input.
    pub fn from_receiver(rx: Receiver<Key>) -> Self {
        Self { rx }
    }
}

impl InputSource for StdinInput {
    fn poll_key(&mut self) -> Result<Option<Key>> {
        match self.rx.try_recv() {
            Ok(key) => Ok(Some(key)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Ok(Some(Key::Eof)),
        }
    }
}

/// Translates one line of standard input into keys.
pub fn decode_line(line: &str) -> Vec<Key> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let mut chars = line.chars();
    let mut keys = Vec::with_capacity(line.len() + 1);

    match chars.next() {
        Some(first @ ('i' | 'I')) if !chars.as_str().is_empty() => {
            keys.push(Key::Char(first));
            keys.extend(chars.as_str().trim_start().chars().map(decode_char));
        }
        Some(first) => {
            keys.push(decode_char(first));
            keys.extend(chars.map(decode_char));
        }
        None => {}
    }

    keys.push(Key::Enter);
    keys
}

fn decode_char(c: char) -> Key {
    match c {
        '\u{1b}' => Key::Esc,
        '\u{8}' | '\u{7f}' => Key::Backspace,
        '\n' | '\r' => Key::Enter,
        c => Key::Char(c),
    }
}

// ============================================================================
// ScriptedInput
// ============================================================================

/// Replays a fixed script, one group of keys per driver iteration.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    queue: VecDeque<Option<Key>>,
    eof_when_empty: bool,
}

impl ScriptedInput {
    /// Builds a script where `steps[n]` holds the keys delivered on the
    /// n-th iteration.
    pub fn from_steps<I>(steps: I) -> Self
    where
        I: IntoIterator<Item = Vec<Key>>,
    {
        let mut queue = VecDeque::new();
        for step in steps {
            queue.extend(step.into_iter().map(Some));
            queue.push_back(None);
        }
        Self {
            queue,
            eof_when_empty: false,
        }
    }

    /// Reports [`Key::Eof`] once the script is exhausted instead of idling.
    pub fn then_eof(mut self) -> Self {
        self.eof_when_empty = true;
        self
    }

    /// Returns true once every scripted key has been delivered.
    pub fn is_exhausted(&self) -> bool {
        self.queue.is_empty()
    }
}

impl InputSource for ScriptedInput {
    fn poll_key(&mut self) -> Result<Option<Key>> {
        match self.queue.pop_front() {
            Some(entry) => Ok(entry),
            None if self.eof_when_empty => Ok(Some(Key::Eof)),
            None => Ok(None),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
