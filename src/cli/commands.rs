//! Command-line definitions for the Pomodoro Timer.
//!
//! Uses clap derive macro for argument parsing. The flags select which
//! output variant runs; they never change engine behavior.

use std::time::Duration;

use clap::Parser;

use crate::render::LogFormat;
use crate::types::{TimerConfig, TimerMode};

// ============================================================================
// CLI Structure
// ============================================================================

/// Pomod - a terminal Pomodoro timer and stopwatch
#[derive(Parser, Debug)]
#[command(
    name = "pomod",
    version,
    about = "ターミナルで動くポモドーロタイマー/ストップウォッチ",
    long_about = "大きな数字で残り時間を表示するポモドーロタイマー。\n\
                  [space] 一時停止/再開  [n] 次のフェーズ  [i] メモ  [m] モード切替  [q] 終了",
    after_help = "--verbose / --basic では標準入力から1行ずつコマンドを受け付けます\n\
                  (例: \"n\", \" \", \"i メモの内容\", \"q\")。"
)]
pub struct Cli {
    /// Print one status line per second instead of the full-screen clock
    #[arg(short, long)]
    pub verbose: bool,

    /// Print a single status line rewritten in place
    #[arg(short, long)]
    pub basic: bool,

    /// Focus duration in minutes (1-120)
    #[arg(
        short,
        long,
        default_value = "25",
        value_parser = clap::value_parser!(u32).range(1..=120)
    )]
    pub focus: u32,

    /// Short break duration in minutes (1-60)
    #[arg(
        short,
        long,
        default_value = "5",
        value_parser = clap::value_parser!(u32).range(1..=60)
    )]
    pub short_break: u32,

    /// Long break duration in minutes (1-60)
    #[arg(
        short,
        long,
        default_value = "15",
        value_parser = clap::value_parser!(u32).range(1..=60)
    )]
    pub long_break: u32,

    /// Focus sessions before each long break (1-12)
    #[arg(
        short,
        long,
        default_value = "4",
        value_parser = clap::value_parser!(u32).range(1..=12)
    )]
    pub cycles: u32,

    /// Start in stopwatch mode
    #[arg(short = 'w', long)]
    pub stopwatch: bool,

    /// Run a headless scripted session on a simulated clock
    #[arg(long)]
    pub demo: bool,

    /// Phase ends after which the demo stops
    #[arg(
        long,
        default_value = "4",
        value_parser = clap::value_parser!(u32).range(1..=100)
    )]
    pub demo_phases: u32,

    /// Format of phase-end records
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Print a shell completion script and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<clap_complete::Shell>,
}

// ============================================================================
// Variant
// ============================================================================

/// Which driver setup runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Full-screen big-digit clock with raw keyboard input
    Interactive,
    /// One status line per iteration, commands from stdin
    Verbose,
    /// In-place status line, commands from stdin
    Basic,
    /// Scripted run on a simulated clock
    Demo,
}

impl Variant {
    /// Sleep between driver iterations.
    pub fn poll_interval(&self) -> Duration {
        match self {
            Variant::Interactive => Duration::from_millis(100),
            Variant::Verbose | Variant::Basic => Duration::from_secs(1),
            Variant::Demo => Duration::ZERO,
        }
    }
}

impl Cli {
    /// Selects the variant: demo, then verbose, then basic, else interactive.
    pub fn variant(&self) -> Variant {
        if self.demo {
            Variant::Demo
        } else if self.verbose {
            Variant::Verbose
        } else if self.basic {
            Variant::Basic
        } else {
            Variant::Interactive
        }
    }

    /// Builds the timer configuration from the duration flags.
    pub fn timer_config(&self) -> TimerConfig {
        TimerConfig::default()
            .with_focus_minutes(self.focus)
            .with_break_minutes(self.short_break)
            .with_long_break_minutes(self.long_break)
            .with_cycles(self.cycles)
    }

    /// Mode the timer starts in.
    pub fn initial_mode(&self) -> TimerMode {
        if self.stopwatch {
            TimerMode::Stopwatch
        } else {
            TimerMode::Pomodoro
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
