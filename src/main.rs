//! Pomod - a terminal Pomodoro timer
//!
//! Alternates focus sessions with short breaks, and takes a long break after
//! every few focus sessions:
//! - 25 minutes of focus
//! - 5 minutes of short break
//! - 15 minutes of long break after 4 focus sessions

use std::io;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};

use pomod::cli::{Cli, Display, Variant};
use pomod::engine::{MonotonicClock, Timer};
use pomod::render::{LineRenderer, LineStyle, TerminalRenderer};
use pomod::session::{run_demo, DemoOptions, Session, StdinInput, TerminalInput};

/// Main entry point
#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_tracing(cli.verbose);

    // Execute command
    if let Err(e) = execute(cli).await {
        Display::show_anyhow(&e);
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber for logging.
///
/// Logs go to stderr; `RUST_LOG` wins over the `--verbose` default.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

/// Executes the selected variant.
async fn execute(cli: Cli) -> Result<()> {
    if let Some(shell) = cli.completions {
        generate_completions(shell);
        return Ok(());
    }

    let config = cli.timer_config();
    config.validate()?;

    let variant = cli.variant();
    tracing::info!(?variant, focus = cli.focus, cycles = cli.cycles, "starting");

    match variant {
        Variant::Demo => {
            let options = DemoOptions {
                config,
                mode: cli.initial_mode(),
                phases: cli.demo_phases,
                format: cli.log_format,
            };
            run_demo(&options, io::stdout().lock())?;
        }
        Variant::Interactive => {
            // The screen must be up before the timer starts counting.
            let renderer = TerminalRenderer::new(io::stdout(), cli.log_format)
                .context("端末の初期化に失敗しました")?;
            let timer = new_timer(&cli);
            let mut session =
                Session::new(timer, MonotonicClock::new(), TerminalInput::new(), renderer);
            session.run(variant.poll_interval()).await?;
        }
        Variant::Verbose | Variant::Basic => {
            let style = if variant == Variant::Verbose {
                LineStyle::Verbose
            } else {
                LineStyle::Basic
            };
            let input = StdinInput::spawn()?;
            let renderer = LineRenderer::new(io::stdout(), style, cli.log_format);
            let mut session = Session::new(new_timer(&cli), MonotonicClock::new(), input, renderer);
            session.run(variant.poll_interval()).await?;
        }
    }

    Ok(())
}

/// Creates a stopped timer in the requested mode.
fn new_timer(cli: &Cli) -> Timer {
    let mut timer = Timer::new(cli.timer_config());
    if cli.initial_mode() != timer.mode() {
        timer.set_mode(cli.initial_mode());
    }
    timer
}

/// Generates shell completion scripts.
fn generate_completions(shell: clap_complete::Shell) {
    use clap_complete::generate;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut io::stdout());
}

// ============================================================================
// Tests
// ============================================================================
