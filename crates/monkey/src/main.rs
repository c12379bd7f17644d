//! monkey - REPL and CLI driver for the Monkey programming language.
//!
//! Thin shell around the `monkey-lexer` / `monkey-parser` / `monkey-eval`
//! pipeline: parse CLI flags, load REPL configuration, set up logging,
//! then either run one script file or start the interactive loop.

mod config;
mod error;
mod repl;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use config::Config;
use error::MonkeyCliError;

/// Monkey - an interpreter for the Monkey programming language.
#[derive(Parser, Debug)]
#[command(name = "monkey")]
#[command(author = "Monkey Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A REPL and script runner for the Monkey programming language", long_about = None)]
struct Cli {
    /// A Monkey source file to run instead of starting the REPL.
    script: Option<PathBuf>,

    /// Enable verbose (debug-level) logging.
    #[arg(short, long, global = true, env = "MONKEY_VERBOSE")]
    verbose: bool,

    /// Path to a monkey.toml configuration file.
    #[arg(short, long, global = true, env = "MONKEY_CONFIG")]
    config: Option<PathBuf>,

    /// Disable colored log output.
    #[arg(long, global = true, env = "MONKEY_NO_COLOR")]
    no_color: bool,
}

/// `anyhow` wraps every error at this one boundary: the core pipeline's
/// own two error channels (parse errors, `Object::Error`) never reach
/// here — they're handled and printed inline by `repl`. Only
/// process-level failures (`MonkeyCliError`) propagate up to `main`.
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color)?;

    let config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };

    match cli.script {
        Some(path) => run_script(&path, &config)?,
        None => repl::run(&config)?,
    }

    Ok(())
}

fn init_logging(verbose: bool, no_color: bool) -> error::Result<()> {
    let filter = if verbose {
        EnvFilter::try_from_env("MONKEY_LOG").unwrap_or_else(|_| EnvFilter::new("monkey=debug"))
    } else {
        EnvFilter::try_from_env("MONKEY_LOG").unwrap_or_else(|_| EnvFilter::new("monkey=info"))
    };

    let subscriber = fmt::layer().with_ansi(!no_color).with_target(false).with_thread_ids(false).with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| MonkeyCliError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Runs a single script file through the pipeline once and exits,
/// rather than entering the interactive loop.
fn run_script(path: &PathBuf, config: &Config) -> error::Result<()> {
    let source = std::fs::read_to_string(path).map_err(|source| MonkeyCliError::ScriptRead {
        path: path.display().to_string(),
        source,
    })?;

    let env = monkey_object::Environment::new();
    repl::eval_line(&source, &env, config);
    Ok(())
}
