//! Stct CLI - command-line front end for the Smalltalk dialect tools.
//!
//! This is the main entry point for the stct CLI application.
//! It uses clap for argument parsing and dispatches to the appropriate
//! command handlers based on user input.

mod commands;
mod config;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::traits::{Command, CommandResult};
use commands::{ConvertArgs, ConvertCommand, TokensArgs, TokensCommand};
use config::Config;
use error::{Result, StctError};

/// Stct - tokenize and convert Smalltalk-dialect sources
///
/// Stct prints the token stream of a source file, or renders the
/// supported subset of the language as JavaScript.
#[derive(Parser, Debug)]
#[command(name = "stct")]
#[command(author = "Stc Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize and convert Smalltalk-dialect sources", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "STCT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "STCT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "STCT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the stct CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the token stream of each input
    ///
    /// Each token is printed as its kind and quoted value, followed by the
    /// byte offset where scanning stopped.
    Tokens(TokensCli),

    /// Render sources as JavaScript
    ///
    /// Writes `<stem>.js` next to each input unless an output is given.
    /// Inputs that fail are reported and skipped.
    Convert(ConvertCli),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCli {
    /// Input files (`-` for standard input)
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Also print whitespace tokens
    #[arg(short, long)]
    whitespace: bool,

    /// Byte offset to start scanning at
    #[arg(long, default_value_t = 0)]
    start: usize,

    /// Output format (text, json)
    #[arg(short = 'F', long)]
    format: Option<String>,
}

/// Arguments for the convert subcommand.
#[derive(Parser, Debug)]
struct ConvertCli {
    /// Input files to convert (`-` for standard input)
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Output directory or file (`-` for standard output)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Overwrite existing output files
    #[arg(short, long)]
    force: bool,
}

/// Main entry point for the stct CLI.
///
/// Per-file problems are reported where they happen; the final error
/// line only summarizes.
fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

/// Load configuration, initialize logging and execute the command.
fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let verbose = cli.verbose || config.verbose;

    init_logging(verbose, cli.no_color)?;

    execute_command(cli.command, verbose, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so stdout stays reserved for tokens and converted
/// output. `RUST_LOG` overrides the level chosen by `--verbose`.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| StctError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, verbose: bool, config: Config) -> Result<()> {
    match command {
        Commands::Tokens(args) => {
            let tokens_args = TokensArgs {
                verbose,
                input: args.input,
                include_whitespace: args.whitespace,
                start: args.start,
                format: args.format,
            };
            run_command::<TokensCommand>(tokens_args, config)
        }
        Commands::Convert(args) => {
            let convert_args = ConvertArgs {
                verbose,
                input: args.input,
                output: args.output,
                force: args.force,
            };
            run_command::<ConvertCommand>(convert_args, config)
        }
    }
}

/// Build and run a command inside a span carrying its name.
fn run_command<C: Command<Output = CommandResult>>(args: C::Args, config: Config) -> Result<()> {
    let _span = tracing::debug_span!("command", name = C::name()).entered();
    debug!(description = C::description(), "starting");

    let command = C::new(args).with_config(config);
    let result = command.execute()?;
    debug!(
        processed = result.items_processed,
        elapsed_ms = result.elapsed.as_millis() as u64,
        "done"
    );
    Ok(())
}
