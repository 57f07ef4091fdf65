//! Tokens command implementation.
//!
//! Scans each input and prints its token stream followed by the offset
//! where scanning stopped.

use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use serde::Serialize;
use stc_lex::{scan, Scan, Token};
use tracing::{debug, info};

use crate::commands::common::{
    files_failed, read_source, report_failure, validate_inputs, OutputFormat,
};
use crate::commands::traits::{Command, CommandResult};
use crate::config::{Config, TokensConfig};
use crate::error::{Result, StctError};

/// Arguments for the tokens command.
#[derive(Debug, Clone, Default)]
pub struct TokensArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Input files; `-` reads standard input.
    pub input: Vec<PathBuf>,
    /// Emit whitespace tokens.
    pub include_whitespace: bool,
    /// Byte offset to start scanning at.
    pub start: usize,
    /// Output format override.
    pub format: Option<String>,
}

/// One scanned input as printed by `--format json`.
#[derive(Serialize)]
struct FileScan<'a> {
    file: &'a str,
    #[serde(flatten)]
    scan: &'a Scan,
}

/// Tokens command handler.
pub struct TokensCommand {
    args: TokensArgs,
    config: Config,
}

impl TokensCommand {
    /// Create a new TokensCommand with the default configuration.
    pub fn new(args: TokensArgs) -> Self {
        Self {
            args,
            config: Config::default(),
        }
    }

    /// Use `config` for settings the arguments leave open.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Execute the command, printing to standard output.
    pub fn run(&self) -> Result<CommandResult> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.run_with_writer(&mut out)
    }

    /// Execute the command, printing to `out`.
    pub fn run_with_writer(&self, out: &mut impl Write) -> Result<CommandResult> {
        let start_time = Instant::now();
        validate_inputs(&self.args.input)?;

        let config = self.get_tokens_config();
        let format: OutputFormat = config.format.parse()?;
        let with_headers = format == OutputFormat::Text && self.args.input.len() > 1;

        let mut result = CommandResult::default();
        for input in &self.args.input {
            let file = match read_source(input) {
                Ok(file) => file,
                Err(e) => {
                    report_failure(input, &e);
                    result.failed();
                    continue;
                }
            };

            match scan(file.content(), self.args.start, config.include_whitespace) {
                Ok(scanned) => {
                    debug!(
                        file = file.name(),
                        tokens = scanned.tokens.len(),
                        end = scanned.end,
                        "scanned"
                    );
                    if with_headers {
                        writeln!(out, "==> {} <==", file.name())?;
                    }
                    self.write_scan(out, format, file.name(), &scanned)?;
                    result.processed();
                }
                Err(e) => {
                    report_failure(input, &StctError::tokenize(file, e));
                    result.failed();
                }
            }
        }
        out.flush()?;

        let result = result.with_elapsed(start_time.elapsed());
        self.log_completion(&result);
        if !result.is_success() {
            return Err(files_failed(result.items_failed));
        }
        Ok(result)
    }

    /// Get the effective tokens configuration.
    pub fn get_tokens_config(&self) -> TokensConfig {
        let mut config = self.config.tokens.clone();
        config.include_whitespace |= self.args.include_whitespace;
        if let Some(ref format) = self.args.format {
            config.format = format.clone();
        }
        config
    }

    fn write_scan(
        &self,
        out: &mut impl Write,
        format: OutputFormat,
        name: &str,
        scanned: &Scan,
    ) -> Result<()> {
        match format {
            OutputFormat::Text => {
                for token in &scanned.tokens {
                    writeln!(out, "{}", format_token_line(token))?;
                }
                writeln!(out, "end {}", scanned.end)?;
            }
            OutputFormat::Json => {
                let line = serde_json::to_string(&FileScan {
                    file: name,
                    scan: scanned,
                })?;
                writeln!(out, "{}", line)?;
            }
        }
        Ok(())
    }

    fn log_completion(&self, result: &CommandResult) {
        if self.args.verbose {
            info!(
                scanned = result.items_processed,
                failed = result.items_failed,
                elapsed_ms = result.elapsed.as_millis() as u64,
                "tokens finished"
            );
        }
    }
}

/// `kind value` with the value quoted and escaped.
fn format_token_line(token: &Token) -> String {
    format!("{:<13} {:?}", token.kind.as_str(), token.value)
}

impl Command for TokensCommand {
    type Args = TokensArgs;
    type Output = CommandResult;

    fn new(args: Self::Args) -> Self {
        TokensCommand::new(args)
    }

    fn with_config(self, config: Config) -> Self {
        TokensCommand::with_config(self, config)
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "tokens"
    }

    fn description() -> &'static str {
        "Print the token stream of each input"
    }
}
