//! Convert command implementation.
//!
//! This module renders Smalltalk-dialect sources as JavaScript, one output
//! file per input, continuing past failed files.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{debug, info};

use crate::commands::common::{
    error_messages, files_failed, is_stdio, read_source, report_failure, validate_inputs,
};
use crate::commands::traits::{Command, CommandResult};
use crate::config::{Config, ConvertConfig};
use crate::error::{Result, StctError};

/// File stem used for standard input when writing into a directory.
const STDIN_STEM: &str = "stdin";

/// Arguments for the convert command.
#[derive(Debug, Clone, Default)]
pub struct ConvertArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Input files to convert; `-` reads standard input.
    pub input: Vec<PathBuf>,
    /// Output directory or file path; `-` writes to standard output.
    pub output: Option<PathBuf>,
    /// Force overwrite of existing files.
    pub force: bool,
}

/// Where one converted input goes.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Destination {
    Stdout,
    File(PathBuf),
}

/// Convert command handler.
pub struct ConvertCommand {
    args: ConvertArgs,
    config: Config,
}

impl ConvertCommand {
    /// Create a new ConvertCommand with the default configuration.
    pub fn new(args: ConvertArgs) -> Self {
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

    /// Execute the command.
    pub fn run(&self) -> Result<CommandResult> {
        let start_time = Instant::now();
        validate_inputs(&self.args.input)?;
        self.validate_output()?;

        let config = self.get_convert_config();
        let mut result = CommandResult::default();
        for input in &self.args.input {
            match self.convert_file(input, &config) {
                Ok(()) => result.processed(),
                Err(e) => {
                    report_failure(input, &e);
                    result.failed();
                }
            }
        }

        let result = result.with_elapsed(start_time.elapsed());
        self.log_completion(&result);
        if !result.is_success() {
            return Err(files_failed(result.items_failed));
        }
        Ok(result)
    }

    /// Get the effective convert configuration.
    pub fn get_convert_config(&self) -> ConvertConfig {
        let mut config = self.config.convert.clone();
        config.force |= self.args.force;
        config
    }

    /// Several inputs cannot share one output file.
    fn validate_output(&self) -> Result<()> {
        let Some(ref output) = self.args.output else {
            return Ok(());
        };
        if self.args.input.len() > 1 && !is_stdio(output) && !Self::is_dir_target(output) {
            return Err(StctError::Validation(format!(
                "{} {}",
                error_messages::OUTPUT_NOT_DIR,
                output.display()
            )));
        }
        Ok(())
    }

    /// An existing directory, or a path with no extension that does not
    /// exist yet.
    fn is_dir_target(output: &Path) -> bool {
        output.is_dir() || (!output.exists() && output.extension().is_none())
    }

    /// Convert a single input.
    fn convert_file(&self, input: &Path, config: &ConvertConfig) -> Result<()> {
        let destination = self.determine_destination(input, config)?;
        if let Destination::File(ref path) = destination {
            self.check_output_writable(input, path, config)?;
        }

        let file = read_source(input)?;
        let js = match stc_js::render(file.content()) {
            Ok(js) => js,
            Err(e) => return Err(StctError::convert(file, e)),
        };

        match destination {
            Destination::Stdout => {
                let stdout = std::io::stdout();
                let mut out = stdout.lock();
                out.write_all(js.as_bytes())?;
                out.flush()?;
            }
            Destination::File(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(&path, js).map_err(|e| {
                    StctError::FileOperation(format!("Cannot write {}: {}", path.display(), e))
                })?;
                debug!(input = %input.display(), output = %path.display(), "converted");
            }
        }
        Ok(())
    }

    /// Determine where the output for `input` goes.
    fn determine_destination(&self, input: &Path, config: &ConvertConfig) -> Result<Destination> {
        let extension = config.extension.as_str();

        match self.args.output {
            Some(ref output) if is_stdio(output) => Ok(Destination::Stdout),
            Some(ref output) if Self::is_dir_target(output) => {
                let stem = if is_stdio(input) {
                    STDIN_STEM.to_string()
                } else {
                    input
                        .file_stem()
                        .ok_or_else(|| {
                            StctError::FileOperation(format!(
                                "{} {}",
                                error_messages::INVALID_FILE_PATH,
                                input.display()
                            ))
                        })?
                        .to_string_lossy()
                        .to_string()
                };
                Ok(Destination::File(output.join(format!("{}.{}", stem, extension))))
            }
            Some(ref output) => Ok(Destination::File(output.clone())),
            None if is_stdio(input) => Ok(Destination::Stdout),
            None => Ok(Destination::File(input.with_extension(extension))),
        }
    }

    /// Refuse to clobber existing files without `--force`, and never
    /// overwrite the input itself.
    fn check_output_writable(
        &self,
        input: &Path,
        output: &Path,
        config: &ConvertConfig,
    ) -> Result<()> {
        if !is_stdio(input) && Self::same_file(input, output) {
            return Err(StctError::Validation(format!(
                "Output would overwrite its input: {}",
                output.display()
            )));
        }
        if output.exists() && !config.force {
            return Err(StctError::Validation(format!(
                "{} {}",
                error_messages::OUTPUT_FILE_EXISTS,
                output.display()
            )));
        }
        Ok(())
    }

    /// Whether two paths name the same file, after resolving `.`, `..`
    /// and symlinks when both exist.
    fn same_file(a: &Path, b: &Path) -> bool {
        if a == b {
            return true;
        }
        match (a.canonicalize(), b.canonicalize()) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }

    /// Log completion statistics if verbose.
    fn log_completion(&self, result: &CommandResult) {
        if self.args.verbose {
            info!(
                converted = result.items_processed,
                failed = result.items_failed,
                elapsed_ms = result.elapsed.as_millis() as u64,
                "convert finished"
            );
        }
    }
}

impl Command for ConvertCommand {
    type Args = ConvertArgs;
    type Output = CommandResult;

    fn new(args: Self::Args) -> Self {
        ConvertCommand::new(args)
    }

    fn with_config(self, config: Config) -> Self {
        ConvertCommand::with_config(self, config)
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "convert"
    }

    fn description() -> &'static str {
        "Render sources as JavaScript"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_input(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_convert_args_default() {
        let args = ConvertArgs::default();
        assert!(args.input.is_empty());
        assert!(args.output.is_none());
        assert!(!args.verbose);
        assert!(!args.force);
    }

    #[test]
    fn test_convert_writes_next_to_input() {
        let temp_dir = TempDir::new().unwrap();
        let input = write_input(&temp_dir, "sum.st", "16rFF + 1 \"total\"");

        let result = ConvertCommand::new(ConvertArgs {
            input: vec![input],
            ..ConvertArgs::default()
        })
        .run()
        .unwrap();

        assert_eq!(result.items_processed, 1);
        let output = std::fs::read_to_string(temp_dir.path().join("sum.js")).unwrap();
        assert_eq!(output, "255 + 1 // total");
    }

    #[test]
    fn test_convert_into_directory() {
        let temp_dir = TempDir::new().unwrap();
        let a = write_input(&temp_dir, "a.st", "1");
        let b = write_input(&temp_dir, "b.st", "2");
        let out_dir = temp_dir.path().join("out");

        ConvertCommand::new(ConvertArgs {
            input: vec![a, b],
            output: Some(out_dir.clone()),
            ..ConvertArgs::default()
        })
        .run()
        .unwrap();

        assert_eq!(std::fs::read_to_string(out_dir.join("a.js")).unwrap(), "1");
        assert_eq!(std::fs::read_to_string(out_dir.join("b.js")).unwrap(), "2");
    }

    #[test]
    fn test_convert_to_named_file() {
        let temp_dir = TempDir::new().unwrap();
        let input = write_input(&temp_dir, "a.st", "1 = 2");
        let output = temp_dir.path().join("renamed.mjs");

        ConvertCommand::new(ConvertArgs {
            input: vec![input],
            output: Some(output.clone()),
            ..ConvertArgs::default()
        })
        .run()
        .unwrap();

        assert_eq!(std::fs::read_to_string(output).unwrap(), "1 == 2");
    }

    #[test]
    fn test_several_inputs_need_directory() {
        let temp_dir = TempDir::new().unwrap();
        let a = write_input(&temp_dir, "a.st", "1");
        let b = write_input(&temp_dir, "b.st", "2");

        let result = ConvertCommand::new(ConvertArgs {
            input: vec![a, b],
            output: Some(temp_dir.path().join("all.js")),
            ..ConvertArgs::default()
        })
        .run();
        assert!(matches!(result, Err(StctError::Validation(_))));
    }

    #[test]
    fn test_existing_output_requires_force() {
        let temp_dir = TempDir::new().unwrap();
        let input = write_input(&temp_dir, "a.st", "1 + 1");
        let existing = write_input(&temp_dir, "a.js", "old");

        let args = ConvertArgs {
            input: vec![input],
            ..ConvertArgs::default()
        };
        let result = ConvertCommand::new(args.clone()).run();
        assert!(matches!(result, Err(StctError::CommandExecution(_))));
        assert_eq!(std::fs::read_to_string(&existing).unwrap(), "old");

        ConvertCommand::new(ConvertArgs { force: true, ..args }).run().unwrap();
        assert_eq!(std::fs::read_to_string(&existing).unwrap(), "1 + 1");
    }

    #[test]
    fn test_config_force_and_extension() {
        let temp_dir = TempDir::new().unwrap();
        let input = write_input(&temp_dir, "a.st", "3");
        write_input(&temp_dir, "a.mjs", "old");

        let mut config = Config::default();
        config.convert.extension = "mjs".to_string();
        config.convert.force = true;

        ConvertCommand::new(ConvertArgs {
            input: vec![input],
            ..ConvertArgs::default()
        })
        .with_config(config)
        .run()
        .unwrap();

        assert_eq!(
            std::fs::read_to_string(temp_dir.path().join("a.mjs")).unwrap(),
            "3"
        );
    }

    #[test]
    fn test_refuses_to_overwrite_input() {
        let temp_dir = TempDir::new().unwrap();
        let input = write_input(&temp_dir, "a.js", "1");

        let result = ConvertCommand::new(ConvertArgs {
            input: vec![input.clone()],
            force: true,
            ..ConvertArgs::default()
        })
        .run();
        assert!(result.is_err());
        assert_eq!(std::fs::read_to_string(input).unwrap(), "1");
    }

    #[test]
    fn test_refuses_to_overwrite_input_through_other_spelling() {
        let temp_dir = TempDir::new().unwrap();
        let input = write_input(&temp_dir, "a.st", "1 + 2");
        std::fs::create_dir(temp_dir.path().join("sub")).unwrap();
        let same_file = temp_dir.path().join("sub").join("..").join("a.st");

        let result = ConvertCommand::new(ConvertArgs {
            input: vec![input.clone()],
            output: Some(same_file),
            force: true,
            ..ConvertArgs::default()
        })
        .run();
        assert!(matches!(result, Err(StctError::CommandExecution(_))));
        assert_eq!(std::fs::read_to_string(input).unwrap(), "1 + 2");
    }

    #[test]
    fn test_same_file() {
        let temp_dir = TempDir::new().unwrap();
        let a = write_input(&temp_dir, "a.st", "1");
        let b = write_input(&temp_dir, "b.st", "1");
        std::fs::create_dir(temp_dir.path().join("x")).unwrap();

        assert!(ConvertCommand::same_file(
            &a,
            &temp_dir.path().join("x").join("..").join("a.st")
        ));
        assert!(!ConvertCommand::same_file(&a, &b));
        assert!(!ConvertCommand::same_file(&a, &temp_dir.path().join("missing.js")));
    }

    #[test]
    fn test_failures_are_counted_and_others_converted() {
        let temp_dir = TempDir::new().unwrap();
        let bad = write_input(&temp_dir, "bad.st", "x <- 1");
        let good = write_input(&temp_dir, "good.st", "1");
        let missing = temp_dir.path().join("missing.st");

        let result = ConvertCommand::new(ConvertArgs {
            input: vec![bad, missing, good],
            ..ConvertArgs::default()
        })
        .run();

        match result {
            Err(StctError::CommandExecution(msg)) => assert!(msg.starts_with("2 ")),
            other => panic!("Expected CommandExecution error, got {:?}", other),
        }
        assert!(temp_dir.path().join("good.js").exists());
        assert!(!temp_dir.path().join("bad.js").exists());
    }

    #[test]
    fn test_no_input_files() {
        let result = ConvertCommand::new(ConvertArgs::default()).run();
        if let Err(StctError::Validation(msg)) = result {
            assert!(msg.contains("No input files"));
        } else {
            panic!("Expected Validation error");
        }
    }

    #[test]
    fn test_stdin_destination() {
        let command = ConvertCommand::new(ConvertArgs::default());
        let config = command.get_convert_config();
        assert_eq!(
            command.determine_destination(Path::new("-"), &config).unwrap(),
            Destination::Stdout
        );

        let command = ConvertCommand::new(ConvertArgs {
            output: Some(PathBuf::from("build")),
            ..ConvertArgs::default()
        });
        assert_eq!(
            command.determine_destination(Path::new("-"), &config).unwrap(),
            Destination::File(PathBuf::from("build/stdin.js"))
        );
    }

    #[test]
    fn test_command_name() {
        assert_eq!(<ConvertCommand as Command>::name(), "convert");
    }
}
