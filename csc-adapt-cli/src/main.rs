//! CSC Adapt CLI - Command line interface
//!
//! Makefile rules call `csc_adapt <SUBCOMMAND> ...`; see `csc_adapt --help`.

use clap::Parser;
use std::path::PathBuf;
use std::process;
use thiserror::Error;
use tracing::debug;

mod config;
mod logging;
mod platform;

use crate::config::{parse_stage_level, LogConfig};
use crate::logging::CLI_TARGET;
use crate::platform::{print_error, print_usage_error};
use csc_adapt_config::{AdapterConfig, ConfigError, LogFormat, LogLevel, Stage};
use csc_adapt_core::{AdaptError, CompileMode, NativeAdapter, FATAL_EXIT_CODE};

#[derive(Parser, Debug)]
#[command(
    name = "csc_adapt",
    about = "Drive a whole-program C# compiler from Makefile compile/link rules",
    version
)]
struct Cli {
    /// Real compiler executable
    #[arg(long, env = "CSC_ADAPT_COMPILER", value_name = "PATH")]
    compiler: Option<String>,

    /// JSON config file written by the build-system generator
    #[arg(long, env = "CSC_ADAPT_CONFIG", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log level: silent, error, warn, info, debug, trace
    #[arg(long, env = "CSC_ADAPT_LOG_LEVEL", value_name = "LEVEL")]
    log_level: Option<LogLevel>,

    /// Log format: pretty, compact, json
    #[arg(long, value_name = "FORMAT")]
    log_format: Option<LogFormat>,

    /// Also append logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Per-stage log level (dispatch, backtrace, link, invoke)
    #[arg(long = "log-stage", value_name = "STAGE=LEVEL", value_parser = parse_stage_level)]
    log_stages: Vec<(Stage, LogLevel)>,

    /// Treat `compile_object <SOURCE>` as a direct test compile only
    #[arg(long)]
    test_compile: bool,

    /// Subcommand and its arguments, passed through verbatim
    #[arg(
        value_name = "SUBCOMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    request: Vec<String>,
}

#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("cannot open log file: {0}")]
    LogFile(#[from] std::io::Error),

    #[error(transparent)]
    Adapt(#[from] AdaptError),
}

impl CliError {
    fn exit_code(&self) -> i32 {
        match self {
            CliError::Adapt(e) => e.exit_code(),
            CliError::Config(_) | CliError::LogFile(_) => FATAL_EXIT_CODE,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let code = match run(&cli) {
        Ok(code) => code,
        Err(CliError::Adapt(e)) if e.is_usage() => {
            print_usage_error(&e, &cli.request);
            e.exit_code()
        }
        Err(e) => {
            print_error(&e);
            e.exit_code()
        }
    };

    process::exit(code);
}

fn run(cli: &Cli) -> Result<i32, CliError> {
    let file_config = match &cli.config {
        Some(path) => AdapterConfig::load(path)?,
        None => AdapterConfig::default(),
    };

    let log_config = LogConfig::resolve(&file_config, cli.log_level, cli.log_format, &cli.log_stages);
    logging::init_with_file(&log_config, cli.log_file.as_deref())?;

    let compiler = file_config.resolve_compiler(cli.compiler.as_deref());
    debug!(target: CLI_TARGET, compiler = %compiler.display(), "resolved compiler");

    let mode = if cli.test_compile {
        CompileMode::Test
    } else {
        CompileMode::Inferred
    };

    let adapter = NativeAdapter::native(compiler);
    Ok(adapter.dispatch_with_mode(&cli.request, mode)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_globals_stop_at_subcommand() {
        let cli = Cli::try_parse_from([
            "csc_adapt",
            "--compiler",
            "/usr/bin/mcs",
            "link_executable",
            "-debug",
            "--compiler",
            "/out:app.exe",
            "---",
            "/obj/a.obj",
        ])
        .unwrap();

        assert_eq!(cli.compiler.as_deref(), Some("/usr/bin/mcs"));
        assert_eq!(
            cli.request,
            ["link_executable", "-debug", "--compiler", "/out:app.exe", "---", "/obj/a.obj"]
        );
    }

    #[test]
    fn test_empty_request_is_allowed() {
        let cli = Cli::try_parse_from(["csc_adapt"]).unwrap();
        assert!(cli.request.is_empty());
    }

    #[test]
    fn test_log_options() {
        let cli = Cli::try_parse_from([
            "csc_adapt",
            "--log-level",
            "silent",
            "--log-stage",
            "link=trace",
            "--log-format",
            "json",
            "test_csc",
            "a.cs",
        ])
        .unwrap();

        assert_eq!(cli.log_level, Some(LogLevel::Error));
        assert_eq!(cli.log_format, Some(LogFormat::Json));
        assert_eq!(cli.log_stages, vec![(Stage::Link, LogLevel::Trace)]);
    }

    #[test]
    fn test_cli_error_exit_codes() {
        let usage = CliError::from(AdaptError::MissingSubcommand);
        assert_eq!(usage.exit_code(), 1);

        let config = CliError::from(ConfigError::InvalidLevel("loud".to_string()));
        assert_eq!(config.exit_code(), FATAL_EXIT_CODE);
    }
}
