//! CSC Adapt Config - configuration data structures
//!
//! This crate holds the shared configuration vocabulary: where the real
//! compiler lives, which log targets exist and how verbose they are.
//! The only I/O it performs is reading the optional JSON config file
//! written by the build-system generator at configure time.

use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Compiler used when nothing else names one.
pub const DEFAULT_COMPILER: &str = "csc";

/// Compiler path baked in when the adapter itself was built.
pub const BUILTIN_COMPILER: Option<&str> = option_env!("CSC_ADAPT_COMPILER");

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid log level '{0}' (expected silent, error, warn, info, debug or trace)")]
    InvalidLevel(String),

    #[error("invalid log format '{0}' (expected pretty, compact or json)")]
    InvalidFormat(String),
}

/// Adapter configuration file
///
/// ```json
/// { "compiler": "C:/Windows/Microsoft.NET/Framework/v4.0.30319/csc.exe",
///   "log_level": "info",
///   "log_format": "compact" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdapterConfig {
    /// Path of the real compiler executable
    pub compiler: Option<String>,
    /// Global log level
    pub log_level: Option<LogLevel>,
    /// Log output format
    pub log_format: Option<LogFormat>,
}

impl AdapterConfig {
    /// Parse a config from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Load a config file from disk.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolve the compiler executable.
    ///
    /// Precedence: command line, config file, build-time value, `csc`.
    pub fn resolve_compiler(&self, cli_override: Option<&str>) -> PathBuf {
        let raw = cli_override
            .or(self.compiler.as_deref())
            .or(BUILTIN_COMPILER)
            .unwrap_or(DEFAULT_COMPILER);
        normalize_compiler_path(raw)
    }
}

/// Normalize a compiler path handed over by the build-system generator.
pub fn normalize_compiler_path(raw: &str) -> PathBuf {
    normalize_for(raw, cfg!(windows))
}

fn normalize_for(raw: &str, windows: bool) -> PathBuf {
    let trimmed = raw.trim();
    let unquoted = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    if windows {
        PathBuf::from(unquoted.replace('/', "\\"))
    } else {
        PathBuf::from(unquoted)
    }
}

/// Adapter stage, one log target per stage
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    Dispatch,
    Backtrace,
    Link,
    Invoke,
}

impl Stage {
    pub const ALL: [Stage; 4] = [Stage::Dispatch, Stage::Backtrace, Stage::Link, Stage::Invoke];

    /// Get the string name of the stage
    pub const fn as_str(&self) -> &'static str {
        match self {
            Stage::Dispatch => "dispatch",
            Stage::Backtrace => "backtrace",
            Stage::Link => "link",
            Stage::Invoke => "invoke",
        }
    }

    /// Get the log target name for this stage
    pub const fn target(&self) -> &'static str {
        match self {
            Stage::Dispatch => "csc_adapt::dispatch",
            Stage::Backtrace => "csc_adapt::backtrace",
            Stage::Link => "csc_adapt::link",
            Stage::Invoke => "csc_adapt::invoke",
        }
    }
}

impl FromStr for Stage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Stage::ALL
            .into_iter()
            .find(|stage| stage.as_str() == s)
            .ok_or_else(|| format!("unknown stage '{s}'"))
    }
}

/// Log level
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    #[serde(alias = "silent")]
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "silent" | "error" => Ok(LogLevel::Error), // silent = only errors
            "warn" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            _ => Err(ConfigError::InvalidLevel(s.to_string())),
        }
    }
}

/// Log output format
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// 彩色多行格式（开发使用）
    Pretty,
    /// 紧凑格式
    #[default]
    Compact,
    /// JSON 格式（工具集成）
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}
