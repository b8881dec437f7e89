//! 适配器错误类型
//!
//! 只有用法错误（缺少/未知子命令、参数个数错误）会被优雅处理并以 1 退出；
//! 其余错误属于 I/O 失败，由调用方以非优雅状态结束进程。

use csc_adapt_vfs::VfsError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for adapter operations
pub type AdaptResult<T> = Result<T, AdaptError>;

/// Exit status for handled usage errors.
pub const USAGE_EXIT_CODE: i32 = 1;

/// Exit status for I/O failures the adapter cannot recover from.
pub const FATAL_EXIT_CODE: i32 = 2;

/// Adapter error
#[derive(Error, Debug)]
pub enum AdaptError {
    /// No arguments were supplied at all
    #[error("missing sub command")]
    MissingSubcommand,

    /// First argument is not a known subcommand
    #[error("unknown sub command - {name}")]
    UnknownSubcommand { name: String },

    /// Known subcommand that makes no sense for a whole-program compiler
    #[error("unsupported sub command - {name} (a whole-program compiler produces no separately linkable libraries)")]
    UnsupportedSubcommand { name: String },

    /// Wrong number of arguments for a subcommand
    #[error("{subcommand} - invalid arguments, {message}")]
    Arity {
        subcommand: &'static str,
        message: &'static str,
    },

    /// A placeholder object could not be resolved back to its source
    #[error("cannot resolve placeholder object '{}': {source}", object.display())]
    BacktraceResolution {
        object: PathBuf,
        #[source]
        source: VfsError,
    },

    /// A placeholder object exists but records no source path
    #[error("placeholder object '{}' records no source path", object.display())]
    EmptyBacktrace { object: PathBuf },

    /// A placeholder object could not be written
    #[error("cannot write placeholder object '{}': {source}", object.display())]
    PlaceholderWrite {
        object: PathBuf,
        #[source]
        source: VfsError,
    },

    /// The real compiler could not be started
    #[error("cannot start compiler '{}': {source}", compiler.display())]
    CompilerLaunch {
        compiler: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AdaptError {
    /// Whether this is a usage error that is reported gracefully.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            AdaptError::MissingSubcommand
                | AdaptError::UnknownSubcommand { .. }
                | AdaptError::UnsupportedSubcommand { .. }
                | AdaptError::Arity { .. }
        )
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        if self.is_usage() {
            USAGE_EXIT_CODE
        } else {
            FATAL_EXIT_CODE
        }
    }
}
