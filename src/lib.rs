//! CSC Adapt - deferred compilation adapter for whole-program C# compilers
//!
//! # Architecture
//!
//! ```text
//! csc-adapt-config/  - configuration vocabulary (compiler path, log levels)
//! csc-adapt-vfs/     - file system abstraction (native + in-memory)
//! csc-adapt-core/    - placeholders, dispatch, argument assembly, compiler process
//! csc-adapt-cli/     - the `csc_adapt` executable (clap + tracing-subscriber)
//! ```
//!
//! # Quick Start
//!
//! ```ignore
//! use csc_adapt_workspace::NativeAdapter;
//!
//! let adapter = NativeAdapter::native("csc");
//! adapter.dispatch(&["compile_object", "src/a.cs", "obj/a.obj"])?;
//! let status = adapter.dispatch(&["link_executable", "/out:app.exe", "---", "obj/a.obj"])?;
//! ```

pub use csc_adapt_config as config;
pub use csc_adapt_core as core;
pub use csc_adapt_vfs as vfs;

pub use csc_adapt_config::{AdapterConfig, LogFormat, LogLevel, Stage};
pub use csc_adapt_core::{
    AdaptError, AdaptResult, Adapter, ArgumentLine, Backtrace, BacktraceStore, CompileMode,
    Compiler, CompilerInvoker, LinkKind, NativeAdapter, Request, Subcommand,
};
pub use csc_adapt_vfs::{MemoryFileSystem, NativeFileSystem, VirtualFileSystem};
