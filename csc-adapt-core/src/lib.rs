//! CSC Adapt Core - deferred compilation for whole-program compilers
//!
//! Makefile-style build generators expect to compile each source into an
//! object and link the objects afterwards. `csc` only knows how to turn a
//! complete source set into a final assembly in one go. This crate
//! bridges the two:
//!
//! - `compile_object` writes a placeholder object holding the source path
//!   (a *backtrace*) instead of compiling anything;
//! - `link_executable` / `shared_library` read the placeholders back,
//!   rebuild the source list and run the compiler exactly once.
//!
//! ```text
//! Adapter::dispatch ─┬─ compile_object ── BacktraceStore::record
//!                    ├─ test_compile ──────────────────────────── CompilerInvoker
//!                    └─ link ─────────── BacktraceStore::resolve ─ CompilerInvoker
//! ```

pub mod adapter;
pub mod args;
pub mod backtrace;
pub mod error;
pub mod handler;
pub mod invoker;
pub mod request;

#[cfg(test)]
mod testing;

pub use adapter::{Adapter, NativeAdapter};
pub use args::{quote_arg, ArgumentLine};
pub use backtrace::{Backtrace, BacktraceStore};
pub use error::{AdaptError, AdaptResult, FATAL_EXIT_CODE, USAGE_EXIT_CODE};
pub use invoker::{Compiler, CompilerInvoker};
pub use request::{CompileMode, LinkKind, Request, Subcommand};

// 重导出常用依赖
pub use csc_adapt_config;
pub use csc_adapt_vfs;
