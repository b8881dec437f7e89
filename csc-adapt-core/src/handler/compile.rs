//! `compile_object` and `test_csc`
//!
//! No compiler runs for `compile_object`: the object file becomes a
//! placeholder that points back at its source, and the real compilation
//! happens once, at link time.

use crate::args::ArgumentLine;
use crate::backtrace::{Backtrace, BacktraceStore};
use crate::error::AdaptResult;
use crate::invoker::Compiler;
use csc_adapt_vfs::VirtualFileSystem;
use std::path::Path;

/// Exit status of a successful placeholder write.
pub const SUCCESS: i32 = 0;

/// Write `object` as a placeholder for `source`.
///
/// The source path is recorded verbatim; it does not have to exist yet.
pub fn compile_object<F: VirtualFileSystem>(
    store: &BacktraceStore<F>,
    source: &str,
    object: &Path,
) -> AdaptResult<i32> {
    store.record(object, &Backtrace::new(source))?;
    Ok(SUCCESS)
}

/// Compile `source` directly to check that the compiler works.
pub fn test_compile<C: Compiler>(compiler: &C, source: &str) -> AdaptResult<i32> {
    let mut line = ArgumentLine::new();
    line.push(source);
    compiler.run(&line)
}
