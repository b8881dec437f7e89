//! `link_executable` and `shared_library`
//!
//! Arguments before the `---` sentinel are compiler flags and pass
//! through untouched. Every argument after it names a placeholder object
//! and is replaced by the source path recorded inside it. The latch is
//! one-way: later sentinels are dropped and do not switch back to flags.

use crate::args::ArgumentLine;
use crate::backtrace::BacktraceStore;
use crate::error::AdaptResult;
use crate::invoker::Compiler;
use crate::request::LinkKind;
use csc_adapt_config::Stage;
use csc_adapt_vfs::VirtualFileSystem;
use std::path::Path;
use tracing::{debug, info};

const TARGET: &str = Stage::Link.target();

/// Marks the start of the placeholder object list.
pub const SENTINEL: &str = "---";

pub fn is_sentinel(token: &str) -> bool {
    token.starts_with(SENTINEL)
}

/// Build the compiler argument line for a link request.
pub fn assemble<F, S>(store: &BacktraceStore<F>, args: &[S]) -> AdaptResult<ArgumentLine>
where
    F: VirtualFileSystem,
    S: AsRef<str>,
{
    let mut line = ArgumentLine::new();
    let mut parsing_objects = false;

    for arg in args {
        let arg = arg.as_ref();
        if is_sentinel(arg) {
            parsing_objects = true;
        } else if parsing_objects {
            let backtrace = store.resolve(Path::new(arg))?;
            line.push(backtrace.into_source());
        } else {
            line.push(arg);
        }
    }

    debug!(target: TARGET, tokens = line.len(), objects = parsing_objects, "assembled compiler arguments");
    Ok(line)
}

/// Resolve every placeholder in `args` and run the single real compilation.
pub fn link<F, C, S>(
    store: &BacktraceStore<F>,
    compiler: &C,
    kind: LinkKind,
    args: &[S],
) -> AdaptResult<i32>
where
    F: VirtualFileSystem,
    C: Compiler,
    S: AsRef<str>,
{
    let line = assemble(store, args)?;
    info!(target: TARGET, "{} : {} arguments", kind.subcommand(), line.len());
    compiler.run(&line)
}
