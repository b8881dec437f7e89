//! Dispatcher
//!
//! Parses the raw tokens into a [`Request`] and routes it to its handler.

use crate::backtrace::BacktraceStore;
use crate::error::AdaptResult;
use crate::handler;
use crate::invoker::{Compiler, CompilerInvoker};
use crate::request::{CompileMode, Request};
use csc_adapt_config::Stage;
use csc_adapt_vfs::{NativeFileSystem, VirtualFileSystem};
use std::path::PathBuf;
use tracing::debug;

const TARGET: &str = Stage::Dispatch.target();

/// Adapter over the real file system and a real compiler process.
pub type NativeAdapter = Adapter<NativeFileSystem, CompilerInvoker>;

/// Owns the placeholder store and the compiler for one invocation.
#[derive(Debug, Clone)]
pub struct Adapter<F, C> {
    store: BacktraceStore<F>,
    compiler: C,
}

impl NativeAdapter {
    pub fn native(compiler: impl Into<PathBuf>) -> Self {
        Adapter::new(NativeFileSystem::new(), CompilerInvoker::new(compiler))
    }
}

impl<F: VirtualFileSystem, C: Compiler> Adapter<F, C> {
    pub fn new(fs: F, compiler: C) -> Self {
        Self {
            store: BacktraceStore::new(fs),
            compiler,
        }
    }

    pub fn store(&self) -> &BacktraceStore<F> {
        &self.store
    }

    pub fn compiler(&self) -> &C {
        &self.compiler
    }

    /// Parse `tokens` and run the request. Token 0 is the subcommand.
    pub fn dispatch<S: AsRef<str>>(&self, tokens: &[S]) -> AdaptResult<i32> {
        self.dispatch_with_mode(tokens, CompileMode::Inferred)
    }

    pub fn dispatch_with_mode<S: AsRef<str>>(
        &self,
        tokens: &[S],
        mode: CompileMode,
    ) -> AdaptResult<i32> {
        let request = Request::parse_with_mode(tokens, mode)?;
        self.execute(&request)
    }

    /// Run an already parsed request and return the exit status.
    pub fn execute(&self, request: &Request) -> AdaptResult<i32> {
        debug!(target: TARGET, subcommand = %request.subcommand(), "dispatching");
        match request {
            Request::CompileObject { source, object } => {
                handler::compile_object(&self.store, source, object)
            }
            Request::TestCompile { source } => handler::test_compile(&self.compiler, source),
            Request::Link { kind, args } => handler::link(&self.store, &self.compiler, *kind, args),
        }
    }
}
