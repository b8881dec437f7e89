//! Backtrace store
//!
//! A placeholder object file stands in for a real compiled object. Its
//! whole content is one line: the path of the source file it replaces.
//! `compile_object` records that line, `link_executable` and
//! `shared_library` read it back to rebuild the full source list.
//!
//! The file system is the only channel between those invocations, so
//! the on-disk format lives in [`Backtrace::encode`] and
//! [`Backtrace::decode`] and nowhere else.

use crate::error::{AdaptError, AdaptResult};
use csc_adapt_config::Stage;
use csc_adapt_vfs::VirtualFileSystem;
use std::fmt;
use std::path::Path;
use tracing::debug;

const TARGET: &str = Stage::Backtrace.target();

/// The recorded path from a placeholder back to its source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Backtrace {
    source: String,
}

impl Backtrace {
    /// Source path is stored literally: not resolved, not validated.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn into_source(self) -> String {
        self.source
    }

    /// On-disk form: the source path followed by a newline.
    pub fn encode(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.source.len() + 1);
        bytes.extend_from_slice(self.source.as_bytes());
        bytes.push(b'\n');
        bytes
    }

    /// Parse placeholder content. Returns `None` when nothing but
    /// whitespace is recorded.
    pub fn decode(content: &str) -> Option<Self> {
        let source = content.trim();
        if source.is_empty() {
            None
        } else {
            Some(Self::new(source))
        }
    }
}

impl fmt::Display for Backtrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Placeholder object persistence over a [`VirtualFileSystem`].
#[derive(Debug, Clone)]
pub struct BacktraceStore<F> {
    fs: F,
}

impl<F: VirtualFileSystem> BacktraceStore<F> {
    pub fn new(fs: F) -> Self {
        Self { fs }
    }

    pub fn fs(&self) -> &F {
        &self.fs
    }

    /// Create or overwrite `object` as a placeholder for `backtrace`.
    pub fn record(&self, object: &Path, backtrace: &Backtrace) -> AdaptResult<()> {
        debug!(target: TARGET, object = %object.display(), source = backtrace.source(), "recording backtrace");
        self.fs
            .write_file(object, &backtrace.encode())
            .map_err(|source| AdaptError::PlaceholderWrite {
                object: object.to_path_buf(),
                source,
            })
    }

    /// Read the backtrace recorded in the placeholder `object`.
    pub fn resolve(&self, object: &Path) -> AdaptResult<Backtrace> {
        let content = self
            .fs
            .read_to_string(object)
            .map_err(|source| AdaptError::BacktraceResolution {
                object: object.to_path_buf(),
                source,
            })?;
        let backtrace = Backtrace::decode(&content).ok_or_else(|| AdaptError::EmptyBacktrace {
            object: object.to_path_buf(),
        })?;

        debug!(target: TARGET, object = %object.display(), source = backtrace.source(), "resolved backtrace");
        Ok(backtrace)
    }
}
