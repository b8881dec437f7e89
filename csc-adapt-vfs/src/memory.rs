//! In-memory file system implementation

use crate::error::{VfsError, VfsResult};
use crate::VirtualFileSystem;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::{Arc, RwLock};

/// An in-memory file system implementation.
///
/// All files are stored in memory using a `BTreeMap`. Clones share the
/// same storage, so a test can hand one clone to the adapter and inspect
/// the placeholders through another.
///
/// # Example
/// ```
/// use csc_adapt_vfs::{MemoryFileSystem, VirtualFileSystem};
/// use std::path::Path;
///
/// let fs = MemoryFileSystem::new();
/// fs.write_file(Path::new("/obj/a.obj"), b"/src/a.cs\n").unwrap();
/// assert!(fs.is_file(Path::new("/obj/a.obj")));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryFileSystem {
    files: Arc<RwLock<BTreeMap<String, Vec<u8>>>>,
}

impl MemoryFileSystem {
    /// Create a new empty memory file system.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new memory file system pre-populated with files.
    pub fn with_files<I, S, C>(files: I) -> Self
    where
        I: IntoIterator<Item = (S, C)>,
        S: AsRef<str>,
        C: Into<Vec<u8>>,
    {
        let map = files
            .into_iter()
            .map(|(path, content)| (normalize_path(Path::new(path.as_ref())), content.into()))
            .collect();
        Self {
            files: Arc::new(RwLock::new(map)),
        }
    }

    /// Number of files currently stored.
    pub fn len(&self) -> usize {
        self.files.read().map(|files| files.len()).unwrap_or(0)
    }

    /// Whether no file has been written yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Uses forward slashes consistently for cross-platform compatibility.
fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

impl VirtualFileSystem for MemoryFileSystem {
    fn read_file(&self, path: &Path) -> VfsResult<Vec<u8>> {
        let normalized = normalize_path(path);
        let files = self.files.read().map_err(|_| VfsError::Poisoned)?;

        files
            .get(&normalized)
            .cloned()
            .ok_or(VfsError::NotFound { path: normalized })
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> VfsResult<()> {
        let normalized = normalize_path(path);
        let mut files = self.files.write().map_err(|_| VfsError::Poisoned)?;
        files.insert(normalized, content.to_vec());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let normalized = normalize_path(path);
        match self.files.read() {
            Ok(files) => files.contains_key(&normalized),
            Err(_) => false,
        }
    }

    fn is_file(&self, path: &Path) -> bool {
        // 内存文件系统没有目录，存在即文件
        self.exists(path)
    }

    fn is_dir(&self, _path: &Path) -> bool {
        false
    }
}
