//! CSC Adapt Virtual File System
//!
//! A small file system abstraction used to persist placeholder object
//! files. Handlers talk to [`VirtualFileSystem`] so they can run against
//! the real disk or an in-memory store.
//!
//! # Usage
//! ```rust
//! use csc_adapt_vfs::{MemoryFileSystem, VirtualFileSystem};
//! use std::path::Path;
//!
//! let fs = MemoryFileSystem::new();
//! fs.write_file(Path::new("/obj/a.obj"), b"/src/a.cs\n").unwrap();
//! let content = fs.read_to_string(Path::new("/obj/a.obj")).unwrap();
//! assert_eq!(content, "/src/a.cs\n");
//! ```

mod error;
mod memory;
mod native;
mod r#trait;

pub use error::{VfsError, VfsResult};
pub use memory::MemoryFileSystem;
pub use native::NativeFileSystem;
pub use r#trait::VirtualFileSystem;
