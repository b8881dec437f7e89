//! 测试辅助工具
//!
//! 提供端到端测试的辅助函数

#![allow(dead_code)]

use csc_adapt_workspace::{AdaptResult, ArgumentLine, Compiler};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Compiler stand-in that records every argument line it receives
#[derive(Debug, Default)]
pub struct FakeCompiler {
    pub exit_code: i32,
    calls: RefCell<Vec<Vec<String>>>,
}

impl FakeCompiler {
    pub fn exiting_with(exit_code: i32) -> Self {
        Self {
            exit_code,
            ..Default::default()
        }
    }

    /// Token lists of every run, oldest first
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }
}

impl Compiler for FakeCompiler {
    fn run(&self, line: &ArgumentLine) -> AdaptResult<i32> {
        self.calls.borrow_mut().push(line.tokens().to_vec());
        Ok(self.exit_code)
    }
}

/// Build directory with an `obj/` subdirectory, removed on drop
pub struct BuildDir {
    dir: TempDir,
}

impl BuildDir {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        std::fs::create_dir(dir.path().join("obj")).expect("create obj dir");
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Path of an object file under `obj/`
    pub fn object(&self, name: &str) -> PathBuf {
        self.dir.path().join("obj").join(name)
    }
}

pub fn path_str(path: &Path) -> String {
    path.to_str().expect("temp paths are UTF-8").to_string()
}
