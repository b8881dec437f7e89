//! Test doubles shared by the unit tests

use crate::args::ArgumentLine;
use crate::error::AdaptResult;
use crate::invoker::Compiler;
use std::cell::RefCell;

/// Records every argument line instead of launching a process.
#[derive(Debug, Default)]
pub struct RecordingCompiler {
    exit_code: i32,
    lines: RefCell<Vec<String>>,
}

impl RecordingCompiler {
    pub fn with_exit_code(exit_code: i32) -> Self {
        Self {
            exit_code,
            lines: RefCell::new(Vec::new()),
        }
    }

    /// Rendered argument lines, in call order.
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }
}

impl Compiler for RecordingCompiler {
    fn run(&self, line: &ArgumentLine) -> AdaptResult<i32> {
        self.lines.borrow_mut().push(line.to_string());
        Ok(self.exit_code)
    }
}
