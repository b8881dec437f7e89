//! Compiler invoker
//!
//! Launches the real compiler once with the flattened argument line and
//! relays its output. Standard output and standard error are drained by
//! two scoped pump threads while the parent waits for the child, so a
//! chatty compiler can never stall on a full pipe.

use crate::args::ArgumentLine;
use crate::error::{AdaptError, AdaptResult};
use csc_adapt_config::Stage;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;
use tracing::{info, warn};

const TARGET: &str = Stage::Invoke.target();

/// Exit status reported when the compiler dies without one (e.g. a signal).
pub const NO_EXIT_CODE: i32 = 1;

/// Something that performs the one real compilation.
pub trait Compiler {
    /// Run with `line` and return the compiler's exit status.
    fn run(&self, line: &ArgumentLine) -> AdaptResult<i32>;
}

/// Runs an external compiler executable.
#[derive(Debug, Clone)]
pub struct CompilerInvoker {
    compiler: PathBuf,
}

impl CompilerInvoker {
    pub fn new(compiler: impl Into<PathBuf>) -> Self {
        Self {
            compiler: compiler.into(),
        }
    }

    pub fn compiler(&self) -> &Path {
        &self.compiler
    }

    /// Run the compiler, relaying its stdout into `out` and stderr into `err`.
    pub fn run_with<O, E>(&self, line: &ArgumentLine, out: &mut O, err: &mut E) -> AdaptResult<i32>
    where
        O: Write + Send,
        E: Write + Send,
    {
        info!(target: TARGET, "csc : {}", self.compiler.display());
        info!(target: TARGET, "arguments : {}", line);

        let launch_error = |source| AdaptError::CompilerLaunch {
            compiler: self.compiler.clone(),
            source,
        };

        let mut child = self
            .command(line)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(launch_error)?;

        let child_out = child.stdout.take();
        let child_err = child.stderr.take();

        let (status, out_relay, err_relay) = thread::scope(|scope| {
            let out_pump = scope.spawn(move || pump(child_out, out));
            let err_pump = scope.spawn(move || pump(child_err, err));
            let status = child.wait();
            (status, join_pump(out_pump), join_pump(err_pump))
        });

        for (stream, relay) in [("stdout", out_relay), ("stderr", err_relay)] {
            if let Err(e) = relay {
                warn!(target: TARGET, "failed to relay compiler {}: {}", stream, e);
            }
        }

        let status = status.map_err(launch_error)?;
        let code = match status.code() {
            Some(code) => code,
            None => {
                warn!(target: TARGET, "compiler terminated without an exit code ({})", status);
                NO_EXIT_CODE
            }
        };

        info!(target: TARGET, "exit code : {}", code);
        Ok(code)
    }

    fn command(&self, line: &ArgumentLine) -> Command {
        let mut command = Command::new(&self.compiler);

        // Windows 下整行交给编译器自行拆分，与 csc 的命令行约定一致
        #[cfg(windows)]
        {
            use std::os::windows::process::CommandExt;
            const CREATE_NO_WINDOW: u32 = 0x0800_0000;
            command.creation_flags(CREATE_NO_WINDOW);
            command.raw_arg(line.to_string());
        }
        #[cfg(not(windows))]
        command.args(line.tokens());

        command
    }
}

impl Compiler for CompilerInvoker {
    fn run(&self, line: &ArgumentLine) -> AdaptResult<i32> {
        self.run_with(line, &mut io::stdout(), &mut io::stderr())
    }
}

/// Copy a child stream into `sink` until EOF.
///
/// If `sink` fails the stream is still drained, so the child never blocks.
fn pump<R: Read, W: Write>(source: Option<R>, sink: &mut W) -> io::Result<u64> {
    let Some(mut source) = source else {
        return Ok(0);
    };
    match io::copy(&mut source, sink).and_then(|copied| sink.flush().map(|_| copied)) {
        Ok(copied) => Ok(copied),
        Err(e) => {
            let _ = io::copy(&mut source, &mut io::sink());
            Err(e)
        }
    }
}

fn join_pump(handle: thread::ScopedJoinHandle<'_, io::Result<u64>>) -> io::Result<u64> {
    handle
        .join()
        .unwrap_or_else(|_| Err(io::Error::other("relay thread panicked")))
}
