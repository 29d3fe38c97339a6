// Process launching

use std::ffi::OsString;
use std::io::{self, PipeReader, Read};
use std::process::{Child, Command, Stdio};
use tracing::debug;

/// A launched child process
pub trait ChildProcess: Send {
    /// Block until the process exits; `None` when it ended without an exit code
    fn wait(&mut self) -> io::Result<Option<i32>>;

    /// Take the combined stdout/stderr stream. Yields it at most once.
    fn take_output(&mut self) -> Option<Box<dyn Read + Send>>;
}

/// Starts child processes from an argument vector
pub trait ProcessLauncher: Send + Sync {
    /// `argv[0]` is the program. Stderr must be merged into stdout.
    fn launch(&self, argv: &[OsString]) -> io::Result<Box<dyn ChildProcess>>;
}

/// Launches real OS processes
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLauncher;

struct SystemChild {
    child: Child,
    output: Option<PipeReader>,
}

impl ProcessLauncher for SystemLauncher {
    fn launch(&self, argv: &[OsString]) -> io::Result<Box<dyn ChildProcess>> {
        let (program, args) = argv
            .split_first()
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "empty command line"))?;

        // Both descriptors share one pipe; the Command holding the write ends
        // is dropped right after spawn so the reader sees EOF on exit.
        let (reader, writer) = io::pipe()?;
        let child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(writer.try_clone()?)
            .stderr(writer)
            .spawn()?;

        debug!(pid = child.id(), program = %program.to_string_lossy(), "process spawned");

        Ok(Box::new(SystemChild {
            child,
            output: Some(reader),
        }))
    }
}

impl ChildProcess for SystemChild {
    fn wait(&mut self) -> io::Result<Option<i32>> {
        let status = self.child.wait()?;
        Ok(status.code())
    }

    fn take_output(&mut self) -> Option<Box<dyn Read + Send>> {
        self.output
            .take()
            .map(|reader| Box::new(reader) as Box<dyn Read + Send>)
    }
}
