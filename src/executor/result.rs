// Execution result - exit status and captured output

use crate::executor::error::{ExecutorError, Result};
use serde::Serialize;
use std::io::Read;

/// Why an execution did or did not succeed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExecutionStatus {
    /// No executable was resolved, nothing was spawned
    ToolMissing,
    Succeeded,
    /// Non-zero exit, or no exit code at all (killed by a signal)
    Failed { exit_code: Option<i32> },
}

/// Combined output of a terminated process, read at most once
enum OutputSlot {
    Pending(Box<dyn Read + Send>),
    Captured(String),
    /// A read failed part way; nothing left to return
    Lost,
}

struct TerminatedProcess {
    exit_code: Option<i32>,
    output: OutputSlot,
}

/// Result of one `execute` call
///
/// Only ever built after the child process has exited, or without a process
/// when the tool could not be located.
pub struct ExecutionResult {
    process: Option<TerminatedProcess>,
}

impl ExecutionResult {
    /// Result for a tool that could not be located
    pub fn tool_missing() -> Self {
        Self { process: None }
    }

    /// Result for a process that has exited with `exit_code`
    pub fn terminated(exit_code: Option<i32>, output: Option<Box<dyn Read + Send>>) -> Self {
        let output = match output {
            Some(stream) => OutputSlot::Pending(stream),
            None => OutputSlot::Captured(String::new()),
        };
        Self {
            process: Some(TerminatedProcess { exit_code, output }),
        }
    }

    /// True iff a process ran and exited with code 0
    pub fn is_successful(&self) -> bool {
        matches!(&self.process, Some(p) if p.exit_code == Some(0))
    }

    pub fn exit_code(&self) -> Option<i32> {
        self.process.as_ref().and_then(|p| p.exit_code)
    }

    pub fn status(&self) -> ExecutionStatus {
        match &self.process {
            None => ExecutionStatus::ToolMissing,
            Some(p) if p.exit_code == Some(0) => ExecutionStatus::Succeeded,
            Some(p) => ExecutionStatus::Failed {
                exit_code: p.exit_code,
            },
        }
    }

    /// Combined stdout/stderr of a successful process.
    ///
    /// Empty when nothing ran or the process failed. The stream is drained
    /// to the end on the first call and the text is reused afterwards, so
    /// this is only meant for commands printing a few lines.
    pub fn output(&mut self) -> Result<&str> {
        let Some(process) = self.process.as_mut() else {
            return Ok("");
        };
        if process.exit_code != Some(0) {
            return Ok("");
        }

        if let OutputSlot::Pending(_) = process.output {
            let OutputSlot::Pending(mut stream) =
                std::mem::replace(&mut process.output, OutputSlot::Lost)
            else {
                return Err(ExecutorError::OutputUnavailable);
            };

            let mut bytes = Vec::new();
            stream
                .read_to_end(&mut bytes)
                .map_err(ExecutorError::OutputRead)?;
            process.output = OutputSlot::Captured(String::from_utf8_lossy(&bytes).into_owned());
        }

        match &process.output {
            OutputSlot::Captured(text) => Ok(text.as_str()),
            OutputSlot::Pending(_) | OutputSlot::Lost => Err(ExecutorError::OutputUnavailable),
        }
    }
}

impl std::fmt::Debug for ExecutionResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExecutionResult")
            .field("status", &self.status())
            .finish()
    }
}
