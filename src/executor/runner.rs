// Main Executor implementation

use crate::executor::error::{ExecutorError, Result};
use crate::executor::launcher::{ProcessLauncher, SystemLauncher};
use crate::executor::result::ExecutionResult;
use crate::locator::ToolLocator;
use std::ffi::{OsStr, OsString};
use std::io;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Split an argument string on single spaces.
///
/// Interior empty tokens are kept and trailing ones dropped, so `""` yields
/// no arguments and `"a  b"` yields `["a", "", "b"]`. Arguments containing
/// spaces cannot be expressed; use `execute_args` for those.
pub fn split_args(args: &str) -> Vec<String> {
    let mut tokens: Vec<String> = args.split(' ').map(str::to_string).collect();
    while tokens.last().is_some_and(|t| t.is_empty()) {
        tokens.pop();
    }
    tokens
}

/// Argument vector: absolute executable path followed by `args`
pub fn command_line<S: AsRef<OsStr>>(executable: &Path, args: &[S]) -> Vec<OsString> {
    let program = std::path::absolute(executable).unwrap_or_else(|_| executable.to_path_buf());

    let mut argv = Vec::with_capacity(args.len() + 1);
    argv.push(program.into_os_string());
    argv.extend(args.iter().map(|a| a.as_ref().to_os_string()));
    argv
}

/// Runs one tool synchronously and hands back its result
pub struct CommandExecutor {
    tool: String,
    locator: ToolLocator,
    launcher: Arc<dyn ProcessLauncher>,
}

impl CommandExecutor {
    /// Executor that spawns real processes
    pub fn new(tool: impl Into<String>, locator: ToolLocator) -> Self {
        Self::with_launcher(tool, locator, Arc::new(SystemLauncher))
    }

    /// Executor for Maven
    pub fn maven(locator: ToolLocator) -> Self {
        Self::new("maven", locator)
    }

    pub fn with_launcher(
        tool: impl Into<String>,
        locator: ToolLocator,
        launcher: Arc<dyn ProcessLauncher>,
    ) -> Self {
        Self {
            tool: tool.into(),
            locator,
            launcher,
        }
    }

    pub fn tool(&self) -> &str {
        &self.tool
    }

    pub fn locator(&self) -> &ToolLocator {
        &self.locator
    }

    /// Run the tool with a space-separated argument string.
    ///
    /// Blocks until the process exits. A tool that cannot be located gives an
    /// unsuccessful result without spawning anything.
    pub fn execute(&self, args: &str) -> Result<ExecutionResult> {
        self.execute_args(split_args(args).as_slice())
    }

    /// Run the tool with an explicit argument list
    pub fn execute_args<S: AsRef<OsStr>>(&self, args: &[S]) -> Result<ExecutionResult> {
        let Some(executable) = self.locator.resolve(&self.tool) else {
            info!(tool = %self.tool, "tool not available, skipping execution");
            return Ok(ExecutionResult::tool_missing());
        };

        let argv = command_line(&executable, args);
        self.run(&argv)
    }

    fn run(&self, argv: &[OsString]) -> Result<ExecutionResult> {
        let start = Instant::now();
        let program = argv
            .first()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_default();

        debug!(
            tool = %self.tool,
            command = ?argv,
            "executing tool"
        );

        let mut child = self
            .launcher
            .launch(argv)
            .map_err(|e| ExecutorError::SpawnFailed(program.clone(), e))?;

        let exit_code = child.wait().map_err(|e| match e.kind() {
            io::ErrorKind::Interrupted => ExecutorError::Interrupted(program.clone()),
            _ => ExecutorError::Wait(program.clone(), e),
        })?;

        info!(
            tool = %self.tool,
            duration_ms = start.elapsed().as_millis() as u64,
            exit_code = exit_code.unwrap_or(-1),
            "tool executed"
        );

        Ok(ExecutionResult::terminated(exit_code, child.take_output()))
    }
}
