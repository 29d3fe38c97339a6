// Maven module - version probe on top of the executor
#![allow(unused_imports)]

pub mod version;

pub use version::{MavenInfo, MavenVersion};

use crate::executor::{CommandExecutor, ExecutorError};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("Executor error: {0}")]
    Executor(#[from] ExecutorError),
}

/// Run `--version` and parse the report.
///
/// `None` when the tool is missing, fails, or prints something unrecognised.
pub fn probe(executor: &CommandExecutor) -> Result<Option<MavenInfo>, ProbeError> {
    let mut result = executor.execute("--version")?;
    if !result.is_successful() {
        info!(tool = %executor.tool(), status = ?result.status(), "version probe unsuccessful");
        return Ok(None);
    }

    let info = MavenInfo::parse(result.output()?);
    match &info {
        Some(info) => info!(version = %info.version, "detected Maven version"),
        None => warn!(tool = %executor.tool(), "unrecognised --version output"),
    }
    Ok(info)
}
