// Executor module - runs a located tool and captures its output
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod config;
pub mod error;
pub mod launcher;
pub mod result;
pub mod runner;

pub use config::ExecutorConfig;
pub use error::{ExecutorError, Result};
pub use launcher::{ChildProcess, ProcessLauncher, SystemLauncher};
pub use result::{ExecutionResult, ExecutionStatus};
pub use runner::{CommandExecutor, command_line, split_args};
