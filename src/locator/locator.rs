// Tool locator - installation directory to executable path

use crate::locator::resolver::ToolPathResolver;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::debug;

/// Windows executable suffix for tool launch scripts
const WINDOWS_SUFFIX: &str = ".cmd";

/// True when the OS identifier names a Windows platform
pub fn is_windows(os_name: &str) -> bool {
    os_name.to_lowercase().contains("win")
}

/// Executable file name for `base` on `os_name`
pub fn executable_file_name(base: &str, os_name: &str) -> String {
    if is_windows(os_name) {
        format!("{base}{WINDOWS_SUFFIX}")
    } else {
        base.to_string()
    }
}

/// Default executable base name for a logical tool
pub fn default_executable(tool: &str) -> &str {
    match tool {
        "maven" => "mvn",
        other => other,
    }
}

/// Locates tool executables through a resolver
pub struct ToolLocator {
    resolver: Box<dyn ToolPathResolver>,
    os_name: String,
    executables: HashMap<String, String>,
}

impl ToolLocator {
    /// Locator for the current platform
    pub fn new(resolver: impl ToolPathResolver + 'static) -> Self {
        Self::with_os(resolver, std::env::consts::OS)
    }

    pub fn with_os(resolver: impl ToolPathResolver + 'static, os_name: impl Into<String>) -> Self {
        Self {
            resolver: Box::new(resolver),
            os_name: os_name.into(),
            executables: HashMap::new(),
        }
    }

    /// Override the executable base name used for `tool`
    pub fn with_executable(mut self, tool: impl Into<String>, base: impl Into<String>) -> Self {
        self.executables.insert(tool.into(), base.into());
        self
    }

    /// Executable file name this locator composes for `tool`
    pub fn executable_name(&self, tool: &str) -> String {
        let base = self
            .executables
            .get(tool)
            .map(String::as_str)
            .unwrap_or_else(|| default_executable(tool));
        executable_file_name(base, &self.os_name)
    }

    /// `<installation dir>/bin/<executable>`, or `None` if the tool is unknown.
    /// The path is not checked for existence.
    pub fn resolve(&self, tool: &str) -> Option<PathBuf> {
        let installation_dir = match self.resolver.tool_path(tool) {
            Ok(dir) => dir,
            Err(e) => {
                debug!(tool = %tool, error = %e, "tool not resolved");
                return None;
            }
        };

        let executable = installation_dir
            .join("bin")
            .join(self.executable_name(tool));

        debug!(tool = %tool, executable = %executable.display(), "tool resolved");
        Some(executable)
    }
}
