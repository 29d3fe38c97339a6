// Executor configuration

use std::path::PathBuf;
use tracing::warn;

/// Executor configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutorConfig {
    /// Logical tool name passed to the resolver
    pub tool: String,
    /// OS identifier used to pick the executable name
    pub os_name: String,
    /// Path to tools.toml registry file
    pub tools_toml_path: PathBuf,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            tool: String::from("maven"),
            os_name: std::env::consts::OS.to_string(),
            tools_toml_path: dirs::home_dir()
                .map(|p| p.join(".buildscan").join("tools.toml"))
                .unwrap_or_else(|| PathBuf::from(".buildscan/tools.toml")),
        }
    }
}

/// Read a string setting, warning and keeping the default when it is blank
fn non_empty_var(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<String> {
    match lookup(name) {
        Some(v) if v.trim().is_empty() => {
            warn!(var = name, "Empty env var value, using default");
            None
        }
        other => other,
    }
}

impl ExecutorConfig {
    /// Load from environment variables (and `.env` if present)
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = ExecutorConfig::default();

        if let Some(tool) = non_empty_var(&lookup, "BUILDSCAN_TOOL") {
            config.tool = tool;
        }
        if let Some(os_name) = non_empty_var(&lookup, "BUILDSCAN_OS_NAME") {
            config.os_name = os_name;
        }
        if let Some(path) = non_empty_var(&lookup, "BUILDSCAN_TOOLS_TOML") {
            config.tools_toml_path = PathBuf::from(path);
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ExecutorConfig::from_lookup(|_| None);

        assert_eq!(config.tool, "maven");
        assert_eq!(config.os_name, std::env::consts::OS);
        assert!(config.tools_toml_path.ends_with(".buildscan/tools.toml"));
    }

    #[test]
    fn test_overrides() {
        let config = ExecutorConfig::from_lookup(lookup_from(&[
            ("BUILDSCAN_TOOL", "gradle"),
            ("BUILDSCAN_OS_NAME", "Windows 10"),
            ("BUILDSCAN_TOOLS_TOML", "/etc/buildscan/tools.toml"),
        ]));

        assert_eq!(config.tool, "gradle");
        assert_eq!(config.os_name, "Windows 10");
        assert_eq!(
            config.tools_toml_path,
            PathBuf::from("/etc/buildscan/tools.toml")
        );
    }

    #[test]
    fn test_blank_values_keep_defaults() {
        let config = ExecutorConfig::from_lookup(lookup_from(&[("BUILDSCAN_TOOL", "  ")]));
        assert_eq!(config.tool, "maven");
    }
}
