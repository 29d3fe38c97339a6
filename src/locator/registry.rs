// tools.toml backed tool registry

use crate::locator::error::{RegistryError, ToolResolveError};
use crate::locator::resolver::ToolPathResolver;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// One `[tool]` table in tools.toml
#[derive(Debug, Deserialize)]
struct RegistryEntry {
    path: PathBuf,
}

/// Tool installation directories loaded from a TOML file
///
/// ```toml
/// [maven]
/// path = "/opt/maven"
/// ```
#[derive(Debug, Clone, Default)]
pub struct TomlToolRegistry {
    tools: HashMap<String, PathBuf>,
}

impl TomlToolRegistry {
    /// Load from `path`; a missing file gives an empty registry
    pub fn load(path: &Path) -> Result<Self, RegistryError> {
        if !path.exists() {
            debug!(path = %path.display(), "tools.toml not found, registry is empty");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let registry = Self::parse(&content)?;

        debug!(path = %path.display(), tool_count = registry.tools.len(), "loaded tool registry");
        Ok(registry)
    }

    pub fn parse(content: &str) -> Result<Self, RegistryError> {
        let entries: HashMap<String, RegistryEntry> = toml::from_str(content)?;

        let mut tools = HashMap::with_capacity(entries.len());
        for (name, entry) in entries {
            if entry.path.as_os_str().is_empty() {
                return Err(RegistryError::InvalidEntry(name, "path is empty".to_string()));
            }
            tools.insert(name, entry.path);
        }

        Ok(Self { tools })
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl ToolPathResolver for TomlToolRegistry {
    fn tool_path(&self, name: &str) -> Result<PathBuf, ToolResolveError> {
        self.tools
            .get(name)
            .cloned()
            .ok_or_else(|| ToolResolveError::NotFound(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_registry() {
        let registry = TomlToolRegistry::parse(
            r#"
[maven]
path = "/opt/maven"

[gradle]
path = "/opt/gradle-8.5"
"#,
        )
        .unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.tool_path("maven"), Ok(PathBuf::from("/opt/maven")));
        assert!(registry.tool_path("ant").is_err());
    }

    #[test]
    fn test_empty_path_rejected() {
        let err = TomlToolRegistry::parse("[maven]\npath = \"\"\n").unwrap_err();
        assert!(matches!(err, RegistryError::InvalidEntry(name, _) if name == "maven"));
    }

    #[test]
    fn test_missing_path_key_rejected() {
        let err = TomlToolRegistry::parse("[maven]\nhome = \"/opt/maven\"\n").unwrap_err();
        assert!(matches!(err, RegistryError::TomlParse(_)));
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let registry = TomlToolRegistry::load(Path::new("/nonexistent/tools.toml")).unwrap();
        assert!(registry.is_empty());
    }
}
