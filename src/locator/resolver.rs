// Tool path resolvers

use crate::locator::error::ToolResolveError;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::debug;

/// Maps a logical tool name to its installation directory
pub trait ToolPathResolver: Send + Sync {
    /// Installation directory of `name`, or `NotFound` when the tool is unknown
    fn tool_path(&self, name: &str) -> Result<PathBuf, ToolResolveError>;
}

/// In-memory tool paths
#[derive(Debug, Clone, Default)]
pub struct StaticToolPaths {
    paths: HashMap<String, PathBuf>,
}

impl StaticToolPaths {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.insert(name, path);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, path: impl Into<PathBuf>) {
        self.paths.insert(name.into(), path.into());
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl ToolPathResolver for StaticToolPaths {
    fn tool_path(&self, name: &str) -> Result<PathBuf, ToolResolveError> {
        self.paths
            .get(name)
            .cloned()
            .ok_or_else(|| ToolResolveError::NotFound(name.to_string()))
    }
}

type EnvLookup = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Resolves `<TOOL>_HOME` style environment variables
pub struct EnvToolResolver {
    lookup: EnvLookup,
}

impl EnvToolResolver {
    /// Read from the process environment
    pub fn new() -> Self {
        Self::with_lookup(|name| std::env::var(name).ok())
    }

    pub fn with_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            lookup: Box::new(lookup),
        }
    }
}

impl Default for EnvToolResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Environment variables consulted for a tool, in order
pub fn home_vars(tool: &str) -> Vec<String> {
    let mut vars = vec![format!("{}_HOME", tool.to_uppercase().replace('-', "_"))];
    if tool == "maven" {
        vars.push("M2_HOME".to_string());
    }
    vars
}

impl ToolPathResolver for EnvToolResolver {
    fn tool_path(&self, name: &str) -> Result<PathBuf, ToolResolveError> {
        for var in home_vars(name) {
            if let Some(value) = (self.lookup)(&var).filter(|v| !v.trim().is_empty()) {
                debug!(tool = %name, var = %var, "tool path taken from environment");
                return Ok(PathBuf::from(value));
            }
        }
        Err(ToolResolveError::NotFound(name.to_string()))
    }
}

/// Tries each resolver in turn; first hit wins
#[derive(Default)]
pub struct ChainResolver {
    resolvers: Vec<Box<dyn ToolPathResolver>>,
}

impl ChainResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, resolver: impl ToolPathResolver + 'static) -> Self {
        self.resolvers.push(Box::new(resolver));
        self
    }

    pub fn len(&self) -> usize {
        self.resolvers.len()
    }
}

impl ToolPathResolver for ChainResolver {
    fn tool_path(&self, name: &str) -> Result<PathBuf, ToolResolveError> {
        for resolver in &self.resolvers {
            match resolver.tool_path(name) {
                Ok(path) => return Ok(path),
                Err(ToolResolveError::NotFound(_)) => continue,
            }
        }
        Err(ToolResolveError::NotFound(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_paths_hit_and_miss() {
        assert!(StaticToolPaths::new().is_empty());
        let paths = StaticToolPaths::new().with("maven", "/opt/maven");
        assert!(!paths.is_empty());

        assert_eq!(paths.tool_path("maven"), Ok(PathBuf::from("/opt/maven")));
        assert_eq!(
            paths.tool_path("gradle"),
            Err(ToolResolveError::NotFound("gradle".to_string()))
        );
    }

    #[test]
    fn test_home_vars() {
        assert_eq!(home_vars("maven"), vec!["MAVEN_HOME", "M2_HOME"]);
        assert_eq!(home_vars("ant-ivy"), vec!["ANT_IVY_HOME"]);
    }

    #[test]
    fn test_env_resolver_falls_back_to_m2_home() {
        let resolver = EnvToolResolver::with_lookup(|name| match name {
            "MAVEN_HOME" => Some("   ".to_string()),
            "M2_HOME" => Some("/usr/share/maven".to_string()),
            _ => None,
        });

        assert_eq!(
            resolver.tool_path("maven"),
            Ok(PathBuf::from("/usr/share/maven"))
        );
        assert!(resolver.tool_path("gradle").is_err());
    }

    #[test]
    fn test_chain_first_hit_wins() {
        let chain = ChainResolver::new()
            .push(StaticToolPaths::new())
            .push(StaticToolPaths::new().with("maven", "/first"))
            .push(StaticToolPaths::new().with("maven", "/second"));

        assert_eq!(chain.len(), 3);
        assert_eq!(chain.tool_path("maven"), Ok(PathBuf::from("/first")));
        assert_eq!(
            chain.tool_path("ant"),
            Err(ToolResolveError::NotFound("ant".to_string()))
        );
    }
}
