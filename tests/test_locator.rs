// Integration tests for Locator module

#![allow(dead_code)]

#[path = "../src/locator/mod.rs"]
mod locator;

use locator::{
    ChainResolver, EnvToolResolver, StaticToolPaths, ToolLocator, ToolPathResolver,
    TomlToolRegistry,
};
use std::path::PathBuf;

fn init_tracing() {
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Registry file loaded from disk feeds the locator
    #[test]
    fn test_registry_file() {
        init_tracing();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tools.toml");
        std::fs::write(&path, "[maven]\npath = \"/opt/maven/\"\n").unwrap();

        let registry = TomlToolRegistry::load(&path).unwrap();
        assert_eq!(registry.len(), 1);

        let locator = ToolLocator::with_os(registry, "Linux");
        assert_eq!(
            locator.resolve("maven"),
            Some(PathBuf::from("/opt/maven/bin/mvn"))
        );
    }

    /// Malformed registry is an error at load time
    #[test]
    fn test_registry_file_malformed() {
        init_tracing();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tools.toml");
        std::fs::write(&path, "[maven\npath = ").unwrap();

        assert!(matches!(
            TomlToolRegistry::load(&path),
            Err(locator::RegistryError::TomlParse(_))
        ));
    }

    /// Static entries win over the registry, which wins over the environment
    #[test]
    fn test_chain_precedence() {
        init_tracing();
        let registry = TomlToolRegistry::parse(
            "[maven]\npath = \"/registry/maven\"\n[ant]\npath = \"/registry/ant\"\n",
        )
        .unwrap();
        let env = EnvToolResolver::with_lookup(|name| match name {
            "MAVEN_HOME" => Some("/env/maven".to_string()),
            "GRADLE_HOME" => Some("/env/gradle".to_string()),
            _ => None,
        });

        let chain = ChainResolver::new()
            .push(StaticToolPaths::new().with("maven", "/static/maven"))
            .push(registry)
            .push(env);

        assert_eq!(chain.tool_path("maven"), Ok(PathBuf::from("/static/maven")));
        assert_eq!(chain.tool_path("ant"), Ok(PathBuf::from("/registry/ant")));
        assert_eq!(chain.tool_path("gradle"), Ok(PathBuf::from("/env/gradle")));
        assert!(chain.tool_path("sbt").is_err());
    }

    /// Locator on Windows picks the .cmd launcher
    #[test]
    fn test_windows_locator() {
        init_tracing();
        let locator = ToolLocator::with_os(
            StaticToolPaths::new().with("maven", "C:/tools/maven"),
            "Windows Server 2019",
        );

        let executable = locator.resolve("maven").unwrap();
        assert!(executable.ends_with("bin/mvn.cmd"));
    }

    /// Unknown tools resolve to nothing rather than an error
    #[test]
    fn test_unknown_tool() {
        init_tracing();
        let locator = ToolLocator::with_os(ChainResolver::new(), "linux");
        assert_eq!(locator.resolve("maven"), None);
    }
}
