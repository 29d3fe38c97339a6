// Error types for Locator module

use thiserror::Error;

/// Outcome of a failed tool path lookup
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ToolResolveError {
    #[error("Tool cannot be found: {0}")]
    NotFound(String),
}

/// Errors while loading a tools.toml registry
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Invalid registry entry '{0}': {1}")]
    InvalidEntry(String, String),
}
