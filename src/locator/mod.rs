// Locator module - resolves logical tool names to executables
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod error;
#[allow(clippy::module_inception)]
pub mod locator;
pub mod registry;
pub mod resolver;

pub use error::{RegistryError, ToolResolveError};
pub use locator::{ToolLocator, default_executable, executable_file_name, is_windows};
pub use registry::TomlToolRegistry;
pub use resolver::{ChainResolver, EnvToolResolver, StaticToolPaths, ToolPathResolver, home_vars};
