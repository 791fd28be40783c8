//! Configuration sources for linkcfg.
//!
//! This module merges defaults, a TOML/YAML file, environment aliases and
//! programmatic overrides into a single [`FigmentSource`] for the binder.

pub mod loader;
pub mod source;

pub use loader::{CONFIG_FILE_OPTION, ConfigLoader, config_file_from_env, locate_config_file};
pub use source::FigmentSource;
