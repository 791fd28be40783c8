//! linkcfg Runtime - sources, startup pipeline and logging.
//!
//! This crate provides:
//! - Figment-backed option sources (`ConfigLoader`, `FigmentSource`)
//! - The startup pipeline (`Bootstrap`)
//! - Logging configuration (`LoggingBuilder`)
//!
//! # Config Formats
//!
//! File formats are enabled through cargo features:
//!
//! - `toml-config` (default): `.toml` files
//! - `yaml-config`: `.yaml` / `.yml` files
//!
//! ```ignore
//! use linkcfg_runtime::{Bootstrap, logging};
//!
//! fn main() {
//!     let registry = server::registry().unwrap_or_else(|e| linkcfg_runtime::exit_with(&e));
//!     let cfg = Bootstrap::<ServerConfig>::new(&registry)
//!         .validator(server::validator())
//!         .run_or_exit();
//!
//!     logging::init_from_settings(&cfg.log_level, &cfg.log_path);
//! }
//! ```

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod logging;

// Re-exports
pub use bootstrap::{Bootstrap, exit_with};
pub use config::{ConfigLoader, FigmentSource, config_file_from_env, locate_config_file};
pub use error::{RuntimeError, RuntimeResult};
pub use logging::{LogFormat, LogOutput, LoggingBuilder};

// Re-export tracing for use by other crates
pub use tracing;
pub use tracing_subscriber;

/// Prelude module for convenient imports.
///
/// This provides all the commonly used logging macros:
/// - `trace!`, `debug!`, `info!`, `warn!`, `error!`
/// - `span`, `event`
/// - `instrument` attribute
/// - `Level` for span creation
pub mod prelude {
    pub use super::{Bootstrap, ConfigLoader};
    pub use tracing::{Level, debug, error, info, instrument, span, trace, warn};
}
