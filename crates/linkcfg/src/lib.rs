//! # linkcfg
//!
//! Schema-driven startup configuration for the link VPN server.
//!
//! ## Overview
//!
//! Options are declared once in a static table (name, kind, default,
//! environment alias, usage text). The typed [`ServerConfig`] derives a
//! matching field table, and startup moves values between the two by name:
//!
//! ```text
//! ┌──────────────┐     ┌──────────┐     ┌──────────────┐     ┌──────────────┐
//! │   Defaults   │     │          │     │              │     │              │
//! │ server.toml  │────▶│   bind   │────▶│ resolve paths│────▶│   validate   │────▶ Frozen<ServerConfig>
//! │  LINK_* env  │     │          │     │              │     │              │
//! └──────────────┘     └──────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! - **Core** (`linkcfg-core`): registry, binder, path resolver, validator, introspector
//! - **Runtime** (`linkcfg-runtime`): figment sources, bootstrap pipeline, logging
//! - **Server** ([`server`]): the server option table and its rules
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use linkcfg::prelude::*;
//! use linkcfg::server::{self, ServerConfig};
//!
//! let registry = server::registry()?;
//! let cfg = Bootstrap::<ServerConfig>::new(&registry)
//!     .validator(server::validator())
//!     .run()?;
//!
//! for record in introspect(&*cfg, &registry) {
//!     println!("{} ({}) = {}", record.name, record.env_alias, record.value);
//! }
//! ```
//!
//! ## Features
//!
//! - `toml-config`: Read `.toml` config files (default)
//! - `yaml-config`: Read `.yaml` / `.yml` config files
//! - `json-log`: Enable JSON log output

pub mod server;

pub use linkcfg_core as core;
pub use linkcfg_runtime as runtime;

pub use server::ServerConfig;

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use linkcfg::prelude::*;
/// ```
pub mod prelude {
    // Schema declaration
    pub use linkcfg_core::{
        Configurable, Frozen, MinLength, OneOf, OptionDescriptor, OptionRegistry, OptionValue,
        Record, Rule, Validator, introspect,
    };

    // Startup
    pub use linkcfg_runtime::{Bootstrap, ConfigLoader, RuntimeError, RuntimeResult};

    // Logging macros
    pub use linkcfg_runtime::prelude::{debug, error, info, trace, warn};
}
