//! # linkcfg Core
//!
//! The schema-driven binding engine behind linkcfg.
//!
//! A configuration type declares its fields once (usually through
//! `#[derive(Configurable)]`), an [`OptionRegistry`] declares the options
//! the outside world may set, and the engine moves values between the two
//! by option name:
//!
//! ```text
//! ┌────────────┐     ┌────────┐     ┌───────────────┐     ┌───────────┐     ┌────────────┐
//! │   Source   │────▶│  bind  │────▶│ resolve_paths │────▶│ Validator │────▶│ Frozen<T>  │
//! └────────────┘     └────────┘     └───────────────┘     └───────────┘     └─────┬──────┘
//!                                                                                 │
//!                                                              introspect ◀───────┘
//! ```
//!
//! Nothing here knows about files or environment variables; that is the
//! [`Source`] implementation's job (see `linkcfg-runtime`).
//!
//! ## Example
//!
//! ```rust,ignore
//! use linkcfg_core::{Configurable, MapSource, OptionDescriptor, OptionRegistry, bind, introspect};
//!
//! static OPTIONS: &[OptionDescriptor] = &[
//!     OptionDescriptor::string("server_addr", ":443", "listen address").env("LINK_SERVER_ADDR"),
//!     OptionDescriptor::int("max_client", 100, "maximum clients"),
//! ];
//!
//! #[derive(Debug, Default, Configurable)]
//! struct Settings {
//!     server_addr: String,
//!     max_client: i64,
//! }
//!
//! let registry = OptionRegistry::new(OPTIONS)?;
//! let mut settings = Settings::default();
//! bind(&mut settings, &registry, &MapSource::new().set("max_client", 10_i64));
//! for record in introspect(&settings, &registry) {
//!     println!("{} = {}", record.name, record.value);
//! }
//! ```

// Lets `#[derive(Configurable)]` expand inside this crate's own tests.
extern crate self as linkcfg_core;

pub mod binder;
pub mod error;
pub mod field;
pub mod frozen;
pub mod introspect;
pub mod option;
pub mod path;
pub mod source;
pub mod validation;
pub mod value;

pub use binder::{BindReport, bind, check_schema};
pub use error::{ConfigError, ConfigResult};
pub use field::{Accessor, Configurable, Field};
pub use frozen::Frozen;
pub use introspect::{Record, introspect};
pub use option::{DefaultValue, OptionDescriptor, OptionRegistry};
pub use source::{MapSource, Source};
pub use validation::{MinLength, OneOf, Rule, Validator};
pub use value::{OptionKind, OptionValue};

pub use linkcfg_macros::Configurable;

/// Prelude for common imports.
pub mod prelude {
    pub use super::{
        Configurable, Frozen, OptionDescriptor, OptionRegistry, Record, Rule, Source, Validator,
    };
}
