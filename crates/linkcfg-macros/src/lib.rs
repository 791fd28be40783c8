//! Procedural macros for linkcfg.
//!
//! This crate provides:
//!
//! - `#[derive(Configurable)]` - Generates the static field table that the
//!   binder and introspector walk instead of reflecting over the struct
//!
//! # Configurable Derive Macro
//!
//! ```rust,ignore
//! use linkcfg_core::Configurable;
//!
//! #[derive(Debug, Default, Configurable)]
//! pub struct ServerConfig {
//!     pub server_addr: String,
//!     #[option(path)]
//!     pub cert_file: String,
//!     #[option(name = "max_client")]
//!     pub client_limit: i64,
//!     pub proxy_protocol: bool,
//! }
//! ```

mod configurable;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derives `linkcfg_core::Configurable` for a struct with named fields.
///
/// Every field becomes an entry of the field table, in declaration order,
/// bound to the option of the same name. Field types must be `String`,
/// `i64` or `bool`.
///
/// # Attributes
///
/// - `#[option(name = "...")]` - Bind to a differently named option
/// - `#[option(path)]` - Mark a `String` field as a filesystem path
/// - `#[option(skip)]` - Leave the field out of the table
#[proc_macro_derive(Configurable, attributes(option))]
pub fn derive_configurable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match configurable::derive_configurable(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
