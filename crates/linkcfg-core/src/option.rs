//! Option descriptors and the registry that indexes them.
//!
//! A descriptor is static, `Copy` metadata for one configuration option.
//! Tables of descriptors are written as `static` slices with the `const`
//! constructors below, so an option's kind and default can never disagree:
//!
//! ```rust,ignore
//! static OPTIONS: &[OptionDescriptor] = &[
//!     OptionDescriptor::string("server_addr", ":443", "listen address").env("LINK_SERVER_ADDR"),
//!     OptionDescriptor::int("max_client", 100, "maximum clients").env("LINK_MAX_CLIENT"),
//! ];
//! let registry = OptionRegistry::new(OPTIONS)?;
//! ```

use std::collections::HashMap;

use crate::error::{ConfigError, ConfigResult};
use crate::value::{OptionKind, OptionValue};

/// Built-in default of an option, usable in `const` context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultValue {
    Str(&'static str),
    Int(i64),
    Bool(bool),
}

impl DefaultValue {
    /// Converts into an owned [`OptionValue`].
    pub fn to_value(self) -> OptionValue {
        match self {
            Self::Str(s) => OptionValue::Str(s.to_string()),
            Self::Int(n) => OptionValue::Int(n),
            Self::Bool(b) => OptionValue::Bool(b),
        }
    }
}

/// Static metadata describing one configuration option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionDescriptor {
    /// Unique option name; matches a configuration field's option name.
    pub name: &'static str,

    /// Value kind.
    pub kind: OptionKind,

    /// Documentation text. Empty means the option is not externally listed.
    pub usage: &'static str,

    /// Environment variable that sets this option, if any.
    pub env_alias: Option<&'static str>,

    /// Value used when no source provides one.
    pub default: DefaultValue,
}

impl OptionDescriptor {
    /// Declares a string option.
    pub const fn string(name: &'static str, default: &'static str, usage: &'static str) -> Self {
        Self {
            name,
            kind: OptionKind::String,
            usage,
            env_alias: None,
            default: DefaultValue::Str(default),
        }
    }

    /// Declares an integer option.
    pub const fn int(name: &'static str, default: i64, usage: &'static str) -> Self {
        Self {
            name,
            kind: OptionKind::Int,
            usage,
            env_alias: None,
            default: DefaultValue::Int(default),
        }
    }

    /// Declares a boolean option.
    pub const fn boolean(name: &'static str, default: bool, usage: &'static str) -> Self {
        Self {
            name,
            kind: OptionKind::Bool,
            usage,
            env_alias: None,
            default: DefaultValue::Bool(default),
        }
    }

    /// Sets the environment variable alias.
    pub const fn env(mut self, alias: &'static str) -> Self {
        self.env_alias = Some(alias);
        self
    }

    /// Returns `true` if the option shows up in introspection output.
    #[inline]
    pub fn is_listed(&self) -> bool {
        !self.usage.is_empty()
    }
}

/// Read-only index over a static descriptor table.
///
/// Iteration follows table order; lookups go through a name index built once
/// at construction.
#[derive(Debug, Clone)]
pub struct OptionRegistry {
    table: &'static [OptionDescriptor],
    by_name: HashMap<&'static str, usize>,
}

impl OptionRegistry {
    /// Indexes `table`, rejecting duplicate names.
    pub fn new(table: &'static [OptionDescriptor]) -> ConfigResult<Self> {
        let mut by_name = HashMap::with_capacity(table.len());
        for (idx, desc) in table.iter().enumerate() {
            if by_name.insert(desc.name, idx).is_some() {
                return Err(ConfigError::DuplicateOption(desc.name));
            }
        }
        Ok(Self { table, by_name })
    }

    /// Looks up the descriptor for `name`.
    pub fn descriptor_for(&self, name: &str) -> Option<&OptionDescriptor> {
        self.by_name.get(name).map(|&idx| &self.table[idx])
    }

    /// Looks up the environment alias for `name`.
    pub fn env_alias_for(&self, name: &str) -> Option<&'static str> {
        self.descriptor_for(name).and_then(|d| d.env_alias)
    }

    /// Iterates descriptors in table order.
    pub fn iter(&self) -> impl Iterator<Item = &OptionDescriptor> {
        self.table.iter()
    }

    /// Iterates `(name, default)` pairs in table order.
    pub fn defaults(&self) -> impl Iterator<Item = (&'static str, OptionValue)> + '_ {
        self.table.iter().map(|d| (d.name, d.default.to_value()))
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
