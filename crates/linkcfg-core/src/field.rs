//! The field descriptor table: typed accessors keyed by option name.
//!
//! Instead of walking a struct at runtime, every configuration type exposes a
//! static table of [`Field`]s in declaration order. Each entry pairs the
//! option name with a getter/setter pair of the field's own kind, so the
//! binder and introspector stay generic without knowing the schema.
//!
//! Tables are normally generated with `#[derive(Configurable)]`:
//!
//! ```rust,ignore
//! #[derive(Debug, Default, Configurable)]
//! pub struct ServerConfig {
//!     pub server_addr: String,
//!     #[option(path)]
//!     pub db_file: String,
//!     pub max_client: i64,
//!     pub proxy_protocol: bool,
//!     #[option(skip)]
//!     pub started_at: Option<std::time::Instant>,
//! }
//! ```

use std::fmt;

use crate::value::{OptionKind, OptionValue};

/// Typed getter/setter pair for one field.
pub enum Accessor<T> {
    Str {
        get: fn(&T) -> &str,
        set: fn(&mut T, String),
    },
    Int {
        get: fn(&T) -> i64,
        set: fn(&mut T, i64),
    },
    Bool {
        get: fn(&T) -> bool,
        set: fn(&mut T, bool),
    },
}

impl<T> Clone for Accessor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Accessor<T> {}

impl<T> Accessor<T> {
    /// Returns the kind of the field behind this accessor.
    pub fn kind(&self) -> OptionKind {
        match self {
            Self::Str { .. } => OptionKind::String,
            Self::Int { .. } => OptionKind::Int,
            Self::Bool { .. } => OptionKind::Bool,
        }
    }
}

/// One entry of a configuration type's field table.
pub struct Field<T> {
    /// Option name this field binds to.
    pub name: &'static str,
    /// Typed access to the field.
    pub accessor: Accessor<T>,
}

impl<T> Clone for Field<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Field<T> {}

impl<T> fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("kind", &self.kind())
            .finish()
    }
}

impl<T> Field<T> {
    #[inline]
    pub fn kind(&self) -> OptionKind {
        self.accessor.kind()
    }

    /// Reads the current value of this field.
    pub fn get(&self, target: &T) -> OptionValue {
        match self.accessor {
            Accessor::Str { get, .. } => OptionValue::Str(get(target).to_string()),
            Accessor::Int { get, .. } => OptionValue::Int(get(target)),
            Accessor::Bool { get, .. } => OptionValue::Bool(get(target)),
        }
    }

    /// Writes `value` into the field.
    ///
    /// Returns `false` and leaves the field untouched when the value's kind
    /// differs from the field's.
    pub fn set(&self, target: &mut T, value: OptionValue) -> bool {
        match (self.accessor, value) {
            (Accessor::Str { set, .. }, OptionValue::Str(s)) => set(target, s),
            (Accessor::Int { set, .. }, OptionValue::Int(n)) => set(target, n),
            (Accessor::Bool { set, .. }, OptionValue::Bool(b)) => set(target, b),
            _ => return false,
        }
        true
    }
}

/// A flat configuration type with a static field table.
pub trait Configurable: Default + Sized + 'static {
    /// All bindable fields, in declaration order.
    fn fields() -> &'static [Field<Self>];

    /// Option names of the string fields holding filesystem paths.
    fn path_fields() -> &'static [&'static str] {
        &[]
    }

    /// Finds the field bound to option `name`.
    fn field(name: &str) -> Option<&'static Field<Self>> {
        Self::fields().iter().find(|f| f.name == name)
    }
}
