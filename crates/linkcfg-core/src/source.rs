//! The Source Adapter boundary.

use std::collections::HashMap;

use crate::value::OptionValue;

/// Typed lookups over merged configuration sources.
///
/// Every accessor returns the kind's zero value (`""`, `0`, `false`) when no
/// underlying source sets `name`. How file, environment and default layers
/// are merged is up to the implementation.
pub trait Source {
    fn get_string(&self, name: &str) -> String;
    fn get_int(&self, name: &str) -> i64;
    fn get_bool(&self, name: &str) -> bool;
}

impl<S: Source + ?Sized> Source for &S {
    fn get_string(&self, name: &str) -> String {
        (**self).get_string(name)
    }

    fn get_int(&self, name: &str) -> i64 {
        (**self).get_int(name)
    }

    fn get_bool(&self, name: &str) -> bool {
        (**self).get_bool(name)
    }
}

/// In-memory source backed by a map of typed values.
///
/// Lookups are strict: a value stored with another kind reads as zero.
#[derive(Debug, Clone, Default)]
pub struct MapSource {
    values: HashMap<String, OptionValue>,
}

impl MapSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name` to `value`, replacing any previous value.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<OptionValue>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.values.get(name)
    }
}

impl FromIterator<(String, OptionValue)> for MapSource {
    fn from_iter<I: IntoIterator<Item = (String, OptionValue)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl Source for MapSource {
    fn get_string(&self, name: &str) -> String {
        self.get(name)
            .and_then(OptionValue::as_str)
            .map(str::to_string)
            .unwrap_or_default()
    }

    fn get_int(&self, name: &str) -> i64 {
        self.get(name).and_then(OptionValue::as_int).unwrap_or_default()
    }

    fn get_bool(&self, name: &str) -> bool {
        self.get(name).and_then(OptionValue::as_bool).unwrap_or_default()
    }
}
