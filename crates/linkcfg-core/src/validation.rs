//! Post-bind validation rules.
//!
//! Rules are independent checks over a bound configuration object. A
//! [`Validator`] runs them in order and stops at the first violation; it
//! never mutates the object.

use std::fmt;

use tracing::debug;

use crate::error::{ConfigError, ConfigResult};
use crate::field::{Accessor, Configurable};

/// A single invariant over a configuration object.
pub trait Rule<T>: Send + Sync {
    /// Short identifier used in diagnostics.
    fn name(&self) -> &'static str;

    /// Checks the invariant, returning a human-readable message on violation.
    fn check(&self, config: &T) -> Result<(), String>;
}

/// An ordered, fail-fast list of rules.
pub struct Validator<T> {
    rules: Vec<Box<dyn Rule<T>>>,
}

impl<T> Default for Validator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Validator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.rules.iter().map(|r| r.name()))
            .finish()
    }
}

impl<T> Validator<T> {
    /// Creates an empty validator that accepts everything.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a rule.
    pub fn with_rule(mut self, rule: impl Rule<T> + 'static) -> Self {
        self.push(rule);
        self
    }

    pub fn push(&mut self, rule: impl Rule<T> + 'static) {
        self.rules.push(Box::new(rule));
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Runs every rule against `config`, failing on the first violation.
    pub fn validate(&self, config: &T) -> ConfigResult<()> {
        for rule in &self.rules {
            rule.check(config)
                .map_err(|message| ConfigError::validation(rule.name(), message))?;
            debug!(rule = rule.name(), "Validation rule passed");
        }
        Ok(())
    }
}

/// Reads a string option through the field table. Missing or non-string
/// fields read as empty.
fn read_str<T: Configurable>(config: &T, option: &str) -> String {
    match T::field(option).map(|f| f.accessor) {
        Some(Accessor::Str { get, .. }) => get(config).to_string(),
        _ => String::new(),
    }
}

/// Requires a string option to hold at least `min` characters.
#[derive(Debug, Clone, Copy)]
pub struct MinLength {
    option: &'static str,
    min: usize,
}

impl MinLength {
    pub const fn new(option: &'static str, min: usize) -> Self {
        Self { option, min }
    }
}

impl<T: Configurable> Rule<T> for MinLength {
    fn name(&self) -> &'static str {
        "min_length"
    }

    fn check(&self, config: &T) -> Result<(), String> {
        let len = read_str(config, self.option).chars().count();
        if len < self.min {
            return Err(format!(
                "{} must be at least {} characters long (got {len})",
                self.option, self.min
            ));
        }
        Ok(())
    }
}

/// Requires a string option to be one of a fixed set of values.
#[derive(Debug, Clone, Copy)]
pub struct OneOf {
    option: &'static str,
    allowed: &'static [&'static str],
}

impl OneOf {
    pub const fn new(option: &'static str, allowed: &'static [&'static str]) -> Self {
        Self { option, allowed }
    }
}

impl<T: Configurable> Rule<T> for OneOf {
    fn name(&self) -> &'static str {
        "one_of"
    }

    fn check(&self, config: &T) -> Result<(), String> {
        let value = read_str(config, self.option);
        if !self.allowed.contains(&value.as_str()) {
            return Err(format!(
                "{} must be one of {:?}, got {value:?}",
                self.option, self.allowed
            ));
        }
        Ok(())
    }
}
