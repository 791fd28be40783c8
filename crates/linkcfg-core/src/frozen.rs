//! Read-only shared view of a configuration object after startup.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// An immutable, cheaply cloneable configuration handle.
///
/// Once a configuration object has been bound, resolved and validated it is
/// moved into a `Frozen` and handed to consumers. There is no way back to a
/// mutable reference, so any number of readers can share it without locks.
pub struct Frozen<T>(Arc<T>);

impl<T> Frozen<T> {
    /// Freezes `config`.
    pub fn new(config: T) -> Self {
        Self(Arc::new(config))
    }

    /// Returns the inner `Arc`, e.g. to store next to other shared state.
    pub fn as_arc(&self) -> &Arc<T> {
        &self.0
    }
}

impl<T> Clone for Frozen<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T> Deref for Frozen<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> AsRef<T> for Frozen<T> {
    fn as_ref(&self) -> &T {
        &self.0
    }
}

impl<T: fmt::Debug> fmt::Debug for Frozen<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Frozen").field(&*self.0).finish()
    }
}
