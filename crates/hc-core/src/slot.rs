//! `Slot<T>` — an atomically swappable, shared, optionally-empty cell.
//!
//! A `Slot` holds at most one value behind an `Arc`.  Writers replace the
//! value as a whole; readers take a snapshot `Arc` and work on it without
//! holding any lock.  A reader therefore always sees either the previous
//! value or the new one, never a half-replaced state.

use std::sync::{Arc, RwLock};

/// A shared cell holding zero or one `Arc<T>`, replaceable at runtime.
///
/// Cloning a `Slot` yields another handle to the *same* cell: an `install`
/// through one clone is visible through all of them.
#[derive(Debug)]
pub struct Slot<T> {
    inner: Arc<RwLock<Option<Arc<T>>>>,
}

impl<T> Slot<T> {
    /// Create an empty slot.
    pub fn empty() -> Self {
        Self {
            inner: Arc::new(RwLock::new(None)),
        }
    }

    /// Create a slot already holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Some(Arc::new(value)))),
        }
    }

    /// Replace the contents with `value`, returning the installed `Arc`.
    ///
    /// The previous value, if any, is dropped once the last outstanding
    /// snapshot of it goes away.
    pub fn install(&self, value: T) -> Arc<T> {
        let arc = Arc::new(value);
        let mut guard = self.inner.write().expect("Slot lock poisoned");
        *guard = Some(Arc::clone(&arc));
        arc
    }

    /// Empty the slot.
    pub fn clear(&self) {
        let mut guard = self.inner.write().expect("Slot lock poisoned");
        *guard = None;
    }

    /// Return `true` if the slot currently holds no value.
    pub fn is_empty(&self) -> bool {
        self.inner.read().expect("Slot lock poisoned").is_none()
    }

    /// Take a snapshot of the current value.
    ///
    /// The snapshot stays valid even if the slot is replaced or cleared
    /// afterwards.
    pub fn current(&self) -> Option<Arc<T>> {
        self.inner.read().expect("Slot lock poisoned").clone()
    }
}

impl<T> Clone for Slot<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self::empty()
    }
}
