//! Shared component state
//!
//! `State<T>` is a cheap-to-clone cell for component-local UI state. Clones
//! share the same underlying value, which lets event handlers capture a handle
//! while the owning component keeps reading it. All mutation happens
//! synchronously inside user-event callbacks; there are no concurrent writers.
//!
//! ```
//! use motif_core::State;
//!
//! let visible = State::new(true);
//! let handle = visible.clone();
//! handle.toggle();
//! assert!(!visible.get());
//! ```

use std::sync::{Arc, Mutex};

/// A cheap-to-clone shared cell for component-local state
#[derive(Debug, Default)]
pub struct State<T> {
    inner: Arc<Mutex<T>>,
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> State<T> {
    /// Create a new state cell with the given initial value
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(Mutex::new(value)),
        }
    }

    /// Replace the current value
    pub fn set(&self, value: T) {
        *self.inner.lock().unwrap() = value;
    }

    /// Apply a function to the current value in place
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut T),
    {
        f(&mut self.inner.lock().unwrap());
    }

    /// Read the current value through a closure (avoids requiring `Clone`)
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.inner.lock().unwrap())
    }
}

impl<T: Clone> State<T> {
    /// Get a copy of the current value
    pub fn get(&self) -> T {
        self.inner.lock().unwrap().clone()
    }
}

impl State<bool> {
    /// Flip the flag and return the new value
    pub fn toggle(&self) -> bool {
        let mut guard = self.inner.lock().unwrap();
        *guard = !*guard;
        tracing::trace!(value = *guard, "flag toggled");
        *guard
    }
}
