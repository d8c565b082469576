//! Host-owned values shared with components.
//!
//! A [`Binding`] is the storage a host hands to a controlled component: the
//! component reads the current value on every pass and writes proposed
//! values back, while the host keeps the authoritative copy and may observe
//! or replace it at any time.
//!
//! ```
//! use ranger_ui::Binding;
//!
//! let range = Binding::new(20..=80);
//! let view = range.clone();
//!
//! range.with_mut(|r| *r = 30..=80);
//! assert_eq!(view.get(), 30..=80);
//! ```

use std::{fmt, sync::Arc};

use parking_lot::RwLock;

/// Shared, clonable handle to a host-owned value.
///
/// Clones point at the same storage.
pub struct Binding<T> {
    inner: Arc<RwLock<T>>,
}

impl<T> Binding<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
        }
    }

    /// Execute a closure with a shared reference to the stored value.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let guard = self.inner.read();
        f(&guard)
    }

    /// Execute a closure with a mutable reference to the stored value.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut guard = self.inner.write();
        f(&mut guard)
    }

    /// Get a cloned value. Requires `T: Clone`.
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.with(Clone::clone)
    }

    /// Replace the stored value.
    pub fn set(&self, value: T) {
        self.with_mut(|slot| *slot = value);
    }
}

impl<T> Clone for Binding<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.with(|value| f.debug_tuple("Binding").field(value).finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_storage() {
        let a = Binding::new(1);
        let b = a.clone();
        b.set(5);
        assert_eq!(a.get(), 5);

        let other = Binding::new(1);
        other.set(9);
        assert_eq!(a.get(), 5);
    }

    #[test]
    fn with_mut_returns_closure_result() {
        let binding = Binding::new(vec![1, 2]);
        let len = binding.with_mut(|v| {
            v.push(3);
            v.len()
        });
        assert_eq!(len, 3);
        assert_eq!(format!("{binding:?}"), "Binding([1, 2, 3])");
    }
}
