//! # Shared Store Handle
//!
//! A [`Store`] is a plain single-owner value. Views that live on different
//! threads share one through [`SharedStore`].
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  view A ──► with_store_mut(|s| s.add_to_cart(id)) ──┐                  │
//! │                                                     ├──► Mutex<Store>  │
//! │  view B ──► with_store(|s| s.cart_summary()) ───────┘                  │
//! │                                                                         │
//! │  One operation holds the lock at a time, so every operation is atomic  │
//! │  with respect to every other. Readers see state before or after an     │
//! │  operation, never partway through.                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Store operations never panic midway through a mutation, so a poisoned
//! lock still guards consistent state and is recovered rather than
//! propagated.

use std::sync::{Arc, Mutex, PoisonError};

use crate::store::Store;

/// Cloneable, thread-safe handle to one store.
#[derive(Debug, Clone)]
pub struct SharedStore {
    store: Arc<Mutex<Store>>,
}

impl SharedStore {
    pub fn new(store: Store) -> Self {
        SharedStore {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Runs `f` with read access to the store.
    ///
    /// ## Usage
    /// ```rust
    /// # use honeyzest_store::{SharedStore, Store};
    /// let shared = SharedStore::new(Store::seeded());
    /// let count = shared.with_store(|store| store.products().len());
    /// assert_eq!(count, 3);
    /// ```
    pub fn with_store<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Store) -> R,
    {
        let store = self.store.lock().unwrap_or_else(PoisonError::into_inner);
        f(&store)
    }

    /// Runs `f` with write access to the store.
    pub fn with_store_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Store) -> R,
    {
        let mut store = self.store.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut store)
    }
}

impl Default for SharedStore {
    fn default() -> Self {
        SharedStore::new(Store::seeded())
    }
}

impl From<Store> for SharedStore {
    fn from(store: Store) -> Self {
        SharedStore::new(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use honeyzest_core::ProductId;
    use std::thread;

    #[test]
    fn test_concurrent_adds_are_not_lost() {
        let shared = SharedStore::default();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for _ in 0..25 {
                        shared
                            .with_store_mut(|store| store.add_to_cart(ProductId::new(1)))
                            .unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let quantity = shared.with_store(|store| store.cart().quantity(ProductId::new(1)));
        assert_eq!(quantity, 200);
    }

    #[test]
    fn test_concurrent_checkouts_get_distinct_ids() {
        let shared = SharedStore::default();
        shared
            .with_store_mut(|store| store.login("john@gmail.com", "123").map(|_| ()))
            .unwrap();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let shared = shared.clone();
                thread::spawn(move || {
                    shared.with_store_mut(|store| {
                        store.add_to_cart(ProductId::new(2))?;
                        store.place_order().map(|order| order.id)
                    })
                })
            })
            .collect();

        let mut ids: Vec<_> = handles
            .into_iter()
            .map(|h| h.join().unwrap().unwrap())
            .collect();
        ids.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }
}
