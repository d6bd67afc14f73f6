//! # Store State
//!
//! The record store shared by every command of a session.
//!
//! ## Thread Safety
//! The store is wrapped in `Arc<Mutex<T>>`: several commands may run at
//! once, and each mutation must see the result of the previous one.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Store State Operations                               │
//! │                                                                         │
//! │  UI Action               Command                Store Access            │
//! │  ─────────               ───────                ────────────            │
//! │                                                                         │
//! │  Open expense list ─────► list_expenses() ─────► with_store (read)     │
//! │                                                                         │
//! │  Save new invoice ──────► create_invoice() ────► with_store_mut        │
//! │                                                                         │
//! │  Delete company ────────► delete_company() ────► with_store_mut        │
//! │                                                                         │
//! │  Open dashboard ────────► get_dashboard() ─────► with_store (read)     │
//! │                                                                         │
//! │  NOTE: Reads take the lock too, but only long enough to copy out.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use bizdesk_store::RecordStore;
use tracing::info;

use super::ConfigState;

/// Shared handle to the session's record store.
#[derive(Debug, Clone)]
pub struct StoreState {
    store: Arc<Mutex<RecordStore>>,
}

impl StoreState {
    pub fn new(store: RecordStore) -> Self {
        StoreState {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// The demo books or an empty store, as configured.
    pub fn from_config(config: &ConfigState) -> Self {
        let store = if config.seed_mock_data {
            RecordStore::seeded()
        } else {
            info!("Starting with an empty store");
            RecordStore::new()
        };
        Self::new(store)
    }

    /// Executes a function with read access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let count = store_state.with_store(|store| store.expenses().len());
    /// ```
    pub fn with_store<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&RecordStore) -> R,
    {
        let store = self.store.lock().unwrap_or_else(PoisonError::into_inner);
        f(&store)
    }

    /// Executes a function with write access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// store_state.with_store_mut(|store| store.delete_expense(&id))?;
    /// ```
    pub fn with_store_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut RecordStore) -> R,
    {
        let mut store = self.store.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut store)
    }
}

impl Default for StoreState {
    fn default() -> Self {
        Self::new(RecordStore::new())
    }
}
