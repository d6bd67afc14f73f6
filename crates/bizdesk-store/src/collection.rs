//! # Collections
//!
//! One ordered collection per record kind. Records keep insertion order,
//! which is the order list views and exports show them in.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Collection<Expense>                                                    │
//! │                                                                         │
//! │   [0] expense-7c1e...   ◄── oldest                                     │
//! │   [1] expense-0b9a...                                                   │
//! │   [2] expense-f41d...   ◄── newest (insert appends)                    │
//! │                                                                         │
//! │   update(record)  replaces in place, position unchanged                │
//! │   remove(id)      drops the entry, later entries shift up              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use bizdesk_core::{Company, Expense, Invoice, RecordKind};

use crate::error::{StoreError, StoreResult};

/// A record the store can hold.
pub trait Record: Clone {
    const KIND: RecordKind;

    fn id(&self) -> &str;
}

impl Record for Company {
    const KIND: RecordKind = RecordKind::Company;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Expense {
    const KIND: RecordKind = RecordKind::Expense;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Invoice {
    const KIND: RecordKind = RecordKind::Invoice;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Insertion-ordered records of one kind.
///
/// Lookups are linear; a small business ledger holds hundreds of records,
/// not millions.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    records: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Collection {
            records: Vec::new(),
        }
    }
}

impl<T: Record> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `record` at the end.
    pub fn insert(&mut self, record: T) {
        self.records.push(record);
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Replaces the record with the same id, keeping its position.
    ///
    /// Fails with [`StoreError::NotFound`] and changes nothing when no
    /// record has that id.
    pub fn update(&mut self, record: T) -> StoreResult<()> {
        let slot = self
            .records
            .iter_mut()
            .find(|r| r.id() == record.id())
            .ok_or_else(|| StoreError::not_found(T::KIND, record.id()))?;
        *slot = record;
        Ok(())
    }

    /// Removes and returns the record with `id`.
    pub fn remove(&mut self, id: &str) -> StoreResult<T> {
        let index = self
            .records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| StoreError::not_found(T::KIND, id))?;
        Ok(self.records.remove(index))
    }

    /// All records, oldest first.
    pub fn all(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
