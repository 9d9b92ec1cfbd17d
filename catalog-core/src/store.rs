//! Lock-guarded in-memory collections.
//!
//! A [`Collection`] owns one keyed map and its id counter behind a single
//! `RwLock`. Reads take the shared lock and return owned copies; every
//! mutation holds the exclusive lock for its whole read-modify-write, so id
//! assignment, merge and insert are atomic with respect to other callers.

use std::{
    collections::HashMap,
    sync::{RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use crate::error::CoreError;
use crate::id::RecordId;
use crate::record::{Product, Record, Removable, User};
use crate::seed;

#[derive(Debug)]
struct Entries<T> {
    records: HashMap<RecordId, T>,
    /// Id handed to the next successful `create`. Never decremented.
    next_id: RecordId,
}

/// Thread-safe store for one record type.
#[derive(Debug)]
pub struct Collection<T: Record> {
    entries: RwLock<Entries<T>>,
}

impl<T: Record> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> Collection<T> {
    /// Create an empty collection whose first id will be `1`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Entries { records: HashMap::new(), next_id: RecordId(1) }),
        }
    }

    /// Create a collection pre-populated with `records`.
    ///
    /// The counter starts after the largest seeded id.
    #[must_use]
    pub fn with_records(records: impl IntoIterator<Item = T>) -> Self {
        let records: HashMap<RecordId, T> = records.into_iter().map(|r| (r.id(), r)).collect();
        let next_id = records.keys().max().map_or(RecordId(1), |max| max.next());
        Self { entries: RwLock::new(Entries { records, next_id }) }
    }

    #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
    fn read(&self) -> RwLockReadGuard<'_, Entries<T>> {
        self.entries.read().expect("collection read lock poisoned")
    }

    #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
    fn write(&self) -> RwLockWriteGuard<'_, Entries<T>> {
        self.entries.write().expect("collection write lock poisoned")
    }

    /// Snapshot of every record. Order is unspecified.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn list(&self) -> Vec<T> {
        self.read().records.values().cloned().collect()
    }

    /// Fetch one record by id.
    ///
    /// # Errors
    /// Returns [`CoreError::NotFound`] if no record has this id.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    pub fn get(&self, id: RecordId) -> Result<T, CoreError> {
        self.read()
            .records
            .get(&id)
            .cloned()
            .ok_or(CoreError::NotFound { kind: T::KIND, id })
    }

    /// Validate `draft`, assign the next id and store the new record.
    ///
    /// A rejected draft does not consume an id.
    ///
    /// # Errors
    /// Returns [`CoreError::Validation`] if required fields are missing or out
    /// of range.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    pub fn create(&self, draft: T::Draft) -> Result<T, CoreError> {
        T::validate(&draft)?;

        let mut entries = self.write();
        let id = entries.next_id;
        entries.next_id = id.next();
        let record = T::build(id, draft);
        entries.records.insert(id, record.clone());
        drop(entries);

        tracing::debug!(kind = %T::KIND, %id, "record created");
        Ok(record)
    }

    /// Merge `patch` into the record with this id and return the result.
    ///
    /// # Errors
    /// Returns [`CoreError::NotFound`] if no record has this id.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    pub fn update(&self, id: RecordId, patch: T::Patch) -> Result<T, CoreError> {
        let mut entries = self.write();
        let record = entries
            .records
            .get_mut(&id)
            .ok_or(CoreError::NotFound { kind: T::KIND, id })?;
        record.merge(patch);
        let merged = record.clone();
        drop(entries);

        tracing::debug!(kind = %T::KIND, %id, "record updated");
        Ok(merged)
    }

    /// Number of stored records.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().records.len()
    }

    /// Return `true` if the collection holds no records.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return `false` once a writer has panicked while holding the lock.
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        !self.entries.is_poisoned()
    }
}

impl<T: Removable> Collection<T> {
    /// Hard-delete a record. Its id is never handed out again.
    ///
    /// # Errors
    /// Returns [`CoreError::NotFound`] if no record has this id, including
    /// one that was already removed.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    pub fn remove(&self, id: RecordId) -> Result<(), CoreError> {
        if self.write().records.remove(&id).is_none() {
            return Err(CoreError::NotFound { kind: T::KIND, id });
        }
        tracing::debug!(kind = %T::KIND, %id, "record removed");
        Ok(())
    }
}

/// Both resource collections. Their locks are independent and no operation
/// touches both.
#[derive(Debug, Default)]
pub struct Catalog {
    pub users: Collection<User>,
    pub products: Collection<Product>,
}

impl Catalog {
    /// Create a catalog with no records.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog loaded with the fixed seed users and products.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            users: Collection::with_records(seed::users()),
            products: Collection::with_records(seed::products()),
        }
    }

    /// Return `true` if neither collection's lock is poisoned.
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        self.users.is_healthy() && self.products.is_healthy()
    }
}
