//! Resource types held by the store and the payloads that create and patch them.
//!
//! Each resource implements [`Record`], which tells a
//! [`Collection`](crate::store::Collection) how to validate a creation
//! payload, build a record around a freshly assigned id, and merge a partial
//! update into an existing record.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::id::RecordId;

/// Which collection a record belongs to. Used in error messages and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum RecordKind {
    User,
    Product,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::User => f.write_str("User"),
            RecordKind::Product => f.write_str("Product"),
        }
    }
}

/// A resource type that can live in a [`Collection`](crate::store::Collection).
pub trait Record: Clone + fmt::Debug + Send + Sync + 'static {
    /// Collection this type is stored in.
    const KIND: RecordKind;

    /// Fields supplied by a caller when creating a record.
    type Draft;

    /// Fields supplied by a caller when updating a record. Every field is
    /// optional; absent fields leave the stored value untouched.
    type Patch;

    /// Identifier assigned by the store.
    fn id(&self) -> RecordId;

    /// Checks that required fields are present and in range.
    ///
    /// # Errors
    /// Returns [`CoreError::Validation`] describing the missing fields.
    fn validate(draft: &Self::Draft) -> Result<(), CoreError>;

    /// Builds the full record from a validated draft.
    fn build(id: RecordId, draft: Self::Draft) -> Self;

    /// Applies a partial update in place.
    fn merge(&mut self, patch: Self::Patch);
}

/// Marker for record types that may be hard-deleted from their collection.
///
/// Products deliberately do not implement this.
pub trait Removable: Record {}

// ── User ─────────────────────────────────────────────────────────────────────

/// A registered user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    /// Set once when the user is created; updates never touch it.
    pub created_at: DateTime<Utc>,
}

/// Creation payload for a [`User`].
///
/// Missing fields decode as empty strings so that validation, not the JSON
/// decoder, reports them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UserDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl UserDraft {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self { name: name.into(), email: email.into() }
    }
}

/// Partial update for a [`User`]. Empty strings count as "not supplied".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl Record for User {
    const KIND: RecordKind = RecordKind::User;
    type Draft = UserDraft;
    type Patch = UserPatch;

    fn id(&self) -> RecordId {
        self.id
    }

    fn validate(draft: &UserDraft) -> Result<(), CoreError> {
        if draft.name.is_empty() || draft.email.is_empty() {
            return Err(CoreError::Validation("Name and email are required".to_owned()));
        }
        Ok(())
    }

    fn build(id: RecordId, draft: UserDraft) -> Self {
        Self { id, name: draft.name, email: draft.email, created_at: Utc::now() }
    }

    fn merge(&mut self, patch: UserPatch) {
        if let Some(name) = patch.name.filter(|n| !n.is_empty()) {
            self.name = name;
        }
        if let Some(email) = patch.email.filter(|e| !e.is_empty()) {
            self.email = email;
        }
    }
}

impl Removable for User {}

// ── Product ──────────────────────────────────────────────────────────────────

/// An item in the product catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: RecordId,
    pub name: String,
    pub price: f64,
    pub stock: u32,
}

/// Creation payload for a [`Product`]. `stock` defaults to zero.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProductDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: f64,
    pub stock: Option<u32>,
}

impl ProductDraft {
    pub fn new(name: impl Into<String>, price: f64, stock: Option<u32>) -> Self {
        Self { name: name.into(), price, stock }
    }
}

/// Partial update for a [`Product`].
///
/// `stock` is signed so that a negative value decodes and is then ignored by
/// the merge, rather than failing the whole request.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i64>,
}

fn is_valid_price(price: f64) -> bool {
    price.is_finite() && price > 0.0
}

impl Record for Product {
    const KIND: RecordKind = RecordKind::Product;
    type Draft = ProductDraft;
    type Patch = ProductPatch;

    fn id(&self) -> RecordId {
        self.id
    }

    fn validate(draft: &ProductDraft) -> Result<(), CoreError> {
        if draft.name.is_empty() || !is_valid_price(draft.price) {
            return Err(CoreError::Validation("Name and valid price are required".to_owned()));
        }
        Ok(())
    }

    fn build(id: RecordId, draft: ProductDraft) -> Self {
        Self { id, name: draft.name, price: draft.price, stock: draft.stock.unwrap_or(0) }
    }

    fn merge(&mut self, patch: ProductPatch) {
        if let Some(name) = patch.name.filter(|n| !n.is_empty()) {
            self.name = name;
        }
        if let Some(price) = patch.price.filter(|p| is_valid_price(*p)) {
            self.price = price;
        }
        // Negative or out-of-range stock is treated as not supplied.
        if let Some(stock) = patch.stock.and_then(|s| u32::try_from(s).ok()) {
            self.stock = stock;
        }
    }
}
