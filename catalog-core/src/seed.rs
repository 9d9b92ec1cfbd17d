//! Fixed records loaded into a fresh [`Catalog`](crate::Catalog) before any
//! request is served.

use chrono::Utc;

use crate::id::RecordId;
use crate::record::{Product, User};

/// The two seed users, ids `1` and `2`.
#[must_use]
pub fn users() -> Vec<User> {
    let now = Utc::now();
    vec![
        User {
            id: RecordId(1),
            name: "Mario Rossi".to_owned(),
            email: "mario@example.com".to_owned(),
            created_at: now,
        },
        User {
            id: RecordId(2),
            name: "Laura Bianchi".to_owned(),
            email: "laura@example.com".to_owned(),
            created_at: now,
        },
    ]
}

/// The three seed products, ids `1` to `3`.
#[must_use]
pub fn products() -> Vec<Product> {
    vec![
        Product { id: RecordId(1), name: "Laptop".to_owned(), price: 999.99, stock: 10 },
        Product { id: RecordId(2), name: "Mouse".to_owned(), price: 29.99, stock: 50 },
        Product { id: RecordId(3), name: "Keyboard".to_owned(), price: 79.99, stock: 30 },
    ]
}
