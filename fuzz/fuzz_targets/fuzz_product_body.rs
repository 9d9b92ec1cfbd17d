//! Fuzz target: product create/update bodies.
//!
//! Whatever the payload, a stored product must keep a non-empty name and a
//! positive price.

#![no_main]

use catalog_core::{Catalog, ProductDraft, ProductPatch, RecordId};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let catalog = Catalog::seeded();

    if let Ok(draft) = serde_json::from_slice::<ProductDraft>(data) {
        if let Ok(product) = catalog.products.create(draft) {
            assert!(!product.name.is_empty());
            assert!(product.price > 0.0);
        }
    }

    if let Ok(patch) = serde_json::from_slice::<ProductPatch>(data) {
        if let Ok(product) = catalog.products.update(RecordId(1), patch) {
            assert!(!product.name.is_empty());
            assert!(product.price > 0.0);
        }
    }
});
