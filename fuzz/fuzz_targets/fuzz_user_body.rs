//! Fuzz target: user create/update bodies.
//!
//! Arbitrary bytes are decoded as `UserDraft` and `UserPatch` and pushed
//! through a collection. Decode and validation errors are fine; panics are not.

#![no_main]

use catalog_core::{Catalog, RecordId, UserDraft, UserPatch};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let catalog = Catalog::seeded();

    if let Ok(draft) = serde_json::from_slice::<UserDraft>(data) {
        if let Ok(user) = catalog.users.create(draft) {
            assert!(!user.name.is_empty() && !user.email.is_empty());
        }
    }

    if let Ok(patch) = serde_json::from_slice::<UserPatch>(data) {
        if let Ok(user) = catalog.users.update(RecordId(1), patch) {
            assert!(!user.name.is_empty() && !user.email.is_empty());
        }
    }
});
