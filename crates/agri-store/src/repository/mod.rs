//! # Repository Module
//!
//! One repository per collection, all backed by the same [`Store`].
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  Resource handle / dashboard                                           │
//! │       │                                                                 │
//! │       │  store.farmers().update("2", patch)                            │
//! │       ▼                                                                 │
//! │  FarmerRepository                                                      │
//! │  ├── list(&self)                                                       │
//! │  ├── get_by_id(&self, id)                                              │
//! │  ├── create(&self, draft)                                              │
//! │  ├── update(&self, id, patch)                                          │
//! │  ├── delete(&self, id)                                                 │
//! │  └── count(&self)                                                      │
//! │       │                                                                 │
//! │       │  pause(latency) ──► lock ──► Table<T>                          │
//! │       ▼                                                                 │
//! │  Collections (RwLock)                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The shared steps live in this module as generic functions over
//! [`Stored`]; each repository picks the ones its collection supports.
//!
//! ## Available Repositories
//!
//! - [`FarmerRepository`] - full CRUD
//! - [`InventoryRepository`] - list, get, create, update
//! - [`HarvestRepository`] - list, get, create, update
//! - [`AlertRepository`] - list, get, dismiss
//! - [`CropRepository`], [`SaleRepository`], [`CustomerRepository`],
//!   [`MarketListingRepository`], [`SensorRepository`] - read only

use agri_core::validation::Validate;
use agri_core::Writable;

use crate::config::Operation;
use crate::error::{StoreError, StoreResult};
use crate::store::{Store, Stored};

pub mod alert;
pub mod crop;
pub mod customer;
pub mod farmer;
pub mod harvest;
pub mod inventory;
pub mod market;
pub mod sale;
pub mod sensor;

pub use alert::AlertRepository;
pub use crop::CropRepository;
pub use customer::CustomerRepository;
pub use farmer::FarmerRepository;
pub use harvest::HarvestRepository;
pub use inventory::InventoryRepository;
pub use market::MarketListingRepository;
pub use sale::SaleRepository;
pub use sensor::SensorRepository;

// =============================================================================
// Shared Operations
// =============================================================================

/// Copy of the whole collection, in order.
pub(crate) async fn list<T: Stored>(store: &Store) -> Vec<T> {
    store.pause(T::LIST_OP).await;
    let data = store.read().await;
    T::table(&data).snapshot()
}

/// Copy of one record. Absence is not an error.
pub(crate) async fn get<T: Stored>(store: &Store, id: &str) -> Option<T> {
    store.pause(Operation::Get).await;
    let data = store.read().await;
    T::table(&data).find(id)
}

/// Number of records. No latency.
pub(crate) async fn count<T: Stored>(store: &Store) -> usize {
    let data = store.read().await;
    T::table(&data).len()
}

/// Builds a record from `draft` under a fresh id and appends it.
///
/// Nothing is stored if the record fails validation.
pub(crate) async fn create<T>(store: &Store, draft: T::Draft) -> StoreResult<T>
where
    T: Stored + Writable + Validate,
{
    store.pause(Operation::Create).await;
    let mut data = store.write().await;

    let table = T::table_mut(&mut data);
    let id = store.fresh_id(table)?;
    let record = T::from_draft(id, draft);
    record.validate()?;

    table.push(record.clone());
    Ok(record)
}

/// Merges `patch` into the record with `id` and replaces it in place.
///
/// ## When This Fails
/// - `NotFound` if no record has `id`
/// - `Validation` if the merged record is invalid (the stored one is kept)
pub(crate) async fn update<T>(store: &Store, id: &str, patch: T::Patch) -> StoreResult<T>
where
    T: Stored + Writable + Validate,
{
    store.pause(Operation::Update).await;
    let mut data = store.write().await;

    let slot = T::table_mut(&mut data)
        .get_mut(id)
        .ok_or_else(|| StoreError::not_found(T::ENTITY, id))?;

    let mut merged = slot.clone();
    merged.apply_patch(patch);
    merged.validate()?;

    *slot = merged.clone();
    Ok(merged)
}

/// Removes the record with `id`. No cascade.
pub(crate) async fn delete<T: Stored>(store: &Store, id: &str) -> StoreResult<()> {
    store.pause(Operation::Delete).await;
    let mut data = store.write().await;

    T::table_mut(&mut data)
        .remove(id)
        .map(|_| ())
        .ok_or_else(|| StoreError::not_found(T::ENTITY, id))
}
