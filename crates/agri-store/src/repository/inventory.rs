//! # Inventory Repository
//!
//! Store operations for farm supplies (seeds, fertilizer, tools).
//!
//! Stock bounds are informational: the store accepts a current stock above
//! the maximum or below the minimum. Only negative numbers are rejected.

use tracing::debug;

use agri_core::{InventoryItem, InventoryPatch, NewInventoryItem};

use crate::error::StoreResult;
use crate::repository;
use crate::store::Store;

/// Repository for inventory operations.
#[derive(Debug, Clone)]
pub struct InventoryRepository {
    store: Store,
}

impl InventoryRepository {
    /// Creates a new InventoryRepository.
    pub fn new(store: Store) -> Self {
        InventoryRepository { store }
    }

    /// Lists every item in collection order.
    pub async fn list(&self) -> Vec<InventoryItem> {
        let items: Vec<InventoryItem> = repository::list(&self.store).await;
        debug!(count = items.len(), "Listed inventory");
        items
    }

    /// Gets an item by store id.
    pub async fn get_by_id(&self, id: &str) -> Option<InventoryItem> {
        debug!(id = %id, "Getting inventory item");
        repository::get(&self.store, id).await
    }

    /// Creates an item under a fresh id.
    pub async fn create(&self, draft: NewInventoryItem) -> StoreResult<InventoryItem> {
        let item: InventoryItem = repository::create(&self.store, draft).await?;
        debug!(id = %item.id, name = %item.name, "Created inventory item");
        Ok(item)
    }

    /// Overwrites the fields present in `patch`.
    ///
    /// ## Example
    /// ```rust,ignore
    /// // Restock to 3000 kg
    /// let patch = InventoryPatch { current_stock: Some(3000.0), ..Default::default() };
    /// let item = repo.update("1", patch).await?;
    /// ```
    pub async fn update(&self, id: &str, patch: InventoryPatch) -> StoreResult<InventoryItem> {
        let item: InventoryItem = repository::update(&self.store, id, patch).await?;
        debug!(id = %id, stock = item.current_stock, "Updated inventory item");
        Ok(item)
    }

    /// Number of items.
    pub async fn count(&self) -> usize {
        repository::count::<InventoryItem>(&self.store).await
    }
}
