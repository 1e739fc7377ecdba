//! # Inventory Handle
//!
//! Inventory list with item edits and stock movements.
//!
//! ## Stock Adjustment
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  adjust_stock("3", StockMovement::stock_out(10.0), today)              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  get_by_id("3") ──► None ──► NotFound                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  movement.patch_for(item, today)                                       │
//! │       │   quantity <= 0 ──► Validation(MustBePositive)                 │
//! │       │   stock < 0     ──► Validation(BelowZero)                      │
//! │       ▼                                                                 │
//! │  update("3", patch) ──► refetch ──► Ok(item)                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The read and the write are two store calls. A movement recorded between
//! them by someone else is overwritten.

use chrono::NaiveDate;
use tracing::debug;

use agri_core::{InventoryItem, InventoryPatch, NewInventoryItem, Record, StockMovement};
use agri_store::{Store, StoreError, StoreResult};

use crate::resources::ListResource;

/// All inventory items, with create, update and stock movements.
pub struct InventoryResource {
    list: ListResource<InventoryItem>,
    store: Store,
}

impl InventoryResource {
    pub(crate) fn attach(store: Store) -> Self {
        let repo = store.clone();
        let list = ListResource::attach(move || {
            let inventory = repo.inventory();
            async move { inventory.list().await }
        });
        InventoryResource { list, store }
    }

    list_accessors!(InventoryItem);

    /// Updates an item, then refreshes the list.
    pub async fn update_item(
        &self,
        id: &str,
        patch: InventoryPatch,
    ) -> StoreResult<InventoryItem> {
        let item = self.store.inventory().update(id, patch).await?;
        self.list.refetch().await;
        Ok(item)
    }

    /// Creates an item, then refreshes the list.
    pub async fn create_item(&self, draft: NewInventoryItem) -> StoreResult<InventoryItem> {
        let item = self.store.inventory().create(draft).await?;
        self.list.refetch().await;
        Ok(item)
    }

    /// Records a stock-in or stock-out, then refreshes the list.
    ///
    /// ## Arguments
    /// * `id` - Store id of the item
    /// * `movement` - Direction and a positive quantity
    /// * `today` - Stamped as `last_restocked` on a stock-in
    pub async fn adjust_stock(
        &self,
        id: &str,
        movement: StockMovement,
        today: NaiveDate,
    ) -> StoreResult<InventoryItem> {
        let repo = self.store.inventory();

        let item = repo
            .get_by_id(id)
            .await
            .ok_or_else(|| StoreError::not_found(InventoryItem::ENTITY, id))?;
        let patch = movement.patch_for(&item, today)?;

        debug!(
            id = %id,
            direction = %movement.direction,
            quantity = movement.quantity,
            "Adjusting stock"
        );

        let item = repo.update(id, patch).await?;
        self.list.refetch().await;
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agri_core::ValidationError;
    use agri_store::{SeedData, StoreConfig};

    fn inventory() -> InventoryResource {
        InventoryResource::attach(Store::new(StoreConfig::instant(), SeedData::sample()))
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 10).unwrap()
    }

    #[tokio::test]
    async fn test_stock_in_restocks() {
        let inventory = inventory();
        inventory.settled().await;

        let item = inventory
            .adjust_stock("3", StockMovement::stock_in(55.0), today())
            .await
            .unwrap();
        assert_eq!(item.current_stock, 100.0);
        assert_eq!(item.last_restocked, today());

        let listed = &inventory.items()[2];
        assert_eq!(listed.current_stock, 100.0);
    }

    #[tokio::test]
    async fn test_stock_out_keeps_restock_date() {
        let inventory = inventory();
        inventory.settled().await;

        let item = inventory
            .adjust_stock("1", StockMovement::stock_out(500.0), today())
            .await
            .unwrap();
        assert_eq!(item.current_stock, 2_000.0);
        assert_eq!(item.last_restocked, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    }

    #[tokio::test]
    async fn test_stock_out_below_zero_is_rejected() {
        let inventory = inventory();
        inventory.settled().await;

        let err = inventory
            .adjust_stock("3", StockMovement::stock_out(60.0), today())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            StoreError::Validation(ValidationError::BelowZero {
                available: 45.0,
                requested: 60.0,
            })
        );
        assert_eq!(inventory.items()[2].current_stock, 45.0);
    }

    #[tokio::test]
    async fn test_non_positive_quantity_is_rejected() {
        let inventory = inventory();

        let err = inventory
            .adjust_stock("1", StockMovement::stock_in(0.0), today())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::Validation(ValidationError::MustBePositive { .. })
        ));
    }

    #[tokio::test]
    async fn test_adjust_missing_item_is_not_found() {
        let inventory = inventory();

        let err = inventory
            .adjust_stock("77", StockMovement::stock_in(1.0), today())
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_update_item_refreshes_list() {
        let inventory = inventory();
        inventory.settled().await;

        let patch = InventoryPatch {
            location: Some("Warehouse B".to_string()),
            ..InventoryPatch::default()
        };
        inventory.update_item("2", patch).await.unwrap();

        assert_eq!(inventory.items()[1].location, "Warehouse B");
    }
}
