//! # agri-client: Fetch State for the Agri Dashboard
//!
//! Observable fetch state over the store, one handle per collection.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Agri Dashboard Data Flow                         │
//! │                                                                         │
//! │  Dashboard page                                                        │
//! │       │  items() / loading() / error() / create_farmer(..)            │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    agri-client (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   DataLayer ──► FarmersResource ──► ListResource<Farmer>        │   │
//! │  │             ──► InventoryResource        │                      │   │
//! │  │             ──► AlertsResource ...       ▼                      │   │
//! │  │                                   Resource<P, T>                │   │
//! │  │                                   watch::Sender<FetchState>     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  agri-store repositories                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`fetch`] - The generic resource and its state machine
//! - [`resources`] - Per-collection handles and mutation helpers
//!
//! ## Usage
//!
//! ```rust
//! use agri_client::DataLayer;
//! use agri_store::{SeedData, Store, StoreConfig};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let data = DataLayer::new(Store::new(StoreConfig::instant(), SeedData::sample()));
//!
//! let farmers = data.farmers();
//! farmers.settled().await;
//! assert_eq!(farmers.items().len(), 3);
//! # }
//! ```

pub mod fetch;
pub mod resources;

pub use fetch::{FetchOutcome, FetchState, FetchStatus, Fetcher, PendingFetch, Resource};
pub use resources::{
    AlertsResource, CropsResource, CustomersResource, FarmerResource, FarmersResource,
    HarvestsResource, InventoryResource, ListResource, MarketListingsResource, SalesResource,
    SensorsResource,
};

use agri_store::Store;

/// Entry point for pages: hands out attached resources over one store.
///
/// Every call attaches a new resource and starts its first fetch, so it
/// must run inside a tokio runtime. Dropping a handle detaches it.
#[derive(Debug, Clone)]
pub struct DataLayer {
    store: Store,
}

impl DataLayer {
    /// Creates a data layer over `store`.
    pub fn new(store: Store) -> Self {
        DataLayer { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// All farmers.
    pub fn farmers(&self) -> FarmersResource {
        FarmersResource::attach(self.store.clone())
    }

    /// One farmer. `None` resolves to no farmer without a store call.
    pub fn farmer(&self, id: Option<String>) -> FarmerResource {
        FarmerResource::attach(self.store.clone(), id)
    }

    /// The crop catalog.
    pub fn crops(&self) -> CropsResource {
        let store = self.store.clone();
        ListResource::attach(move || {
            let crops = store.crops();
            async move { crops.list().await }
        })
    }

    /// All inventory items.
    pub fn inventory(&self) -> InventoryResource {
        InventoryResource::attach(self.store.clone())
    }

    /// All harvest records.
    pub fn harvests(&self) -> HarvestsResource {
        HarvestsResource::attach(self.store.clone())
    }

    /// All sales.
    pub fn sales(&self) -> SalesResource {
        let store = self.store.clone();
        ListResource::attach(move || {
            let sales = store.sales();
            async move { sales.list().await }
        })
    }

    /// All customers.
    pub fn customers(&self) -> CustomersResource {
        let store = self.store.clone();
        ListResource::attach(move || {
            let customers = store.customers();
            async move { customers.list().await }
        })
    }

    /// All marketplace listings.
    pub fn market_listings(&self) -> MarketListingsResource {
        let store = self.store.clone();
        ListResource::attach(move || {
            let listings = store.market_listings();
            async move { listings.list().await }
        })
    }

    /// All sensors.
    pub fn sensors(&self) -> SensorsResource {
        let store = self.store.clone();
        ListResource::attach(move || {
            let sensors = store.sensors();
            async move { sensors.list().await }
        })
    }

    /// All alerts.
    pub fn alerts(&self) -> AlertsResource {
        AlertsResource::attach(self.store.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agri_store::{SeedData, StoreConfig};
    use std::time::Duration;

    fn data() -> DataLayer {
        DataLayer::new(Store::new(StoreConfig::default(), SeedData::sample()))
    }

    #[tokio::test(start_paused = true)]
    async fn test_every_collection_loads() {
        let data = data();

        let crops = data.crops();
        let sales = data.sales();
        let customers = data.customers();
        let listings = data.market_listings();
        let sensors = data.sensors();

        assert!(crops.loading() && sales.loading() && sensors.loading());

        crops.settled().await;
        sales.settled().await;
        customers.settled().await;
        listings.settled().await;
        sensors.settled().await;

        assert_eq!(crops.items().len(), 5);
        assert_eq!(sales.items().len(), 1);
        assert_eq!(customers.items().len(), 1);
        assert_eq!(listings.items().len(), 1);
        assert_eq!(sensors.items().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_resources_share_the_store() {
        let data = data();
        let farmers = data.farmers();
        let detail = data.farmer(Some("2".to_string()));
        farmers.settled().await;
        detail.settled().await;

        farmers.delete_farmer("2").await.unwrap();
        assert_eq!(detail.refetch().await, FetchOutcome::Applied);
        assert!(detail.farmer().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_handle_stops_publishing() {
        let data = data();
        let alerts = data.alerts();
        let rx = alerts.subscribe();

        drop(alerts);
        tokio::time::sleep(Duration::from_secs(1)).await;

        assert!(rx.borrow().is_loading());
        assert_eq!(rx.borrow().data, None);
    }
}
