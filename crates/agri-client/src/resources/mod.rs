//! # Resource Handles
//!
//! One handle per collection, each wrapping a [`ListResource`] and, where
//! the collection is writable, the mutation helpers for it.
//!
//! ## Mutation Helpers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  farmers.update_farmer("2", patch)                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  store.farmers().update("2", patch).await                              │
//! │       │                                                                 │
//! │       ├── Err(e) ──► returned as is, list untouched, no refetch        │
//! │       │                                                                 │
//! │       └── Ok(farmer) ──► list.refetch().await ──► Ok(farmer)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

/// Forwards the read accessors of a handle to its `list` field.
macro_rules! list_accessors {
    ($item:ty) => {
        /// The fetched records, or an empty list while nothing is loaded.
        pub fn items(&self) -> Vec<$item> {
            self.list.items()
        }

        /// Returns true while a fetch is in flight.
        pub fn loading(&self) -> bool {
            self.list.loading()
        }

        /// Message of the last failed fetch.
        pub fn error(&self) -> Option<String> {
            self.list.error()
        }

        /// Clears the items and fetches them again.
        pub fn refetch(&self) -> $crate::fetch::PendingFetch {
            self.list.refetch()
        }

        /// Snapshot of the whole state.
        pub fn state(&self) -> $crate::fetch::FetchState<Vec<$item>> {
            self.list.state()
        }

        /// Receiver that sees every published state.
        pub fn subscribe(
            &self,
        ) -> tokio::sync::watch::Receiver<$crate::fetch::FetchState<Vec<$item>>> {
            self.list.subscribe()
        }

        /// Waits until the list is loaded.
        pub async fn settled(&self) -> $crate::fetch::FetchState<Vec<$item>> {
            self.list.settled().await
        }
    };
}

mod alerts;
mod farmers;
mod harvests;
mod inventory;
mod list;

pub use alerts::AlertsResource;
pub use farmers::{FarmerResource, FarmersResource};
pub use harvests::HarvestsResource;
pub use inventory::InventoryResource;
pub use list::ListResource;

use agri_core::{Crop, Customer, MarketListing, Sale, Sensor};

/// The crop catalog.
pub type CropsResource = ListResource<Crop>;

/// Recorded sales.
pub type SalesResource = ListResource<Sale>;

/// Customers.
pub type CustomersResource = ListResource<Customer>;

/// Marketplace listings, whatever their status.
pub type MarketListingsResource = ListResource<MarketListing>;

/// Installed field sensors.
pub type SensorsResource = ListResource<Sensor>;
