//! # Market Listing Repository
//!
//! Read access to marketplace listings, whatever their status. The market
//! page narrows to active listings itself.

use tracing::debug;

use agri_core::MarketListing;

use crate::repository;
use crate::store::Store;

/// Repository for marketplace listings.
#[derive(Debug, Clone)]
pub struct MarketListingRepository {
    store: Store,
}

impl MarketListingRepository {
    /// Creates a new MarketListingRepository.
    pub fn new(store: Store) -> Self {
        MarketListingRepository { store }
    }

    /// Lists every listing in collection order.
    pub async fn list(&self) -> Vec<MarketListing> {
        let listings: Vec<MarketListing> = repository::list(&self.store).await;
        debug!(count = listings.len(), "Listed listings");
        listings
    }

    /// Gets a listing by store id.
    pub async fn get_by_id(&self, id: &str) -> Option<MarketListing> {
        debug!(id = %id, "Getting listing");
        repository::get(&self.store, id).await
    }

    /// Number of listings.
    pub async fn count(&self) -> usize {
        repository::count::<MarketListing>(&self.store).await
    }
}
