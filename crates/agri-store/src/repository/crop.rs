//! # Crop Repository
//!
//! Read access to the crop catalog. The catalog is fixed at seed time.

use tracing::debug;

use agri_core::Crop;

use crate::repository;
use crate::store::Store;

/// Repository for the crop catalog.
#[derive(Debug, Clone)]
pub struct CropRepository {
    store: Store,
}

impl CropRepository {
    /// Creates a new CropRepository.
    pub fn new(store: Store) -> Self {
        CropRepository { store }
    }

    /// Lists every crop in catalog order.
    pub async fn list(&self) -> Vec<Crop> {
        let crops: Vec<Crop> = repository::list(&self.store).await;
        debug!(count = crops.len(), "Listed crops");
        crops
    }

    /// Gets a crop by store id.
    pub async fn get_by_id(&self, id: &str) -> Option<Crop> {
        debug!(id = %id, "Getting crop");
        repository::get(&self.store, id).await
    }

    /// Number of crops.
    pub async fn count(&self) -> usize {
        repository::count::<Crop>(&self.store).await
    }
}
