//! # Harvest Repository
//!
//! Store operations for harvest records.
//!
//! `farmer_id` and `crop_plan_id` are weak references. A harvest may name a
//! farmer that no longer exists.

use tracing::debug;

use agri_core::{HarvestPatch, HarvestRecord, NewHarvestRecord};

use crate::error::StoreResult;
use crate::repository;
use crate::store::Store;

/// Repository for harvest operations.
#[derive(Debug, Clone)]
pub struct HarvestRepository {
    store: Store,
}

impl HarvestRepository {
    /// Creates a new HarvestRepository.
    pub fn new(store: Store) -> Self {
        HarvestRepository { store }
    }

    /// Lists every harvest in collection order.
    pub async fn list(&self) -> Vec<HarvestRecord> {
        let harvests: Vec<HarvestRecord> = repository::list(&self.store).await;
        debug!(count = harvests.len(), "Listed harvests");
        harvests
    }

    /// Gets a harvest by store id.
    pub async fn get_by_id(&self, id: &str) -> Option<HarvestRecord> {
        debug!(id = %id, "Getting harvest");
        repository::get(&self.store, id).await
    }

    /// Records a harvest under a fresh id.
    ///
    /// `total_value` is stored as given. Use
    /// [`NewHarvestRecord::with_computed_total`] to derive it first.
    pub async fn create(&self, draft: NewHarvestRecord) -> StoreResult<HarvestRecord> {
        let harvest: HarvestRecord = repository::create(&self.store, draft).await?;
        debug!(id = %harvest.id, crop = %harvest.crop_name, "Recorded harvest");
        Ok(harvest)
    }

    /// Overwrites the fields present in `patch`.
    pub async fn update(&self, id: &str, patch: HarvestPatch) -> StoreResult<HarvestRecord> {
        let harvest: HarvestRecord = repository::update(&self.store, id, patch).await?;
        debug!(id = %id, status = %harvest.status, "Updated harvest");
        Ok(harvest)
    }

    /// Number of harvests.
    pub async fn count(&self) -> usize {
        repository::count::<HarvestRecord>(&self.store).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreConfig;
    use crate::error::StoreError;
    use crate::seed::SeedData;
    use agri_core::{HarvestQuality, HarvestStatus, Money, ValidationError};
    use chrono::NaiveDate;

    fn store() -> Store {
        Store::new(StoreConfig::instant(), SeedData::sample())
    }

    fn draft() -> NewHarvestRecord {
        NewHarvestRecord {
            farmer_id: "3".to_string(),
            crop_plan_id: "cp3".to_string(),
            crop_name: "King Coconut".to_string(),
            harvest_date: NaiveDate::from_ymd_opt(2024, 2, 2).unwrap(),
            quantity: 400.0,
            unit: "nuts".to_string(),
            quality: HarvestQuality::Good,
            moisture_content: None,
            grade: None,
            price_per_unit: Money::from_cents(8_550),
            total_value: Money::zero(),
            storage_location: "Farm Store".to_string(),
            status: HarvestStatus::Harvested,
            notes: None,
        }
        .with_computed_total()
    }

    #[tokio::test]
    async fn test_create_keeps_total() {
        let repo = store().harvests();

        let created = repo.create(draft()).await.unwrap();
        assert_eq!(created.total_value, Money::from_major(34_200));

        let fetched = repo.get_by_id(&created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(repo.count().await, 3);
    }

    #[tokio::test]
    async fn test_create_allows_unknown_farmer() {
        let repo = store().harvests();

        let mut orphan = draft();
        orphan.farmer_id = "999".to_string();
        assert!(repo.create(orphan).await.is_ok());
    }

    #[tokio::test]
    async fn test_create_rejects_bad_moisture() {
        let repo = store().harvests();

        let mut wet = draft();
        wet.moisture_content = Some(140.0);
        let err = repo.create(wet).await.unwrap_err();
        assert!(matches!(
            err,
            StoreError::Validation(ValidationError::OutOfRange { .. })
        ));
        assert_eq!(repo.count().await, 2);
    }

    #[tokio::test]
    async fn test_update_status() {
        let repo = store().harvests();

        let patch = HarvestPatch {
            status: Some(HarvestStatus::Sold),
            ..HarvestPatch::default()
        };
        let harvest = repo.update("1", patch).await.unwrap();
        assert_eq!(harvest.status, HarvestStatus::Sold);
        assert_eq!(harvest.grade.as_deref(), Some("A+"));
    }
}
