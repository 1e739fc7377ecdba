//! # Farmer Repository
//!
//! Store operations for farmers.
//!
//! ## Key Operations
//! - Full CRUD: list, get, create, update, delete
//! - Delete never cascades: harvests and listings that name the farmer stay
//!
//! ## Update Merge
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  update("2", FarmerPatch { status: Some(Suspended), ..default })       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌──────┬────────────────┬───────────┐                                  │
//! │  │ "1"  │ Priya Sharma   │ active    │                                  │
//! │  │ "2"  │ Rajesh Kumar   │ suspended │ ← replaced in place              │
//! │  │ "3"  │ Lakshmi Perera │ active    │                                  │
//! │  └──────┴────────────────┴───────────┘                                  │
//! │                                                                         │
//! │  Every other field of "2" is unchanged. Order is unchanged.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use agri_core::{Farmer, FarmerPatch, NewFarmer};

use crate::error::StoreResult;
use crate::repository;
use crate::store::Store;

/// Repository for farmer operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = store.farmers();
///
/// let farmers = repo.list().await;
/// let farmer = repo.get_by_id("1").await;
/// let created = repo.create(draft).await?;
/// ```
#[derive(Debug, Clone)]
pub struct FarmerRepository {
    store: Store,
}

impl FarmerRepository {
    /// Creates a new FarmerRepository.
    pub fn new(store: Store) -> Self {
        FarmerRepository { store }
    }

    /// Lists every farmer in collection order.
    pub async fn list(&self) -> Vec<Farmer> {
        let farmers: Vec<Farmer> = repository::list(&self.store).await;
        debug!(count = farmers.len(), "Listed farmers");
        farmers
    }

    /// Gets a farmer by store id.
    pub async fn get_by_id(&self, id: &str) -> Option<Farmer> {
        debug!(id = %id, "Getting farmer");
        repository::get(&self.store, id).await
    }

    /// Creates a farmer under a fresh id.
    ///
    /// ## Arguments
    /// * `draft` - Every field except `id`
    ///
    /// ## Example
    /// ```rust,ignore
    /// let farmer = repo.create(NewFarmer { farmer_id: "CBF999".into(), ..draft }).await?;
    /// assert_eq!(repo.count().await, 4);
    /// ```
    pub async fn create(&self, draft: NewFarmer) -> StoreResult<Farmer> {
        let farmer: Farmer = repository::create(&self.store, draft).await?;
        debug!(id = %farmer.id, code = %farmer.farmer_id, "Created farmer");
        Ok(farmer)
    }

    /// Overwrites the fields present in `patch`.
    pub async fn update(&self, id: &str, patch: FarmerPatch) -> StoreResult<Farmer> {
        let farmer: Farmer = repository::update(&self.store, id, patch).await?;
        debug!(id = %id, "Updated farmer");
        Ok(farmer)
    }

    /// Removes a farmer.
    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        repository::delete::<Farmer>(&self.store, id).await?;
        debug!(id = %id, "Deleted farmer");
        Ok(())
    }

    /// Number of farmers.
    pub async fn count(&self) -> usize {
        repository::count::<Farmer>(&self.store).await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LatencyProfile, Operation, StoreConfig};
    use crate::error::StoreError;
    use crate::ids::SequentialIds;
    use crate::seed::SeedData;
    use std::sync::Arc;
    use std::time::Duration;
    use agri_core::{
        Address, Contact, FarmType, FarmerStatus, HarvestRecord, Money, ValidationError, Writable,
    };
    use chrono::NaiveDate;

    fn store() -> Store {
        Store::new(StoreConfig::instant(), SeedData::sample())
    }

    fn draft(code: &str) -> NewFarmer {
        NewFarmer {
            name: "Nimal Silva".to_string(),
            farmer_id: code.to_string(),
            address: Address {
                street: "1 Hill Road".to_string(),
                city: "Nuwara Eliya".to_string(),
                district: "Nuwara Eliya".to_string(),
                province: "Central".to_string(),
                postal_code: "22200".to_string(),
                country: "Sri Lanka".to_string(),
            },
            contact: Contact::phone("+94 77 000 0000"),
            farm_size: 4.5,
            farm_type: FarmType::Organic,
            join_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            status: FarmerStatus::Active,
            crops: vec!["1".to_string()],
            total_harvest: 0.0,
            revenue: Money::zero(),
            notes: None,
            avatar: None,
        }
    }

    fn ids(farmers: &[Farmer]) -> Vec<&str> {
        farmers.iter().map(|f| f.id.as_str()).collect()
    }

    #[tokio::test]
    async fn test_update_changes_only_target() {
        let repo = store().farmers();
        let before = repo.list().await;

        let patch = FarmerPatch {
            status: Some(FarmerStatus::Suspended),
            ..FarmerPatch::default()
        };
        let updated = repo.update("2", patch).await.unwrap();
        assert_eq!(updated.status, FarmerStatus::Suspended);

        let after = repo.list().await;
        assert_eq!(ids(&after), vec!["1", "2", "3"]);
        assert_eq!(after[0], before[0]);
        assert_eq!(after[2], before[2]);

        let mut expected = before[1].clone();
        expected.status = FarmerStatus::Suspended;
        assert_eq!(after[1], expected);
    }

    #[tokio::test]
    async fn test_create_appends_with_fresh_id() {
        let repo = store().farmers();

        let created = repo.create(draft("CBF999")).await.unwrap();
        assert!(!["1", "2", "3"].contains(&created.id.as_str()));

        let all = repo.list().await;
        assert_eq!(all.len(), 4);
        assert_eq!(all[3].farmer_id, "CBF999");
        assert_eq!(all[3].id, created.id);
    }

    #[tokio::test]
    async fn test_create_after_a_thousand_seeded_farmers() {
        let template = SeedData::sample().farmers[0].clone();
        let seeded: Vec<Farmer> = (1..=1_000)
            .map(|n| Farmer {
                id: n.to_string(),
                farmer_id: format!("CBF{n:04}"),
                ..template.clone()
            })
            .collect();
        let repo = Store::new(
            StoreConfig::instant(),
            SeedData::sample().with_farmers(seeded),
        )
        .farmers();

        let created = repo.create(draft("CBF999")).await.unwrap();
        assert_eq!(created.id, "1001");
        assert_eq!(repo.count().await, 1_001);
    }

    #[tokio::test(start_paused = true)]
    async fn test_later_completing_update_wins() {
        let latency = LatencyProfile::instant().with(Operation::Update, Duration::from_millis(100));
        let repo = Store::with_latency(
            latency,
            SeedData::sample(),
            Arc::new(SequentialIds::default()),
        )
        .farmers();

        let suspend = FarmerPatch {
            status: Some(FarmerStatus::Suspended),
            ..FarmerPatch::default()
        };
        let deactivate = FarmerPatch {
            status: Some(FarmerStatus::Inactive),
            ..FarmerPatch::default()
        };

        let (first, second) = tokio::join!(repo.update("2", suspend), async {
            tokio::time::sleep(Duration::from_millis(50)).await;
            repo.update("2", deactivate).await
        });

        assert_eq!(first.unwrap().status, FarmerStatus::Suspended);
        assert_eq!(second.unwrap().status, FarmerStatus::Inactive);
        assert_eq!(
            repo.get_by_id("2").await.unwrap().status,
            FarmerStatus::Inactive
        );
        assert_eq!(repo.count().await, 3);
    }

    #[tokio::test]
    async fn test_create_then_get_round_trips() {
        let repo = store().farmers();

        let created = repo.create(draft("CBF100")).await.unwrap();
        let fetched = repo.get_by_id(&created.id).await.unwrap();

        assert_eq!(fetched, Farmer::from_draft(created.id.clone(), draft("CBF100")));
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_draft() {
        let repo = store().farmers();

        let err = repo.create(draft("CBF 100")).await.unwrap_err();
        assert!(matches!(
            err,
            StoreError::Validation(ValidationError::InvalidFormat { .. })
        ));
        assert_eq!(repo.count().await, 3);
    }

    #[tokio::test]
    async fn test_update_rejects_invalid_merge() {
        let repo = store().farmers();

        let patch = FarmerPatch {
            farm_size: Some(-1.0),
            ..FarmerPatch::default()
        };
        let err = repo.update("1", patch).await.unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        assert_eq!(repo.get_by_id("1").await.unwrap().farm_size, 25.5);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let repo = store().farmers();
        let err = repo.update("99", FarmerPatch::default()).await.unwrap_err();
        assert_eq!(err, StoreError::not_found("Farmer", "99"));
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one() {
        let repo = store().farmers();

        repo.delete("2").await.unwrap();
        assert_eq!(ids(&repo.list().await), vec!["1", "3"]);
    }

    #[tokio::test]
    async fn test_delete_missing_leaves_list_unchanged() {
        let repo = store().farmers();
        let before = repo.list().await;

        let err = repo.delete("42").await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(repo.list().await, before);
    }

    #[tokio::test]
    async fn test_delete_does_not_cascade() {
        let store = store();

        store.farmers().delete("1").await.unwrap();

        let harvests: Vec<HarvestRecord> = store.harvests().list().await;
        assert!(harvests.iter().any(|h| h.farmer_id == "1"));
    }

    #[tokio::test]
    async fn test_list_and_get_hand_out_copies() {
        let repo = store().farmers();

        let mut listed = repo.list().await;
        listed[0].name = "Changed".to_string();
        let mut fetched = repo.get_by_id("1").await.unwrap();
        fetched.farm_size = 0.0;

        let stored = repo.get_by_id("1").await.unwrap();
        assert_eq!(stored.name, "Priya Sharma");
        assert_eq!(stored.farm_size, 25.5);
    }

    #[tokio::test]
    async fn test_get_missing_is_none() {
        assert!(store().farmers().get_by_id("nope").await.is_none());
    }
}
