//! Farmer list and single-farmer handles.

use tokio::sync::watch;
use tracing::debug;

use agri_core::{Farmer, FarmerPatch, NewFarmer};
use agri_store::{Store, StoreResult};

use crate::fetch::{fetcher, FetchState, PendingFetch, Resource};
use crate::resources::ListResource;

// =============================================================================
// Farmer List
// =============================================================================

/// All farmers, with create, update and delete.
pub struct FarmersResource {
    list: ListResource<Farmer>,
    store: Store,
}

impl FarmersResource {
    pub(crate) fn attach(store: Store) -> Self {
        let repo = store.clone();
        let list = ListResource::attach(move || {
            let farmers = repo.farmers();
            async move { farmers.list().await }
        });
        FarmersResource { list, store }
    }

    list_accessors!(Farmer);

    /// Creates a farmer, then refreshes the list.
    pub async fn create_farmer(&self, draft: NewFarmer) -> StoreResult<Farmer> {
        let farmer = self.store.farmers().create(draft).await?;
        self.list.refetch().await;
        Ok(farmer)
    }

    /// Updates a farmer, then refreshes the list.
    pub async fn update_farmer(&self, id: &str, patch: FarmerPatch) -> StoreResult<Farmer> {
        let farmer = self.store.farmers().update(id, patch).await?;
        self.list.refetch().await;
        Ok(farmer)
    }

    /// Deletes a farmer, then refreshes the list.
    pub async fn delete_farmer(&self, id: &str) -> StoreResult<()> {
        self.store.farmers().delete(id).await?;
        self.list.refetch().await;
        Ok(())
    }
}

// =============================================================================
// Single Farmer
// =============================================================================

/// One farmer by id.
///
/// With no id the read resolves to `None` without touching the store.
/// Changing the id fetches again and keeps the previous farmer visible
/// until the new one arrives.
///
/// ## Example
/// ```rust,ignore
/// let detail = data.farmer(Some("1".into()));
/// detail.settled().await;
///
/// detail.set_id(Some("2".into()));
/// ```
pub struct FarmerResource {
    resource: Resource<Option<String>, Option<Farmer>>,
}

impl FarmerResource {
    pub(crate) fn attach(store: Store, id: Option<String>) -> Self {
        let resource = Resource::new();
        resource.attach(
            id,
            fetcher(move |id: Option<String>| {
                let farmers = store.farmers();
                async move {
                    match id {
                        Some(id) => Ok(farmers.get_by_id(&id).await),
                        None => Ok(None),
                    }
                }
            }),
        );
        FarmerResource { resource }
    }

    /// The fetched farmer. `None` while loading, for no id, or for an
    /// unknown id.
    pub fn farmer(&self) -> Option<Farmer> {
        self.resource.state().data.flatten()
    }

    /// Returns true while a fetch is in flight.
    pub fn loading(&self) -> bool {
        self.resource.state().is_loading()
    }

    /// Message of the last failed fetch.
    pub fn error(&self) -> Option<String> {
        self.resource.state().error
    }

    /// Current id.
    pub fn id(&self) -> Option<String> {
        self.resource.params().flatten()
    }

    /// Switches to another farmer. Returns `None` if the id is unchanged.
    pub fn set_id(&self, id: Option<String>) -> Option<PendingFetch> {
        debug!(id = ?id, "Switching farmer");
        self.resource.set_params(id)
    }

    /// Clears the farmer and fetches again.
    pub fn refetch(&self) -> PendingFetch {
        self.resource.refetch()
    }

    /// Snapshot of the whole state.
    pub fn state(&self) -> FetchState<Option<Farmer>> {
        self.resource.state()
    }

    /// Receiver that sees every published state.
    pub fn subscribe(&self) -> watch::Receiver<FetchState<Option<Farmer>>> {
        self.resource.subscribe()
    }

    /// Waits until the farmer is loaded.
    pub async fn settled(&self) -> FetchState<Option<Farmer>> {
        self.resource.settled().await
    }
}

impl Drop for FarmerResource {
    fn drop(&mut self) {
        self.resource.detach();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::FetchStatus;
    use agri_core::{Address, Contact, FarmType, FarmerStatus, Money};
    use agri_store::{SeedData, StoreConfig, StoreError};
    use chrono::NaiveDate;
    use std::time::Duration;

    fn store() -> Store {
        Store::new(StoreConfig::instant(), SeedData::sample())
    }

    fn draft() -> NewFarmer {
        NewFarmer {
            name: "Kamal Fernando".to_string(),
            farmer_id: "CBF999".to_string(),
            address: Address {
                street: "5 Lake Road".to_string(),
                city: "Kurunegala".to_string(),
                district: "Kurunegala".to_string(),
                province: "North Western".to_string(),
                postal_code: "60000".to_string(),
                country: "Sri Lanka".to_string(),
            },
            contact: Contact::phone("+94 70 111 2222"),
            farm_size: 7.0,
            farm_type: FarmType::Mixed,
            join_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            status: FarmerStatus::Active,
            crops: Vec::new(),
            total_harvest: 0.0,
            revenue: Money::zero(),
            notes: None,
            avatar: None,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_list_loads_with_latency() {
        let store = Store::new(StoreConfig::default(), SeedData::sample());
        let farmers = FarmersResource::attach(store);

        assert!(farmers.loading());
        assert!(farmers.items().is_empty());

        let start = tokio::time::Instant::now();
        let state = farmers.settled().await;
        assert!(start.elapsed() >= Duration::from_millis(500));
        assert_eq!(state.status, FetchStatus::Ready);
        assert_eq!(farmers.items().len(), 3);
        assert_eq!(farmers.error(), None);
    }

    #[tokio::test]
    async fn test_create_refreshes_list() {
        let farmers = FarmersResource::attach(store());
        farmers.settled().await;

        let created = farmers.create_farmer(draft()).await.unwrap();

        let items = farmers.items();
        assert!(!farmers.loading());
        assert_eq!(items.len(), 4);
        assert_eq!(items[3].id, created.id);
    }

    #[tokio::test]
    async fn test_update_refreshes_list() {
        let farmers = FarmersResource::attach(store());
        farmers.settled().await;

        let patch = FarmerPatch {
            status: Some(FarmerStatus::Suspended),
            ..FarmerPatch::default()
        };
        farmers.update_farmer("2", patch).await.unwrap();

        let statuses: Vec<FarmerStatus> = farmers.items().iter().map(|f| f.status).collect();
        assert_eq!(
            statuses,
            vec![FarmerStatus::Active, FarmerStatus::Suspended, FarmerStatus::Active]
        );
    }

    #[tokio::test]
    async fn test_failed_mutation_skips_refetch() {
        let farmers = FarmersResource::attach(store());
        farmers.settled().await;
        let mut rx = farmers.subscribe();
        let _ = rx.borrow_and_update();

        let err = farmers.delete_farmer("404").await.unwrap_err();
        assert_eq!(err, StoreError::not_found("Farmer", "404"));

        assert!(!rx.has_changed().unwrap());
        assert_eq!(farmers.items().len(), 3);
    }

    #[tokio::test]
    async fn test_delete_refreshes_list() {
        let farmers = FarmersResource::attach(store());
        farmers.settled().await;

        farmers.delete_farmer("1").await.unwrap();

        let ids: Vec<String> = farmers.items().into_iter().map(|f| f.id).collect();
        assert_eq!(ids, vec!["2", "3"]);
    }

    #[tokio::test]
    async fn test_single_farmer_by_id() {
        let detail = FarmerResource::attach(store(), Some("3".to_string()));

        detail.settled().await;
        assert_eq!(detail.farmer().unwrap().name, "Lakshmi Perera");

        detail.set_id(Some("99".to_string())).unwrap().await;
        assert_eq!(detail.state().status, FetchStatus::Ready);
        assert!(detail.farmer().is_none());
    }

    #[tokio::test]
    async fn test_single_farmer_without_id() {
        let detail = FarmerResource::attach(store(), None);

        let state = detail.settled().await;
        assert_eq!(state.status, FetchStatus::Ready);
        assert_eq!(state.data, Some(None));
        assert!(detail.set_id(None).is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_single_farmer_keeps_previous_while_switching() {
        let store = Store::new(StoreConfig::default(), SeedData::sample());
        let detail = FarmerResource::attach(store, Some("1".to_string()));
        detail.settled().await;

        let pending = detail.set_id(Some("2".to_string())).unwrap();
        assert!(detail.loading());
        assert_eq!(detail.farmer().unwrap().id, "1");

        pending.await;
        assert_eq!(detail.farmer().unwrap().id, "2");
        assert_eq!(detail.id().as_deref(), Some("2"));
    }
}
