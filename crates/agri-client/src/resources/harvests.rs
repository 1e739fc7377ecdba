//! Harvest list with recording.

use agri_core::{HarvestRecord, NewHarvestRecord};
use agri_store::{Store, StoreResult};

use crate::resources::ListResource;

/// All harvest records, with create.
pub struct HarvestsResource {
    list: ListResource<HarvestRecord>,
    store: Store,
}

impl HarvestsResource {
    pub(crate) fn attach(store: Store) -> Self {
        let repo = store.clone();
        let list = ListResource::attach(move || {
            let harvests = repo.harvests();
            async move { harvests.list().await }
        });
        HarvestsResource { list, store }
    }

    list_accessors!(HarvestRecord);

    /// Records a harvest, then refreshes the list.
    pub async fn create_harvest(&self, draft: NewHarvestRecord) -> StoreResult<HarvestRecord> {
        let harvest = self.store.harvests().create(draft).await?;
        self.list.refetch().await;
        Ok(harvest)
    }
}
