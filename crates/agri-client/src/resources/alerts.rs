//! Alert list with dismissal.

use tracing::debug;

use agri_core::Alert;
use agri_store::{Store, StoreResult};

use crate::resources::ListResource;

/// All alerts, with dismiss.
///
/// Dismissed alerts stay in the list with `dismissed_at` set. Use
/// [`Alert::is_open`] to hide them.
pub struct AlertsResource {
    list: ListResource<Alert>,
    store: Store,
}

impl AlertsResource {
    pub(crate) fn attach(store: Store) -> Self {
        let repo = store.clone();
        let list = ListResource::attach(move || {
            let alerts = repo.alerts();
            async move { alerts.list().await }
        });
        AlertsResource { list, store }
    }

    list_accessors!(Alert);

    /// Alerts that are not dismissed, in list order.
    pub fn open(&self) -> Vec<Alert> {
        self.items().into_iter().filter(Alert::is_open).collect()
    }

    /// Dismisses an alert, then refreshes the list.
    pub async fn dismiss_alert(&self, id: &str) -> StoreResult<Alert> {
        let alert = self.store.alerts().dismiss(id).await?;
        debug!(id = %id, "Alert dismissed from dashboard");
        self.list.refetch().await;
        Ok(alert)
    }
}
