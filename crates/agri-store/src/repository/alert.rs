//! # Alert Repository
//!
//! Store operations for dashboard alerts.
//!
//! ## Dismissal
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  dismiss("2")                                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Alert { dismissed_at: None }  ──►  Alert { dismissed_at: Some(now) }  │
//! │                                                                         │
//! │  The alert stays in the collection. Dismissing twice moves the         │
//! │  timestamp forward. A missing id is NotFound.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use tracing::debug;

use agri_core::{Alert, Record};

use crate::config::Operation;
use crate::error::{StoreError, StoreResult};
use crate::repository;
use crate::store::{Store, Stored};

/// Repository for alert operations.
#[derive(Debug, Clone)]
pub struct AlertRepository {
    store: Store,
}

impl AlertRepository {
    /// Creates a new AlertRepository.
    pub fn new(store: Store) -> Self {
        AlertRepository { store }
    }

    /// Lists every alert, dismissed ones included.
    pub async fn list(&self) -> Vec<Alert> {
        let alerts: Vec<Alert> = repository::list(&self.store).await;
        debug!(count = alerts.len(), "Listed alerts");
        alerts
    }

    /// Gets an alert by store id.
    pub async fn get_by_id(&self, id: &str) -> Option<Alert> {
        debug!(id = %id, "Getting alert");
        repository::get(&self.store, id).await
    }

    /// Marks an alert dismissed as of now and returns it.
    pub async fn dismiss(&self, id: &str) -> StoreResult<Alert> {
        self.store.pause(Operation::Dismiss).await;
        let mut data = self.store.write().await;

        let alert = Alert::table_mut(&mut data)
            .get_mut(id)
            .ok_or_else(|| StoreError::not_found(Alert::ENTITY, id))?;
        alert.dismiss(Utc::now());

        debug!(id = %id, "Dismissed alert");
        Ok(alert.clone())
    }

    /// Number of alerts.
    pub async fn count(&self) -> usize {
        repository::count::<Alert>(&self.store).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreConfig;
    use crate::seed::SeedData;

    fn repo() -> AlertRepository {
        Store::new(StoreConfig::instant(), SeedData::sample()).alerts()
    }

    #[tokio::test]
    async fn test_dismiss_sets_timestamp() {
        let repo = repo();
        let before = Utc::now();

        let alert = repo.dismiss("2").await.unwrap();
        let dismissed_at = alert.dismissed_at.unwrap();
        assert!(dismissed_at >= before);
        assert!(!alert.is_open());

        let stored = repo.get_by_id("2").await.unwrap();
        assert_eq!(stored.dismissed_at, Some(dismissed_at));
        assert!(repo.get_by_id("1").await.unwrap().is_open());
        assert_eq!(repo.count().await, 2);
    }

    #[tokio::test]
    async fn test_dismiss_missing_is_not_found() {
        let repo = repo();

        let err = repo.dismiss("404").await.unwrap_err();
        assert_eq!(err, StoreError::not_found("Alert", "404"));
        assert!(repo.list().await.iter().all(Alert::is_open));
    }
}
