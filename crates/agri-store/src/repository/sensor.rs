//! # Sensor Repository
//!
//! Read access to installed field sensors.

use tracing::debug;

use agri_core::Sensor;

use crate::repository;
use crate::store::Store;

/// Repository for field sensors.
#[derive(Debug, Clone)]
pub struct SensorRepository {
    store: Store,
}

impl SensorRepository {
    /// Creates a new SensorRepository.
    pub fn new(store: Store) -> Self {
        SensorRepository { store }
    }

    /// Lists every sensor in collection order.
    pub async fn list(&self) -> Vec<Sensor> {
        let sensors: Vec<Sensor> = repository::list(&self.store).await;
        debug!(count = sensors.len(), "Listed sensors");
        sensors
    }

    /// Gets a sensor by store id.
    pub async fn get_by_id(&self, id: &str) -> Option<Sensor> {
        debug!(id = %id, "Getting sensor");
        repository::get(&self.store, id).await
    }

    /// Number of sensors.
    pub async fn count(&self) -> usize {
        repository::count::<Sensor>(&self.store).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreConfig;
    use crate::seed::SeedData;
    use agri_core::SensorType;

    #[tokio::test]
    async fn test_sensors_by_id() {
        let repo = Store::new(StoreConfig::instant(), SeedData::sample()).sensors();

        assert_eq!(repo.count().await, 2);
        let soil = repo.get_by_id("2").await.unwrap();
        assert_eq!(soil.kind, SensorType::SoilMoisture);
        assert!(!soil.battery_low(20));
    }
}
