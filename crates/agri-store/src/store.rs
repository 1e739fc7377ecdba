//! # Store
//!
//! The owner of every in-memory collection.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                            Store                                        │
//! │                                                                         │
//! │  Composition root                                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Store::new(StoreConfig, SeedData) ← explicit, no global instance      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────┐                           │
//! │  │  Arc<StoreInner>                        │  clone = same collections │
//! │  │   ├── RwLock<Collections>               │                           │
//! │  │   │    farmers crops inventory ...      │                           │
//! │  │   ├── LatencyProfile                    │                           │
//! │  │   └── Arc<dyn IdGenerator>              │                           │
//! │  └─────────────────────────────────────────┘                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  store.farmers() / store.alerts() / ... ← one repository per collection│
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Locking
//! Every operation sleeps for its latency first and only then takes the
//! lock. Each mutation happens inside one lock acquisition, and the lock is
//! never held across any other await point. Two concurrent updates to the
//! same record are not isolated: the one that finishes last wins.

use std::fmt;
use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::info;

use agri_core::{
    Alert, Crop, Customer, Farmer, HarvestRecord, InventoryItem, MarketListing, Record, Sale,
    Sensor,
};

use crate::config::{LatencyProfile, Operation, StoreConfig};
use crate::error::{StoreError, StoreResult};
use crate::ids::IdGenerator;
use crate::repository::{
    AlertRepository, CropRepository, CustomerRepository, FarmerRepository, HarvestRepository,
    InventoryRepository, MarketListingRepository, SaleRepository, SensorRepository,
};
use crate::seed::SeedData;
use crate::table::Table;

// =============================================================================
// Collections
// =============================================================================

#[derive(Debug, Default)]
pub(crate) struct Collections {
    pub(crate) farmers: Table<Farmer>,
    pub(crate) crops: Table<Crop>,
    pub(crate) inventory: Table<InventoryItem>,
    pub(crate) harvests: Table<HarvestRecord>,
    pub(crate) sales: Table<Sale>,
    pub(crate) customers: Table<Customer>,
    pub(crate) listings: Table<MarketListing>,
    pub(crate) sensors: Table<Sensor>,
    pub(crate) alerts: Table<Alert>,
}

impl Collections {
    fn from_seed(seed: SeedData) -> Self {
        Collections {
            farmers: Table::from_rows(seed.farmers),
            crops: Table::from_rows(seed.crops),
            inventory: Table::from_rows(seed.inventory),
            harvests: Table::from_rows(seed.harvests),
            sales: Table::from_rows(seed.sales),
            customers: Table::from_rows(seed.customers),
            listings: Table::from_rows(seed.listings),
            sensors: Table::from_rows(seed.sensors),
            alerts: Table::from_rows(seed.alerts),
        }
    }
}

/// A record type with a home collection in the store.
pub(crate) trait Stored: Record {
    /// Latency class of listing this collection.
    const LIST_OP: Operation;

    fn table(data: &Collections) -> &Table<Self>;

    fn table_mut(data: &mut Collections) -> &mut Table<Self>;
}

macro_rules! stored {
    ($ty:ty, $field:ident, $op:expr) => {
        impl Stored for $ty {
            const LIST_OP: Operation = $op;

            fn table(data: &Collections) -> &Table<Self> {
                &data.$field
            }

            fn table_mut(data: &mut Collections) -> &mut Table<Self> {
                &mut data.$field
            }
        }
    };
}

stored!(Farmer, farmers, Operation::List);
stored!(Crop, crops, Operation::ListCatalog);
stored!(InventoryItem, inventory, Operation::List);
stored!(HarvestRecord, harvests, Operation::List);
stored!(Sale, sales, Operation::List);
stored!(Customer, customers, Operation::List);
stored!(MarketListing, listings, Operation::List);
stored!(Sensor, sensors, Operation::ListCatalog);
stored!(Alert, alerts, Operation::ListAlerts);

// =============================================================================
// Store
// =============================================================================

struct StoreInner {
    data: RwLock<Collections>,
    latency: LatencyProfile,
    ids: Arc<dyn IdGenerator>,
}

/// Handle to the in-memory collections.
///
/// Cheap to clone; every clone shares the same collections.
///
/// ## Usage
/// ```rust
/// use agri_store::{SeedData, Store, StoreConfig};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let store = Store::new(StoreConfig::instant(), SeedData::sample());
/// let farmers = store.farmers().list().await;
/// assert_eq!(farmers.len(), 3);
/// # }
/// ```
#[derive(Clone)]
pub struct Store {
    inner: Arc<StoreInner>,
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("latency", &self.inner.latency)
            .field("ids", &self.inner.ids)
            .finish_non_exhaustive()
    }
}

impl Store {
    /// Creates a store seeded with `seed`, using the id strategy from `config`.
    pub fn new(config: StoreConfig, seed: SeedData) -> Self {
        let ids = config.ids.generator();
        Store::with_id_generator(config, seed, ids)
    }

    /// Creates a store with an explicit id generator.
    pub fn with_id_generator(
        config: StoreConfig,
        seed: SeedData,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Store::with_latency(config.latency_profile(), seed, ids)
    }

    /// Creates a store with hand-tuned delays.
    pub fn with_latency(
        latency: LatencyProfile,
        seed: SeedData,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        let data = Collections::from_seed(seed);

        info!(
            farmers = data.farmers.len(),
            crops = data.crops.len(),
            inventory = data.inventory.len(),
            harvests = data.harvests.len(),
            sales = data.sales.len(),
            customers = data.customers.len(),
            listings = data.listings.len(),
            sensors = data.sensors.len(),
            alerts = data.alerts.len(),
            "Store initialized"
        );

        Store {
            inner: Arc::new(StoreInner {
                data: RwLock::new(data),
                latency,
                ids,
            }),
        }
    }

    /// Delays in effect for this store.
    pub fn latency(&self) -> &LatencyProfile {
        &self.inner.latency
    }

    /// Returns the farmer repository.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let farmer = store.farmers().get_by_id("1").await;
    /// ```
    pub fn farmers(&self) -> FarmerRepository {
        FarmerRepository::new(self.clone())
    }

    /// Returns the crop catalog repository.
    pub fn crops(&self) -> CropRepository {
        CropRepository::new(self.clone())
    }

    /// Returns the inventory repository.
    pub fn inventory(&self) -> InventoryRepository {
        InventoryRepository::new(self.clone())
    }

    /// Returns the harvest repository.
    pub fn harvests(&self) -> HarvestRepository {
        HarvestRepository::new(self.clone())
    }

    /// Returns the sales repository.
    pub fn sales(&self) -> SaleRepository {
        SaleRepository::new(self.clone())
    }

    /// Returns the customer repository.
    pub fn customers(&self) -> CustomerRepository {
        CustomerRepository::new(self.clone())
    }

    /// Returns the marketplace repository.
    pub fn market_listings(&self) -> MarketListingRepository {
        MarketListingRepository::new(self.clone())
    }

    /// Returns the sensor repository.
    pub fn sensors(&self) -> SensorRepository {
        SensorRepository::new(self.clone())
    }

    /// Returns the alert repository.
    pub fn alerts(&self) -> AlertRepository {
        AlertRepository::new(self.clone())
    }

    // -------------------------------------------------------------------------
    // Crate-internal access used by the repositories
    // -------------------------------------------------------------------------

    /// Sleeps for the artificial latency of `op`.
    pub(crate) async fn pause(&self, op: Operation) {
        let delay = self.inner.latency.delay(op);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    pub(crate) async fn read(&self) -> RwLockReadGuard<'_, Collections> {
        self.inner.data.read().await
    }

    pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, Collections> {
        self.inner.data.write().await
    }

    /// Draws ids until one is unused in `table`.
    ///
    /// A generator that never repeats yields a free id within
    /// `table.len() + 1` draws, however many taken ids lie ahead of it.
    /// Running past that bound means the generator repeats itself.
    pub(crate) fn fresh_id<T: Record>(&self, table: &Table<T>) -> StoreResult<String> {
        let attempts = table.len() + 1;
        for _ in 0..attempts {
            let id = self.inner.ids.next_id();
            if !table.contains(&id) {
                return Ok(id);
            }
        }

        Err(StoreError::Failure(format!(
            "id generator repeated itself: no free {} id after {} draws",
            T::ENTITY,
            attempts
        )))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
