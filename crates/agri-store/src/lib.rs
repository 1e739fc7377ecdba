//! # agri-store: In-Memory Store for the Agri Dashboard
//!
//! This crate owns every collection the dashboard reads and writes and is
//! the only code allowed to mutate them.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Agri Dashboard Data Flow                         │
//! │                                                                         │
//! │  Resource handle (agri-client)                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     agri-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │    Store      │    │  Repositories │    │    Seed      │  │   │
//! │  │   │  (store.rs)   │    │ (farmer.rs..) │    │  (seed.rs)   │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ RwLock        │    │ FarmerRepo    │    │ 3 farmers    │  │   │
//! │  │   │ Latency       │◄───│ InventoryRepo │    │ 5 crops      │  │   │
//! │  │   │ IdGenerator   │    │ AlertRepo ... │    │ ...          │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! │  Nothing is persisted. A new Store starts from its seed every time.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - The shared handle and its locking
//! - [`repository`] - One repository per collection
//! - [`config`] - Latency profile and id strategy
//! - [`ids`] - Id generators
//! - [`seed`] - Demo data
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use agri_store::{SeedData, Store, StoreConfig};
//!
//! let store = Store::new(StoreConfig::default(), SeedData::sample());
//!
//! let farmers = store.farmers().list().await;
//! let alert = store.alerts().dismiss("1").await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod ids;
pub mod repository;
pub mod seed;
pub mod store;
mod table;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{LatencyMode, LatencyProfile, Operation, StoreConfig};
pub use error::{StoreError, StoreResult};
pub use ids::{IdGenerator, IdStrategy, SequentialIds, UuidIds};
pub use seed::SeedData;
pub use store::Store;

// Repository re-exports for convenience
pub use repository::{
    AlertRepository, CropRepository, CustomerRepository, FarmerRepository, HarvestRepository,
    InventoryRepository, MarketListingRepository, SaleRepository, SensorRepository,
};
