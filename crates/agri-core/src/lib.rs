//! # agri-core: Pure Domain Logic for the Agri Dashboard
//!
//! Entity types, money, validation and the list pipeline, with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Agri Dashboard Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 apps/dashboard (composition root)               │   │
//! │  │      config ──► Store ──► DataLayer ──► overview report         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            agri-client (fetch state, resource handles)          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            agri-store (in-memory collections, latency)          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ agri-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌────────────┐ ┌─────────┐ ┌───────┐ │   │
//! │  │   │  types  │ │  money  │ │ validation │ │  query  │ │ stats │ │   │
//! │  │   └─────────┘ └─────────┘ └────────────┘ └─────────┘ └───────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO ASYNC • PURE FUNCTIONS                            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Farmers, crops, inventory, harvests, sales, market, sensors, alerts
//! - [`money`] - Money type with integer arithmetic
//! - [`error`] - Domain error types
//! - [`validation`] - Business rules checked by the store on write
//! - [`query`] - Search, filter, paginate and the list view
//! - [`stats`] - Summary card figures
//!
//! ## Example Usage
//!
//! ```rust
//! use std::num::NonZeroUsize;
//! use agri_core::query::paginate;
//! use agri_core::Money;
//!
//! let per_kg = Money::from_major(350);
//! assert_eq!(per_kg.multiply_quantity(125.5), Money::from_major(43_925));
//!
//! let page = paginate(&[1, 2, 3], NonZeroUsize::new(2).unwrap(), 2);
//! assert_eq!(page.items, vec![3]);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
#[macro_use]
pub mod types;
pub mod query;
pub mod stats;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Longest accepted free-text name (farmer, item, crop).
pub const MAX_NAME_LEN: usize = 200;

/// Longest accepted farmer business code.
pub const MAX_CODE_LEN: usize = 20;

/// Longest accepted search term.
pub const MAX_SEARCH_LEN: usize = 100;

/// Largest page a list view will render.
pub const MAX_PAGE_SIZE: usize = 100;

/// Page size of the management lists.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Page size of the marketplace grid.
pub const MARKET_PAGE_SIZE: usize = 12;
