//! # Domain Types
//!
//! Core domain types used throughout the agri dashboard.
//!
//! ## Type Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  WRITABLE (draft + patch)          READ-ONLY                            │
//! │  ┌─────────────────┐               ┌─────────────────┐                  │
//! │  │    Farmer       │──crops───────►│     Crop        │                  │
//! │  │  id / farmerId  │               └─────────────────┘                  │
//! │  └────────▲────────┘               ┌─────────────────┐                  │
//! │           │ farmer_id              │  Sale/Customer  │                  │
//! │  ┌────────┴────────┐               └─────────────────┘                  │
//! │  │ HarvestRecord   │               ┌─────────────────┐                  │
//! │  └─────────────────┘               │  MarketListing  │                  │
//! │  ┌─────────────────┐               └─────────────────┘                  │
//! │  │ InventoryItem   │               ┌─────────────────┐                  │
//! │  └─────────────────┘               │     Sensor      │                  │
//! │                                    └─────────────────┘                  │
//! │  DISMISS ONLY: Alert                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Every entity has:
//! - `id`: assigned by the store, immutable, used for references
//! - Business ID where one exists (`farmer_id` "CBF001", `invoice_number`)
//!
//! ## Weak References
//! Arrows above are ids resolved by lookup at read time. They are never
//! validated on write and never cascaded on delete, so a harvest whose
//! farmer was deleted is a valid record.

use std::fmt;
use std::str::FromStr;

pub use common::{Address, Contact};
pub use crop::{Crop, CropCategory, TemperatureRange, WaterRequirement};
pub use farmer::{FarmType, Farmer, FarmerField, FarmerPatch, FarmerStatus, NewFarmer};
pub use harvest::{
    HarvestField, HarvestPatch, HarvestQuality, HarvestRecord, HarvestStatus, NewHarvestRecord,
};
pub use inventory::{
    InventoryCategory, InventoryField, InventoryItem, InventoryPatch, NewInventoryItem,
    StockDirection, StockMovement,
};
pub use market::{ListingField, ListingQuality, ListingStatus, MarketListing};
pub use monitoring::{Alert, AlertSeverity, AlertType, Sensor, SensorStatus, SensorType};
pub use sales::{
    Customer, CustomerStatus, CustomerType, PaymentMethod, PaymentStatus, Sale, SaleItem,
};

use crate::error::CoreError;

// =============================================================================
// Record Traits
// =============================================================================

/// A value stored in one of the store's collections.
pub trait Record: Clone + Send + Sync + 'static {
    /// Entity name used in errors and log events ("Farmer", "Alert").
    const ENTITY: &'static str;

    /// Store-assigned identifier, unique within the collection.
    fn id(&self) -> &str;
}

/// A record the store can create from a draft and shallow-merge a patch into.
///
/// ## Lifecycle
/// ```text
/// Draft (no id) ──from_draft(id)──► Record ──apply_patch(patch)──► Record'
///                                     │                              │
///                                     └──── replaced in place ◄──────┘
/// ```
pub trait Writable: Record {
    /// Every field except `id`.
    type Draft: Send + 'static;

    /// Every field optional; `Some` overwrites, `None` keeps.
    type Patch: Send + 'static;

    /// Builds the record with a store-assigned id.
    fn from_draft(id: String, draft: Self::Draft) -> Self;

    /// Overwrites exactly the fields present in the patch.
    ///
    /// Nested values (address, contact) are replaced wholesale, never merged.
    fn apply_patch(&mut self, patch: Self::Patch);
}

// =============================================================================
// Labeled Enums
// =============================================================================

/// Declares a closed set of lowercase labels with `Display` and `FromStr`.
///
/// The labels must match the serde `snake_case` names so that a value read
/// from a dropdown, a config file or JSON all agree.
macro_rules! labeled_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident ($kind:literal) {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The wire label of this variant.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $label ),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.pad(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $( $label => Ok($name::$variant), )+
                    other => Err($crate::error::CoreError::unknown($kind, other)),
                }
            }
        }
    };
}

// Declared after the macro so every submodule can expand it.
mod common;
mod crop;
mod farmer;
mod harvest;
mod inventory;
mod market;
mod monitoring;
mod sales;

// =============================================================================
// Filter Sentinel
// =============================================================================

/// A dropdown selection: either the "all" sentinel or one concrete value.
///
/// ## Usage
/// ```rust
/// use agri_core::types::{FarmerStatus, Selection};
///
/// let any: Selection<FarmerStatus> = "all".parse().unwrap();
/// assert!(any.admits(&FarmerStatus::Suspended));
///
/// let active: Selection<FarmerStatus> = "active".parse().unwrap();
/// assert!(!active.admits(&FarmerStatus::Suspended));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<V> {
    /// Predicate disabled.
    All,
    /// Only records equal to this value pass.
    Only(V),
}

impl<V: PartialEq> Selection<V> {
    /// Returns true if the value passes this selection.
    pub fn admits(&self, value: &V) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => wanted == value,
        }
    }
}

impl<V> Default for Selection<V> {
    fn default() -> Self {
        Selection::All
    }
}

impl<V> Selection<V> {
    /// Returns true for the "all" sentinel.
    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }
}

impl<V> FromStr for Selection<V>
where
    V: FromStr<Err = CoreError>,
{
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Selection::All)
        } else {
            s.parse().map(Selection::Only)
        }
    }
}

impl<V: fmt::Display> fmt::Display for Selection<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => f.write_str("all"),
            Selection::Only(v) => v.fmt(f),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_parsing() {
        assert_eq!("all".parse::<Selection<FarmType>>().unwrap(), Selection::All);
        assert_eq!("ALL".parse::<Selection<FarmType>>().unwrap(), Selection::All);
        assert_eq!(
            "organic".parse::<Selection<FarmType>>().unwrap(),
            Selection::Only(FarmType::Organic)
        );
        assert!("hydroponic".parse::<Selection<FarmType>>().is_err());
    }

    #[test]
    fn test_selection_display_round_trips() {
        let sel = Selection::Only(HarvestStatus::Stored);
        assert_eq!(sel.to_string(), "stored");
        assert_eq!(Selection::<HarvestStatus>::All.to_string(), "all");
    }

    #[test]
    fn test_labels_match_serde_names() {
        for method in PaymentMethod::ALL {
            let json = serde_json::to_string(method).unwrap();
            assert_eq!(json, format!("\"{}\"", method.as_str()));
        }
        for kind in SensorType::ALL {
            let json = serde_json::to_string(kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }
}
