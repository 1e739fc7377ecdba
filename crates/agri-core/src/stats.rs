//! # Summary Statistics
//!
//! The figures shown on the summary cards above each management list.
//! All of them are computed over the full fetched list, not the current
//! page or search result.
//!
//! ```text
//! ┌──────────────┬──────────────┬──────────────┬──────────────┐
//! │ Farmers      │ Inventory    │ Harvests     │ Marketplace  │
//! │  total       │  items       │  quantity    │  active      │
//! │  active      │  in stock    │  value       │  value       │
//! │  acres       │  value       │  quality %   │  avg price   │
//! │  revenue     │  critical    │  this month  │  views       │
//! └──────────────┴──────────────┴──────────────┴──────────────┘
//! ```

use chrono::NaiveDate;
use serde::Serialize;

use crate::money::Money;
use crate::query::StockFilter;
use crate::types::{
    Alert, AlertSeverity, Farmer, HarvestRecord, InventoryItem, ListingStatus, MarketListing,
};

// =============================================================================
// Farmers
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmerSummary {
    pub total: usize,
    pub active: usize,
    pub total_acres: f64,
    /// Zero for an empty list.
    pub average_acres: f64,
    pub total_harvest: f64,
    pub total_revenue: Money,
}

impl FarmerSummary {
    pub fn from_farmers(farmers: &[Farmer]) -> Self {
        let total = farmers.len();
        let total_acres: f64 = farmers.iter().map(|f| f.farm_size).sum();

        FarmerSummary {
            total,
            active: farmers.iter().filter(|f| f.is_active()).count(),
            total_acres,
            average_acres: if total == 0 {
                0.0
            } else {
                total_acres / total as f64
            },
            total_harvest: farmers.iter().map(|f| f.total_harvest).sum(),
            total_revenue: farmers.iter().map(|f| f.revenue).sum(),
        }
    }
}

// =============================================================================
// Inventory
// =============================================================================

/// Badge shown next to an inventory item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StockLevel {
    Critical,
    Low,
    High,
    Normal,
}

impl StockLevel {
    /// Classifies an item. Critical wins over low, low over high.
    pub fn of(item: &InventoryItem) -> StockLevel {
        if StockFilter::Critical.admits(item) {
            StockLevel::Critical
        } else if StockFilter::Low.admits(item) {
            StockLevel::Low
        } else if StockFilter::High.admits(item) {
            StockLevel::High
        } else {
            StockLevel::Normal
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventorySummary {
    pub total_items: usize,
    /// Items with any stock on hand.
    pub in_stock: usize,
    /// Σ current stock × unit price.
    pub total_value: Money,
    pub critical: usize,
    pub low: usize,
}

impl InventorySummary {
    pub fn from_items(items: &[InventoryItem]) -> Self {
        InventorySummary {
            total_items: items.len(),
            in_stock: items.iter().filter(|i| i.current_stock > 0.0).count(),
            total_value: items.iter().map(InventoryItem::stock_value).sum(),
            critical: items
                .iter()
                .filter(|i| StockFilter::Critical.admits(i))
                .count(),
            low: items.iter().filter(|i| StockFilter::Low.admits(i)).count(),
        }
    }
}

// =============================================================================
// Harvests
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HarvestSummary {
    pub total_quantity: f64,
    /// Σ recorded total value.
    pub total_value: Money,
    /// Percentage of excellent or good harvests; `None` with no harvests.
    pub quality_rate: Option<f64>,
    pub this_month: usize,
}

impl HarvestSummary {
    /// Summarises `harvests`, counting "this month" relative to `today`.
    pub fn from_harvests(harvests: &[HarvestRecord], today: NaiveDate) -> Self {
        let premium = harvests.iter().filter(|h| h.quality.is_premium()).count();

        HarvestSummary {
            total_quantity: harvests.iter().map(|h| h.quantity).sum(),
            total_value: harvests.iter().map(|h| h.total_value).sum(),
            quality_rate: if harvests.is_empty() {
                None
            } else {
                Some(premium as f64 / harvests.len() as f64 * 100.0)
            },
            this_month: harvests.iter().filter(|h| h.in_month_of(today)).count(),
        }
    }
}

// =============================================================================
// Marketplace
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketSummary {
    pub active: usize,
    /// Σ quantity × unit price over every listing.
    pub total_value: Money,
    /// Mean unit price, rounded to the cent; `None` with no listings.
    pub average_price: Option<Money>,
    pub total_views: u64,
}

impl MarketSummary {
    pub fn from_listings(listings: &[MarketListing]) -> Self {
        let price_total: Money = listings.iter().map(|l| l.price_per_unit).sum();

        MarketSummary {
            active: listings
                .iter()
                .filter(|l| l.status == ListingStatus::Active)
                .count(),
            total_value: listings.iter().map(MarketListing::lot_value).sum(),
            average_price: if listings.is_empty() {
                None
            } else {
                let mean = price_total.cents() as f64 / listings.len() as f64;
                Some(Money::from_cents(mean.round() as i64))
            },
            total_views: listings.iter().map(|l| u64::from(l.views)).sum(),
        }
    }
}

// =============================================================================
// Alerts
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertSummary {
    /// Alerts not yet dismissed.
    pub open: usize,
    /// Open alerts that ask for action.
    pub action_required: usize,
    /// Open alerts at critical severity.
    pub critical: usize,
}

impl AlertSummary {
    pub fn from_alerts(alerts: &[Alert]) -> Self {
        let open: Vec<&Alert> = alerts.iter().filter(|a| a.is_open()).collect();

        AlertSummary {
            open: open.len(),
            action_required: open.iter().filter(|a| a.action_required).count(),
            critical: open
                .iter()
                .filter(|a| a.severity == AlertSeverity::Critical)
                .count(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
