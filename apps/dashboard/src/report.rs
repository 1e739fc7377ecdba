//! # Dashboard Overview
//!
//! Loads every collection through the data layer and condenses it into the
//! summary cards and the first page of each management list.
//!
//! ## Collection Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  DataLayer                                                              │
//! │     │  attach every resource (fetches run side by side)                │
//! │     ▼                                                                   │
//! │  settled() per resource ──► Failed? ──► AppError::Fetch               │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  stats::*Summary::from_*   (full lists)                                │
//! │  ListView::view            (search + filter + page 1)                  │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  Overview ──► Display (text) or serde_json (--json)                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info};

use agri_client::{DataLayer, FetchState, FetchStatus};
use agri_core::query::{
    FarmerFilter, HarvestFilter, InventoryFilter, ListView, ListingFilter, Page,
};
use agri_core::stats::{
    AlertSummary, FarmerSummary, HarvestSummary, InventorySummary, MarketSummary, StockLevel,
};
use agri_core::{
    Farmer, FarmerField, HarvestField, HarvestRecord, InventoryField, InventoryItem, ListingField,
    MarketListing,
};

use crate::config::ViewSettings;
use crate::error::{AppError, AppResult};

/// Everything the dashboard home shows.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    /// Day used for "this month" figures.
    pub today: NaiveDate,

    pub farmers: FarmerSummary,
    pub inventory: InventorySummary,
    pub harvests: HarvestSummary,
    pub market: MarketSummary,
    pub alerts: AlertSummary,

    pub crop_count: usize,
    pub sale_count: usize,
    pub customer_count: usize,
    pub sensor_count: usize,

    pub farmer_page: Page<Farmer>,
    pub inventory_page: Page<InventoryItem>,
    pub harvest_page: Page<HarvestRecord>,
    /// Active listings only, as the marketplace opens.
    pub listing_page: Page<MarketListing>,
}

/// Unwraps a settled list, turning the failed state into an error.
fn loaded<T>(resource: &'static str, state: FetchState<Vec<T>>) -> AppResult<Vec<T>> {
    match state.status {
        FetchStatus::Failed => Err(AppError::Fetch {
            resource,
            message: state.error.unwrap_or_default(),
        }),
        _ => {
            let items = state.data.unwrap_or_default();
            debug!(resource, count = items.len(), "Resource loaded");
            Ok(items)
        }
    }
}

impl Overview {
    /// Loads every collection and builds the overview.
    ///
    /// All resources are attached before the first wait, so the total time
    /// is the slowest list rather than the sum of all of them.
    pub async fn collect(
        data: &DataLayer,
        view: &ViewSettings,
        today: NaiveDate,
    ) -> AppResult<Self> {
        let farmers = data.farmers();
        let crops = data.crops();
        let inventory = data.inventory();
        let harvests = data.harvests();
        let sales = data.sales();
        let customers = data.customers();
        let listings = data.market_listings();
        let sensors = data.sensors();
        let alerts = data.alerts();

        let farmers = loaded("farmers", farmers.settled().await)?;
        let crops = loaded("crops", crops.settled().await)?;
        let inventory = loaded("inventory", inventory.settled().await)?;
        let harvests = loaded("harvests", harvests.settled().await)?;
        let sales = loaded("sales", sales.settled().await)?;
        let customers = loaded("customers", customers.settled().await)?;
        let listings = loaded("market listings", listings.settled().await)?;
        let sensors = loaded("sensors", sensors.settled().await)?;
        let alerts = loaded("alerts", alerts.settled().await)?;

        let mut farmer_view: ListView<Farmer, FarmerFilter> =
            ListView::new(FarmerField::DEFAULT, view.page_size());
        let mut inventory_view: ListView<InventoryItem, InventoryFilter> =
            ListView::new(InventoryField::DEFAULT, view.page_size());
        let mut harvest_view: ListView<HarvestRecord, HarvestFilter> =
            ListView::new(HarvestField::DEFAULT, view.page_size());
        let mut listing_view: ListView<MarketListing, ListingFilter> =
            ListView::new(ListingField::DEFAULT, view.market_page_size());

        let overview = Overview {
            today,
            farmers: FarmerSummary::from_farmers(&farmers),
            inventory: InventorySummary::from_items(&inventory),
            harvests: HarvestSummary::from_harvests(&harvests, today),
            market: MarketSummary::from_listings(&listings),
            alerts: AlertSummary::from_alerts(&alerts),
            crop_count: crops.len(),
            sale_count: sales.len(),
            customer_count: customers.len(),
            sensor_count: sensors.len(),
            farmer_page: farmer_view.view(&farmers),
            inventory_page: inventory_view.view(&inventory),
            harvest_page: harvest_view.view(&harvests),
            listing_page: listing_view.view(&listings),
        };

        info!(
            farmers = overview.farmers.total,
            inventory = overview.inventory.total_items,
            open_alerts = overview.alerts.open,
            "Overview collected"
        );
        Ok(overview)
    }

    /// Pretty-printed JSON, camelCase like the entity types.
    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

// =============================================================================
// Text Rendering
// =============================================================================

fn write_pager<T>(f: &mut fmt::Formatter<'_>, page: &Page<T>) -> fmt::Result {
    match page.showing() {
        Some((first, last)) => writeln!(
            f,
            "  Showing {} to {} of {} (page {} of {})",
            first, last, page.total_items, page.current_page, page.total_pages
        ),
        None => writeln!(f, "  No records"),
    }
}

impl fmt::Display for Overview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Agri Dashboard overview ({})", self.today)?;
        writeln!(f)?;

        let farmers = &self.farmers;
        writeln!(
            f,
            "Farmers: {} total, {} active, {:.1} acres (avg {:.1}), revenue {}",
            farmers.total,
            farmers.active,
            farmers.total_acres,
            farmers.average_acres,
            farmers.total_revenue
        )?;
        for farmer in &self.farmer_page.items {
            writeln!(
                f,
                "  {:<8} {:<24} {:<10} {:>7.1} ac",
                farmer.farmer_id, farmer.name, farmer.status, farmer.farm_size
            )?;
        }
        write_pager(f, &self.farmer_page)?;
        writeln!(f)?;

        let inventory = &self.inventory;
        writeln!(
            f,
            "Inventory: {} items, {} in stock, value {}, {} critical, {} low",
            inventory.total_items,
            inventory.in_stock,
            inventory.total_value,
            inventory.critical,
            inventory.low
        )?;
        for item in &self.inventory_page.items {
            let level = match StockLevel::of(item) {
                StockLevel::Critical => "critical",
                StockLevel::Low => "low",
                StockLevel::High => "high",
                StockLevel::Normal => "normal",
            };
            writeln!(
                f,
                "  {:<36} {:>9.1} {:<8} {}",
                item.name, item.current_stock, item.unit, level
            )?;
        }
        write_pager(f, &self.inventory_page)?;
        writeln!(f)?;

        let harvests = &self.harvests;
        let quality = harvests
            .quality_rate
            .map(|rate| format!("{rate:.0}%"))
            .unwrap_or_else(|| "n/a".to_string());
        writeln!(
            f,
            "Harvests: {:.1} harvested, value {}, quality {}, {} this month",
            harvests.total_quantity, harvests.total_value, quality, harvests.this_month
        )?;
        for record in &self.harvest_page.items {
            writeln!(
                f,
                "  {} {:<16} {:>8.1} {:<4} {:<10} {}",
                record.harvest_date,
                record.crop_name,
                record.quantity,
                record.unit,
                record.quality,
                record.total_value
            )?;
        }
        write_pager(f, &self.harvest_page)?;
        writeln!(f)?;

        let market = &self.market;
        let average = market
            .average_price
            .map(|price| price.to_string())
            .unwrap_or_else(|| "n/a".to_string());
        writeln!(
            f,
            "Marketplace: {} active, value {}, avg price {}, {} views",
            market.active, market.total_value, average, market.total_views
        )?;
        for listing in &self.listing_page.items {
            writeln!(
                f,
                "  {:<24} {:>8.1} {:<4} @ {} ({})",
                listing.crop_name,
                listing.quantity,
                listing.unit,
                listing.price_per_unit,
                listing.location
            )?;
        }
        write_pager(f, &self.listing_page)?;
        writeln!(f)?;

        writeln!(
            f,
            "Alerts: {} open, {} need action, {} critical",
            self.alerts.open, self.alerts.action_required, self.alerts.critical
        )?;
        writeln!(
            f,
            "Catalog: {} crops, {} sales, {} customers, {} sensors",
            self.crop_count, self.sale_count, self.customer_count, self.sensor_count
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use agri_core::Money;
    use agri_store::{SeedData, Store, StoreConfig};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 20).unwrap()
    }

    fn data(seed: SeedData) -> DataLayer {
        DataLayer::new(Store::new(StoreConfig::instant(), seed))
    }

    #[tokio::test]
    async fn test_overview_of_sample_data() {
        let overview = Overview::collect(&data(SeedData::sample()), &ViewSettings::default(), today())
            .await
            .unwrap();

        assert_eq!(overview.farmers.total, 3);
        assert_eq!(overview.inventory.total_items, 3);
        assert_eq!(overview.harvests.this_month, 2);
        assert_eq!(overview.market.active, 1);
        assert_eq!(overview.market.total_value, Money::from_cents(892_500));
        assert_eq!(overview.alerts.open, 2);
        assert_eq!(overview.crop_count, 5);
        assert_eq!(overview.sensor_count, 2);

        assert_eq!(overview.farmer_page.items.len(), 3);
        assert_eq!(overview.farmer_page.current_page, 1);
        assert!(!overview.farmer_page.has_next);
    }

    #[tokio::test]
    async fn test_page_size_applies() {
        let view = ViewSettings {
            page_size: 2,
            market_page_size: 12,
        };
        let overview = Overview::collect(&data(SeedData::sample()), &view, today())
            .await
            .unwrap();

        assert_eq!(overview.farmer_page.items.len(), 2);
        assert_eq!(overview.farmer_page.total_pages, 2);
        assert!(overview.farmer_page.has_next);
        assert_eq!(overview.inventory_page.showing(), Some((1, 2)));
    }

    #[tokio::test]
    async fn test_empty_store_renders() {
        let overview = Overview::collect(&data(SeedData::default()), &ViewSettings::default(), today())
            .await
            .unwrap();

        assert_eq!(overview.farmers.total, 0);
        assert_eq!(overview.farmer_page.total_pages, 0);

        let text = overview.to_string();
        assert!(text.contains("Farmers: 0 total"));
        assert!(text.contains("No records"));
        assert!(text.contains("quality n/a"));
    }

    #[tokio::test]
    async fn test_text_and_json_output() {
        let overview = Overview::collect(&data(SeedData::sample()), &ViewSettings::default(), today())
            .await
            .unwrap();

        let text = overview.to_string();
        assert!(text.contains("Priya Sharma"));
        assert!(text.contains("Showing 1 to 3 of 3"));
        assert!(text.contains("Alerts: 2 open"));

        let json: serde_json::Value = serde_json::from_str(&overview.to_json().unwrap()).unwrap();
        assert_eq!(json["farmers"]["total"], 3);
        assert_eq!(json["farmerPage"]["totalItems"], 3);
        assert_eq!(json["listingPage"]["items"][0]["cropName"], "Premium Ceylon Tea");
    }
}
