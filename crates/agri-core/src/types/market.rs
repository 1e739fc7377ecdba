//! Marketplace listings. Read-only.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::Record;
use crate::money::Money;
use crate::query::Searchable;

labeled_enum! {
    /// Quality a listing is offered at. There is no "poor" grade on the market.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
    #[ts(export)]
    #[serde(rename_all = "snake_case")]
    pub enum ListingQuality("listing quality") {
        Excellent => "excellent",
        Good => "good",
        Average => "average",
    }
}

labeled_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
    #[ts(export)]
    #[serde(rename_all = "snake_case")]
    pub enum ListingStatus("listing status") {
        Active => "active",
        Sold => "sold",
        Expired => "expired",
        Withdrawn => "withdrawn",
    }
}

/// Produce offered on the marketplace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MarketListing {
    pub id: String,
    /// Weak reference to a farmer id.
    pub farmer_id: String,
    /// Weak reference to a harvest id.
    pub harvest_id: String,
    pub crop_name: String,
    pub quantity: f64,
    pub unit: String,
    pub price_per_unit: Money,
    pub min_order_quantity: f64,
    pub quality: ListingQuality,
    #[ts(as = "String")]
    pub harvest_date: NaiveDate,
    #[ts(as = "String")]
    pub available_from: NaiveDate,
    pub description: String,
    pub images: Vec<String>,
    pub location: String,
    pub status: ListingStatus,
    #[ts(as = "String")]
    pub created_at: NaiveDate,
    pub views: u32,
    pub inquiries: u32,
}

impl MarketListing {
    /// Value of the whole lot at the asking price.
    pub fn lot_value(&self) -> Money {
        self.price_per_unit.multiply_quantity(self.quantity)
    }

    pub fn is_active(&self) -> bool {
        self.status == ListingStatus::Active
    }
}

impl Record for MarketListing {
    const ENTITY: &'static str = "MarketListing";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Listing fields the marketplace can search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingField {
    CropName,
    Location,
    Description,
}

impl ListingField {
    /// Fields searched by the marketplace search box.
    pub const DEFAULT: &'static [ListingField] = &[
        ListingField::CropName,
        ListingField::Location,
        ListingField::Description,
    ];
}

impl Searchable for MarketListing {
    type Field = ListingField;

    fn field_text(&self, field: ListingField) -> Option<String> {
        match field {
            ListingField::CropName => Some(self.crop_name.clone()),
            ListingField::Location => Some(self.location.clone()),
            ListingField::Description => Some(self.description.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_market_quality_has_no_poor_grade() {
        assert!("poor".parse::<ListingQuality>().is_err());
        assert_eq!(ListingQuality::ALL.len(), 3);
    }
}
