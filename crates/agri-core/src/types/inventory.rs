//! Inventory items (seeds, fertilizer, tools) and stock movements.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{Record, Writable};
use crate::error::ValidationError;
use crate::money::Money;
use crate::query::Searchable;

labeled_enum! {
    /// What kind of input an item is.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
    #[ts(export)]
    #[serde(rename_all = "snake_case")]
    pub enum InventoryCategory("inventory category") {
        Seeds => "seeds",
        Fertilizer => "fertilizer",
        Pesticide => "pesticide",
        Equipment => "equipment",
        Tools => "tools",
        Other => "other",
    }
}

/// A stocked farm input.
///
/// `min_stock_level` and `max_stock_level` are advisory. The store never
/// enforces them; they only drive the stock-level badges and filters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    pub category: InventoryCategory,
    #[serde(default)]
    pub brand: Option<String>,
    /// Unit of measure ("kg", "packet", "liter").
    pub unit: String,
    pub current_stock: f64,
    pub min_stock_level: f64,
    pub max_stock_level: f64,
    pub price_per_unit: Money,
    pub supplier: String,
    #[ts(as = "String")]
    pub last_restocked: NaiveDate,
    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub expiry_date: Option<NaiveDate>,
    pub location: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl InventoryItem {
    /// Current stock as a percentage of the maximum level.
    ///
    /// `None` when no positive maximum is configured.
    pub fn stock_percent(&self) -> Option<f64> {
        if self.max_stock_level > 0.0 {
            Some(self.current_stock / self.max_stock_level * 100.0)
        } else {
            None
        }
    }

    /// Value of the stock on hand.
    pub fn stock_value(&self) -> Money {
        self.price_per_unit.multiply_quantity(self.current_stock)
    }

    /// Returns true if the item expires on or before `today`.
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.expiry_date.map_or(false, |expiry| expiry <= today)
    }
}

/// Fields for a new inventory item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewInventoryItem {
    pub name: String,
    pub category: InventoryCategory,
    #[serde(default)]
    pub brand: Option<String>,
    pub unit: String,
    pub current_stock: f64,
    pub min_stock_level: f64,
    pub max_stock_level: f64,
    pub price_per_unit: Money,
    pub supplier: String,
    #[ts(as = "String")]
    pub last_restocked: NaiveDate,
    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub expiry_date: Option<NaiveDate>,
    pub location: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// Partial update for an inventory item.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct InventoryPatch {
    pub name: Option<String>,
    pub category: Option<InventoryCategory>,
    pub brand: Option<String>,
    pub unit: Option<String>,
    pub current_stock: Option<f64>,
    pub min_stock_level: Option<f64>,
    pub max_stock_level: Option<f64>,
    pub price_per_unit: Option<Money>,
    pub supplier: Option<String>,
    #[ts(as = "Option<String>")]
    pub last_restocked: Option<NaiveDate>,
    #[ts(as = "Option<String>")]
    pub expiry_date: Option<NaiveDate>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl Record for InventoryItem {
    const ENTITY: &'static str = "InventoryItem";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Writable for InventoryItem {
    type Draft = NewInventoryItem;
    type Patch = InventoryPatch;

    fn from_draft(id: String, draft: NewInventoryItem) -> Self {
        InventoryItem {
            id,
            name: draft.name,
            category: draft.category,
            brand: draft.brand,
            unit: draft.unit,
            current_stock: draft.current_stock,
            min_stock_level: draft.min_stock_level,
            max_stock_level: draft.max_stock_level,
            price_per_unit: draft.price_per_unit,
            supplier: draft.supplier,
            last_restocked: draft.last_restocked,
            expiry_date: draft.expiry_date,
            location: draft.location,
            description: draft.description,
            image: draft.image,
        }
    }

    fn apply_patch(&mut self, patch: InventoryPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if patch.brand.is_some() {
            self.brand = patch.brand;
        }
        if let Some(unit) = patch.unit {
            self.unit = unit;
        }
        if let Some(current_stock) = patch.current_stock {
            self.current_stock = current_stock;
        }
        if let Some(min) = patch.min_stock_level {
            self.min_stock_level = min;
        }
        if let Some(max) = patch.max_stock_level {
            self.max_stock_level = max;
        }
        if let Some(price) = patch.price_per_unit {
            self.price_per_unit = price;
        }
        if let Some(supplier) = patch.supplier {
            self.supplier = supplier;
        }
        if let Some(last_restocked) = patch.last_restocked {
            self.last_restocked = last_restocked;
        }
        if patch.expiry_date.is_some() {
            self.expiry_date = patch.expiry_date;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if patch.description.is_some() {
            self.description = patch.description;
        }
        if patch.image.is_some() {
            self.image = patch.image;
        }
    }
}

// =============================================================================
// Stock Movements
// =============================================================================

labeled_enum! {
    /// Direction of a stock movement.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
    #[ts(export)]
    #[serde(rename_all = "snake_case")]
    pub enum StockDirection("stock direction") {
        In => "in",
        Out => "out",
    }
}

/// A stock-in or stock-out recorded from the inventory page.
///
/// ## Flow
/// ```text
/// StockMovement { Out, 60 } + item (45 liters)
///      │
///      ├── quantity <= 0 ───────► MustBePositive
///      ├── 45 - 60 < 0 ─────────► BelowZero
///      └── otherwise ───────────► InventoryPatch { current_stock, last_restocked? }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StockMovement {
    pub direction: StockDirection,
    pub quantity: f64,
}

impl StockMovement {
    /// A stock-in of `quantity` units.
    pub fn stock_in(quantity: f64) -> Self {
        StockMovement {
            direction: StockDirection::In,
            quantity,
        }
    }

    /// A stock-out of `quantity` units.
    pub fn stock_out(quantity: f64) -> Self {
        StockMovement {
            direction: StockDirection::Out,
            quantity,
        }
    }

    /// Computes the patch that records this movement against `item`.
    ///
    /// A stock-in also stamps `last_restocked` with `today`.
    pub fn patch_for(
        &self,
        item: &InventoryItem,
        today: NaiveDate,
    ) -> Result<InventoryPatch, ValidationError> {
        if !self.quantity.is_finite() || self.quantity <= 0.0 {
            return Err(ValidationError::MustBePositive {
                field: "quantity".to_string(),
            });
        }

        match self.direction {
            StockDirection::In => Ok(InventoryPatch {
                current_stock: Some(item.current_stock + self.quantity),
                last_restocked: Some(today),
                ..Default::default()
            }),
            StockDirection::Out => {
                let remaining = item.current_stock - self.quantity;
                if remaining < 0.0 {
                    return Err(ValidationError::BelowZero {
                        available: item.current_stock,
                        requested: self.quantity,
                    });
                }
                Ok(InventoryPatch {
                    current_stock: Some(remaining),
                    ..Default::default()
                })
            }
        }
    }
}

// =============================================================================
// Search Fields
// =============================================================================

/// Inventory fields the inventory page can search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InventoryField {
    Name,
    Brand,
    Supplier,
    Location,
    Description,
}

impl InventoryField {
    /// Fields searched by the inventory search box.
    pub const DEFAULT: &'static [InventoryField] = &[
        InventoryField::Name,
        InventoryField::Brand,
        InventoryField::Supplier,
        InventoryField::Location,
    ];
}

impl Searchable for InventoryItem {
    type Field = InventoryField;

    fn field_text(&self, field: InventoryField) -> Option<String> {
        match field {
            InventoryField::Name => Some(self.name.clone()),
            InventoryField::Brand => self.brand.clone(),
            InventoryField::Supplier => Some(self.supplier.clone()),
            InventoryField::Location => Some(self.location.clone()),
            InventoryField::Description => self.description.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn pesticide() -> InventoryItem {
        InventoryItem::from_draft(
            "3".to_string(),
            NewInventoryItem {
                name: "Pesticide - BioSpray Natural".to_string(),
                category: InventoryCategory::Pesticide,
                brand: Some("BioCare".to_string()),
                unit: "liter".to_string(),
                current_stock: 45.0,
                min_stock_level: 20.0,
                max_stock_level: 100.0,
                price_per_unit: Money::from_major(2_500),
                supplier: "Bio Solutions Ltd".to_string(),
                last_restocked: date(2024, 1, 8),
                expiry_date: Some(date(2024, 12, 31)),
                location: "Chemical Storage - Secured Area".to_string(),
                description: None,
                image: None,
            },
        )
    }

    #[test]
    fn test_stock_in_stamps_restock_date() {
        let item = pesticide();
        let today = date(2024, 2, 1);
        let patch = StockMovement::stock_in(10.0).patch_for(&item, today).unwrap();

        assert_eq!(patch.current_stock, Some(55.0));
        assert_eq!(patch.last_restocked, Some(today));
    }

    #[test]
    fn test_stock_out_keeps_restock_date() {
        let item = pesticide();
        let patch = StockMovement::stock_out(45.0)
            .patch_for(&item, date(2024, 2, 1))
            .unwrap();

        assert_eq!(patch.current_stock, Some(0.0));
        assert_eq!(patch.last_restocked, None);
    }

    #[test]
    fn test_stock_out_below_zero_is_rejected() {
        let item = pesticide();
        let err = StockMovement::stock_out(60.0)
            .patch_for(&item, date(2024, 2, 1))
            .unwrap_err();

        assert_eq!(
            err,
            ValidationError::BelowZero {
                available: 45.0,
                requested: 60.0
            }
        );
    }

    #[test]
    fn test_non_positive_quantity_is_rejected() {
        let item = pesticide();
        for qty in [0.0, -5.0, f64::NAN] {
            let result = StockMovement::stock_in(qty).patch_for(&item, date(2024, 2, 1));
            assert!(matches!(result, Err(ValidationError::MustBePositive { .. })));
        }
    }

    #[test]
    fn test_stock_percent_and_value() {
        let item = pesticide();
        assert_eq!(item.stock_percent(), Some(45.0));
        assert_eq!(item.stock_value(), Money::from_major(112_500));

        let unbounded = InventoryItem {
            max_stock_level: 0.0,
            ..item
        };
        assert_eq!(unbounded.stock_percent(), None);
    }

    #[test]
    fn test_expiry() {
        let item = pesticide();
        assert!(!item.is_expired(date(2024, 12, 30)));
        assert!(item.is_expired(date(2024, 12, 31)));
    }
}
