//! Harvest log entries.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{Record, Writable};
use crate::money::Money;
use crate::query::Searchable;

labeled_enum! {
    /// Quality grade assigned at harvest time.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
    #[ts(export)]
    #[serde(rename_all = "snake_case")]
    pub enum HarvestQuality("harvest quality") {
        Excellent => "excellent",
        Good => "good",
        Average => "average",
        Poor => "poor",
    }
}

impl HarvestQuality {
    /// Excellent and good harvests count toward the quality rate.
    pub fn is_premium(&self) -> bool {
        matches!(self, HarvestQuality::Excellent | HarvestQuality::Good)
    }
}

labeled_enum! {
    /// Where a harvest is in its post-harvest lifecycle.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
    #[ts(export)]
    #[serde(rename_all = "snake_case")]
    pub enum HarvestStatus("harvest status") {
        Harvested => "harvested",
        Stored => "stored",
        Sold => "sold",
        Processed => "processed",
    }
}

/// One logged harvest.
///
/// `total_value` is stored as entered. It is not recomputed from
/// `quantity × price_per_unit` on read; [`HarvestRecord::computed_total`]
/// gives the derived figure when a form needs to pre-fill it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct HarvestRecord {
    pub id: String,
    /// Weak reference to a farmer id.
    pub farmer_id: String,
    pub crop_plan_id: String,
    pub crop_name: String,
    #[ts(as = "String")]
    pub harvest_date: NaiveDate,
    pub quantity: f64,
    pub unit: String,
    pub quality: HarvestQuality,
    /// Moisture percentage.
    #[serde(default)]
    pub moisture_content: Option<f64>,
    #[serde(default)]
    pub grade: Option<String>,
    pub price_per_unit: Money,
    pub total_value: Money,
    pub storage_location: String,
    pub status: HarvestStatus,
    #[serde(default)]
    pub notes: Option<String>,
}

impl HarvestRecord {
    /// `price_per_unit × quantity`, rounded to whole cents.
    pub fn computed_total(&self) -> Money {
        self.price_per_unit.multiply_quantity(self.quantity)
    }

    /// Returns true if the harvest falls in the same calendar month as `date`.
    pub fn in_month_of(&self, date: NaiveDate) -> bool {
        self.harvest_date.year() == date.year() && self.harvest_date.month() == date.month()
    }
}

/// Fields for a new harvest record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewHarvestRecord {
    pub farmer_id: String,
    pub crop_plan_id: String,
    pub crop_name: String,
    #[ts(as = "String")]
    pub harvest_date: NaiveDate,
    pub quantity: f64,
    pub unit: String,
    pub quality: HarvestQuality,
    #[serde(default)]
    pub moisture_content: Option<f64>,
    #[serde(default)]
    pub grade: Option<String>,
    pub price_per_unit: Money,
    pub total_value: Money,
    pub storage_location: String,
    pub status: HarvestStatus,
    #[serde(default)]
    pub notes: Option<String>,
}

impl NewHarvestRecord {
    /// Fills `total_value` from `price_per_unit × quantity`.
    pub fn with_computed_total(mut self) -> Self {
        self.total_value = self.price_per_unit.multiply_quantity(self.quantity);
        self
    }
}

/// Partial update for a harvest record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct HarvestPatch {
    pub farmer_id: Option<String>,
    pub crop_plan_id: Option<String>,
    pub crop_name: Option<String>,
    #[ts(as = "Option<String>")]
    pub harvest_date: Option<NaiveDate>,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub quality: Option<HarvestQuality>,
    pub moisture_content: Option<f64>,
    pub grade: Option<String>,
    pub price_per_unit: Option<Money>,
    pub total_value: Option<Money>,
    pub storage_location: Option<String>,
    pub status: Option<HarvestStatus>,
    pub notes: Option<String>,
}

impl Record for HarvestRecord {
    const ENTITY: &'static str = "HarvestRecord";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Writable for HarvestRecord {
    type Draft = NewHarvestRecord;
    type Patch = HarvestPatch;

    fn from_draft(id: String, draft: NewHarvestRecord) -> Self {
        HarvestRecord {
            id,
            farmer_id: draft.farmer_id,
            crop_plan_id: draft.crop_plan_id,
            crop_name: draft.crop_name,
            harvest_date: draft.harvest_date,
            quantity: draft.quantity,
            unit: draft.unit,
            quality: draft.quality,
            moisture_content: draft.moisture_content,
            grade: draft.grade,
            price_per_unit: draft.price_per_unit,
            total_value: draft.total_value,
            storage_location: draft.storage_location,
            status: draft.status,
            notes: draft.notes,
        }
    }

    fn apply_patch(&mut self, patch: HarvestPatch) {
        if let Some(farmer_id) = patch.farmer_id {
            self.farmer_id = farmer_id;
        }
        if let Some(crop_plan_id) = patch.crop_plan_id {
            self.crop_plan_id = crop_plan_id;
        }
        if let Some(crop_name) = patch.crop_name {
            self.crop_name = crop_name;
        }
        if let Some(harvest_date) = patch.harvest_date {
            self.harvest_date = harvest_date;
        }
        if let Some(quantity) = patch.quantity {
            self.quantity = quantity;
        }
        if let Some(unit) = patch.unit {
            self.unit = unit;
        }
        if let Some(quality) = patch.quality {
            self.quality = quality;
        }
        if patch.moisture_content.is_some() {
            self.moisture_content = patch.moisture_content;
        }
        if patch.grade.is_some() {
            self.grade = patch.grade;
        }
        if let Some(price) = patch.price_per_unit {
            self.price_per_unit = price;
        }
        if let Some(total) = patch.total_value {
            self.total_value = total;
        }
        if let Some(location) = patch.storage_location {
            self.storage_location = location;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if patch.notes.is_some() {
            self.notes = patch.notes;
        }
    }
}

// =============================================================================
// Search Fields
// =============================================================================

/// Harvest fields the harvest page can search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HarvestField {
    CropName,
    Grade,
    StorageLocation,
    Notes,
}

impl HarvestField {
    /// Fields searched by the harvest search box.
    pub const DEFAULT: &'static [HarvestField] = &[
        HarvestField::CropName,
        HarvestField::Grade,
        HarvestField::StorageLocation,
    ];
}

impl Searchable for HarvestRecord {
    type Field = HarvestField;

    fn field_text(&self, field: HarvestField) -> Option<String> {
        match field {
            HarvestField::CropName => Some(self.crop_name.clone()),
            HarvestField::Grade => self.grade.clone(),
            HarvestField::StorageLocation => Some(self.storage_location.clone()),
            HarvestField::Notes => self.notes.clone(),
        }
    }
}
