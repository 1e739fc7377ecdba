//! Crop catalog entries. Read-only from the dashboard's point of view.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::Record;

labeled_enum! {
    /// Broad crop family.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
    #[ts(export)]
    #[serde(rename_all = "snake_case")]
    pub enum CropCategory("crop category") {
        Grain => "grain",
        Vegetable => "vegetable",
        Fruit => "fruit",
        Spice => "spice",
        Beverage => "beverage",
        Other => "other",
    }
}

labeled_enum! {
    /// Irrigation demand of a crop.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
    #[ts(export)]
    #[serde(rename_all = "snake_case")]
    pub enum WaterRequirement("water requirement") {
        Low => "low",
        Medium => "medium",
        High => "high",
    }
}

/// Optimal growing temperature band in °C.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TemperatureRange {
    pub min: f64,
    pub max: f64,
}

impl TemperatureRange {
    /// Returns true if `celsius` lies inside the band (inclusive).
    pub fn contains(&self, celsius: f64) -> bool {
        celsius >= self.min && celsius <= self.max
    }
}

/// A crop variety in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Crop {
    pub id: String,
    pub name: String,
    pub variety: String,
    pub category: CropCategory,

    /// Days from planting to first harvest.
    pub growing_period: u32,

    /// Month names, or "All Year".
    pub planting_season: Vec<String>,
    pub harvest_season: Vec<String>,

    pub water_requirement: WaterRequirement,
    pub soil_type: Vec<String>,
    pub optimal_temperature: TemperatureRange,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub image: Option<String>,
}

impl Record for Crop {
    const ENTITY: &'static str = "Crop";

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temperature_range_is_inclusive() {
        let range = TemperatureRange { min: 15.0, max: 25.0 };
        assert!(range.contains(15.0));
        assert!(range.contains(25.0));
        assert!(!range.contains(25.1));
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("Beverage".parse::<CropCategory>().unwrap(), CropCategory::Beverage);
        assert!("tuber".parse::<CropCategory>().is_err());
    }
}
