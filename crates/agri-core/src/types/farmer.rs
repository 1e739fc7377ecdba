//! Farmer records: the only collection with full create/update/delete.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::common::{Address, Contact};
use super::{Record, Writable};
use crate::money::Money;
use crate::query::Searchable;

labeled_enum! {
    /// Cultivation practice of a farm.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
    #[ts(export)]
    #[serde(rename_all = "snake_case")]
    pub enum FarmType("farm type") {
        Organic => "organic",
        Conventional => "conventional",
        Mixed => "mixed",
    }
}

labeled_enum! {
    /// Membership status of a farmer.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
    #[ts(export)]
    #[serde(rename_all = "snake_case")]
    pub enum FarmerStatus("farmer status") {
        Active => "active",
        Inactive => "inactive",
        Suspended => "suspended",
    }
}

/// A registered farmer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Farmer {
    /// Store-assigned identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Business code printed on cards and receipts ("CBF001").
    pub farmer_id: String,

    pub address: Address,

    pub contact: Contact,

    /// Farm size in acres.
    pub farm_size: f64,

    pub farm_type: FarmType,

    #[ts(as = "String")]
    pub join_date: NaiveDate,

    pub status: FarmerStatus,

    /// Crop ids grown on this farm. Weak references into the crop catalog.
    pub crops: Vec<String>,

    /// Lifetime harvest in kg.
    pub total_harvest: f64,

    pub revenue: Money,

    #[serde(default)]
    pub notes: Option<String>,

    #[serde(default)]
    pub avatar: Option<String>,
}

impl Farmer {
    /// Returns true if the farmer is currently active.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.status == FarmerStatus::Active
    }
}

/// Fields for a new farmer. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewFarmer {
    pub name: String,
    pub farmer_id: String,
    pub address: Address,
    pub contact: Contact,
    pub farm_size: f64,
    pub farm_type: FarmType,
    #[ts(as = "String")]
    pub join_date: NaiveDate,
    pub status: FarmerStatus,
    pub crops: Vec<String>,
    pub total_harvest: f64,
    pub revenue: Money,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Partial update for a farmer.
///
/// ## Example
/// ```rust
/// use agri_core::types::{FarmerPatch, FarmerStatus};
///
/// let patch = FarmerPatch {
///     status: Some(FarmerStatus::Suspended),
///     ..Default::default()
/// };
/// assert!(patch.name.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct FarmerPatch {
    pub name: Option<String>,
    pub farmer_id: Option<String>,
    pub address: Option<Address>,
    pub contact: Option<Contact>,
    pub farm_size: Option<f64>,
    pub farm_type: Option<FarmType>,
    #[ts(as = "Option<String>")]
    pub join_date: Option<NaiveDate>,
    pub status: Option<FarmerStatus>,
    pub crops: Option<Vec<String>>,
    pub total_harvest: Option<f64>,
    pub revenue: Option<Money>,
    pub notes: Option<String>,
    pub avatar: Option<String>,
}

impl Record for Farmer {
    const ENTITY: &'static str = "Farmer";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Writable for Farmer {
    type Draft = NewFarmer;
    type Patch = FarmerPatch;

    fn from_draft(id: String, draft: NewFarmer) -> Self {
        Farmer {
            id,
            name: draft.name,
            farmer_id: draft.farmer_id,
            address: draft.address,
            contact: draft.contact,
            farm_size: draft.farm_size,
            farm_type: draft.farm_type,
            join_date: draft.join_date,
            status: draft.status,
            crops: draft.crops,
            total_harvest: draft.total_harvest,
            revenue: draft.revenue,
            notes: draft.notes,
            avatar: draft.avatar,
        }
    }

    fn apply_patch(&mut self, patch: FarmerPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(farmer_id) = patch.farmer_id {
            self.farmer_id = farmer_id;
        }
        if let Some(address) = patch.address {
            self.address = address;
        }
        if let Some(contact) = patch.contact {
            self.contact = contact;
        }
        if let Some(farm_size) = patch.farm_size {
            self.farm_size = farm_size;
        }
        if let Some(farm_type) = patch.farm_type {
            self.farm_type = farm_type;
        }
        if let Some(join_date) = patch.join_date {
            self.join_date = join_date;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(crops) = patch.crops {
            self.crops = crops;
        }
        if let Some(total_harvest) = patch.total_harvest {
            self.total_harvest = total_harvest;
        }
        if let Some(revenue) = patch.revenue {
            self.revenue = revenue;
        }
        if patch.notes.is_some() {
            self.notes = patch.notes;
        }
        if patch.avatar.is_some() {
            self.avatar = patch.avatar;
        }
    }
}

// =============================================================================
// Search Fields
// =============================================================================

/// Farmer fields the management page can search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FarmerField {
    Name,
    FarmerId,
    ContactEmail,
    ContactPhone,
    City,
    District,
}

impl FarmerField {
    /// Fields searched by the farmer management search box.
    pub const DEFAULT: &'static [FarmerField] = &[
        FarmerField::Name,
        FarmerField::FarmerId,
        FarmerField::ContactEmail,
    ];
}

impl Searchable for Farmer {
    type Field = FarmerField;

    fn field_text(&self, field: FarmerField) -> Option<String> {
        match field {
            FarmerField::Name => Some(self.name.clone()),
            FarmerField::FarmerId => Some(self.farmer_id.clone()),
            FarmerField::ContactEmail => self.contact.email.clone(),
            FarmerField::ContactPhone => Some(self.contact.phone.clone()),
            FarmerField::City => Some(self.address.city.clone()),
            FarmerField::District => Some(self.address.district.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> NewFarmer {
        NewFarmer {
            name: "Test".to_string(),
            farmer_id: "CBF999".to_string(),
            address: Address::default(),
            contact: Contact::phone("000"),
            farm_size: 5.0,
            farm_type: FarmType::Organic,
            join_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            status: FarmerStatus::Active,
            crops: vec![],
            total_harvest: 0.0,
            revenue: Money::zero(),
            notes: None,
            avatar: None,
        }
    }

    #[test]
    fn test_from_draft_keeps_fields() {
        let farmer = Farmer::from_draft("42".to_string(), draft());
        assert_eq!(farmer.id, "42");
        assert_eq!(farmer.farmer_id, "CBF999");
        assert_eq!(farmer.contact.phone, "000");
        assert!(farmer.is_active());
    }

    #[test]
    fn test_patch_touches_only_present_fields() {
        let mut farmer = Farmer::from_draft("1".to_string(), draft());
        let before = farmer.clone();

        farmer.apply_patch(FarmerPatch {
            status: Some(FarmerStatus::Suspended),
            ..Default::default()
        });

        assert_eq!(farmer.status, FarmerStatus::Suspended);
        assert_eq!(
            Farmer {
                status: before.status,
                ..farmer.clone()
            },
            before
        );
    }

    #[test]
    fn test_patch_replaces_contact_wholesale() {
        let mut farmer = Farmer::from_draft("1".to_string(), draft());
        farmer.contact.email = Some("old@example.com".to_string());

        farmer.apply_patch(FarmerPatch {
            contact: Some(Contact::phone("111")),
            ..Default::default()
        });

        assert_eq!(farmer.contact.phone, "111");
        assert_eq!(farmer.contact.email, None);
    }

    #[test]
    fn test_patch_deserializes_from_partial_json() {
        let patch: FarmerPatch = serde_json::from_str(r#"{"status":"suspended"}"#).unwrap();
        assert_eq!(patch.status, Some(FarmerStatus::Suspended));
        assert!(patch.farm_size.is_none());
    }

    #[test]
    fn test_serializes_camel_case() {
        let farmer = Farmer::from_draft("1".to_string(), draft());
        let json = serde_json::to_value(&farmer).unwrap();
        assert_eq!(json["farmerId"], "CBF999");
        assert_eq!(json["farmType"], "organic");
        assert_eq!(json["joinDate"], "2024-02-01");
    }
}
