//! Value types shared by farmers and customers.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Postal address.
///
/// Replaced wholesale by patches; there is no per-line merge.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub district: String,
    pub province: String,
    pub postal_code: String,
    pub country: String,
}

/// Contact channels. Only the phone number is mandatory.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub whatsapp: Option<String>,
}

impl Contact {
    /// A contact with only a phone number.
    pub fn phone(phone: impl Into<String>) -> Self {
        Contact {
            phone: phone.into(),
            email: None,
            whatsapp: None,
        }
    }
}
