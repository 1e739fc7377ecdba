//! # Validation Module
//!
//! Input validation for records written through the store.
//!
//! ## Validation Layers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Dashboard forms                                              │
//! │  ├── Required fields, number inputs                                    │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Store create / update                                        │
//! │  └── THIS MODULE: Validate::validate on the built or merged record     │
//! │                                                                         │
//! │  Not checked: weak references, stock bounds, uniqueness of farmerId    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use agri_core::validation::{validate_farmer_code, validate_non_negative};
//!
//! validate_farmer_code("CBF001").unwrap();
//! assert!(validate_non_negative("farmSize", -1.0).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{Contact, Farmer, HarvestRecord, InventoryItem};
use crate::{MAX_CODE_LEN, MAX_NAME_LEN, MAX_PAGE_SIZE, MAX_SEARCH_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// A record that can check its own business rules.
pub trait Validate {
    /// Returns the first rule the record breaks.
    fn validate(&self) -> ValidationResult<()>;
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a required free-text field.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most `MAX_NAME_LEN` (200) characters
///
/// ## Example
/// ```rust
/// use agri_core::validation::validate_required;
///
/// assert!(validate_required("name", "Priya Sharma").is_ok());
/// assert!(validate_required("name", "   ").is_err());
/// ```
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a farmer business code ("CBF001").
///
/// ## Rules
/// - Must not be empty
/// - At most `MAX_CODE_LEN` (20) characters
/// - Letters, digits, hyphens and underscores only
pub fn validate_farmer_code(code: &str) -> ValidationResult<()> {
    let code = code.trim();

    if code.is_empty() {
        return Err(ValidationError::Required {
            field: "farmerId".to_string(),
        });
    }

    if code.len() > MAX_CODE_LEN {
        return Err(ValidationError::TooLong {
            field: "farmerId".to_string(),
            max: MAX_CODE_LEN,
        });
    }

    if !code
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "farmerId".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates contact details. The phone is mandatory; an email, if given,
/// must at least look like one.
pub fn validate_contact(contact: &Contact) -> ValidationResult<()> {
    validate_required("contact.phone", &contact.phone)?;

    if let Some(email) = &contact.email {
        let email = email.trim();
        let well_formed = email
            .split_once('@')
            .map_or(false, |(local, domain)| !local.is_empty() && domain.contains('.'));
        if !email.is_empty() && !well_formed {
            return Err(ValidationError::InvalidFormat {
                field: "contact.email".to_string(),
                reason: "must be an email address".to_string(),
            });
        }
    }

    Ok(())
}

/// Validates a search term typed into a list page.
///
/// ## Rules
/// - Can be empty (no filtering)
/// - At most `MAX_SEARCH_LEN` (100) characters
///
/// ## Returns
/// The term exactly as typed. Surrounding whitespace is part of the
/// substring match, so it is not trimmed here.
pub fn validate_search_term(term: &str) -> ValidationResult<String> {
    if term.chars().count() > MAX_SEARCH_LEN {
        return Err(ValidationError::TooLong {
            field: "search".to_string(),
            max: MAX_SEARCH_LEN,
        });
    }

    Ok(term.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a measured quantity (acres, kg, stock units).
///
/// ## Rules
/// - Must be finite
/// - Must be zero or greater
pub fn validate_non_negative(field: &str, value: f64) -> ValidationResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::MustBeNonNegative {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a monetary amount. Zero is allowed.
///
/// ## Example
/// ```rust
/// use agri_core::money::Money;
/// use agri_core::validation::validate_amount;
///
/// assert!(validate_amount("pricePerUnit", Money::zero()).is_ok());
/// assert!(validate_amount("pricePerUnit", Money::from_cents(-1)).is_err());
/// ```
pub fn validate_amount(field: &str, amount: Money) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::MustBeNonNegative {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a percentage in `[0, 100]`.
pub fn validate_percent(field: &str, value: f64) -> ValidationResult<()> {
    if !(0.0..=100.0).contains(&value) {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0.0,
            max: 100.0,
        });
    }

    Ok(())
}

/// Validates a list page size.
///
/// ## Rules
/// - At least 1
/// - At most `MAX_PAGE_SIZE` (100)
pub fn validate_page_size(size: usize) -> ValidationResult<()> {
    if size == 0 || size > MAX_PAGE_SIZE {
        return Err(ValidationError::OutOfRange {
            field: "page_size".to_string(),
            min: 1.0,
            max: MAX_PAGE_SIZE as f64,
        });
    }

    Ok(())
}

// =============================================================================
// Record Rules
// =============================================================================

impl Validate for Farmer {
    fn validate(&self) -> ValidationResult<()> {
        validate_required("name", &self.name)?;
        validate_farmer_code(&self.farmer_id)?;
        validate_contact(&self.contact)?;
        validate_non_negative("farmSize", self.farm_size)?;
        validate_non_negative("totalHarvest", self.total_harvest)?;
        validate_amount("revenue", self.revenue)
    }
}

impl Validate for InventoryItem {
    fn validate(&self) -> ValidationResult<()> {
        validate_required("name", &self.name)?;
        validate_required("unit", &self.unit)?;
        validate_non_negative("currentStock", self.current_stock)?;
        validate_non_negative("minStockLevel", self.min_stock_level)?;
        validate_non_negative("maxStockLevel", self.max_stock_level)?;
        validate_amount("pricePerUnit", self.price_per_unit)
    }
}

impl Validate for HarvestRecord {
    fn validate(&self) -> ValidationResult<()> {
        validate_required("cropName", &self.crop_name)?;
        validate_required("unit", &self.unit)?;
        validate_non_negative("quantity", self.quantity)?;
        if let Some(moisture) = self.moisture_content {
            validate_percent("moistureContent", moisture)?;
        }
        validate_amount("pricePerUnit", self.price_per_unit)?;
        validate_amount("totalValue", self.total_value)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required() {
        assert!(validate_required("name", "Tea").is_ok());
        assert!(validate_required("name", "").is_err());
        assert!(validate_required("name", &"A".repeat(201)).is_err());
        assert!(validate_required("name", &"A".repeat(200)).is_ok());
    }

    #[test]
    fn test_validate_farmer_code() {
        assert!(validate_farmer_code("CBF001").is_ok());
        assert!(validate_farmer_code("cbf_01-a").is_ok());

        assert!(validate_farmer_code("").is_err());
        assert!(validate_farmer_code("CBF 001").is_err());
        assert!(validate_farmer_code(&"C".repeat(21)).is_err());
    }

    #[test]
    fn test_validate_contact() {
        assert!(validate_contact(&Contact::phone("+94 77 123 4567")).is_ok());
        assert!(validate_contact(&Contact::phone("")).is_err());

        let mut contact = Contact::phone("+94 77 123 4567");
        contact.email = Some("priya.sharma@email.com".to_string());
        assert!(validate_contact(&contact).is_ok());

        contact.email = Some("not-an-email".to_string());
        assert!(matches!(
            validate_contact(&contact),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative("farmSize", 0.0).is_ok());
        assert!(validate_non_negative("farmSize", 25.5).is_ok());
        assert!(validate_non_negative("farmSize", -0.1).is_err());
        assert!(validate_non_negative("farmSize", f64::NAN).is_err());
    }

    #[test]
    fn test_validate_search_term() {
        assert_eq!(validate_search_term("  tea  ").unwrap(), "  tea  ");
        assert_eq!(validate_search_term("").unwrap(), "");
        assert!(validate_search_term(&"x".repeat(101)).is_err());
    }

    #[test]
    fn test_validate_page_size() {
        assert!(validate_page_size(10).is_ok());
        assert!(validate_page_size(0).is_err());
        assert!(validate_page_size(101).is_err());
    }

    #[test]
    fn test_validate_percent() {
        assert!(validate_percent("moistureContent", 12.5).is_ok());
        assert!(validate_percent("moistureContent", 100.5).is_err());
    }
}
