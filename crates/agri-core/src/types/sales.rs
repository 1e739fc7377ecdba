//! Sales invoices and customers. Read-only.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::common::{Address, Contact};
use super::Record;
use crate::money::Money;

labeled_enum! {
    /// Settlement state of an invoice.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
    #[ts(export)]
    #[serde(rename_all = "snake_case")]
    pub enum PaymentStatus("payment status") {
        Pending => "pending",
        Partial => "partial",
        Paid => "paid",
        Overdue => "overdue",
    }
}

labeled_enum! {
    /// How an invoice was (or will be) paid.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
    #[ts(export)]
    #[serde(rename_all = "snake_case")]
    pub enum PaymentMethod("payment method") {
        Cash => "cash",
        BankTransfer => "bank_transfer",
        Cheque => "cheque",
        MobilePayment => "mobile_payment",
    }
}

labeled_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
    #[ts(export)]
    #[serde(rename_all = "snake_case")]
    pub enum CustomerType("customer type") {
        Individual => "individual",
        Company => "company",
        Wholesaler => "wholesaler",
        Retailer => "retailer",
    }
}

labeled_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
    #[ts(export)]
    #[serde(rename_all = "snake_case")]
    pub enum CustomerStatus("customer status") {
        Active => "active",
        Inactive => "inactive",
    }
}

/// One invoice line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SaleItem {
    /// Weak reference to the harvest sold from.
    pub harvest_id: String,
    pub crop_name: String,
    pub quantity: f64,
    pub unit: String,
    pub price_per_unit: Money,
    pub total: Money,
}

/// A sales invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: String,
    pub invoice_number: String,
    #[ts(as = "String")]
    pub date: NaiveDate,
    /// Weak reference to a customer id.
    pub customer_id: String,
    pub customer_name: String,
    pub items: Vec<SaleItem>,
    pub subtotal: Money,
    pub tax: Money,
    pub discount: Money,
    pub total: Money,
    pub payment_status: PaymentStatus,
    pub payment_method: PaymentMethod,
    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Sale {
    /// Returns true if any part of the invoice is still unpaid.
    pub fn is_outstanding(&self) -> bool {
        self.payment_status != PaymentStatus::Paid
    }
}

/// A buyer of farm produce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: CustomerType,
    pub contact: Contact,
    pub address: Address,
    pub credit_limit: Money,
    pub outstanding_balance: Money,
    /// Payment terms in days.
    pub payment_terms: u32,
    pub status: CustomerStatus,
}

impl Customer {
    /// Credit still available before the limit is reached.
    pub fn available_credit(&self) -> Money {
        self.credit_limit - self.outstanding_balance
    }
}

impl Record for Sale {
    const ENTITY: &'static str = "Sale";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Customer {
    const ENTITY: &'static str = "Customer";

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_type_uses_type_key() {
        let customer = Customer {
            id: "c1".to_string(),
            name: "Premium Tea Exporters Ltd".to_string(),
            kind: CustomerType::Company,
            contact: Contact::phone("+94 11 234 5678"),
            address: Address::default(),
            credit_limit: Money::from_major(500_000),
            outstanding_balance: Money::from_major(120_000),
            payment_terms: 30,
            status: CustomerStatus::Active,
        };

        let json = serde_json::to_value(&customer).unwrap();
        assert_eq!(json["type"], "company");
        assert_eq!(json["paymentTerms"], 30);
        assert_eq!(customer.available_credit(), Money::from_major(380_000));
    }

    #[test]
    fn test_payment_method_parse() {
        assert_eq!(
            "bank_transfer".parse::<PaymentMethod>().unwrap(),
            PaymentMethod::BankTransfer
        );
    }
}
