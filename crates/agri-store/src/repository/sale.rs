//! # Sale Repository
//!
//! Read access to recorded sales. Invoices are created outside the dashboard.

use tracing::debug;

use agri_core::Sale;

use crate::repository;
use crate::store::Store;

/// Repository for sale records.
#[derive(Debug, Clone)]
pub struct SaleRepository {
    store: Store,
}

impl SaleRepository {
    /// Creates a new SaleRepository.
    pub fn new(store: Store) -> Self {
        SaleRepository { store }
    }

    /// Lists every sale in collection order.
    pub async fn list(&self) -> Vec<Sale> {
        let sales: Vec<Sale> = repository::list(&self.store).await;
        debug!(count = sales.len(), "Listed sales");
        sales
    }

    /// Gets a sale by store id.
    pub async fn get_by_id(&self, id: &str) -> Option<Sale> {
        debug!(id = %id, "Getting sale");
        repository::get(&self.store, id).await
    }

    /// Number of sales.
    pub async fn count(&self) -> usize {
        repository::count::<Sale>(&self.store).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreConfig;
    use crate::seed::SeedData;
    use agri_core::{Money, PaymentStatus};

    #[tokio::test]
    async fn test_seeded_invoice() {
        let store = Store::new(StoreConfig::instant(), SeedData::sample());

        let sales = store.sales().list().await;
        assert_eq!(sales.len(), 1);

        let sale = &sales[0];
        assert_eq!(sale.invoice_number, "INV-2024-001");
        assert_eq!(sale.payment_status, PaymentStatus::Paid);
        assert_eq!(sale.subtotal + sale.tax - sale.discount, sale.total);
        assert_eq!(sale.total, Money::from_major(38_500));
        assert!(!sale.is_outstanding());
    }
}
