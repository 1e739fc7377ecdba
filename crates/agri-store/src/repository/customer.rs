//! Read access to customers.

use tracing::debug;

use agri_core::Customer;

use crate::repository;
use crate::store::Store;

/// Repository for customers.
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    store: Store,
}

impl CustomerRepository {
    /// Creates a new CustomerRepository.
    pub fn new(store: Store) -> Self {
        CustomerRepository { store }
    }

    /// Lists every customer in collection order.
    pub async fn list(&self) -> Vec<Customer> {
        let customers: Vec<Customer> = repository::list(&self.store).await;
        debug!(count = customers.len(), "Listed customers");
        customers
    }

    /// Gets a customer by store id.
    pub async fn get_by_id(&self, id: &str) -> Option<Customer> {
        debug!(id = %id, "Getting customer");
        repository::get(&self.store, id).await
    }

    /// Number of customers.
    pub async fn count(&self) -> usize {
        repository::count::<Customer>(&self.store).await
    }
}
