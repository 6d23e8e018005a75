use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::domain::{Customer, TaxId};

/// Counts describing the current contents of the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreStats {
    pub customer_count: usize,
    pub operation_count: usize,
}

#[derive(Default)]
struct LedgerState {
    customers: HashMap<TaxId, StoredCustomer>,
    next_sequence: u64,
}

struct StoredCustomer {
    /// Monotonically increasing, used to list customers in creation order
    sequence: u64,
    customer: Customer,
}

/// In-memory store of customers keyed by tax ID.
///
/// A single reader/writer lock guards the whole ledger: every read sees a
/// consistent snapshot and every mutation is applied atomically.
#[derive(Default)]
pub struct Repository {
    state: RwLock<LedgerState>,
}

impl Repository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    // ========================
    // Customer operations
    // ========================

    /// Insert a new customer. Returns `false` and leaves the store untouched
    /// if the tax ID is already registered.
    pub async fn insert_customer(&self, customer: Customer) -> bool {
        let mut state = self.state.write().await;
        if state.customers.contains_key(&customer.tax_id) {
            return false;
        }

        let sequence = state.next_sequence;
        state.next_sequence += 1;
        state
            .customers
            .insert(customer.tax_id.clone(), StoredCustomer { sequence, customer });
        true
    }

    /// Get a snapshot of a customer by tax ID.
    pub async fn get_customer(&self, tax_id: &str) -> Option<Customer> {
        let state = self.state.read().await;
        state.customers.get(tax_id).map(|s| s.customer.clone())
    }

    /// Apply `f` to the customer under the write lock.
    /// Returns `None` if no customer has this tax ID.
    pub async fn update_customer<T, F>(&self, tax_id: &str, f: F) -> Option<T>
    where
        F: FnOnce(&mut Customer) -> T,
    {
        let mut state = self.state.write().await;
        state.customers.get_mut(tax_id).map(|s| f(&mut s.customer))
    }

    /// Remove a customer and return the remaining ones, as one atomic step.
    pub async fn remove_customer_and_list(&self, tax_id: &str) -> Option<Vec<Customer>> {
        let mut state = self.state.write().await;
        state.customers.remove(tax_id)?;
        Some(Self::ordered(&state))
    }

    /// List all customers in creation order.
    pub async fn list_customers(&self) -> Vec<Customer> {
        let state = self.state.read().await;
        Self::ordered(&state)
    }

    pub async fn stats(&self) -> StoreStats {
        let state = self.state.read().await;
        StoreStats {
            customer_count: state.customers.len(),
            operation_count: state
                .customers
                .values()
                .map(|s| s.customer.statement.len())
                .sum(),
        }
    }

    fn ordered(state: &LedgerState) -> Vec<Customer> {
        let mut stored: Vec<&StoredCustomer> = state.customers.values().collect();
        stored.sort_by_key(|s| s.sequence);
        stored.into_iter().map(|s| s.customer.clone()).collect()
    }
}
