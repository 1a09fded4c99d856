use tracing::{debug, info};

use crate::customer::{Customer, NewCustomer};
use crate::error::{RegistryError, ValidationError};

pub const DEFAULT_MAX_CUSTOMERS: usize = 10;

/// Ordered, in-memory customer collection owned by one session.
///
/// Ids come from a counter that only moves forward, so an id is never
/// handed out twice even after deletions.
#[derive(Debug, Clone)]
pub struct CustomerStore {
    customers: Vec<Customer>,
    max_customers: usize,
    next_id: u32,
}

impl Default for CustomerStore {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CUSTOMERS)
    }
}

impl CustomerStore {
    pub fn new(max_customers: usize) -> Self {
        CustomerStore {
            customers: Vec::new(),
            max_customers,
            next_id: 1,
        }
    }

    /// Builds a store and adds `seed` in order, with the usual checks.
    pub fn with_customers<I>(max_customers: usize, seed: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = NewCustomer>,
    {
        let mut store = Self::new(max_customers);
        for customer in seed {
            store.add(customer)?;
        }
        Ok(store)
    }

    pub fn add(&mut self, customer: NewCustomer) -> Result<&Customer, RegistryError> {
        if self.contains_name(customer.name()) {
            debug!(name = customer.name(), "rejected duplicate customer");
            return Err(RegistryError::duplicate_name(customer.name()));
        }
        if self.is_full() {
            debug!(max = self.max_customers, "rejected customer, store full");
            return Err(RegistryError::CapacityReached {
                max: self.max_customers,
            });
        }

        let id = self.next_id;
        self.next_id += 1;
        let index = self.customers.len();
        self.customers.push(customer.into_customer(id));
        info!(id, count = self.customers.len(), "customer added");

        Ok(&self.customers[index])
    }

    /// Removes the first customer whose name matches exactly.
    pub fn remove_by_name(&mut self, name: &str) -> Result<Customer, RegistryError> {
        if name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }

        match self.customers.iter().position(|c| c.name == name) {
            Some(index) => {
                let removed = self.customers.remove(index);
                info!(id = removed.id, count = self.customers.len(), "customer removed");
                Ok(removed)
            }
            None => {
                debug!(name, "delete target not found");
                Err(RegistryError::not_found(name))
            }
        }
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.customers.iter().any(|c| c.name == name)
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.customers.len() >= self.max_customers
    }

    pub fn max_customers(&self) -> usize {
        self.max_customers
    }
}
