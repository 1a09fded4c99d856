use std::fmt;

use crate::error::ValidationError;
use crate::validation::{validate_address, validate_name, validate_phone};

/// A stored customer. Never edited in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub id: u32,
    pub name: String,
    pub address: String,
    pub phone: u64,
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Address: {}, Phone: {}",
            self.id, self.name, self.address, self.phone
        )
    }
}

/// Customer data that passed field validation but has no id yet.
///
/// Only [`NewCustomer::parse`] builds one from outside the crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    name: String,
    address: String,
    phone: u64,
}

impl NewCustomer {
    /// Validates raw text fields in the same order the menu asks for them.
    pub fn parse(name: &str, address: &str, phone: &str) -> Result<Self, ValidationError> {
        validate_name(name)?;
        validate_address(address)?;
        let phone = validate_phone(phone)?;
        Ok(Self::from_validated(name.to_string(), address.to_string(), phone))
    }

    /// Caller must already have run every field validator.
    pub(crate) fn from_validated(name: String, address: String, phone: u64) -> Self {
        NewCustomer {
            name,
            address,
            phone,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn phone(&self) -> u64 {
        self.phone
    }

    pub(crate) fn into_customer(self, id: u32) -> Customer {
        Customer {
            id,
            name: self.name,
            address: self.address,
            phone: self.phone,
        }
    }
}
