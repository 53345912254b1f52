// 🏭 Warehouse Stock Entities
//
// Identity and descriptive fields are fixed at construction; quantity is the
// only mutable field and is changed through `Stocked::set_quantity`.

use crate::repository::{Entity, Stocked};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// ELECTRONIC ITEM
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectronicItem {
    id: i64,
    name: String,
    quantity: i64,
    brand: String,
    warranty_months: u32,
}

impl ElectronicItem {
    pub fn new(id: i64, name: &str, quantity: i64, brand: &str, warranty_months: u32) -> Self {
        ElectronicItem {
            id,
            name: name.to_string(),
            quantity,
            brand: brand.to_string(),
            warranty_months,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn warranty_months(&self) -> u32 {
        self.warranty_months
    }
}

impl Entity for ElectronicItem {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Stocked for ElectronicItem {
    fn quantity(&self) -> i64 {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
    }
}

impl fmt::Display for ElectronicItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Electronic] ID: {}, Name: {}, Brand: {}, Warranty: {} months, Qty: {}",
            self.id, self.name, self.brand, self.warranty_months, self.quantity
        )
    }
}

// ============================================================================
// GROCERY ITEM
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroceryItem {
    id: i64,
    name: String,
    quantity: i64,
    expiry_date: NaiveDate,
}

impl GroceryItem {
    pub fn new(id: i64, name: &str, quantity: i64, expiry_date: NaiveDate) -> Self {
        GroceryItem {
            id,
            name: name.to_string(),
            quantity,
            expiry_date,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn expiry_date(&self) -> NaiveDate {
        self.expiry_date
    }
}

impl Entity for GroceryItem {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Stocked for GroceryItem {
    fn quantity(&self) -> i64 {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
    }
}

impl fmt::Display for GroceryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Grocery] ID: {}, Name: {}, Expiry: {}, Qty: {}",
            self.id,
            self.name,
            self.expiry_date.format("%Y-%m-%d"),
            self.quantity
        )
    }
}
