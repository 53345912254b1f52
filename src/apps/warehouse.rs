// 🏭 Warehouse Program - Strict repositories for electronics and groceries
//
// Every failing operation is caught on its own and reported as
// "Error: {message}"; the run always continues.

use crate::entities::{ElectronicItem, GroceryItem};
use crate::error::{RepositoryError, RepositoryResult};
use crate::repository::{Entity, KeyedRepository, Stocked};
use anyhow::Result;
use chrono::{Days, NaiveDate};
use std::fmt::Display;
use std::io::Write;

// ============================================================================
// SEED DATA
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct WarehouseSeed {
    pub electronics: Vec<ElectronicItem>,
    pub groceries: Vec<GroceryItem>,
}

impl WarehouseSeed {
    /// Two electronics, two groceries expiring relative to `today`
    pub fn sample(today: NaiveDate) -> Self {
        WarehouseSeed {
            electronics: vec![
                ElectronicItem::new(1, "Laptop", 10, "Dell", 24),
                ElectronicItem::new(2, "Smartphone", 15, "Samsung", 12),
            ],
            groceries: vec![
                GroceryItem::new(1, "Apples", 50, days_after(today, 10)),
                GroceryItem::new(2, "Milk", 30, days_after(today, 5)),
            ],
        }
    }
}

fn days_after(today: NaiveDate, days: u64) -> NaiveDate {
    today.checked_add_days(Days::new(days)).unwrap_or(today)
}

// ============================================================================
// GENERIC OPERATIONS
// ============================================================================

pub fn print_all_items<T, W>(out: &mut W, repo: &KeyedRepository<T>) -> Result<()>
where
    T: Stocked + Display,
    W: Write,
{
    for item in repo.iter() {
        writeln!(out, "{}", item)?;
    }
    Ok(())
}

/// Add `quantity` to an item's stock and return the new quantity.
/// A sum outside the `i64` range is `QuantityOverflow`; the stock is untouched.
pub fn add_stock<T: Stocked>(repo: &mut KeyedRepository<T>, id: i64, quantity: i64) -> RepositoryResult<i64> {
    let current = repo.get_by_id(id)?.quantity();
    let total = current
        .checked_add(quantity)
        .ok_or(RepositoryError::QuantityOverflow { id })?;
    repo.update_quantity(id, total)
}

pub fn increase_stock<T, W>(out: &mut W, repo: &mut KeyedRepository<T>, id: i64, quantity: i64) -> Result<()>
where
    T: Stocked,
    W: Write,
{
    match add_stock(repo, id, quantity) {
        Ok(new_quantity) => writeln!(
            out,
            "Stock increased for item ID {}. New Quantity: {}",
            id, new_quantity
        )?,
        Err(e) => report(out, &e)?,
    }
    Ok(())
}

pub fn remove_item_by_id<T, W>(out: &mut W, repo: &mut KeyedRepository<T>, id: i64) -> Result<()>
where
    T: Entity,
    W: Write,
{
    match repo.remove(id) {
        Ok(_) => writeln!(out, "Item with ID {} removed successfully.", id)?,
        Err(e) => report(out, &e)?,
    }
    Ok(())
}

fn report<W: Write, E: Display>(out: &mut W, error: &E) -> Result<()> {
    tracing::warn!(error = %error, "warehouse operation failed");
    writeln!(out, "Error: {}", error)?;
    Ok(())
}

// ============================================================================
// MANAGER
// ============================================================================

pub struct WarehouseManager {
    electronics: KeyedRepository<ElectronicItem>,
    groceries: KeyedRepository<GroceryItem>,
}

impl WarehouseManager {
    pub fn new() -> Self {
        WarehouseManager {
            electronics: KeyedRepository::new(),
            groceries: KeyedRepository::new(),
        }
    }

    /// Load the seed; stops at the first duplicate id
    pub fn seed_data(&mut self, seed: WarehouseSeed) -> RepositoryResult<()> {
        for item in seed.electronics {
            self.electronics.add(item)?;
        }
        for item in seed.groceries {
            self.groceries.add(item)?;
        }
        Ok(())
    }

    pub fn electronics(&self) -> &KeyedRepository<ElectronicItem> {
        &self.electronics
    }

    pub fn electronics_mut(&mut self) -> &mut KeyedRepository<ElectronicItem> {
        &mut self.electronics
    }

    pub fn groceries(&self) -> &KeyedRepository<GroceryItem> {
        &self.groceries
    }

    pub fn groceries_mut(&mut self) -> &mut KeyedRepository<GroceryItem> {
        &mut self.groceries
    }

    /// Print both repositories, then exercise each failure path and a restock
    pub fn run<W: Write>(&mut self, out: &mut W, today: NaiveDate) -> Result<()> {
        writeln!(out, "---- Grocery Items ----")?;
        print_all_items(out, &self.groceries)?;

        writeln!(out, "\n---- Electronic Items ----")?;
        print_all_items(out, &self.electronics)?;

        writeln!(out, "\n--- Testing Exceptions ---")?;

        let bananas = GroceryItem::new(1, "Bananas", 20, days_after(today, 7));
        if let Err(e) = self.groceries.add(bananas) {
            report(out, &e)?;
        }

        remove_item_by_id(out, &mut self.electronics, 99)?;

        if let Err(e) = self.groceries.update_quantity(2, -5) {
            report(out, &e)?;
        }

        writeln!(out, "\n--- Restocking ---")?;
        increase_stock(out, &mut self.electronics, 1, 5)
    }
}

impl Default for WarehouseManager {
    fn default() -> Self {
        Self::new()
    }
}
