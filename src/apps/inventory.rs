// 📋 Inventory Program - Log items, save a snapshot, reload it in a new session

use crate::entities::InventoryItem;
use crate::snapshot::{InventoryLogger, LoadOutcome};
use anyhow::Result;
use chrono::NaiveDateTime;
use std::io::Write;
use std::path::PathBuf;

/// Five sample items, all stamped with `added`
pub fn sample_items(added: NaiveDateTime) -> Vec<InventoryItem> {
    vec![
        InventoryItem::new(1, "Laptop", 10, added),
        InventoryItem::new(2, "Keyboard", 25, added),
        InventoryItem::new(3, "Mouse", 50, added),
        InventoryItem::new(4, "Monitor", 15, added),
        InventoryItem::new(5, "Headset", 30, added),
    ]
}

pub struct InventoryApp {
    logger: InventoryLogger<InventoryItem>,
}

impl InventoryApp {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        InventoryApp {
            logger: InventoryLogger::new(file_path),
        }
    }

    pub fn seed_sample_data(&mut self, items: Vec<InventoryItem>) {
        for item in items {
            self.logger.add(item);
        }
    }

    pub fn items(&self) -> Vec<InventoryItem> {
        self.logger.get_all()
    }

    /// Save the log; failures are reported, not propagated
    pub fn save_data<W: Write>(&self, out: &mut W) -> Result<()> {
        match self.logger.save_to_file() {
            Ok(()) => writeln!(out, "Data saved successfully!")?,
            Err(e) => {
                tracing::warn!(error = %e, "inventory save failed");
                writeln!(out, "Error saving data: {}", e)?;
            }
        }
        Ok(())
    }

    /// Load the log; failures are reported and leave the log unchanged
    pub fn load_data<W: Write>(&mut self, out: &mut W) -> Result<()> {
        match self.logger.load_from_file() {
            Ok(LoadOutcome::Loaded(_)) => writeln!(out, "Data loaded successfully!")?,
            Ok(LoadOutcome::NoFile) => writeln!(out, "No file found. Starting with empty log.")?,
            Err(e) => {
                tracing::warn!(error = %e, "inventory load failed");
                writeln!(out, "Error loading data: {}", e)?;
            }
        }
        Ok(())
    }

    pub fn print_all_items<W: Write>(&self, out: &mut W) -> Result<()> {
        for item in self.logger.get_all() {
            writeln!(out, "{}", item)?;
        }
        Ok(())
    }
}

/// First session seeds and saves; a fresh session then loads and prints
pub fn run<W: Write>(out: &mut W, file_path: PathBuf, seed: Vec<InventoryItem>) -> Result<()> {
    let mut app = InventoryApp::new(file_path.clone());
    app.seed_sample_data(seed);
    app.save_data(out)?;

    writeln!(out, "\n--- New Session ---\n")?;
    let mut app = InventoryApp::new(file_path);
    app.load_data(out)?;
    app.print_all_items(out)
}
