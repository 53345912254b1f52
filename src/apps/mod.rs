// Demo Programs
//
// Each program is independent: it builds its own repositories from seed data,
// runs a fixed sequence of operations and renders into the given writer.

pub mod finance;
pub mod grading;
pub mod healthcare;
pub mod inventory;
pub mod warehouse;

pub use finance::{FinanceApp, ScheduledTransaction};
pub use grading::StudentResultProcessor;
pub use healthcare::{HealthSystemApp, HealthcareSeed};
pub use inventory::InventoryApp;
pub use warehouse::{WarehouseManager, WarehouseSeed};

use crate::config::AppConfig;
use crate::entities::Account;
use anyhow::{anyhow, Result};
use chrono::NaiveDateTime;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Program {
    Healthcare,
    Inventory,
    Grading,
    Warehouse,
    Finance,
}

impl Program {
    pub const ALL: [Program; 5] = [
        Program::Healthcare,
        Program::Inventory,
        Program::Grading,
        Program::Warehouse,
        Program::Finance,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Program::Healthcare => "healthcare",
            Program::Inventory => "inventory",
            Program::Grading => "grading",
            Program::Warehouse => "warehouse",
            Program::Finance => "finance",
        }
    }

    pub fn from_name(name: &str) -> Result<Self> {
        Program::ALL
            .into_iter()
            .find(|p| p.name() == name.to_lowercase())
            .ok_or_else(|| anyhow!("Unknown program: {}", name))
    }
}

/// Run one program with seed data stamped at `now`
pub fn run_program<W: Write>(program: Program, config: &AppConfig, now: NaiveDateTime, out: &mut W) -> Result<()> {
    tracing::info!(program = program.name(), "starting program");

    match program {
        Program::Healthcare => HealthSystemApp::new().run(
            out,
            HealthcareSeed::sample(),
            config.healthcare.selected_patient_id,
        ),
        Program::Inventory => inventory::run(
            out,
            config.inventory.snapshot_path.clone(),
            inventory::sample_items(now),
        ),
        Program::Grading => grading::run(out, &config.grading.input_path, &config.grading.report_path),
        Program::Warehouse => {
            let mut manager = WarehouseManager::new();
            manager.seed_data(WarehouseSeed::sample(now.date()))?;
            manager.run(out, now.date())
        }
        Program::Finance => {
            let account = Account::savings(
                &config.finance.account_number,
                config.finance.initial_balance.clone(),
            );
            FinanceApp::new(account).run(out, finance::sample_transactions(now.date()))
        }
    }
}
