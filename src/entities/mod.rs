// Entity Models
//
// Every entity carries a unique integer id (the `Entity` capability).
// Warehouse stock additionally exposes its quantity through `Stocked`.

pub mod account;
pub mod inventory;
pub mod patient;
pub mod stock;
pub mod student;
pub mod transaction;

pub use account::{Account, AccountKind};
pub use inventory::InventoryItem;
pub use patient::{Patient, Prescription};
pub use stock::{ElectronicItem, GroceryItem};
pub use student::{Grade, Student};
pub use transaction::{
    format_amount, get_processor, BankTransferProcessor, CryptoWalletProcessor, MobileMoneyProcessor,
    ProcessorKind, Transaction, TransactionProcessor,
};
