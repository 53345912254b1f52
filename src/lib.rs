// Repository Patterns - Core Library
// Generic typed repositories, a derived index, and five demo programs built on them

pub mod apps;
pub mod config;
pub mod entities;
pub mod error;
pub mod index;
pub mod parser;
pub mod repository;
pub mod snapshot;

// Re-export commonly used types
pub use apps::{run_program, Program};
pub use config::AppConfig;
pub use entities::{
    Account, AccountKind, ElectronicItem, Grade, GroceryItem, InventoryItem, Patient,
    Prescription, ProcessorKind, Student, Transaction, TransactionProcessor,
};
pub use error::{AccountError, GradingError, RepositoryError, RepositoryResult, SnapshotError};
pub use index::GroupIndex;
pub use parser::{parse_students, read_students, write_report};
pub use repository::{Entity, KeyedRepository, Repository, Stocked};
pub use snapshot::{load_snapshot, save_snapshot, InventoryLogger, LoadOutcome};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
