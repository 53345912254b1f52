// ⚠️ Error Taxonomy
// One enum per concern, each variant maps to a condition the drivers report

use bigdecimal::BigDecimal;
use std::path::PathBuf;

// ============================================================================
// REPOSITORY ERRORS
// ============================================================================

/// Failures raised by the strict (`KeyedRepository`) variant.
///
/// The lenient `Repository` never returns these; it reports absence with
/// `Option` / `bool` instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("Item with ID {id} already exists.")]
    DuplicateEntity { id: i64 },

    #[error("Item with ID {id} not found.")]
    EntityNotFound { id: i64 },

    #[error("{field} cannot be negative.")]
    InvalidValue { field: &'static str, value: i64 },

    #[error("Quantity for item ID {id} is out of range.")]
    QuantityOverflow { id: i64 },
}

pub type RepositoryResult<T> = std::result::Result<T, RepositoryError>;

// ============================================================================
// FLAT-FILE (GRADING) ERRORS
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum GradingError {
    #[error("input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("{0}")]
    MissingField(String),

    #[error("{0}")]
    InvalidScoreFormat(String),

    #[error("malformed record: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),
}

// ============================================================================
// SNAPSHOT (INVENTORY) ERRORS
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize snapshot: {0}")]
    Serialize(serde_json::Error),

    #[error("failed to deserialize snapshot: {0}")]
    Deserialize(serde_json::Error),
}

// ============================================================================
// ACCOUNT (FINANCE) ERRORS
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AccountError {
    #[error("Insufficient funds")]
    InsufficientFunds {
        requested: BigDecimal,
        available: BigDecimal,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_messages() {
        assert_eq!(
            RepositoryError::DuplicateEntity { id: 1 }.to_string(),
            "Item with ID 1 already exists."
        );
        assert_eq!(
            RepositoryError::EntityNotFound { id: 99 }.to_string(),
            "Item with ID 99 not found."
        );
        assert_eq!(
            RepositoryError::InvalidValue { field: "Quantity", value: -5 }.to_string(),
            "Quantity cannot be negative."
        );
        assert_eq!(
            RepositoryError::QuantityOverflow { id: 1 }.to_string(),
            "Quantity for item ID 1 is out of range."
        );
    }

    #[test]
    fn test_grading_error_passes_message_through() {
        let err = GradingError::MissingField("Line '1,Alice' is missing required fields.".into());
        assert_eq!(err.to_string(), "Line '1,Alice' is missing required fields.");
    }

    #[test]
    fn test_insufficient_funds_message() {
        let err = AccountError::InsufficientFunds {
            requested: BigDecimal::from(10),
            available: BigDecimal::from(5),
        };
        assert_eq!(err.to_string(), "Insufficient funds");
    }
}
