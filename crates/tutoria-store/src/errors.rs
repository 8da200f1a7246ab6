//! Error helpers for tutoria-store
//!
//! Everything here returns the core `ExError` so the engine sees one error
//! type across layers.

use tutoria_core::errors::{ExError, ExErrorKind, TutoriaError};
use tutoria_core::Slot;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

pub fn migration_error(migration_id: &str, reason: &str) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("migration")
        .with_message(format!("Migration {} failed: {}", migration_id, reason))
}

/// A recorded migration whose SQL no longer matches the embedded copy
pub fn checksum_mismatch(migration_id: &str, expected: &str, actual: &str) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("migration_checksum")
        .with_entity_id(migration_id)
        .with_message(format!(
            "Checksum mismatch for migration {}: expected {}, got {}",
            migration_id, expected, actual
        ))
}

/// A slot payload that does not decode into its collection
pub fn slot_decode_error(slot: Slot, err: TutoriaError) -> ExError {
    ExError::new(ExErrorKind::Serialization)
        .with_op("hydrate")
        .with_entity_id(slot.key())
        .with_message(err.to_string())
}

pub fn from_rusqlite(err: rusqlite::Error) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("sqlite")
        .with_message(err.to_string())
}

pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_decode_error_names_slot() {
        let err = slot_decode_error(
            Slot::Topics,
            TutoriaError::Serialization {
                message: "expected value".to_string(),
            },
        );
        assert_eq!(err.kind(), ExErrorKind::Serialization);
        assert_eq!(err.entity_id(), Some("topics"));
        assert_eq!(err.op(), Some("hydrate"));
    }

    #[test]
    fn test_checksum_mismatch_is_persistence() {
        let err = checksum_mismatch("001_slot_store", "aa", "bb");
        assert_eq!(err.code(), "ERR_PERSISTENCE");
        assert!(err.to_string().contains("001_slot_store"));
    }
}
