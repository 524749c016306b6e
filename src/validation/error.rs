//! Defines the error types for the validation module.
use crate::schedule::ItemId;
use thiserror::Error;

/// A structural defect in the authored schedule data.
///
/// These are data-correctness errors, not transient failures: the caller is
/// expected to surface them to the user for editing rather than retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Duplicate item id {id}")]
    DuplicateItem { id: ItemId },

    #[error("Dependency of item {dependent} references unknown item {missing}")]
    DanglingReference { dependent: ItemId, missing: ItemId },

    #[error("Invalid {field} ({value}) on item {id}: must be a non-negative integer")]
    InvalidValue {
        id: ItemId,
        field: &'static str,
        value: i64,
    },
}
