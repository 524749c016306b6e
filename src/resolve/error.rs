//! Defines the error type for a resolution pass.

use crate::schedule::ItemId;
use crate::validation::ValidationError;
use thiserror::Error;

/// Why a resolution pass produced no result.
///
/// Resolution is all-or-nothing: on any of these the caller gets no partial
/// timeline, never a silently zeroed one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The dependency rows form a loop, so no start order exists. At least
    /// one participating item is named so the caller can point at it.
    #[error("Cyclic dependency involving items [{}]", fmt_ids(members))]
    CyclicDependency { members: Vec<ItemId> },
}

fn fmt_ids(ids: &[ItemId]) -> String {
    ids.iter()
        .map(ItemId::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_message_names_members() {
        let err = ResolveError::CyclicDependency {
            members: vec![ItemId(3), ItemId(7), ItemId(9)],
        };
        assert_eq!(
            err.to_string(),
            "Cyclic dependency involving items [3, 7, 9]"
        );
    }

    #[test]
    fn test_validation_errors_pass_through_transparently() {
        let err: ResolveError = ValidationError::DuplicateItem { id: ItemId(12) }.into();
        assert_eq!(err.to_string(), "Duplicate item id 12");
    }
}
