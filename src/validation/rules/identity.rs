//! Rules for identifier consistency: unique item ids and resolvable
//! dependency references.

use crate::schedule::{BudgetItem, DependencyEdge, ItemId};
use crate::validation::error::ValidationError;
use std::collections::HashSet;

/// Every item id must be unique within the project.
///
/// A duplicate id would make edge references ambiguous, so this rule runs
/// before any graph is built.
pub(crate) fn check_duplicate_ids(items: &[BudgetItem]) -> Vec<ValidationError> {
    let mut seen = HashSet::with_capacity(items.len());
    let mut errors = Vec::new();

    for item in items {
        if !seen.insert(item.id) {
            errors.push(ValidationError::DuplicateItem { id: item.id });
        }
    }
    errors
}

/// Every edge endpoint must name an item that exists in the project.
///
/// Null triggers are legal ("no dependency") and skipped. A reference to a
/// missing id is reported loudly here; the historical failure mode was a
/// silent lookup miss that resolved the whole schedule to period zero.
pub(crate) fn check_dangling_references(
    known: &HashSet<ItemId>,
    edges: &[DependencyEdge],
) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for edge in edges {
        if let Some(trigger) = edge.trigger {
            if !known.contains(&trigger) {
                errors.push(ValidationError::DanglingReference {
                    dependent: edge.dependent,
                    missing: trigger,
                });
            }
        }
        if !known.contains(&edge.dependent) {
            errors.push(ValidationError::DanglingReference {
                dependent: edge.dependent,
                missing: edge.dependent,
            });
        }
    }
    errors
}
