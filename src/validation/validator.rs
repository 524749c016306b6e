//! The central validator that orchestrates the execution of all validation rules.
use super::error::ValidationError;
use super::rules::{identity, values};
use crate::schedule::{BudgetItem, DependencyEdge, ItemId};
use std::collections::HashSet;

/// The orchestrator for schedule pre-flight checks.
///
/// This struct borrows the raw authored rows and applies every validation
/// rule, collecting all defects in one pass. It's like a linter for the
/// budget: the authoring UI wants every problem at once, not just the first.
/// `ScheduleGraph::build` runs the same rules fail-fast, so the two layers
/// cannot drift.
pub struct Validator<'a> {
    items: &'a [BudgetItem],
    edges: &'a [DependencyEdge],
}

impl<'a> Validator<'a> {
    /// Creates a new validator for one project's items and dependency rows.
    pub fn new(items: &'a [BudgetItem], edges: &'a [DependencyEdge]) -> Self {
        Self { items, edges }
    }

    /// Executes all registered validation rules against the input.
    ///
    /// # Returns
    /// - `Ok(())` if no validation errors are found.
    /// - `Err(Vec<ValidationError>)` containing all errors discovered.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        errors.extend(identity::check_duplicate_ids(self.items));

        // Dangling references are checked against the full id set even when
        // duplicates exist; a duplicated id is still a known id.
        let known: HashSet<ItemId> = self.items.iter().map(|i| i.id).collect();
        errors.extend(identity::check_dangling_references(&known, self.edges));

        errors.extend(values::check_period_values(self.items));

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Fail-fast variant used at graph-build time.
    pub(crate) fn first_error(&self) -> Option<ValidationError> {
        self.validate().err().map(|mut errs| errs.remove(0))
    }
}
