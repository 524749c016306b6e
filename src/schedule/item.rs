//! Defines the `BudgetItem` and its associated types, representing a single
//! line in a project's cost budget.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A unique, stable identifier for a budget item within a project.
///
/// Identifiers arrive from the budget tables as 64-bit integers. Upstream
/// code paths historically mixed numeric and string representations of the
/// same key, which made map lookups miss silently; coercing every identifier
/// into this one type at the boundary makes that state unrepresentable.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ItemId(pub i64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// When a timing dependency on another item is considered satisfied.
///
/// A dependent item can be anchored to the moment its trigger *starts*
/// (e.g., "Inspections" tracking "Vertical Construction" in parallel) or to
/// the moment it *finishes* (e.g., "Foundations" waiting for "Mass Grading"
/// to complete).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TriggerCondition {
    OnStart,
    OnFinish,
}

/// A single line in a project's cost budget, positioned in discrete periods.
///
/// Periods are the project's native time unit (typically months from the
/// project start). `base_start_period` is the authored position and is only
/// authoritative for items with no incoming dependency; everything else is
/// derived by the resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetItem {
    pub id: ItemId,
    /// A human-readable name for the line item (e.g., "Mass Grading").
    #[serde(default)]
    pub name: String,
    /// The authored start period. Must be non-negative.
    pub base_start_period: i64,
    /// Periods required to complete the item. Must be non-negative.
    pub duration_periods: i64,
}

impl BudgetItem {
    pub fn new(id: i64, base_start_period: i64, duration_periods: i64) -> Self {
        Self {
            id: ItemId(id),
            name: String::new(),
            base_start_period,
            duration_periods,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// The label used in error messages and traces: the name if one was
    /// authored, otherwise the raw identifier.
    pub fn label(&self) -> String {
        if self.name.is_empty() {
            format!("item {}", self.id)
        } else {
            self.name.clone()
        }
    }
}
