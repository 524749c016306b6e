//! Rule for period-value sanity: authored positions and durations must be
//! non-negative integers.

use crate::schedule::BudgetItem;
use crate::validation::error::ValidationError;

/// Rejects malformed period values at the boundary instead of letting them
/// propagate as nonsense arithmetic.
///
/// Dependency offsets are exempt: a negative offset is the legal way to
/// express lead time / overlap.
pub(crate) fn check_period_values(items: &[BudgetItem]) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for item in items {
        if item.base_start_period < 0 {
            errors.push(ValidationError::InvalidValue {
                id: item.id,
                field: "baseStartPeriod",
                value: item.base_start_period,
            });
        }
        if item.duration_periods < 0 {
            errors.push(ValidationError::InvalidValue {
                id: item.id,
                field: "durationPeriods",
                value: item.duration_periods,
            });
        }
    }
    errors
}
