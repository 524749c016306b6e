//! Parallel resolution across independent projects.
//!
//! A resolution pass shares no mutable state, so a portfolio of projects
//! fans out safely one task per project.

use crate::resolve::{resolve, ResolutionResult, ResolveError};
use crate::schedule::ProjectSchedule;
use rayon::prelude::*;

/// Resolves every project in the batch, in parallel, preserving input order.
///
/// Errors are isolated per project: a cycle in one budget does not poison
/// the rest of the portfolio.
pub fn resolve_batch(
    projects: &[ProjectSchedule],
) -> Vec<Result<ResolutionResult, ResolveError>> {
    projects
        .par_iter()
        .map(|project| resolve(&project.items, &project.edges))
        .collect()
}
