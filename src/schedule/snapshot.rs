//! Serialization surface for one project's schedule.
//!
//! The web backend persists budget snapshots as JSON and replays them into
//! the core for resolution; this is the shape of that payload.

use super::edge::DependencyEdge;
use super::item::BudgetItem;
use crate::resolve::{resolve, ResolutionResult, ResolveError};
use serde::{Deserialize, Serialize};

/// The unit of persistence and transport: everything the resolver needs to
/// know about one project, as plain data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectSchedule {
    #[serde(default)]
    pub name: String,
    pub items: Vec<BudgetItem>,
    pub edges: Vec<DependencyEdge>,
}

impl ProjectSchedule {
    pub fn from_json(payload: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(payload)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Resolves this snapshot in one call. The snapshot is not mutated; the
    /// caller owns writing resolved periods back to storage.
    pub fn resolve(&self) -> Result<ResolutionResult, ResolveError> {
        resolve(&self.items, &self.edges)
    }
}
