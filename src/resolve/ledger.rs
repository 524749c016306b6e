//! ledger.rs
//! Working storage for one resolution pass, plus the public result map.

use crate::schedule::{ItemId, ScheduleGraph, TriggerCondition};
use petgraph::graph::NodeIndex;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::BTreeMap;

/// One lower bound a dependency imposed on an item's start period.
///
/// Kept per item so the trace can show which constraint ended up binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateBound {
    pub trigger: ItemId,
    pub condition: TriggerCondition,
    pub offset_periods: i64,
    /// The resulting lower bound: reference period of the trigger + offset.
    pub bound: i64,
}

/// Dense per-node storage for an in-progress resolution pass.
///
/// Indexed by the schedule graph's node indices. Real budgets have small
/// fan-in (usually a single primary dependency), hence the inline capacity
/// on the bound lists.
#[derive(Debug, Clone, Default)]
pub struct ResolutionLedger {
    periods: Vec<Option<i64>>,
    bounds: Vec<SmallVec<[CandidateBound; 2]>>,
}

impl ResolutionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ensure_capacity(&mut self, size: usize) {
        if self.periods.len() < size {
            self.periods.resize(size, None);
            self.bounds.resize(size, SmallVec::new());
        }
    }

    #[inline(always)]
    pub fn get(&self, node: NodeIndex) -> Option<i64> {
        *self.periods.get(node.index())?
    }

    pub fn insert(&mut self, node: NodeIndex, period: i64) {
        let idx = node.index();
        if idx >= self.periods.len() {
            self.ensure_capacity(idx + 1);
        }
        self.periods[idx] = Some(period);
    }

    pub fn push_bound(&mut self, node: NodeIndex, bound: CandidateBound) {
        let idx = node.index();
        if idx >= self.bounds.len() {
            self.ensure_capacity(idx + 1);
        }
        self.bounds[idx].push(bound);
    }

    /// The candidate bounds recorded for a node, in edge order.
    pub fn bounds(&self, node: NodeIndex) -> &[CandidateBound] {
        self.bounds
            .get(node.index())
            .map(|b| b.as_slice())
            .unwrap_or(&[])
    }

    /// Snapshots the ledger into the public result map keyed by item id.
    pub fn to_result(&self, graph: &ScheduleGraph) -> ResolutionResult {
        let mut periods = BTreeMap::new();
        for node in graph.graph.node_indices() {
            if let Some(period) = self.get(node) {
                periods.insert(graph.item(node).id, period);
            }
        }
        ResolutionResult { periods }
    }
}

/// The resolved timeline: one calculated start period per input item.
///
/// Iteration order is by item id, so identical inputs render identically all
/// the way out to the API layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionResult {
    periods: BTreeMap<ItemId, i64>,
}

impl ResolutionResult {
    pub fn get(&self, id: ItemId) -> Option<i64> {
        self.periods.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.periods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ItemId, i64)> + '_ {
        self.periods.iter().map(|(&id, &p)| (id, p))
    }

    pub fn into_inner(self) -> BTreeMap<ItemId, i64> {
        self.periods
    }
}
