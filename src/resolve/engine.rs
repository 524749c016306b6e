//! A synchronous, single-threaded timeline resolution engine.

use crate::resolve::error::ResolveError;
use crate::resolve::ledger::{CandidateBound, ResolutionLedger, ResolutionResult};
use crate::schedule::{BudgetItem, DependencyEdge, ScheduleGraph, TriggerCondition};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use std::cmp::max;

/// Computes a calculated start period for every item in a schedule graph.
///
/// The resolver is a pure function over its inputs: it borrows the graph for
/// one pass, writes into the caller's ledger, and keeps no state between
/// calls. Identical inputs always produce identical outputs.
pub struct TimelineResolver<'a> {
    graph: &'a ScheduleGraph,
}

impl<'a> TimelineResolver<'a> {
    pub fn new(graph: &'a ScheduleGraph) -> Self {
        Self { graph }
    }

    /// Runs one resolution pass into `ledger`.
    ///
    /// Items with no incoming dependency keep their authored base period.
    /// Every other item starts at the latest lower bound its dependencies
    /// impose, clamped at period 0: each incoming edge contributes
    /// `reference(trigger, condition) + offset`, where the reference is the
    /// trigger's resolved start (on-start) or its resolved start plus its
    /// duration (on-finish).
    pub fn resolve(&self, ledger: &mut ResolutionLedger) -> Result<(), ResolveError> {
        // The order guarantees every trigger is resolved before its
        // dependents, and doubles as the cycle check.
        let order = self.graph.topological_order()?;
        ledger.ensure_capacity(self.graph.item_count());

        for node in order {
            let mut latest_bound: Option<i64> = None;

            for edge in self.graph.graph.edges_directed(node, Direction::Incoming) {
                let trigger = self.graph.item(edge.source());
                let link = edge.weight();

                let trigger_start = ledger
                    .get(edge.source())
                    .expect("BUG: Trigger must be resolved before its dependents");
                let reference = match link.condition {
                    TriggerCondition::OnStart => trigger_start,
                    TriggerCondition::OnFinish => trigger_start + trigger.duration_periods,
                };
                let bound = reference + link.offset_periods;

                ledger.push_bound(
                    node,
                    CandidateBound {
                        trigger: trigger.id,
                        condition: link.condition,
                        offset_periods: link.offset_periods,
                        bound,
                    },
                );
                latest_bound = Some(latest_bound.map_or(bound, |b| max(b, bound)));
            }

            let period = match latest_bound {
                // Dependent items are driven entirely by their dependencies;
                // a negative bound (large overlap) clamps to the project start.
                Some(bound) => max(bound, 0),
                None => self.graph.item(node).base_start_period,
            };
            ledger.insert(node, period);
        }

        Ok(())
    }
}

/// Resolves a project's timeline in one call: validate, index, propagate.
///
/// This is the whole public contract for callers that don't need the trace:
/// all-or-nothing, no partial results on failure.
pub fn resolve(
    items: &[BudgetItem],
    edges: &[DependencyEdge],
) -> Result<ResolutionResult, ResolveError> {
    let graph = ScheduleGraph::build(items, edges)?;
    let mut ledger = ResolutionLedger::new();
    TimelineResolver::new(&graph).resolve(&mut ledger)?;
    Ok(ledger.to_result(&graph))
}
