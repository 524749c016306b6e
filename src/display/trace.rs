use crate::resolve::{CandidateBound, ResolutionLedger};
use crate::schedule::{ItemId, ScheduleGraph, TriggerCondition};
use petgraph::graph::NodeIndex;
use std::collections::HashMap;
use std::fmt::Write;

/// Renders a human-readable derivation tree for one item's resolved start
/// period: every dependency that imposed a bound, and which one was binding.
pub fn format_trace(graph: &ScheduleGraph, ledger: &ResolutionLedger, target: ItemId) -> String {
    let mut tracer = Tracer {
        graph,
        ledger,
        visited_at_level: HashMap::new(),
        output: String::new(),
    };

    match graph.node_of(target) {
        Some(node) => {
            let label = graph.item(node).label();
            let _ = writeln!(tracer.output, "TIMELINE TRACE for '{}':", label);
            let _ = writeln!(tracer.output, "--------------------------------------------------");
            tracer.trace_node(node, 1, "");
        }
        None => {
            let _ = writeln!(tracer.output, "Error: Unknown item id {}", target);
        }
    }
    tracer.output
}

struct Tracer<'a> {
    graph: &'a ScheduleGraph,
    ledger: &'a ResolutionLedger,
    visited_at_level: HashMap<NodeIndex, usize>,
    output: String,
}

impl<'a> Tracer<'a> {
    fn trace_node(&mut self, node: NodeIndex, level: usize, prefix: &str) {
        if let Some(&first_seen) = self.visited_at_level.get(&node) {
            let _ = writeln!(self.output, "{}-> (Ref to L{})", prefix, first_seen);
            return;
        }
        self.visited_at_level.insert(node, level);

        let item = self.graph.item(node);
        let period = self.ledger.get(node);
        let bounds = self.ledger.bounds(node);

        let period_str = match period {
            Some(p) => p.to_string(),
            None => "?".to_string(), // Ledger was not run for this node
        };

        if bounds.is_empty() {
            let _ = writeln!(
                self.output,
                "{}[L{}] {} -> period {} (base)",
                prefix,
                level,
                item.label(),
                period_str
            );
            return;
        }

        let _ = writeln!(
            self.output,
            "{}[L{}] {} -> period {}",
            prefix,
            level,
            item.label(),
            period_str
        );

        let latest = bounds.iter().map(|b| b.bound).max().unwrap_or(0);
        let child_prefix = format!("{}   ", prefix);

        for bound in bounds {
            let _ = writeln!(
                self.output,
                "{}|  {} => {}{}",
                prefix,
                self.format_bound(bound),
                bound.bound,
                if bound.bound == latest { " [binding]" } else { "" }
            );
            if let Some(trigger_node) = self.graph.node_of(bound.trigger) {
                self.trace_node(trigger_node, level + 1, &child_prefix);
            }
        }
    }

    fn format_bound(&self, bound: &CandidateBound) -> String {
        let trigger_label = self
            .graph
            .node_of(bound.trigger)
            .map(|n| self.graph.item(n).label())
            .unwrap_or_else(|| format!("item {}", bound.trigger));
        let verb = match bound.condition {
            TriggerCondition::OnStart => "starts",
            TriggerCondition::OnFinish => "finishes",
        };
        format!(
            "after '{}' {} {:+} periods",
            trigger_label, verb, bound.offset_periods
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::TimelineResolver;
    use crate::schedule::{BudgetItem, DependencyEdge};

    fn resolved_sitework() -> (ScheduleGraph, ResolutionLedger) {
        let items = vec![
            BudgetItem::new(100, 0, 4).named("Mass Grading"),
            BudgetItem::new(101, 0, 3).named("Utilities"),
            BudgetItem::new(103, 0, 8).named("Vertical Construction"),
        ];
        let edges = vec![
            DependencyEdge::new(100, 101, 1, TriggerCondition::OnFinish),
            DependencyEdge::new(101, 103, 1, TriggerCondition::OnFinish),
        ];
        let graph = ScheduleGraph::build(&items, &edges).unwrap();
        let mut ledger = ResolutionLedger::new();
        TimelineResolver::new(&graph).resolve(&mut ledger).unwrap();
        (graph, ledger)
    }

    #[test]
    fn test_trace_walks_the_dependency_chain() {
        let (graph, ledger) = resolved_sitework();
        let trace = format_trace(&graph, &ledger, ItemId(103));

        assert!(trace.contains("TIMELINE TRACE for 'Vertical Construction'"));
        assert!(trace.contains("[L1] Vertical Construction -> period 9"));
        assert!(trace.contains("after 'Utilities' finishes +1 periods => 9 [binding]"));
        assert!(trace.contains("[L2] Utilities -> period 5"));
        assert!(trace.contains("[L3] Mass Grading -> period 0 (base)"));
    }

    #[test]
    fn test_trace_marks_only_the_binding_constraint() {
        let items = vec![
            BudgetItem::new(1, 0, 2).named("Permits"),
            BudgetItem::new(2, 0, 9).named("Roads"),
            BudgetItem::new(3, 0, 1).named("Paving"),
        ];
        let edges = vec![
            DependencyEdge::new(1, 3, 0, TriggerCondition::OnFinish),
            DependencyEdge::new(2, 3, 0, TriggerCondition::OnFinish),
        ];
        let graph = ScheduleGraph::build(&items, &edges).unwrap();
        let mut ledger = ResolutionLedger::new();
        TimelineResolver::new(&graph).resolve(&mut ledger).unwrap();

        let trace = format_trace(&graph, &ledger, ItemId(3));
        assert!(trace.contains("after 'Roads' finishes +0 periods => 9 [binding]"));
        assert!(trace.contains("after 'Permits' finishes +0 periods => 2\n"));
    }

    #[test]
    fn test_trace_reports_unknown_item() {
        let (graph, ledger) = resolved_sitework();
        let trace = format_trace(&graph, &ledger, ItemId(999));
        assert!(trace.contains("Unknown item id 999"));
    }
}
