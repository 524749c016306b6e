//! graph.rs
//! Validated, indexed form of one project's schedule: budget items as nodes,
//! timing dependencies as directed edges (trigger -> dependent).

use super::edge::{DependencyEdge, DependencyLink};
use super::item::{BudgetItem, ItemId};
use crate::resolve::ResolveError;
use crate::validation::Validator;
use petgraph::graph::NodeIndex;
use petgraph::prelude::StableDiGraph;
use petgraph::Direction;
use std::collections::{HashMap, VecDeque};

#[derive(Debug, Clone, Default)]
pub struct ScheduleGraph {
    pub(crate) graph: StableDiGraph<BudgetItem, DependencyLink>,
    index: HashMap<ItemId, NodeIndex>,
}

impl ScheduleGraph {
    /// Validates and indexes one project's authored rows.
    ///
    /// Fails fast on the first structural defect (duplicate id, dangling
    /// reference, malformed period value). Dependency rows with a null
    /// trigger mean "no dependency" and add no edge. Cycles are not checked
    /// here; they surface from `topological_order`.
    pub fn build(items: &[BudgetItem], edges: &[DependencyEdge]) -> Result<Self, ResolveError> {
        if let Some(err) = Validator::new(items, edges).first_error() {
            return Err(err.into());
        }

        let mut graph = StableDiGraph::with_capacity(items.len(), edges.len());
        let mut index = HashMap::with_capacity(items.len());

        // 1. Intern Items
        for item in items {
            let node = graph.add_node(item.clone());
            index.insert(item.id, node);
        }

        // 2. Register Edges (trigger -> dependent)
        for edge in edges {
            let Some(trigger) = edge.trigger else {
                continue;
            };
            // Validation guarantees both endpoints exist.
            let from = index[&trigger];
            let to = index[&edge.dependent];
            graph.add_edge(
                from,
                to,
                DependencyLink {
                    offset_periods: edge.offset_periods,
                    condition: edge.condition,
                },
            );
        }

        Ok(Self { graph, index })
    }

    pub fn item_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn node_of(&self, id: ItemId) -> Option<NodeIndex> {
        self.index.get(&id).copied()
    }

    pub fn item(&self, node: NodeIndex) -> &BudgetItem {
        &self.graph[node]
    }

    // --- Graph Algorithms ---

    /// Returns a topological order using Kahn's Algorithm.
    ///
    /// Guarantees every trigger appears before its dependents, which is the
    /// order the resolver needs. If the queue drains before every node is
    /// ordered, the leftover nodes all sit on (or downstream of) a cycle and
    /// are reported by id.
    pub fn topological_order(&self) -> Result<Vec<NodeIndex>, ResolveError> {
        let count = self.graph.node_count();
        let mut in_degree = vec![0usize; count];
        let mut queue = VecDeque::with_capacity(count);
        let mut order = Vec::with_capacity(count);

        // 1. Initialize In-Degrees O(N + E)
        for node in self.graph.node_indices() {
            let degree = self.graph.edges_directed(node, Direction::Incoming).count();
            in_degree[node.index()] = degree;
            if degree == 0 {
                queue.push_back(node);
            }
        }

        // 2. Process Queue
        while let Some(node) = queue.pop_front() {
            order.push(node);

            for child in self.graph.neighbors_directed(node, Direction::Outgoing) {
                let child_idx = child.index();
                in_degree[child_idx] -= 1;
                if in_degree[child_idx] == 0 {
                    queue.push_back(child);
                }
            }
        }

        if order.len() != count {
            let mut members: Vec<ItemId> = self
                .graph
                .node_indices()
                .filter(|n| in_degree[n.index()] > 0)
                .map(|n| self.graph[n].id)
                .collect();
            members.sort_unstable();
            return Err(ResolveError::CyclicDependency { members });
        }

        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::TriggerCondition;
    use crate::validation::ValidationError;

    fn site_items() -> Vec<BudgetItem> {
        vec![
            BudgetItem::new(100, 0, 4).named("Mass Grading"),
            BudgetItem::new(101, 0, 3).named("Utilities"),
            BudgetItem::new(102, 0, 6).named("Roads"),
        ]
    }

    #[test]
    fn test_build_interns_every_item() {
        let graph = ScheduleGraph::build(&site_items(), &[]).unwrap();
        assert_eq!(graph.item_count(), 3);
        let node = graph.node_of(ItemId(101)).unwrap();
        assert_eq!(graph.item(node).name, "Utilities");
        assert_eq!(graph.node_of(ItemId(999)), None);
    }

    #[test]
    fn test_build_rejects_duplicate_id() {
        let mut items = site_items();
        items.push(BudgetItem::new(100, 0, 1));
        let err = ScheduleGraph::build(&items, &[]).unwrap_err();
        assert_eq!(
            err,
            ResolveError::Validation(ValidationError::DuplicateItem { id: ItemId(100) })
        );
    }

    #[test]
    fn test_build_rejects_dangling_reference() {
        let edges = vec![DependencyEdge::new(999, 100, 0, TriggerCondition::OnFinish)];
        let err = ScheduleGraph::build(&site_items(), &edges).unwrap_err();
        assert_eq!(
            err,
            ResolveError::Validation(ValidationError::DanglingReference {
                dependent: ItemId(100),
                missing: ItemId(999),
            })
        );
    }

    #[test]
    fn test_null_trigger_adds_no_edge() {
        let edges = vec![DependencyEdge {
            trigger: None,
            dependent: ItemId(101),
            offset_periods: 2,
            condition: TriggerCondition::OnFinish,
        }];
        let graph = ScheduleGraph::build(&site_items(), &edges).unwrap();
        assert_eq!(graph.graph.edge_count(), 0);
    }

    #[test]
    fn test_topological_order_respects_dependencies() {
        // Diamond: 100 -> {101, 102}, both -> 103.
        let mut items = site_items();
        items.push(BudgetItem::new(103, 0, 8).named("Vertical Construction"));
        let edges = vec![
            DependencyEdge::new(100, 101, 0, TriggerCondition::OnFinish),
            DependencyEdge::new(100, 102, 0, TriggerCondition::OnFinish),
            DependencyEdge::new(101, 103, 0, TriggerCondition::OnFinish),
            DependencyEdge::new(102, 103, 0, TriggerCondition::OnStart),
        ];
        let graph = ScheduleGraph::build(&items, &edges).unwrap();
        let order = graph.topological_order().unwrap();

        let pos = |id: i64| {
            let node = graph.node_of(ItemId(id)).unwrap();
            order.iter().position(|&n| n == node).unwrap()
        };
        assert!(pos(100) < pos(101));
        assert!(pos(100) < pos(102));
        assert!(pos(101) < pos(103));
        assert!(pos(102) < pos(103));
    }

    #[test]
    fn test_cycle_reports_participating_ids() {
        let items = vec![
            BudgetItem::new(1, 0, 1),
            BudgetItem::new(2, 0, 1),
            BudgetItem::new(3, 0, 1),
        ];
        let edges = vec![
            DependencyEdge::new(1, 2, 0, TriggerCondition::OnFinish),
            DependencyEdge::new(2, 3, 0, TriggerCondition::OnFinish),
            DependencyEdge::new(3, 1, 0, TriggerCondition::OnFinish),
        ];
        let graph = ScheduleGraph::build(&items, &edges).unwrap();
        let err = graph.topological_order().unwrap_err();
        match err {
            ResolveError::CyclicDependency { members } => {
                assert_eq!(members, vec![ItemId(1), ItemId(2), ItemId(3)]);
            }
            other => panic!("Wrong error type: {:?}", other),
        }
    }

    #[test]
    fn test_self_dependency_is_a_cycle() {
        let items = vec![BudgetItem::new(5, 0, 2)];
        let edges = vec![DependencyEdge::new(5, 5, 1, TriggerCondition::OnFinish)];
        let graph = ScheduleGraph::build(&items, &edges).unwrap();
        let err = graph.topological_order().unwrap_err();
        assert_eq!(
            err,
            ResolveError::CyclicDependency {
                members: vec![ItemId(5)]
            }
        );
    }
}
