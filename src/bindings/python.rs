use crate::display::trace;
use crate::resolve::{resolve, ResolutionLedger, ResolveError, TimelineResolver};
use crate::schedule::{
    BudgetItem, DependencyEdge, ItemId, ProjectSchedule, ScheduleGraph, TriggerCondition,
};
use crate::validation::Validator;
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use std::collections::BTreeMap;

fn to_py_err(e: ResolveError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// Builder-style wrapper the Python backend uses to assemble one project's
/// schedule and run the "calculate timeline" action.
///
/// The wrapper only accumulates rows; validation and resolution happen
/// per-call, so every `resolve()` is a pure function of the rows present.
#[pyclass(name = "_TimelineGraph")]
#[derive(Debug, Clone, Default)]
pub struct PyTimelineGraph {
    items: Vec<BudgetItem>,
    edges: Vec<DependencyEdge>,
}

#[pymethods]
impl PyTimelineGraph {
    #[new]
    pub fn new() -> Self {
        Self::default()
    }

    #[pyo3(signature = (id, base_start_period, duration_periods, name=None))]
    pub fn add_item(
        &mut self,
        id: i64,
        base_start_period: i64,
        duration_periods: i64,
        name: Option<String>,
    ) {
        let mut item = BudgetItem::new(id, base_start_period, duration_periods);
        if let Some(name) = name {
            item.name = name;
        }
        self.items.push(item);
    }

    #[pyo3(signature = (trigger_item_id, dependent_item_id, offset_periods, trigger_condition))]
    pub fn add_dependency(
        &mut self,
        trigger_item_id: Option<i64>,
        dependent_item_id: i64,
        offset_periods: i64,
        trigger_condition: &str,
    ) -> PyResult<()> {
        let condition = match trigger_condition {
            "onStart" => TriggerCondition::OnStart,
            "onFinish" => TriggerCondition::OnFinish,
            _ => return Err(PyValueError::new_err("Invalid trigger condition")),
        };
        self.edges.push(DependencyEdge {
            trigger: trigger_item_id.map(ItemId),
            dependent: ItemId(dependent_item_id),
            offset_periods,
            condition,
        });
        Ok(())
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Runs the full pass and returns `{item_id: calculated_start_period}`.
    pub fn resolve(&self) -> PyResult<BTreeMap<i64, i64>> {
        resolve(&self.items, &self.edges)
            .map(|result| {
                result
                    .into_inner()
                    .into_iter()
                    .map(|(id, period)| (id.0, period))
                    .collect()
            })
            .map_err(to_py_err)
    }

    pub fn validate(&self) -> PyResult<()> {
        Validator::new(&self.items, &self.edges)
            .validate()
            .map_err(|errs| {
                let msg = errs
                    .iter()
                    .map(|e| e.to_string())
                    .collect::<Vec<_>>()
                    .join("\n");
                PyValueError::new_err(msg)
            })
    }

    pub fn trace_item(&self, item_id: i64) -> PyResult<String> {
        let graph = ScheduleGraph::build(&self.items, &self.edges).map_err(to_py_err)?;
        let mut ledger = ResolutionLedger::new();
        TimelineResolver::new(&graph)
            .resolve(&mut ledger)
            .map_err(to_py_err)?;
        Ok(trace::format_trace(&graph, &ledger, ItemId(item_id)))
    }
}

/// One-shot entry point for callers that already hold a persisted snapshot:
/// JSON in, `{item_id: period}` JSON out.
#[pyfunction]
pub fn resolve_snapshot_json(payload: &str) -> PyResult<String> {
    let snapshot =
        ProjectSchedule::from_json(payload).map_err(|e| PyValueError::new_err(e.to_string()))?;
    let result = snapshot.resolve().map_err(to_py_err)?;
    serde_json::to_string(&result.into_inner()).map_err(|e| PyRuntimeError::new_err(e.to_string()))
}
