//! Defines the dependency edge types, representing a timing relationship
//! between two budget items.

use super::item::{ItemId, TriggerCondition};
use serde::{Deserialize, Serialize};

/// A directed timing constraint as authored in the budget tables.
///
/// The row form is deliberately loose: `trigger` is optional because the
/// authoring UI stores "no dependency" as a row with a null trigger, and the
/// offset may be negative to model lead time / overlap.
/// Example: "Framing starts 2 periods after Foundations finishes" is
/// `{ trigger: Foundations, dependent: Framing, offset_periods: 2, condition: OnFinish }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyEdge {
    /// The upstream item this constraint is anchored to. `None` means the
    /// dependent keeps its authored base period.
    #[serde(rename = "triggerItemId")]
    pub trigger: Option<ItemId>,
    #[serde(rename = "dependentItemId")]
    pub dependent: ItemId,
    /// Additional periods applied after the trigger condition is met.
    /// Negative values pull the dependent earlier (overlap).
    #[serde(rename = "offsetPeriods")]
    pub offset_periods: i64,
    #[serde(rename = "triggerCondition")]
    pub condition: TriggerCondition,
}

impl DependencyEdge {
    pub fn new(
        trigger: i64,
        dependent: i64,
        offset_periods: i64,
        condition: TriggerCondition,
    ) -> Self {
        Self {
            trigger: Some(ItemId(trigger)),
            dependent: ItemId(dependent),
            offset_periods,
            condition,
        }
    }
}

/// The normalized edge weight stored in the schedule graph, after null
/// triggers have been filtered out and identifiers interned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DependencyLink {
    pub offset_periods: i64,
    pub condition: TriggerCondition,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_round_trips_wire_field_names() {
        let edge = DependencyEdge::new(100, 101, 1, TriggerCondition::OnFinish);
        let json = serde_json::to_string(&edge).unwrap();
        assert!(json.contains("\"triggerItemId\":100"), "json: {}", json);
        assert!(json.contains("\"dependentItemId\":101"), "json: {}", json);

        let back: DependencyEdge = serde_json::from_str(&json).unwrap();
        assert_eq!(back, edge);
    }

    #[test]
    fn test_null_trigger_deserializes_to_none() {
        let json = r#"{"triggerItemId":null,"dependentItemId":5,"offsetPeriods":0,"triggerCondition":"onStart"}"#;
        let edge: DependencyEdge = serde_json::from_str(json).unwrap();
        assert_eq!(edge.trigger, None);
    }
}
