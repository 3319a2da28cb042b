//! Workflow descriptor type, fallback machine, and validation

use crate::workflow::{StateId, StateNode};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Fixed identifier carried by every descriptor produced by this pipeline
pub const WORKFLOW_ID: &str = "workflow";

/// Initial state name used when a diagram registers no states
pub const DEFAULT_INITIAL_STATE: &str = "idle";

/// The workflow descriptor consumed by a state-machine runtime
///
/// Serializes to the runtime-facing shape: a top-level identifier, an
/// initial-state name, and a mapping of state name to its transition table
/// and optional terminal marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowDescriptor {
    /// Descriptor identifier, always `"workflow"`
    pub id: String,
    /// Name of the state the machine starts in
    pub initial: StateId,
    /// State registry in first-seen order
    pub states: IndexMap<StateId, StateNode>,
}

impl WorkflowDescriptor {
    /// Create a descriptor with the fixed pipeline identifier
    pub fn new(initial: StateId, states: IndexMap<StateId, StateNode>) -> Self {
        Self {
            id: WORKFLOW_ID.to_string(),
            initial,
            states,
        }
    }

    /// The fixed default machine used when a document carries no usable
    /// diagram: idle → processing → {completed|failed}
    pub fn fallback() -> Self {
        let mut idle = StateNode::default();
        idle.on
            .insert("ORDER_RECEIVED".to_string(), StateId::new("processing"));

        let mut processing = StateNode::default();
        processing
            .on
            .insert("COMPLETED".to_string(), StateId::new("completed"));
        processing
            .on
            .insert("FAILED".to_string(), StateId::new("failed"));

        let mut states = IndexMap::new();
        states.insert(StateId::new(DEFAULT_INITIAL_STATE), idle);
        states.insert(StateId::new("processing"), processing);
        states.insert(StateId::new("completed"), StateNode::final_state());
        states.insert(StateId::new("failed"), StateNode::final_state());

        Self::new(StateId::new(DEFAULT_INITIAL_STATE), states)
    }

    /// Validate the descriptor structure
    ///
    /// Advisory only; the compile pipeline never rejects a diagram. Checks
    /// that the initial state is registered (unless the registry is empty)
    /// and that every transition target is a registered state.
    pub fn validate_structure(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if !self.states.is_empty() && !self.states.contains_key(&self.initial) {
            errors.push(format!(
                "Initial state '{}' not found in workflow states. Available states: {:?}",
                self.initial,
                self.states.keys().map(|k| k.as_str()).collect::<Vec<_>>()
            ));
        }

        for (id, node) in &self.states {
            for (event, target) in &node.on {
                if !self.states.contains_key(target) {
                    errors.push(format!(
                        "Transition '{event}' on state '{id}' references non-existent target state: '{target}'"
                    ));
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Serialize the descriptor to pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a descriptor from JSON
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_descriptor_shape() {
        let descriptor = WorkflowDescriptor::fallback();

        assert_eq!(descriptor.id, "workflow");
        assert_eq!(descriptor.initial.as_str(), "idle");
        assert_eq!(descriptor.states.len(), 4);
        assert_eq!(
            descriptor.states[&StateId::new("idle")].on["ORDER_RECEIVED"],
            StateId::new("processing")
        );
        assert_eq!(
            descriptor.states[&StateId::new("processing")].on["COMPLETED"],
            StateId::new("completed")
        );
        assert_eq!(
            descriptor.states[&StateId::new("processing")].on["FAILED"],
            StateId::new("failed")
        );
        assert!(descriptor.states[&StateId::new("completed")].is_final());
        assert!(descriptor.states[&StateId::new("failed")].is_final());
    }

    #[test]
    fn test_fallback_passes_validation() {
        assert!(WorkflowDescriptor::fallback().validate_structure().is_ok());
    }

    #[test]
    fn test_validation_missing_initial_state() {
        let mut states = IndexMap::new();
        states.insert(StateId::new("draft"), StateNode::default());
        let descriptor = WorkflowDescriptor::new(StateId::new("missing"), states);

        let errors = descriptor.validate_structure().unwrap_err();
        assert!(errors.iter().any(|e| e.contains("Initial state")));
    }

    #[test]
    fn test_validation_dangling_transition_target() {
        let mut draft = StateNode::default();
        draft.on.insert("SUBMIT".to_string(), StateId::new("review"));
        let mut states = IndexMap::new();
        states.insert(StateId::new("draft"), draft);
        let descriptor = WorkflowDescriptor::new(StateId::new("draft"), states);

        let errors = descriptor.validate_structure().unwrap_err();
        assert!(errors.iter().any(|e| e.contains("non-existent target")));
    }

    #[test]
    fn test_empty_registry_validates_with_idle_initial() {
        let descriptor =
            WorkflowDescriptor::new(StateId::new(DEFAULT_INITIAL_STATE), IndexMap::new());
        assert!(descriptor.validate_structure().is_ok());
    }

    #[test]
    fn test_json_round_trip() {
        let descriptor = WorkflowDescriptor::fallback();
        let json = descriptor.to_json().unwrap();
        let restored = WorkflowDescriptor::from_json(&json).unwrap();

        assert_eq!(descriptor, restored);
    }

    #[test]
    fn test_serialized_shape() {
        let descriptor = WorkflowDescriptor::fallback();
        let value = serde_json::to_value(&descriptor).unwrap();

        assert_eq!(value["id"], "workflow");
        assert_eq!(value["initial"], "idle");
        assert_eq!(value["states"]["idle"]["on"]["ORDER_RECEIVED"], "processing");
        assert_eq!(value["states"]["completed"]["type"], "final");
        // Final states without transitions carry no `on` key.
        assert!(value["states"]["completed"].get("on").is_none());
    }
}
