//! State-related types for workflow descriptors

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when creating state-related types
#[derive(Debug, Error)]
pub enum StateError {
    /// State ID cannot be empty or whitespace only
    #[error("State ID cannot be empty or whitespace only")]
    EmptyStateId,
}

/// Result type for state operations
pub type StateResult<T> = Result<T, StateError>;

/// Unique identifier for workflow states
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StateId(String);

impl StateId {
    /// Create a new state ID
    ///
    /// # Panics
    /// Panics if the ID is empty or whitespace only. For non-panicking creation,
    /// use `try_new` instead.
    pub fn new(id: impl Into<String>) -> Self {
        Self::try_new(id).expect("State ID cannot be empty or whitespace only")
    }

    /// Create a new state ID, returning an error for invalid input
    pub fn try_new(id: impl Into<String>) -> StateResult<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(StateError::EmptyStateId);
        }
        Ok(Self(id))
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for StateId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for StateId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for StateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Marker for terminal states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StateType {
    /// The machine stops once this state is entered
    Final,
}

impl StateType {
    /// Get the string representation of the state type
    pub fn as_str(&self) -> &'static str {
        match self {
            StateType::Final => "final",
        }
    }
}

/// A single entry in the state registry
///
/// Terminal marking and outgoing transitions are independent: a state marked
/// final keeps any transitions declared for it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StateNode {
    /// Outgoing transitions keyed by event name
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub on: IndexMap<String, StateId>,
    /// Terminal marker, present only for final states
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub state_type: Option<StateType>,
}

impl StateNode {
    /// Create a node marked terminal with no outgoing transitions
    pub fn final_state() -> Self {
        Self {
            on: IndexMap::new(),
            state_type: Some(StateType::Final),
        }
    }

    /// Whether this state is marked terminal
    pub fn is_final(&self) -> bool {
        matches!(self.state_type, Some(StateType::Final))
    }
}
