//! Evaluation errors.

use stateflow_graph::EvaluationError;

/// Errors that can occur while evaluating a flow.
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
  /// The graph has no states at all.
  #[error("state graph has no states")]
  EmptyGraph,

  /// No state in the graph is flagged initial.
  #[error("state graph has no initial state")]
  NoInitialState,

  /// Lookup of a state that is not declared in the graph.
  #[error("state '{state}' not found in flow")]
  StateNotFound { state: String },

  /// The object could not be evaluated against a requirement.
  #[error(transparent)]
  Evaluation(#[from] EvaluationError),
}

impl FlowError {
  /// Whether the error comes from a misconfigured graph rather than the object.
  pub fn is_configuration(&self) -> bool {
    matches!(self, FlowError::EmptyGraph | FlowError::NoInitialState)
  }
}
