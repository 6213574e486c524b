use stateflow_graph::GraphError;
use thiserror::Error;

/// Errors that can occur during graph resolution.
#[derive(Debug, Error)]
pub enum ResolveError {
  /// A requirement must name fields or a validator, not both or neither.
  #[error("invalid requirement '{message}' in state '{state}': {reason}")]
  InvalidRequirement {
    state: String,
    message: String,
    reason: String,
  },

  /// A field descriptor could not be turned into a field path.
  #[error("invalid field descriptor in state '{state}': {reason}")]
  InvalidField { state: String, reason: String },

  /// Validator not found in the registry.
  #[error("validator not found: {name} (used by state '{state}')")]
  ValidatorNotFound { state: String, name: String },

  /// A state names a source state that is not declared.
  #[error("state '{state}' is entered from unknown state '{source_state}'")]
  UnknownSourceState { state: String, source_state: String },

  /// No state is flagged initial.
  #[error("graph '{graph}' has no initial state")]
  NoInitialState { graph: String },

  /// The state itself is invalid.
  #[error(transparent)]
  Graph(#[from] GraphError),
}
