use thiserror::Error;

/// Errors raised while building or querying a state graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
  /// A non-initial state was declared without any source state.
  #[error("cannot have a non-initial state with no source states: '{state}'")]
  MissingSourceStates { state: String },

  /// A state with the same name is already registered.
  #[error("duplicate state: {state}")]
  DuplicateState { state: String },

  /// No state with this name exists in the graph.
  #[error("state not found: {state}")]
  StateNotFound { state: String },
}

/// Errors raised while resolving a field on the evaluated object.
///
/// These mean the object does not fit the validator, which is different from
/// a requirement that is simply not met.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
  /// The value a field was resolved on is not a record.
  #[error("cannot resolve field '{field}' on {found} value")]
  NotARecord { field: String, found: String },

  /// A host accessor failed.
  #[error("failed to access field '{field}': {message}")]
  Access { field: String, message: String },
}

/// A requirement could not be evaluated against an object.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("requirement '{requirement}' of state '{state}' could not be evaluated")]
pub struct EvaluationError {
  pub state: String,
  pub requirement: String,
  #[source]
  pub source: FieldError,
}
