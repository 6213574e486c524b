use std::fmt;

use tracing::{debug, warn};

use crate::error::GraphError;
use crate::state::{StateBuilder, StateDefinition};

/// Ordered collection of states.
///
/// States are registered once and the graph is treated as read-only
/// afterwards. Declaration order is kept: it decides which initial state wins
/// and breaks priority ties during evaluation.
pub struct StateGraph<T: ?Sized> {
  name: Option<String>,
  states: Vec<StateDefinition<T>>,
}

impl<T: ?Sized> StateGraph<T> {
  pub fn new() -> Self {
    Self {
      name: None,
      states: Vec::new(),
    }
  }

  pub fn named(name: impl Into<String>) -> Self {
    Self {
      name: Some(name.into()),
      states: Vec::new(),
    }
  }

  pub fn name(&self) -> Option<&str> {
    self.name.as_deref()
  }

  /// Declare a new state.
  ///
  /// The closure configures the state through its builder. The graph is left
  /// untouched if the state is invalid or its name is already taken.
  ///
  /// # Example
  ///
  /// ```
  /// use serde_json::Value;
  /// use stateflow_graph::StateGraph;
  ///
  /// let mut graph = StateGraph::<Value>::new();
  /// graph.register("new", |s| {
  ///   s.initial_state();
  /// }).unwrap();
  /// graph.register("closed", |s| {
  ///   s.from(["new"]).requires_fields("Thing", ["thing"]);
  /// }).unwrap();
  ///
  /// assert_eq!(graph.initial().unwrap().name(), "new");
  /// ```
  pub fn register<F>(
    &mut self,
    name: impl Into<String>,
    configure: F,
  ) -> Result<&StateDefinition<T>, GraphError>
  where
    F: FnOnce(&mut StateBuilder<T>),
  {
    let mut builder = StateBuilder::new(name);
    configure(&mut builder);
    let state = builder.build()?;
    self.push(state)
  }

  /// Append an already built state.
  pub fn push(&mut self, state: StateDefinition<T>) -> Result<&StateDefinition<T>, GraphError> {
    if self.get(state.name()).is_some() {
      return Err(GraphError::DuplicateState {
        state: state.name().to_string(),
      });
    }

    if state.is_initial() {
      if let Some(existing) = self.initial() {
        warn!(
          state = %state.name(),
          initial = %existing.name(),
          "graph already has an initial state, the first one declared wins"
        );
      }
    }

    debug!(
      state = %state.name(),
      initial = state.is_initial(),
      sources = ?state.source_states(),
      priority = state.priority(),
      requirements = state.requirements().len(),
      "registered state"
    );

    self.states.push(state);
    let index = self.states.len() - 1;
    Ok(&self.states[index])
  }

  /// The first state flagged initial.
  pub fn initial(&self) -> Option<&StateDefinition<T>> {
    self.states.iter().find(|state| state.is_initial())
  }

  pub fn get(&self, name: &str) -> Option<&StateDefinition<T>> {
    self.states.iter().find(|state| state.name() == name)
  }

  /// Look up a state by name.
  pub fn find(&self, name: &str) -> Result<&StateDefinition<T>, GraphError> {
    self.get(name).ok_or_else(|| GraphError::StateNotFound {
      state: name.to_string(),
    })
  }

  pub fn states(&self) -> &[StateDefinition<T>] {
    &self.states
  }

  pub fn iter(&self) -> std::slice::Iter<'_, StateDefinition<T>> {
    self.states.iter()
  }

  pub fn len(&self) -> usize {
    self.states.len()
  }

  pub fn is_empty(&self) -> bool {
    self.states.is_empty()
  }
}

impl<T: ?Sized> Default for StateGraph<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T: ?Sized> Clone for StateGraph<T> {
  fn clone(&self) -> Self {
    Self {
      name: self.name.clone(),
      states: self.states.clone(),
    }
  }
}

impl<T: ?Sized> fmt::Debug for StateGraph<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("StateGraph")
      .field("name", &self.name)
      .field("states", &self.states)
      .finish()
  }
}

impl<'a, T: ?Sized> IntoIterator for &'a StateGraph<T> {
  type Item = &'a StateDefinition<T>;
  type IntoIter = std::slice::Iter<'a, StateDefinition<T>>;

  fn into_iter(self) -> Self::IntoIter {
    self.states.iter()
  }
}
