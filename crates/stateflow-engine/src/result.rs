//! Evaluation results.

use std::fmt;

use indexmap::IndexMap;
use stateflow_graph::{RequirementsResult, StateDefinition, StateGraph};

use crate::error::FlowError;
use crate::report::{FlowReport, RequirementReport, StateReport};

/// Result of evaluating one object against a state graph.
///
/// Holds one [`RequirementsResult`] per declared state, in declaration order,
/// and the path walked from the initial state. Everything is computed when
/// the result is created; the accessors only read.
pub struct FlowResult<'g, T: ?Sized> {
  graph: &'g StateGraph<T>,
  results: IndexMap<String, RequirementsResult>,
  path: Vec<&'g StateDefinition<T>>,
}

impl<'g, T: ?Sized> FlowResult<'g, T> {
  pub(crate) fn new(
    graph: &'g StateGraph<T>,
    results: IndexMap<String, RequirementsResult>,
    path: Vec<&'g StateDefinition<T>>,
  ) -> Self {
    debug_assert!(!path.is_empty(), "flow path must contain the initial state");
    Self {
      graph,
      results,
      path,
    }
  }

  /// Name of the current state.
  pub fn state(&self) -> &'g str {
    self.current_state().name()
  }

  pub fn current_state_name(&self) -> &'g str {
    self.state()
  }

  /// The current state: the last state on the path.
  pub fn current_state(&self) -> &'g StateDefinition<T> {
    self.path[self.path.len() - 1]
  }

  /// Names of the states walked, starting with the initial state.
  pub fn state_path(&self) -> Vec<&'g str> {
    self.path.iter().map(|state| state.name()).collect()
  }

  pub fn path(&self) -> &[&'g StateDefinition<T>] {
    &self.path
  }

  pub fn graph(&self) -> &'g StateGraph<T> {
    self.graph
  }

  pub fn get(&self, name: &str) -> Option<&RequirementsResult> {
    self.results.get(name)
  }

  /// The requirements result of a declared state.
  pub fn lookup(&self, name: &str) -> Result<&RequirementsResult, FlowError> {
    self.get(name).ok_or_else(|| FlowError::StateNotFound {
      state: name.to_string(),
    })
  }

  /// Whether the named state is on the path.
  pub fn visited(&self, name: &str) -> Result<bool, FlowError> {
    self.lookup(name).map(RequirementsResult::visited)
  }

  /// Whether the named state is the current state.
  pub fn current(&self, name: &str) -> Result<bool, FlowError> {
    self.lookup(name).map(RequirementsResult::current)
  }

  /// Iterate over every state's result in declaration order.
  ///
  /// Each call starts a fresh pass.
  pub fn iter(&self) -> impl Iterator<Item = (&str, &RequirementsResult)> + '_ {
    self
      .results
      .iter()
      .map(|(name, result)| (name.as_str(), result))
  }

  pub fn len(&self) -> usize {
    self.results.len()
  }

  pub fn is_empty(&self) -> bool {
    self.results.is_empty()
  }

  /// A serializable snapshot of this result.
  pub fn report(&self) -> FlowReport {
    FlowReport {
      graph: self.graph.name().map(str::to_string),
      state: self.state().to_string(),
      path: self.state_path().into_iter().map(str::to_string).collect(),
      states: self
        .iter()
        .map(|(name, result)| StateReport {
          name: name.to_string(),
          visited: result.visited(),
          current: result.current(),
          requirements_met: result.requirements_met(),
          requirements: result
            .iter()
            .map(|(message, met)| RequirementReport {
              message: message.to_string(),
              met,
            })
            .collect(),
        })
        .collect(),
    }
  }
}

impl<'a, T: ?Sized> IntoIterator for &'a FlowResult<'_, T> {
  type Item = (&'a String, &'a RequirementsResult);
  type IntoIter = indexmap::map::Iter<'a, String, RequirementsResult>;

  fn into_iter(self) -> Self::IntoIter {
    self.results.iter()
  }
}

impl<T: ?Sized> fmt::Debug for FlowResult<'_, T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("FlowResult")
      .field("state", &self.state())
      .field("path", &self.state_path())
      .field("results", &self.results)
      .finish()
  }
}
