//! The flow walk.

use indexmap::IndexMap;
use stateflow_graph::{Record, RequirementsResult, StateDefinition, StateGraph};
use tracing::{debug, instrument, trace};

use crate::error::FlowError;
use crate::result::FlowResult;

/// Evaluates objects against one state graph.
///
/// The evaluator only borrows the graph, so any number of evaluations can
/// share it, including from several threads.
pub struct FlowEvaluator<'g, T: ?Sized> {
  graph: &'g StateGraph<T>,
}

impl<'g, T: ?Sized> FlowEvaluator<'g, T> {
  pub fn new(graph: &'g StateGraph<T>) -> Self {
    Self { graph }
  }

  pub fn graph(&self) -> &'g StateGraph<T> {
    self.graph
  }
}

impl<'g, T: Record + ?Sized> FlowEvaluator<'g, T> {
  /// Compute the path and per-state report for `object`.
  ///
  /// Every state is scored first, independently of the walk. The walk then
  /// starts at the initial state and repeatedly enters the eligible state
  /// with the lowest priority until no state is eligible.
  #[instrument(
    name = "flow_evaluate",
    skip_all,
    fields(graph = self.graph.name().unwrap_or_default(), states = self.graph.len())
  )]
  pub fn evaluate(&self, object: &T) -> Result<FlowResult<'g, T>, FlowError> {
    if self.graph.is_empty() {
      return Err(FlowError::EmptyGraph);
    }
    let initial = self.graph.initial().ok_or(FlowError::NoInitialState)?;

    let mut results = self.score(object)?;
    let path = self.walk(initial, &results);

    for state in &path {
      if let Some(result) = results.get_mut(state.name()) {
        result.set_visited(true);
      }
    }

    // the path always holds at least the initial state
    let current = path.last().copied().unwrap_or(initial);
    if let Some(result) = results.get_mut(current.name()) {
      result.set_current(true);
    }

    debug!(
      state = %current.name(),
      path_len = path.len(),
      "flow evaluated"
    );

    Ok(FlowResult::new(self.graph, results, path))
  }

  /// Score every declared state against the object, in declaration order.
  fn score(&self, object: &T) -> Result<IndexMap<String, RequirementsResult>, FlowError> {
    let mut results = IndexMap::with_capacity(self.graph.len());
    for state in self.graph {
      let result = state.requirements_result(object)?;
      let unmet: Vec<&str> = result.unmet().collect();
      trace!(
        state = %state.name(),
        met = result.requirements_met(),
        unmet = ?unmet,
        "scored state"
      );
      results.insert(state.name().to_string(), result);
    }
    Ok(results)
  }

  fn walk(
    &self,
    initial: &'g StateDefinition<T>,
    results: &IndexMap<String, RequirementsResult>,
  ) -> Vec<&'g StateDefinition<T>> {
    let mut path = vec![initial];
    let mut current = initial;

    while let Some(next) = self.next_state(current, results) {
      debug!(
        from = %current.name(),
        to = %next.name(),
        priority = next.priority(),
        "entering state"
      );
      path.push(next);
      current = next;
    }

    path
  }

  /// The eligible state to move to from `from`, if any.
  ///
  /// `min_by_key` keeps the first of equal minimums, which gives declaration
  /// order on priority ties.
  fn next_state(
    &self,
    from: &StateDefinition<T>,
    results: &IndexMap<String, RequirementsResult>,
  ) -> Option<&'g StateDefinition<T>> {
    self
      .graph
      .iter()
      .filter(|state| state.enterable_from(from))
      .filter(|state| {
        results
          .get(state.name())
          .is_some_and(RequirementsResult::requirements_met)
      })
      .min_by_key(|state| state.priority())
  }
}

/// Evaluate objects directly on a graph.
pub trait Flow<T: ?Sized> {
  fn flow(&self, object: &T) -> Result<FlowResult<'_, T>, FlowError>;
}

impl<T: Record + ?Sized> Flow<T> for StateGraph<T> {
  fn flow(&self, object: &T) -> Result<FlowResult<'_, T>, FlowError> {
    FlowEvaluator::new(self).evaluate(object)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::{Value, json};
  use stateflow_graph::FieldPath;

  fn abc_graph() -> StateGraph<Value> {
    let mut graph = StateGraph::new();
    graph
      .register("a", |s| {
        s.initial_state();
      })
      .unwrap();
    graph
      .register("b", |s| {
        s.from(["a"]).requires_fields("B", ["b_requirement"]);
      })
      .unwrap();
    graph
      .register("c", |s| {
        s.from(["b"]).requires_fields("C", ["c_requirement"]);
      })
      .unwrap();
    graph
  }

  #[test]
  fn test_determines_state() {
    let graph = abc_graph();
    let evaluator = FlowEvaluator::new(&graph);

    let a = json!({ "b_requirement": false, "c_requirement": false });
    let b = json!({ "b_requirement": true, "c_requirement": false });
    let c = json!({ "b_requirement": true, "c_requirement": true });

    assert_eq!(evaluator.evaluate(&a).unwrap().state(), "a");
    assert_eq!(evaluator.evaluate(&b).unwrap().state(), "b");
    assert_eq!(evaluator.evaluate(&c).unwrap().state(), "c");
  }

  #[test]
  fn test_unreachable_state_is_not_entered() {
    // c's requirement holds but b, its only source, is never reached
    let graph = abc_graph();
    let result = graph
      .flow(&json!({ "b_requirement": false, "c_requirement": true }))
      .unwrap();
    assert_eq!(result.state_path(), vec!["a"]);
    assert!(result.lookup("c").unwrap().requirements_met());
    assert!(!result.lookup("c").unwrap().visited());
  }

  #[test]
  fn test_empty_graph_fails() {
    let graph = StateGraph::<Value>::new();
    let err = graph.flow(&json!({})).unwrap_err();
    assert!(matches!(err, FlowError::EmptyGraph));
    assert!(err.is_configuration());
  }

  #[test]
  fn test_graph_without_initial_state_fails() {
    let mut graph = StateGraph::<Value>::new();
    graph
      .register("orphan", |s| {
        s.from(["nowhere"]);
      })
      .unwrap();
    let err = graph.flow(&json!({})).unwrap_err();
    assert!(matches!(err, FlowError::NoInitialState));
  }

  #[test]
  fn test_lowest_priority_wins() {
    let mut graph = StateGraph::<Value>::new();
    graph
      .register("a", |s| {
        s.initial_state();
      })
      .unwrap();
    graph
      .register("slow", |s| {
        s.from(["a"]).priority(5);
      })
      .unwrap();
    graph
      .register("fast", |s| {
        s.from(["a"]).priority(1);
      })
      .unwrap();

    assert_eq!(graph.flow(&json!({})).unwrap().state(), "fast");
  }

  #[test]
  fn test_priority_tie_uses_declaration_order() {
    let mut graph = StateGraph::<Value>::new();
    graph
      .register("a", |s| {
        s.initial_state();
      })
      .unwrap();
    graph
      .register("first", |s| {
        s.from(["a"]).priority(3);
      })
      .unwrap();
    graph
      .register("second", |s| {
        s.from(["a"]).priority(3);
      })
      .unwrap();

    assert_eq!(graph.flow(&json!({})).unwrap().state(), "first");
  }

  #[test]
  fn test_accessor_error_propagates() {
    let mut graph = StateGraph::<Value>::new();
    graph
      .register("a", |s| {
        s.initial_state();
      })
      .unwrap();
    graph
      .register("b", |s| {
        s.from(["a"])
          .requires_fields("Email", [FieldPath::parse("client.email")]);
      })
      .unwrap();

    let err = graph.flow(&json!({ "client": 42 })).unwrap_err();
    match err {
      FlowError::Evaluation(e) => {
        assert_eq!(e.state, "b");
        assert_eq!(e.requirement, "Email");
      }
      other => panic!("unexpected error: {other:?}"),
    }
  }
}
