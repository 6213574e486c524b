use std::fmt;

use crate::error::{EvaluationError, GraphError};
use crate::field::FieldPath;
use crate::record::{Record, Truthy};
use crate::requirement::Requirement;
use crate::result::RequirementsResult;
use crate::validator::{Validate, Validator};

/// A named node in a state graph.
///
/// Built through [`StateBuilder`] and immutable afterwards.
pub struct StateDefinition<T: ?Sized> {
  name: String,
  initial: bool,
  source_states: Vec<String>,
  priority: i64,
  requirements: Vec<Requirement<T>>,
}

impl<T: ?Sized> StateDefinition<T> {
  pub fn builder(name: impl Into<String>) -> StateBuilder<T> {
    StateBuilder::new(name)
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn is_initial(&self) -> bool {
    self.initial
  }

  /// Names of the states this state can be entered from.
  pub fn source_states(&self) -> &[String] {
    &self.source_states
  }

  pub fn priority(&self) -> i64 {
    self.priority
  }

  pub fn requirements(&self) -> &[Requirement<T>] {
    &self.requirements
  }

  /// Whether this state can be entered from `state`.
  pub fn enterable_from(&self, state: &StateDefinition<T>) -> bool {
    self.enterable_from_name(state.name())
  }

  pub fn enterable_from_name(&self, name: &str) -> bool {
    self.source_states.iter().any(|source| source == name)
  }
}

impl<T: Record + ?Sized> StateDefinition<T> {
  /// Evaluate every requirement against `object`, in declaration order.
  pub fn requirements_result(&self, object: &T) -> Result<RequirementsResult, EvaluationError> {
    let mut pairs = Vec::with_capacity(self.requirements.len());
    for req in &self.requirements {
      let met = self.check(req, object)?;
      pairs.push((req.message().to_string(), met));
    }

    Ok(RequirementsResult::new(self.name.clone(), pairs))
  }

  /// Whether every requirement holds. Stops at the first one that does not.
  pub fn requirements_met(&self, object: &T) -> Result<bool, EvaluationError> {
    for req in &self.requirements {
      if !self.check(req, object)? {
        return Ok(false);
      }
    }
    Ok(true)
  }

  fn check(&self, req: &Requirement<T>, object: &T) -> Result<bool, EvaluationError> {
    req.validate(object).map_err(|source| EvaluationError {
      state: self.name.clone(),
      requirement: req.message().to_string(),
      source,
    })
  }
}

impl<T: ?Sized> Clone for StateDefinition<T> {
  fn clone(&self) -> Self {
    Self {
      name: self.name.clone(),
      initial: self.initial,
      source_states: self.source_states.clone(),
      priority: self.priority,
      requirements: self.requirements.clone(),
    }
  }
}

impl<T: ?Sized> fmt::Debug for StateDefinition<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("StateDefinition")
      .field("name", &self.name)
      .field("initial", &self.initial)
      .field("source_states", &self.source_states)
      .field("priority", &self.priority)
      .field("requirements", &self.requirements)
      .finish()
  }
}

/// Builder for a [`StateDefinition`].
///
/// # Example
///
/// ```
/// use serde_json::Value;
/// use stateflow_graph::StateBuilder;
///
/// let state = StateBuilder::<Value>::new("pending")
///   .from(["potential"])
///   .priority(1)
///   .requires_fields("Address", ["address"])
///   .build()
///   .unwrap();
///
/// assert_eq!(state.priority(), 1);
/// ```
pub struct StateBuilder<T: ?Sized> {
  name: String,
  initial: bool,
  source_states: Vec<String>,
  priority: i64,
  requirements: Vec<Requirement<T>>,
}

impl<T: ?Sized> StateBuilder<T> {
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      initial: false,
      source_states: Vec::new(),
      priority: 0,
      requirements: Vec::new(),
    }
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  /// Add source states. Repeated calls accumulate.
  pub fn from<I, S>(&mut self, states: I) -> &mut Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    for state in states {
      let state = state.into();
      if !self.source_states.contains(&state) {
        self.source_states.push(state);
      }
    }
    self
  }

  pub fn initial_state(&mut self) -> &mut Self {
    self.initial = true;
    self
  }

  /// Add `delta` to the priority. Repeated calls sum; lower values win.
  pub fn priority(&mut self, delta: i64) -> &mut Self {
    self.priority += delta;
    self
  }

  pub fn current_priority(&self) -> i64 {
    self.priority
  }

  /// Add a requirement backed by any validator, field path or field name.
  pub fn requires(
    &mut self,
    message: impl Into<String>,
    validator: impl Into<Validator<T>>,
  ) -> &mut Self {
    self.requirements.push(Requirement::new(message, validator));
    self
  }

  /// Add a requirement that every listed field is present.
  pub fn requires_fields<I, F>(&mut self, message: impl Into<String>, fields: I) -> &mut Self
  where
    I: IntoIterator<Item = F>,
    F: Into<FieldPath>,
  {
    self.requires(message, Validator::fields(fields))
  }

  /// Add a requirement backed by a predicate on the object.
  pub fn requires_that<F, R>(&mut self, message: impl Into<String>, predicate: F) -> &mut Self
  where
    T: 'static,
    F: Fn(&T) -> R + Send + Sync + 'static,
    R: Truthy + 'static,
  {
    self.requires(message, Validator::predicate(predicate))
  }

  /// Add a requirement backed by an external validator.
  pub fn requires_validator<V>(&mut self, message: impl Into<String>, validator: V) -> &mut Self
  where
    V: Validate<T> + 'static,
  {
    self.requires(message, Validator::external(validator))
  }

  /// Build the state, checking that a non-initial state has a source.
  pub fn build(&self) -> Result<StateDefinition<T>, GraphError> {
    if !self.initial && self.source_states.is_empty() {
      return Err(GraphError::MissingSourceStates {
        state: self.name.clone(),
      });
    }

    Ok(StateDefinition {
      name: self.name.clone(),
      initial: self.initial,
      source_states: self.source_states.clone(),
      priority: self.priority,
      requirements: self.requirements.clone(),
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::validator::ValidatorKind;
  use serde_json::{Value, json};

  #[test]
  fn test_requirements_met() {
    let state = StateBuilder::<Value>::new("pending")
      .from(["initial"])
      .requires_fields("Address", ["address"])
      .requires_fields("City", ["city"])
      .build()
      .unwrap();

    let tobject = json!({ "address": "123 Fake Street", "city": "Winnipeg" });
    let fobject = json!({ "address": "123 Fake Street", "city": "" });
    assert!(state.requirements_met(&tobject).unwrap());
    assert!(!state.requirements_met(&fobject).unwrap());
  }

  #[test]
  fn test_priority_accumulates() {
    let mut builder = StateBuilder::<Value>::new("void");
    builder.from(["initial"]).priority(1);
    assert_eq!(builder.current_priority(), 1);
    builder.priority(2).priority(-1);
    assert_eq!(builder.build().unwrap().priority(), 2);
  }

  #[test]
  fn test_from_accumulates_without_duplicates() {
    let state = StateBuilder::<Value>::new("closed")
      .from(["new"])
      .from(["open", "new"])
      .build()
      .unwrap();
    assert_eq!(state.source_states(), &["new".to_string(), "open".to_string()]);
  }

  #[test]
  fn test_non_initial_state_needs_source() {
    let result = StateBuilder::<Value>::new("closed").build();
    assert_eq!(
      result.unwrap_err(),
      GraphError::MissingSourceStates {
        state: "closed".to_string()
      }
    );
  }

  #[test]
  fn test_initial_state_needs_no_source() {
    let state = StateBuilder::<Value>::new("new")
      .initial_state()
      .build()
      .unwrap();
    assert!(state.is_initial());
    assert!(state.source_states().is_empty());
  }

  #[test]
  fn test_validator_selection() {
    let state = StateBuilder::<Value>::new("closed")
      .from(["new"])
      .requires("Thing", "thing")
      .requires_that("Answer", |_: &Value| 42 > 0)
      .requires_validator("Rule", |object: &Value| object.is_object())
      .build()
      .unwrap();

    let kinds: Vec<ValidatorKind> = state
      .requirements()
      .iter()
      .map(|req| req.validator().kind())
      .collect();
    assert_eq!(
      kinds,
      vec![
        ValidatorKind::Fields,
        ValidatorKind::Predicate,
        ValidatorKind::External
      ]
    );
    assert_eq!(state.requirements()[0].message(), "Thing");
  }

  #[test]
  fn test_requirements_result_report() {
    let state = StateBuilder::<Value>::new("second")
      .from(["initial"])
      .requires_fields("Thing A", ["a"])
      .requires_fields("Thing B", ["b"])
      .build()
      .unwrap();

    let result = state
      .requirements_result(&json!({ "a": true, "b": false }))
      .unwrap();
    assert_eq!(result.state_name(), "second");
    assert_eq!(
      result.requirements(),
      &[("Thing A".to_string(), true), ("Thing B".to_string(), false)]
    );
    assert!(!result.visited());
    assert!(!result.current());
  }

  #[test]
  fn test_requirements_result_reports_accessor_errors() {
    let state = StateBuilder::<Value>::new("second")
      .from(["initial"])
      .requires_fields("Client email", [FieldPath::parse("client.email")])
      .build()
      .unwrap();

    let err = state
      .requirements_result(&json!({ "client": "not an object" }))
      .unwrap_err();
    assert_eq!(err.state, "second");
    assert_eq!(err.requirement, "Client email");
  }

  #[test]
  fn test_enterable_from() {
    let frm = StateBuilder::<Value>::new("initial")
      .initial_state()
      .build()
      .unwrap();
    let to = StateBuilder::<Value>::new("second")
      .from(["initial"])
      .build()
      .unwrap();
    assert!(to.enterable_from(&frm));
    assert!(!frm.enterable_from(&to));
  }
}
