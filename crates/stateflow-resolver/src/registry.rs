//! Named external validators.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use stateflow_graph::Validate;

/// Looks up external validators by the name used in configuration.
pub trait ValidatorRegistry: Send + Sync {
  fn get(&self, name: &str) -> Option<Arc<dyn Validate<Value>>>;

  /// Names of every registered validator, sorted.
  fn names(&self) -> Vec<String>;
}

/// A registry backed by a map, filled in by the host at startup.
#[derive(Clone, Default)]
pub struct InMemoryValidatorRegistry {
  validators: HashMap<String, Arc<dyn Validate<Value>>>,
}

impl InMemoryValidatorRegistry {
  pub fn new() -> Self {
    Self::default()
  }

  /// Register a validator under `name`, replacing any previous one.
  pub fn register<V>(&mut self, name: impl Into<String>, validator: V) -> &mut Self
  where
    V: Validate<Value> + 'static,
  {
    self.validators.insert(name.into(), Arc::new(validator));
    self
  }

  pub fn with<V>(mut self, name: impl Into<String>, validator: V) -> Self
  where
    V: Validate<Value> + 'static,
  {
    self.register(name, validator);
    self
  }

  pub fn len(&self) -> usize {
    self.validators.len()
  }

  pub fn is_empty(&self) -> bool {
    self.validators.is_empty()
  }
}

impl ValidatorRegistry for InMemoryValidatorRegistry {
  fn get(&self, name: &str) -> Option<Arc<dyn Validate<Value>>> {
    self.validators.get(name).cloned()
  }

  fn names(&self) -> Vec<String> {
    let mut names: Vec<String> = self.validators.keys().cloned().collect();
    names.sort();
    names
  }
}

impl std::fmt::Debug for InMemoryValidatorRegistry {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("InMemoryValidatorRegistry")
      .field("validators", &self.names())
      .finish()
  }
}
