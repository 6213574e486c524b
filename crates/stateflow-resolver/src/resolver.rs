use std::collections::HashSet;

use serde_json::Value;
use stateflow_config::{FieldDescriptor, GraphDef, RequirementDef, StateDef};
use stateflow_graph::{FieldPath, StateBuilder, StateDefinition, StateGraph, Validator};
use tracing::{debug, info};

use crate::error::ResolveError;
use crate::registry::ValidatorRegistry;

/// Resolver transforms a GraphDef into an evaluable StateGraph.
pub trait Resolver: Send + Sync {
  /// Resolve a graph definition.
  ///
  /// This process:
  /// 1. Validates that every source state is declared
  /// 2. Resolves validator names through the registry
  /// 3. Builds each state and registers it in declaration order
  fn resolve(&self, def: GraphDef) -> Result<StateGraph<Value>, ResolveError>;
}

/// Standard resolver implementation that uses a validator registry.
pub struct StandardResolver<R: ValidatorRegistry> {
  registry: R,
}

impl<R: ValidatorRegistry> StandardResolver<R> {
  pub fn new(registry: R) -> Self {
    Self { registry }
  }

  pub fn registry(&self) -> &R {
    &self.registry
  }

  /// Validate that all source states reference declared states.
  fn validate_sources(&self, states: &[StateDef]) -> Result<(), ResolveError> {
    let names: HashSet<&str> = states.iter().map(|s| s.name.as_str()).collect();
    for state in states {
      for source in &state.from {
        if !names.contains(source.as_str()) {
          return Err(ResolveError::UnknownSourceState {
            state: state.name.clone(),
            source_state: source.clone(),
          });
        }
      }
    }
    Ok(())
  }

  fn resolve_state(&self, def: StateDef) -> Result<StateDefinition<Value>, ResolveError> {
    let mut builder = StateBuilder::new(def.name.clone());
    builder.from(def.from).priority(def.priority);
    if def.initial {
      builder.initial_state();
    }

    for req in def.requires {
      let (message, validator) = self.resolve_requirement(&def.name, req)?;
      builder.requires(message, validator);
    }

    Ok(builder.build()?)
  }

  fn resolve_requirement(
    &self,
    state: &str,
    req: RequirementDef,
  ) -> Result<(String, Validator<Value>), ResolveError> {
    let invalid = |message: &str, reason: &str| ResolveError::InvalidRequirement {
      state: state.to_string(),
      message: message.to_string(),
      reason: reason.to_string(),
    };

    match (req.fields, req.validator) {
      (Some(fields), None) => {
        let paths = fields
          .into_iter()
          .map(|field| resolve_field(state, field))
          .collect::<Result<Vec<FieldPath>, ResolveError>>()?;
        Ok((req.message, Validator::Fields(paths)))
      }
      (None, Some(name)) => match self.registry.get(&name) {
        Some(validator) => Ok((req.message, Validator::External(validator))),
        None => Err(ResolveError::ValidatorNotFound {
          state: state.to_string(),
          name,
        }),
      },
      (Some(_), Some(_)) => Err(invalid(
        &req.message,
        "`fields` and `validator` are mutually exclusive",
      )),
      (None, None) => Err(invalid(
        &req.message,
        "one of `fields` or `validator` is required",
      )),
    }
  }
}

impl<R: ValidatorRegistry> Resolver for StandardResolver<R> {
  fn resolve(&self, def: GraphDef) -> Result<StateGraph<Value>, ResolveError> {
    info!(graph = %def.name, states = def.states.len(), "resolving graph");

    self.validate_sources(&def.states)?;

    let mut graph = StateGraph::named(def.name.clone());
    for state_def in def.states {
      let state = self.resolve_state(state_def)?;
      graph.push(state)?;
    }

    if graph.initial().is_none() {
      return Err(ResolveError::NoInitialState { graph: def.name });
    }

    debug!(graph = %def.name, "graph resolved");
    Ok(graph)
  }
}

/// Turn a configured field descriptor into a field path.
///
/// Names are parsed as dotted paths. A nested map must hold exactly one key.
fn resolve_field(state: &str, field: FieldDescriptor) -> Result<FieldPath, ResolveError> {
  match field {
    FieldDescriptor::Name(name) => {
      if name.is_empty() || name.split('.').any(str::is_empty) {
        return Err(ResolveError::InvalidField {
          state: state.to_string(),
          reason: format!("'{name}' is not a valid field name"),
        });
      }
      Ok(FieldPath::parse(&name))
    }
    FieldDescriptor::Nested(mut map) => {
      let (head, rest) = match (map.len(), map.pop_first()) {
        (1, Some(entry)) => entry,
        (len, _) => {
          return Err(ResolveError::InvalidField {
            state: state.to_string(),
            reason: format!("nested field must have exactly one key, found {len}"),
          });
        }
      };
      let rest = resolve_field(state, rest)?;
      Ok(resolve_field(state, FieldDescriptor::Name(head))?.append(rest))
    }
  }
}
