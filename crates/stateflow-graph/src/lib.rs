//! Stateflow Graph
//!
//! This crate provides the in-memory state graph for stateflow. A graph is an
//! ordered list of named states; each state names the states it can be
//! entered from, a priority, and the requirements an object must meet to be
//! in it.
//!
//! Key pieces:
//! - `StateGraph` is built once through `register` and is read-only afterwards
//! - `Validator` is the tagged union behind every requirement (fields,
//!   external rule object, or predicate)
//! - `Record` is how validators read fields off the evaluated object
//! - `RequirementsResult` is the per-state report produced for one object
//!
//! Walking the graph lives in `stateflow-engine`.

mod error;
mod field;
mod graph;
mod record;
mod requirement;
mod result;
mod state;
mod validator;

pub use error::{EvaluationError, FieldError, GraphError};
pub use field::FieldPath;
pub use graph::StateGraph;
pub use record::{Record, Truthy, is_present};
pub use requirement::Requirement;
pub use result::RequirementsResult;
pub use state::{StateBuilder, StateDefinition};
pub use validator::{Validate, Validator, ValidatorKind};
