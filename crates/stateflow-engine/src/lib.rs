//! Flow evaluation for stateflow.
//!
//! This crate derives which state an object is in by walking a
//! [`StateGraph`](stateflow_graph::StateGraph) from its initial state.
//!
//! # Architecture
//!
//! ```text
//! FlowEvaluator
//! ├── new(&graph)
//! └── evaluate(&object) -> FlowResult
//!     ├── score every state against the object (RequirementsResult)
//!     ├── walk: follow enterable states whose requirements are met,
//!     │         lowest priority first, declaration order on ties
//!     └── mark visited / current
//!
//! FlowResult
//! ├── state() / state_path()
//! ├── lookup(name) -> RequirementsResult
//! └── report() -> FlowReport (serializable)
//! ```
//!
//! # Usage
//!
//! ```
//! use serde_json::{Value, json};
//! use stateflow_engine::Flow;
//! use stateflow_graph::StateGraph;
//!
//! let mut graph = StateGraph::<Value>::new();
//! graph.register("a", |s| { s.initial_state(); }).unwrap();
//! graph.register("b", |s| { s.from(["a"]).requires_fields("Ready", ["ready"]); }).unwrap();
//!
//! let result = graph.flow(&json!({ "ready": true })).unwrap();
//! assert_eq!(result.state(), "b");
//! assert_eq!(result.state_path(), vec!["a", "b"]);
//! ```
//!
//! The evaluator does not detect cycles. A graph whose states lead back to
//! each other with requirements the object keeps meeting will not terminate.

mod error;
mod evaluator;
mod report;
mod result;

pub use error::FlowError;
pub use evaluator::{Flow, FlowEvaluator};
pub use report::{FlowReport, RequirementReport, StateReport};
pub use result::FlowResult;
pub use stateflow_graph::RequirementsResult;
