//! Turns a deserialized [`stateflow_config::GraphDef`] into a
//! [`stateflow_graph::StateGraph`] over JSON objects.
//!
//! Field requirements become field validators. Named validators are looked up
//! in a [`ValidatorRegistry`] supplied by the host.

mod error;
mod registry;
mod resolver;

pub use error::ResolveError;
pub use registry::{InMemoryValidatorRegistry, ValidatorRegistry};
pub use resolver::{Resolver, StandardResolver};
