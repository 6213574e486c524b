//! Stateflow Config
//!
//! This crate contains the serializable state graph configuration types for
//! stateflow. These types describe a graph before it is resolved into a
//! `StateGraph` that the engine can evaluate.
//!
//! Configuration is usually loaded from JSON files (via the CLI with
//! `stateflow eval graph.json`). External validators are referenced by name
//! and bound to code by the resolver.
//!
//! # Example
//!
//! ```json
//! {
//!   "name": "jobs",
//!   "states": [
//!     { "name": "potential", "initial": true },
//!     {
//!       "name": "pending",
//!       "from": ["potential"],
//!       "requires": [
//!         { "message": "Client", "fields": ["client", { "client": "email" }] },
//!         { "message": "Nearby", "validator": "is_close" }
//!       ]
//!     }
//!   ]
//! }
//! ```

mod field;
mod graph;
mod requirement;
mod state;

pub use field::FieldDescriptor;
pub use graph::GraphDef;
pub use requirement::RequirementDef;
pub use state::StateDef;
