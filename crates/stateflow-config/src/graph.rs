use serde::{Deserialize, Serialize};

use crate::state::StateDef;

/// A state graph as written in configuration.
///
/// States are kept in declaration order; the order decides priority ties
/// during evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphDef {
  pub name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  pub states: Vec<StateDef>,
}
