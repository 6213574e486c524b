use serde::{Deserialize, Serialize};

use crate::requirement::RequirementDef;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateDef {
  pub name: String,
  #[serde(default)]
  pub initial: bool,
  /// Names of the states this state can be entered from.
  #[serde(default)]
  pub from: Vec<String>,
  /// Lower values win when several next states are eligible.
  #[serde(default)]
  pub priority: i64,
  #[serde(default)]
  pub requires: Vec<RequirementDef>,
}
