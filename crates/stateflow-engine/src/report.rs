//! Serializable flow reports.
//!
//! A [`FlowReport`] is a plain snapshot of a [`FlowResult`](crate::FlowResult)
//! that no longer borrows the graph. It serializes to JSON and renders as a
//! human readable checklist through `Display`.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowReport {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub graph: Option<String>,
  /// Name of the current state.
  pub state: String,
  /// States walked, starting with the initial state.
  pub path: Vec<String>,
  /// Every declared state, in declaration order.
  pub states: Vec<StateReport>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateReport {
  pub name: String,
  pub visited: bool,
  pub current: bool,
  pub requirements_met: bool,
  pub requirements: Vec<RequirementReport>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementReport {
  pub message: String,
  pub met: bool,
}

impl fmt::Display for FlowReport {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if let Some(graph) = &self.graph {
      writeln!(f, "graph: {}", graph)?;
    }
    writeln!(f, "state: {}", self.state)?;
    writeln!(f, "path:  {}", self.path.join(" -> "))?;

    for state in &self.states {
      writeln!(f)?;
      write!(f, "{}", state)?;
    }
    Ok(())
  }
}

impl fmt::Display for StateReport {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let marker = if self.current {
      " (current)"
    } else if self.visited {
      " (visited)"
    } else {
      ""
    };
    writeln!(f, "{}{}", self.name, marker)?;

    for req in &self.requirements {
      let check = if req.met { "x" } else { " " };
      writeln!(f, "  [{}] {}", check, req.message)?;
    }
    Ok(())
  }
}
