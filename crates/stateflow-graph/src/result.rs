//! Per-state requirement reports.

/// Outcome of every requirement of one state for one object.
///
/// Pairs are kept in declaration order so they can be rendered as a
/// checklist. `visited` and `current` start out false and are set by the
/// flow evaluator once the path is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequirementsResult {
  state_name: String,
  requirements: Vec<(String, bool)>,
  visited: bool,
  current: bool,
}

impl RequirementsResult {
  pub fn new(state_name: impl Into<String>, requirements: Vec<(String, bool)>) -> Self {
    Self {
      state_name: state_name.into(),
      requirements,
      visited: false,
      current: false,
    }
  }

  pub fn state_name(&self) -> &str {
    &self.state_name
  }

  /// True when every requirement holds. A state without requirements is
  /// always met.
  pub fn requirements_met(&self) -> bool {
    self.requirements.iter().all(|(_, met)| *met)
  }

  /// Iterate over `(message, met)` pairs in declaration order.
  pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> + '_ {
    self
      .requirements
      .iter()
      .map(|(message, met)| (message.as_str(), *met))
  }

  /// Messages of the requirements that do not hold.
  pub fn unmet(&self) -> impl Iterator<Item = &str> + '_ {
    self
      .requirements
      .iter()
      .filter(|(_, met)| !met)
      .map(|(message, _)| message.as_str())
  }

  pub fn requirements(&self) -> &[(String, bool)] {
    &self.requirements
  }

  pub fn len(&self) -> usize {
    self.requirements.len()
  }

  pub fn is_empty(&self) -> bool {
    self.requirements.is_empty()
  }

  pub fn visited(&self) -> bool {
    self.visited
  }

  pub fn set_visited(&mut self, visited: bool) {
    self.visited = visited;
  }

  pub fn current(&self) -> bool {
    self.current
  }

  pub fn set_current(&mut self, current: bool) {
    self.current = current;
  }
}

impl<'a> IntoIterator for &'a RequirementsResult {
  type Item = &'a (String, bool);
  type IntoIter = std::slice::Iter<'a, (String, bool)>;

  fn into_iter(self) -> Self::IntoIter {
    self.requirements.iter()
  }
}
