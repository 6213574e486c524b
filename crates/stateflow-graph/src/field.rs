//! Field paths used by field validators.

use std::fmt;

use serde_json::Value;

use crate::error::FieldError;
use crate::record::Record;

/// A path to a field on the evaluated object.
///
/// `Leaf("a")` reads `a` off the object. `Nested("a", rest)` reads `a` and
/// then resolves `rest` on the result, one step at a time, until a leaf is
/// reached.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldPath {
  Leaf(String),
  Nested(String, Box<FieldPath>),
}

impl FieldPath {
  pub fn leaf(name: impl Into<String>) -> Self {
    FieldPath::Leaf(name.into())
  }

  pub fn nested(head: impl Into<String>, rest: FieldPath) -> Self {
    FieldPath::Nested(head.into(), Box::new(rest))
  }

  /// Parse a dotted path such as `"client.address.city"`.
  pub fn parse(path: &str) -> Self {
    let mut segments = path.rsplit('.');
    // rsplit always yields at least one segment
    let last = segments.next().unwrap_or_default();
    segments.fold(FieldPath::leaf(last), |rest, head| {
      FieldPath::nested(head, rest)
    })
  }

  /// Extend the path so that `rest` is resolved after its last step.
  pub fn append(self, rest: FieldPath) -> Self {
    match self {
      FieldPath::Leaf(name) => FieldPath::nested(name, rest),
      FieldPath::Nested(head, inner) => FieldPath::nested(head, inner.append(rest)),
    }
  }

  /// The first accessor in the path.
  pub fn head(&self) -> &str {
    match self {
      FieldPath::Leaf(name) => name,
      FieldPath::Nested(head, _) => head,
    }
  }

  /// Number of accessor steps in the path.
  pub fn depth(&self) -> usize {
    match self {
      FieldPath::Leaf(_) => 1,
      FieldPath::Nested(_, rest) => 1 + rest.depth(),
    }
  }

  /// Resolve the path against an object.
  ///
  /// Errors from the object (or from an intermediate value that is not a
  /// record) are returned as-is rather than treated as an absent field.
  pub fn resolve<R: Record + ?Sized>(&self, object: &R) -> Result<Value, FieldError> {
    match self {
      FieldPath::Leaf(name) => object.field(name),
      FieldPath::Nested(head, rest) => {
        let value = object.field(head)?;
        rest.resolve(&value)
      }
    }
  }
}

impl fmt::Display for FieldPath {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      FieldPath::Leaf(name) => write!(f, "{}", name),
      FieldPath::Nested(head, rest) => write!(f, "{}.{}", head, rest),
    }
  }
}

/// A plain name is a single accessor, dots included. Use
/// [`FieldPath::nested`] or [`FieldPath::parse`] to reach into nested values.
impl From<&str> for FieldPath {
  fn from(name: &str) -> Self {
    FieldPath::leaf(name)
  }
}

impl From<String> for FieldPath {
  fn from(name: String) -> Self {
    FieldPath::leaf(name)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_parse_single_segment() {
    assert_eq!(FieldPath::parse("address"), FieldPath::leaf("address"));
  }

  #[test]
  fn test_parse_dotted() {
    let path = FieldPath::parse("client.address.city");
    assert_eq!(
      path,
      FieldPath::nested(
        "client",
        FieldPath::nested("address", FieldPath::leaf("city"))
      )
    );
    assert_eq!(path.head(), "client");
    assert_eq!(path.depth(), 3);
    assert_eq!(path.to_string(), "client.address.city");
  }

  #[test]
  fn test_name_converts_to_leaf() {
    assert_eq!(FieldPath::from("user.email"), FieldPath::leaf("user.email"));
    assert_eq!(
      FieldPath::from("user.email".to_string()).depth(),
      1
    );

    let object = json!({ "user.email": "x@y" });
    assert_eq!(FieldPath::from("user.email").resolve(&object).unwrap(), json!("x@y"));
  }

  #[test]
  fn test_append() {
    let path = FieldPath::parse("client.address").append(FieldPath::leaf("city"));
    assert_eq!(path, FieldPath::parse("client.address.city"));
    assert_eq!(path.depth(), 3);
  }

  #[test]
  fn test_resolve_nested() {
    let object = json!({ "foo": { "bar": true } });
    let path = FieldPath::nested("foo", FieldPath::leaf("bar"));
    assert_eq!(path.resolve(&object).unwrap(), json!(true));
  }

  #[test]
  fn test_resolve_through_missing_value_fails() {
    let object = json!({ "foo": null });
    let path = FieldPath::parse("foo.bar");
    assert!(matches!(
      path.resolve(&object),
      Err(FieldError::NotARecord { ref field, .. }) if field == "bar"
    ));
  }
}
