use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A field descriptor as written in configuration.
///
/// Either a plain accessor name (`"client"`, dotted paths such as
/// `"client.email"` are allowed) or a single-key object that nests one
/// accessor inside another (`{ "client": "email" }`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldDescriptor {
  Name(String),
  Nested(BTreeMap<String, FieldDescriptor>),
}

impl FieldDescriptor {
  pub fn name(name: impl Into<String>) -> Self {
    FieldDescriptor::Name(name.into())
  }

  pub fn nested(head: impl Into<String>, rest: FieldDescriptor) -> Self {
    let mut map = BTreeMap::new();
    map.insert(head.into(), rest);
    FieldDescriptor::Nested(map)
  }
}

impl From<&str> for FieldDescriptor {
  fn from(name: &str) -> Self {
    FieldDescriptor::Name(name.to_string())
  }
}
