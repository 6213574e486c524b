use serde::{Deserialize, Serialize};

use crate::field::FieldDescriptor;

/// A requirement a state places on the evaluated object.
///
/// Exactly one of `fields` or `validator` should be present. The resolver
/// rejects definitions that carry both or neither.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementDef {
  /// Human readable message shown in reports.
  pub message: String,

  /// Fields that must all be present on the object. An empty list is always
  /// met.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub fields: Option<Vec<FieldDescriptor>>,

  /// Name of an external validator registered with the resolver.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub validator: Option<String>,
}

impl RequirementDef {
  pub fn fields(message: impl Into<String>, fields: Vec<FieldDescriptor>) -> Self {
    Self {
      message: message.into(),
      fields: Some(fields),
      validator: None,
    }
  }

  pub fn validator(message: impl Into<String>, validator: impl Into<String>) -> Self {
    Self {
      message: message.into(),
      fields: None,
      validator: Some(validator.into()),
    }
  }
}
