use std::fmt;

use crate::error::FieldError;
use crate::record::Record;
use crate::validator::Validator;

/// A named condition a state demands of the object.
pub struct Requirement<T: ?Sized> {
  message: String,
  validator: Validator<T>,
}

impl<T: ?Sized> Requirement<T> {
  pub fn new(message: impl Into<String>, validator: impl Into<Validator<T>>) -> Self {
    Self {
      message: message.into(),
      validator: validator.into(),
    }
  }

  /// Message shown in reports.
  pub fn message(&self) -> &str {
    &self.message
  }

  pub fn validator(&self) -> &Validator<T> {
    &self.validator
  }
}

impl<T: Record + ?Sized> Requirement<T> {
  pub fn validate(&self, object: &T) -> Result<bool, FieldError> {
    self.validator.validate(object)
  }
}

impl<T: ?Sized> Clone for Requirement<T> {
  fn clone(&self) -> Self {
    Self {
      message: self.message.clone(),
      validator: self.validator.clone(),
    }
  }
}

impl<T: ?Sized> fmt::Debug for Requirement<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Requirement")
      .field("message", &self.message)
      .field("validator", &self.validator)
      .finish()
  }
}
