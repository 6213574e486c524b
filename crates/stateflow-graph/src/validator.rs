//! Validators behind requirements.

use std::fmt;
use std::sync::Arc;

use crate::error::FieldError;
use crate::field::FieldPath;
use crate::record::{Record, Truthy, is_present};

/// Contract for external validators.
///
/// Any rule object can be plugged into a requirement by implementing this
/// trait. Plain closures `Fn(&T) -> bool` implement it too.
pub trait Validate<T: ?Sized>: Send + Sync {
  fn validate(&self, object: &T) -> bool;
}

impl<T: ?Sized, F> Validate<T> for F
where
  F: Fn(&T) -> bool + Send + Sync,
{
  fn validate(&self, object: &T) -> bool {
    self(object)
  }
}

/// The kind of a validator, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidatorKind {
  Fields,
  External,
  Predicate,
}

/// Decides whether a single requirement holds for an object.
pub enum Validator<T: ?Sized> {
  /// Every listed field must resolve to a present value.
  Fields(Vec<FieldPath>),
  /// A caller supplied rule object, used verbatim.
  External(Arc<dyn Validate<T>>),
  /// A function of the object.
  Predicate(Arc<dyn Fn(&T) -> bool + Send + Sync>),
}

impl<T: ?Sized> Validator<T> {
  pub fn fields<I, F>(fields: I) -> Self
  where
    I: IntoIterator<Item = F>,
    F: Into<FieldPath>,
  {
    Validator::Fields(fields.into_iter().map(Into::into).collect())
  }

  pub fn external<V>(validator: V) -> Self
  where
    V: Validate<T> + 'static,
  {
    Validator::External(Arc::new(validator))
  }

  /// Wrap a predicate. Its result is coerced with [`Truthy`].
  pub fn predicate<F, R>(predicate: F) -> Self
  where
    T: 'static,
    F: Fn(&T) -> R + Send + Sync + 'static,
    R: Truthy + 'static,
  {
    Validator::Predicate(Arc::new(move |object: &T| predicate(object).is_truthy()))
  }

  pub fn kind(&self) -> ValidatorKind {
    match self {
      Validator::Fields(_) => ValidatorKind::Fields,
      Validator::External(_) => ValidatorKind::External,
      Validator::Predicate(_) => ValidatorKind::Predicate,
    }
  }
}

impl<T: Record + ?Sized> Validator<T> {
  /// Run the validator against an object.
  ///
  /// Field validators stop at the first field that is not present.
  pub fn validate(&self, object: &T) -> Result<bool, FieldError> {
    match self {
      Validator::Fields(paths) => {
        for path in paths {
          if !is_present(&path.resolve(object)?) {
            return Ok(false);
          }
        }
        Ok(true)
      }
      Validator::External(validator) => Ok(validator.validate(object)),
      Validator::Predicate(predicate) => Ok(predicate(object)),
    }
  }
}

impl<T: ?Sized> Clone for Validator<T> {
  fn clone(&self) -> Self {
    match self {
      Validator::Fields(paths) => Validator::Fields(paths.clone()),
      Validator::External(validator) => Validator::External(validator.clone()),
      Validator::Predicate(predicate) => Validator::Predicate(predicate.clone()),
    }
  }
}

impl<T: ?Sized> fmt::Debug for Validator<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Validator::Fields(paths) => f.debug_tuple("Fields").field(paths).finish(),
      Validator::External(_) => f.write_str("External(..)"),
      Validator::Predicate(_) => f.write_str("Predicate(..)"),
    }
  }
}

impl<T: ?Sized> From<FieldPath> for Validator<T> {
  fn from(path: FieldPath) -> Self {
    Validator::Fields(vec![path])
  }
}

impl<T: ?Sized> From<Vec<FieldPath>> for Validator<T> {
  fn from(paths: Vec<FieldPath>) -> Self {
    Validator::Fields(paths)
  }
}

impl<T: ?Sized> From<&str> for Validator<T> {
  fn from(name: &str) -> Self {
    Validator::Fields(vec![FieldPath::leaf(name)])
  }
}
