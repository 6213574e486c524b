//! Field access on evaluated objects.

use serde_json::{Map, Value};

use crate::error::FieldError;

/// An object whose fields can be read by name.
///
/// Field values are returned as JSON values so nested descriptors can keep
/// resolving on the result. A missing field should resolve to `Value::Null`;
/// errors are reserved for objects that cannot answer the question at all.
pub trait Record {
  fn field(&self, name: &str) -> Result<Value, FieldError>;
}

impl Record for Value {
  fn field(&self, name: &str) -> Result<Value, FieldError> {
    match self {
      Value::Object(map) => map.field(name),
      other => Err(FieldError::NotARecord {
        field: name.to_string(),
        found: kind_of(other).to_string(),
      }),
    }
  }
}

impl Record for Map<String, Value> {
  fn field(&self, name: &str) -> Result<Value, FieldError> {
    Ok(self.get(name).cloned().unwrap_or(Value::Null))
  }
}

impl<R: Record + ?Sized> Record for Box<R> {
  fn field(&self, name: &str) -> Result<Value, FieldError> {
    (**self).field(name)
  }
}

fn kind_of(value: &Value) -> &'static str {
  match value {
    Value::Null => "a null",
    Value::Bool(_) => "a boolean",
    Value::Number(_) => "a number",
    Value::String(_) => "a string",
    Value::Array(_) => "an array",
    Value::Object(_) => "an object",
  }
}

/// Presence check used by field validators.
///
/// A value is present when it is truthy (not null, not `false`) and is not
/// one of the empty sentinels: `""`, `[]` or `{}`.
pub fn is_present(value: &Value) -> bool {
  match value {
    Value::Null => false,
    Value::Bool(b) => *b,
    Value::Number(_) => true,
    Value::String(s) => !s.is_empty(),
    Value::Array(items) => !items.is_empty(),
    Value::Object(map) => !map.is_empty(),
  }
}

/// Coerces predicate results to a boolean.
pub trait Truthy {
  fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
  fn is_truthy(&self) -> bool {
    *self
  }
}

impl Truthy for str {
  fn is_truthy(&self) -> bool {
    true
  }
}

impl Truthy for String {
  fn is_truthy(&self) -> bool {
    true
  }
}

macro_rules! always_truthy {
  ($($ty:ty),*) => {
    $(
      impl Truthy for $ty {
        fn is_truthy(&self) -> bool {
          true
        }
      }
    )*
  };
}

// Zero counts as true, like every other value that is not null or false.
always_truthy!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, char);

impl<T: Truthy> Truthy for Option<T> {
  fn is_truthy(&self) -> bool {
    self.as_ref().is_some_and(Truthy::is_truthy)
  }
}

/// Only `null` and `false` are falsy. Empty strings and collections count as
/// true here; use a field validator for the stricter presence check.
impl Truthy for Value {
  fn is_truthy(&self) -> bool {
    !matches!(self, Value::Null | Value::Bool(false))
  }
}

impl<T: Truthy + ?Sized> Truthy for &T {
  fn is_truthy(&self) -> bool {
    (**self).is_truthy()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_missing_field_is_null() {
    let object = json!({ "a": 1 });
    assert_eq!(object.field("b").unwrap(), Value::Null);
    assert_eq!(object.field("a").unwrap(), json!(1));
  }

  #[test]
  fn test_field_on_scalar_fails() {
    let object = json!("text");
    let err = object.field("len").unwrap_err();
    assert_eq!(
      err,
      FieldError::NotARecord {
        field: "len".to_string(),
        found: "a string".to_string(),
      }
    );
  }

  #[test]
  fn test_presence() {
    assert!(is_present(&json!(true)));
    assert!(is_present(&json!(0)));
    assert!(is_present(&json!("123 Fake Street")));
    assert!(is_present(&json!([1])));
    assert!(is_present(&json!({ "k": "v" })));

    assert!(!is_present(&Value::Null));
    assert!(!is_present(&json!(false)));
    assert!(!is_present(&json!("")));
    assert!(!is_present(&json!([])));
    assert!(!is_present(&json!({})));
  }

  #[test]
  fn test_truthiness() {
    assert!(true.is_truthy());
    assert!(!false.is_truthy());
    assert!(Some(true).is_truthy());
    assert!(!Some(false).is_truthy());
    assert!(!None::<bool>.is_truthy());
    assert!(json!("").is_truthy());
    assert!(json!(0).is_truthy());
    assert!(!json!(null).is_truthy());
    assert!(!json!(false).is_truthy());
  }

  #[test]
  fn test_scalars_and_strings_are_truthy() {
    assert!("".is_truthy());
    assert!("lost".is_truthy());
    assert!(String::from("lost").is_truthy());
    assert!(0_i32.is_truthy());
    assert!(0.0_f64.is_truthy());
    assert!(Some(3_u32).is_truthy());
    assert!(!None::<String>.is_truthy());
  }
}
