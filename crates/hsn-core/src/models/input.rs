//! Request shapes accepted by the validation API.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{BatchResult, ValidationOutcome};
use crate::errors::{HsnError, HsnResult};

/// A single code as supplied by a caller.
///
/// Integers are coerced to their decimal string form, so `101` validates as
/// `"101"` (leading zeros cannot survive a numeric representation).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CodeInput {
    Text(String),
    Integer(i128),
}

impl CodeInput {
    /// The decimal-string form used as the validation and cache key.
    pub fn as_code(&self) -> Cow<'_, str> {
        match self {
            Self::Text(s) => Cow::Borrowed(s.as_str()),
            Self::Integer(n) => Cow::Owned(n.to_string()),
        }
    }

    pub fn into_code(self) -> String {
        match self {
            Self::Text(s) => s,
            Self::Integer(n) => n.to_string(),
        }
    }

    /// Accept a JSON string or integer; reject every other shape.
    pub fn from_json(value: &Value) -> HsnResult<Self> {
        match value {
            Value::String(s) => Ok(Self::Text(s.clone())),
            Value::Number(n) => {
                if let Some(u) = n.as_u64() {
                    Ok(Self::Integer(i128::from(u)))
                } else if let Some(i) = n.as_i64() {
                    Ok(Self::Integer(i128::from(i)))
                } else {
                    Err(HsnError::InvalidInput {
                        reason: format!("non-integer number {n} cannot be used as a code"),
                    })
                }
            }
            other => Err(HsnError::InvalidInput {
                reason: format!("unsupported code value: {}", json_kind(other)),
            }),
        }
    }
}

impl From<&str> for CodeInput {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for CodeInput {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&String> for CodeInput {
    fn from(s: &String) -> Self {
        Self::Text(s.clone())
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for CodeInput {
                fn from(n: $t) -> Self {
                    Self::Integer(n as i128)
                }
            }
        )*
    };
}

impl_from_integer!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

/// A validation call: one code or an ordered sequence of codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ValidationRequest {
    Single(CodeInput),
    Batch(Vec<CodeInput>),
}

impl ValidationRequest {
    /// Parse a dynamically typed request.
    ///
    /// A string is a single code and an array is a batch whose elements are
    /// strings or integers. Any other top-level shape, including a bare
    /// number, is rejected rather than coerced.
    pub fn from_json(value: &Value) -> HsnResult<Self> {
        match value {
            Value::String(s) => Ok(Self::Single(CodeInput::Text(s.clone()))),
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    CodeInput::from_json(item).map_err(|e| HsnError::InvalidInput {
                        reason: format!("element {i}: {e}"),
                    })
                })
                .collect::<HsnResult<Vec<_>>>()
                .map(Self::Batch),
            other => Err(HsnError::InvalidInput {
                reason: format!(
                    "input must be a single code string or a list of codes, got {}",
                    json_kind(other)
                ),
            }),
        }
    }
}

/// Result matching the shape of the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ValidationResponse {
    Single(ValidationOutcome),
    Batch(BatchResult),
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn integers_coerce_to_decimal_strings() {
        assert_eq!(CodeInput::from(101u32).as_code(), "101");
        assert_eq!(CodeInput::from(-12i64).into_code(), "-12");
        assert_eq!(CodeInput::from("0101").as_code(), "0101");
    }

    #[test]
    fn json_string_is_single() {
        let req = ValidationRequest::from_json(&json!("0101")).unwrap();
        assert_eq!(req, ValidationRequest::Single(CodeInput::Text("0101".into())));
    }

    #[test]
    fn json_array_is_batch_with_mixed_elements() {
        let req = ValidationRequest::from_json(&json!(["01", 101])).unwrap();
        assert_eq!(
            req,
            ValidationRequest::Batch(vec![
                CodeInput::Text("01".into()),
                CodeInput::Integer(101)
            ])
        );
    }

    #[test]
    fn top_level_number_is_rejected() {
        let err = ValidationRequest::from_json(&json!(101)).unwrap_err();
        assert!(matches!(err, HsnError::InvalidInput { .. }));
    }

    #[test]
    fn unsupported_shapes_are_rejected() {
        for value in [json!(null), json!(true), json!({"code": "01"}), json!(["01", 1.5]), json!([["01"]])] {
            assert!(
                matches!(ValidationRequest::from_json(&value), Err(HsnError::InvalidInput { .. })),
                "expected rejection for {value}"
            );
        }
    }
}
