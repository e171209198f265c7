//! Lookups over dynamically typed JSON input.
//!
//! A string or array of strings is accepted by both directions; integers are
//! accepted only as codes. Arrays map elementwise (recursively for nested
//! arrays). Anything else, including `null` standing in for an absent
//! argument, is `UnsupportedType`.

use serde_json::Value;

use super::LookupError;
use crate::table::PrefectureTable;

impl PrefectureTable {
    /// `code_to_name` for a JSON string, integer or array of those.
    pub fn code_to_name_value(&self, input: &Value) -> Result<Value, LookupError> {
        match input {
            Value::Array(items) => items
                .iter()
                .map(|item| self.code_to_name_value(item))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array),
            Value::String(s) => self.code_to_name(s.as_str()).map(owned),
            Value::Number(n) => match (n.as_i64(), n.as_u64()) {
                (Some(i), _) => self.code_to_name(i).map(owned),
                // Beyond i64: far more than two digits, so it can only miss.
                (None, Some(u)) => Err(LookupError::Miss(u.to_string())),
                (None, None) => Err(LookupError::UnsupportedType("float")),
            },
            other => Err(LookupError::UnsupportedType(type_name(other))),
        }
    }

    /// `name_to_code` for a JSON string or array of strings.
    pub fn name_to_code_value(&self, input: &Value) -> Result<Value, LookupError> {
        match input {
            Value::Array(items) => items
                .iter()
                .map(|item| self.name_to_code_value(item))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array),
            Value::String(s) => self.name_to_code(s).map(owned),
            other => Err(LookupError::UnsupportedType(type_name(other))),
        }
    }
}

fn owned(s: &str) -> Value {
    Value::String(s.to_string())
}

fn type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
