//! Typed access to a tool's argument object.

use serde_json::{Map, Number, Value};

use super::{ParamKind, ToolName, ValidationError};

/// Names the JSON kind of `value` for diagnostics.
pub(crate) const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Reads a JSON number as an integer when it has no fractional part.
///
/// `150.0` is accepted. Magnitudes beyond `i64` saturate.
fn integral(number: &Number) -> Option<i64> {
    if let Some(value) = number.as_i64() {
        return Some(value);
    }
    if number.is_u64() {
        return Some(i64::MAX);
    }
    let value = number.as_f64()?;
    if value.fract().abs() > 0.0 {
        return None;
    }
    #[expect(
        clippy::cast_possible_truncation,
        reason = "float to int casts saturate and the value is integral"
    )]
    let integer = value as i64;
    Some(integer)
}

pub(super) struct ArgumentReader<'a> {
    tool: ToolName,
    arguments: Option<&'a Map<String, Value>>,
}

impl<'a> ArgumentReader<'a> {
    /// Wraps the raw `arguments` value. Absent and `null` mean "no arguments".
    pub(super) fn new(tool: ToolName, raw: Option<&'a Value>) -> Result<Self, ValidationError> {
        let arguments = match raw {
            None | Some(Value::Null) => None,
            Some(Value::Object(map)) => Some(map),
            Some(other) => {
                return Err(ValidationError::InvalidArguments {
                    tool,
                    found: json_kind(other),
                });
            }
        };
        Ok(Self { tool, arguments })
    }

    fn present(&self, name: &str) -> Option<&'a Value> {
        self.arguments
            .and_then(|map| map.get(name))
            .filter(|value| !value.is_null())
    }

    fn invalid(&self, parameter: &'static str, expected: ParamKind, found: &'static str) -> ValidationError {
        ValidationError::InvalidParameter {
            tool: self.tool,
            parameter,
            expected,
            found,
        }
    }

    pub(super) fn required_string(&self, name: &'static str) -> Result<String, ValidationError> {
        let missing = ValidationError::MissingParameter {
            tool: self.tool,
            parameter: name,
        };
        match self.present(name) {
            None => Err(missing),
            Some(Value::String(text)) if text.is_empty() => Err(missing),
            Some(Value::String(text)) => Ok(text.clone()),
            Some(other) => Err(self.invalid(name, ParamKind::String, json_kind(other))),
        }
    }

    pub(super) fn optional_integer(&self, name: &'static str) -> Result<Option<i64>, ValidationError> {
        self.present(name)
            .map(|value| match value {
                Value::Number(number) => integral(number)
                    .ok_or_else(|| self.invalid(name, ParamKind::Integer, "fractional number")),
                other => Err(self.invalid(name, ParamKind::Integer, json_kind(other))),
            })
            .transpose()
    }

    pub(super) fn optional_number(&self, name: &'static str) -> Result<Option<f64>, ValidationError> {
        self.present(name)
            .map(|value| {
                value
                    .as_f64()
                    .ok_or_else(|| self.invalid(name, ParamKind::Number, json_kind(value)))
            })
            .transpose()
    }
}
