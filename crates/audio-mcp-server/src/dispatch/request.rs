//! Request line parsing.

use serde::Deserialize;
use serde_json::Value;

use super::errors::DispatchError;
use crate::protocol::{Envelope, RequestId};
use crate::registry::json_kind;

/// Parses one line into an envelope.
///
/// Trailing whitespace (including the newline delimiter and any carriage
/// return) is trimmed before parsing.
///
/// # Errors
///
/// Returns [`DispatchError::Malformed`] when the line is empty or not valid
/// JSON, [`DispatchError::NotAnObject`] for non-object JSON, and
/// [`DispatchError::InvalidEnvelope`] when a field has the wrong type.
pub fn parse(line: &[u8]) -> Result<Envelope, DispatchError> {
    let trimmed = trim_trailing_whitespace(line);
    if trimmed.is_empty() {
        return Err(DispatchError::malformed("empty request line"));
    }

    let value: Value = serde_json::from_slice(trimmed).map_err(DispatchError::from_json_error)?;
    let Value::Object(object) = &value else {
        return Err(DispatchError::NotAnObject {
            found: json_kind(&value),
        });
    };

    Envelope::deserialize(&value).map_err(|source| DispatchError::InvalidEnvelope {
        id: RequestId::resolve(object.get("id").cloned()),
        source,
    })
}

/// Trims trailing ASCII whitespace from a byte slice.
pub(crate) fn trim_trailing_whitespace(bytes: &[u8]) -> &[u8] {
    let end = bytes
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(0, |pos| pos + 1);
    bytes.get(..end).unwrap_or_default()
}
