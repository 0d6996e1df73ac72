use super::{COMMAND_KINDS, Command};
use crate::error::DecodeError;
use serde_json::Value;

/// One record of a decoded frame
#[derive(Debug, Clone, PartialEq)]
pub enum FrameEntry {
    Command(Command),
    /// A record whose `type` is not a known command kind
    ///
    /// `kind` is empty when the record has no `type`, and holds the raw JSON
    /// when `type` is not a string.
    Unknown { kind: String },
    /// A known kind with fields that do not form a command
    Invalid { kind: String, reason: String },
}

/// Decode a JSON frame (an array of command records) without failing on bad entries
///
/// Only a frame that is not a JSON array is an error; every record inside it
/// becomes a `FrameEntry` in the original order.
pub fn decode_frame(frame: &str) -> Result<Vec<FrameEntry>, DecodeError> {
    let records = match serde_json::from_str::<Value>(frame)? {
        Value::Array(records) => records,
        other => return Err(DecodeError::NotAnArray(json_type(&other))),
    };

    Ok(records.into_iter().map(decode_record).collect())
}

fn decode_record(record: Value) -> FrameEntry {
    let kind = match record.get("type") {
        Some(Value::String(kind)) => kind.clone(),
        Some(other) => {
            return FrameEntry::Unknown {
                kind: other.to_string(),
            };
        }
        None => {
            return FrameEntry::Unknown {
                kind: String::new(),
            };
        }
    };

    if !COMMAND_KINDS.contains(&kind.as_str()) {
        return FrameEntry::Unknown { kind };
    }

    match serde_json::from_value::<Command>(record) {
        Ok(command) => FrameEntry::Command(command),
        Err(err) => FrameEntry::Invalid {
            kind,
            reason: err.to_string(),
        },
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
