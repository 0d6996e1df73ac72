use crate::node::NodeId;
use thiserror::Error;

/// A command that could not be built from its fields
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("invalid element kind `{0}`")]
    InvalidElementKind(String),

    #[error("unsupported style property `{0}`")]
    UnsupportedStyle(String),

    #[error("invalid value `{value}` for style property `{property}`")]
    InvalidStyleValue { property: &'static str, value: String },

    #[error("invalid layout `{field}`: {value}")]
    InvalidLayout { field: &'static str, value: String },
}

/// The rendering surface refused a primitive operation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct SurfaceError(pub String);

impl SurfaceError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApplyError {
    #[error("node {0} not found")]
    NodeNotFound(NodeId),

    #[error("node {0} already exists")]
    DuplicateNode(NodeId),

    #[error("invalid `{kind}` command: {reason}")]
    InvalidCommand { kind: String, reason: String },

    #[error("surface error: {0}")]
    Surface(#[from] SurfaceError),
}

/// A frame that is not a JSON array of command records
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("frame is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("frame must be a JSON array of commands, got {0}")]
    NotAnArray(&'static str),
}
