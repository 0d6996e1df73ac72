mod decode;
mod wire;

pub use decode::{FrameEntry, decode_frame};

use crate::error::CommandError;
use crate::node::{ElementKind, NodeId};
use crate::style::{StyleProperty, StyleValue};
use serde::{Deserialize, Serialize};

/// Discriminants understood on the wire, in declaration order
pub const COMMAND_KINDS: &[&str] = &[
    "createNode",
    "deleteNode",
    "setLayout",
    "setText",
    "setStyle",
];

/// Position and size of a node in CSS pixels
///
/// All four values are finite and the size is never negative.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Layout {
    x: f32,
    y: f32,
    w: f32,
    h: f32,
}

impl Layout {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Result<Self, CommandError> {
        for (field, value) in [("x", x), ("y", y), ("w", w), ("h", h)] {
            if !value.is_finite() {
                return Err(CommandError::InvalidLayout {
                    field,
                    value: value.to_string(),
                });
            }
        }
        for (field, value) in [("w", w), ("h", h)] {
            if value < 0.0 {
                return Err(CommandError::InvalidLayout {
                    field,
                    value: value.to_string(),
                });
            }
        }
        Ok(Self { x, y, w, h })
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn w(&self) -> f32 {
        self.w
    }

    pub fn h(&self) -> f32 {
        self.h
    }
}

/// One instruction to mutate the rendered tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "wire::WireCommand", try_from = "wire::WireCommand")]
pub enum Command {
    CreateNode {
        node: NodeId,
        kind: ElementKind,
    },

    DeleteNode {
        node: NodeId,
    },

    SetLayout {
        node: NodeId,
        layout: Layout,
    },

    SetText {
        node: NodeId,
        text: String,
    },

    SetStyle {
        node: NodeId,
        property: StyleProperty,
        value: StyleValue,
    },
}

impl Command {
    pub fn create_node(node: NodeId, kind: &str) -> Result<Self, CommandError> {
        Ok(Self::CreateNode {
            node,
            kind: ElementKind::new(kind)?,
        })
    }

    pub fn delete_node(node: NodeId) -> Self {
        Self::DeleteNode { node }
    }

    pub fn set_layout(node: NodeId, layout: Layout) -> Self {
        Self::SetLayout { node, layout }
    }

    pub fn set_text(node: NodeId, text: impl Into<String>) -> Self {
        Self::SetText {
            node,
            text: text.into(),
        }
    }

    /// Build a `setStyle` from untyped key/value strings, validating both
    pub fn set_style(node: NodeId, key: &str, value: &str) -> Result<Self, CommandError> {
        let property: StyleProperty = key.parse()?;
        let value = property.parse_value(value)?;
        Ok(Self::SetStyle {
            node,
            property,
            value,
        })
    }

    /// The node this command targets
    pub fn node(&self) -> NodeId {
        match self {
            Self::CreateNode { node, .. }
            | Self::DeleteNode { node }
            | Self::SetLayout { node, .. }
            | Self::SetText { node, .. }
            | Self::SetStyle { node, .. } => *node,
        }
    }

    /// Wire discriminant of this command
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::CreateNode { .. } => "createNode",
            Self::DeleteNode { .. } => "deleteNode",
            Self::SetLayout { .. } => "setLayout",
            Self::SetText { .. } => "setText",
            Self::SetStyle { .. } => "setStyle",
        }
    }
}
