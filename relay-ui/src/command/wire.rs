use super::{Command, Layout};
use crate::error::CommandError;
use crate::node::{ElementKind, NodeId};
use serde::{Deserialize, Serialize};

/// Shape of a command on the wire: a record tagged by `type`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub(crate) enum WireCommand {
    CreateNode {
        node: NodeId,
        kind: String,
    },

    DeleteNode {
        node: NodeId,
    },

    SetLayout {
        node: NodeId,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
    },

    SetText {
        node: NodeId,
        text: String,
    },

    SetStyle {
        node: NodeId,
        key: String,
        value: String,
    },
}

impl TryFrom<WireCommand> for Command {
    type Error = CommandError;

    fn try_from(wire: WireCommand) -> Result<Self, Self::Error> {
        Ok(match wire {
            WireCommand::CreateNode { node, kind } => Command::CreateNode {
                node,
                kind: ElementKind::new(&kind)?,
            },
            WireCommand::DeleteNode { node } => Command::DeleteNode { node },
            WireCommand::SetLayout { node, x, y, w, h } => Command::SetLayout {
                node,
                layout: Layout::new(x, y, w, h)?,
            },
            WireCommand::SetText { node, text } => Command::SetText { node, text },
            WireCommand::SetStyle { node, key, value } => Command::set_style(node, &key, &value)?,
        })
    }
}

impl From<Command> for WireCommand {
    fn from(command: Command) -> Self {
        match command {
            Command::CreateNode { node, kind } => WireCommand::CreateNode {
                node,
                kind: kind.as_str().to_string(),
            },
            Command::DeleteNode { node } => WireCommand::DeleteNode { node },
            Command::SetLayout { node, layout } => WireCommand::SetLayout {
                node,
                x: layout.x(),
                y: layout.y(),
                w: layout.w(),
                h: layout.h(),
            },
            Command::SetText { node, text } => WireCommand::SetText { node, text },
            Command::SetStyle {
                node,
                property,
                value,
            } => WireCommand::SetStyle {
                node,
                key: property.js_name().to_string(),
                value: value.to_string(),
            },
        }
    }
}
