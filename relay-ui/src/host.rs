use crate::command::{Command, Layout};
use crate::node::{ElementKind, NodeId};
use crate::style::{StyleProperty, StyleValue};
use std::mem;

/// Global function the web view defines to receive a frame
pub const APPLY_FUNCTION: &str = "__applyCommands";

/// Host-side queue of commands waiting to be sent to the web view
///
/// Node ids are allocated here, sequentially from zero, so the host never
/// has to pick them itself.
#[derive(Debug, Default)]
pub struct CommandBuffer {
    commands: Vec<Command>,
    next_node: u64,
}

impl CommandBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_node(&mut self, kind: ElementKind) -> NodeId {
        let node = NodeId(self.next_node);
        self.next_node += 1;
        self.commands.push(Command::CreateNode { node, kind });
        node
    }

    pub fn delete_node(&mut self, node: NodeId) {
        self.commands.push(Command::DeleteNode { node });
    }

    pub fn set_layout(&mut self, node: NodeId, layout: Layout) {
        self.commands.push(Command::SetLayout { node, layout });
    }

    pub fn set_text(&mut self, node: NodeId, text: impl Into<String>) {
        self.commands.push(Command::SetText {
            node,
            text: text.into(),
        });
    }

    pub fn set_style(
        &mut self,
        node: NodeId,
        property: StyleProperty,
        value: impl Into<StyleValue>,
    ) {
        self.commands.push(Command::SetStyle {
            node,
            property,
            value: value.into(),
        });
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn take_commands(&mut self) -> Vec<Command> {
        mem::take(&mut self.commands)
    }

    /// Drain the queue into a script calling `__applyCommands` with the frame
    ///
    /// Returns `None` when nothing is queued.
    pub fn take_script(&mut self) -> Result<Option<String>, serde_json::Error> {
        if self.commands.is_empty() {
            return Ok(None);
        }

        let json = serde_json::to_string(&self.take_commands())?;
        Ok(Some(format!("{APPLY_FUNCTION}({json})")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;

    #[test]
    fn test_allocates_sequential_ids() {
        let mut buffer = CommandBuffer::new();
        let a = buffer.create_node(ElementKind::new("div").unwrap());
        let b = buffer.create_node(ElementKind::new("span").unwrap());
        buffer.delete_node(a);
        let c = buffer.create_node(ElementKind::new("p").unwrap());

        assert_eq!((a, b, c), (NodeId(0), NodeId(1), NodeId(2)));
        assert_eq!(buffer.commands().len(), 4);
    }

    #[test]
    fn test_take_script() {
        let mut buffer = CommandBuffer::new();
        assert_eq!(buffer.take_script().unwrap(), None);

        let node = buffer.create_node(ElementKind::new("text").unwrap());
        buffer.set_text(node, "hi");
        buffer.set_style(node, StyleProperty::Color, Color::rgb(0, 0, 255));

        let script = buffer.take_script().unwrap().unwrap();
        assert_eq!(
            script,
            concat!(
                r#"__applyCommands([{"type":"createNode","node":0,"kind":"text"},"#,
                r#"{"type":"setText","node":0,"text":"hi"},"#,
                r##"{"type":"setStyle","node":0,"key":"color","value":"#0000ff"}])"##
            )
        );
        assert!(buffer.is_empty());
    }
}
