use super::traits::Surface;
use crate::error::SurfaceError;
use crate::node::ElementKind;
use crate::style::{StyleProperty, StyleValue};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementHandle(u32);

impl ElementHandle {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemoryElement {
    pub tag: String,
    pub text: String,
    /// CSS property name -> CSS text
    pub style: BTreeMap<String, String>,
}

impl MemoryElement {
    pub fn style(&self, property: StyleProperty) -> Option<&str> {
        self.style.get(property.css_name()).map(String::as_str)
    }
}

/// Primitive calls recorded by `MemorySurface`, in call order
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    Create {
        handle: ElementHandle,
        tag: String,
    },
    Append {
        handle: ElementHandle,
    },
    Remove {
        handle: ElementHandle,
    },
    SetText {
        handle: ElementHandle,
        text: String,
    },
    SetStyle {
        handle: ElementHandle,
        property: StyleProperty,
        value: String,
    },
}

/// Headless document: a flat root holding absolutely positioned elements
///
/// Element slots live in an arena; the slot of a removed element goes on a
/// free list and is handed out again by the next `create_element`.
pub struct MemorySurface {
    elements: Vec<Option<MemoryElement>>,
    free_list: Vec<u32>,
    root: Vec<ElementHandle>,
    ops: Vec<SurfaceOp>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            free_list: Vec::new(),
            root: Vec::new(),
            ops: Vec::new(),
        }
    }

    pub fn element(&self, handle: ElementHandle) -> Option<&MemoryElement> {
        self.elements.get(handle.index())?.as_ref()
    }

    /// Elements attached to the root, in document order
    pub fn root_children(&self) -> &[ElementHandle] {
        &self.root
    }

    /// Number of live (created and not yet removed) elements
    pub fn live_count(&self) -> usize {
        self.elements.iter().filter(|e| e.is_some()).count()
    }

    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    pub fn take_ops(&mut self) -> Vec<SurfaceOp> {
        std::mem::take(&mut self.ops)
    }

    /// Attached elements, in document order
    pub fn snapshot(&self) -> Vec<MemoryElement> {
        self.root
            .iter()
            .filter_map(|&handle| self.element(handle).cloned())
            .collect()
    }

    /// Render the attached elements as HTML, one element per line
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for element in self.root.iter().filter_map(|&h| self.element(h)) {
            let _ = write!(out, "<{}", element.tag);
            if !element.style.is_empty() {
                let style: Vec<String> = element
                    .style
                    .iter()
                    .map(|(key, value)| format!("{key}: {value}"))
                    .collect();
                let _ = write!(out, " style=\"{}\"", escape(&style.join("; ")));
            }
            let _ = writeln!(out, ">{}</{}>", escape(&element.text), element.tag);
        }
        out
    }

    fn get_mut(&mut self, handle: ElementHandle) -> Result<&mut MemoryElement, SurfaceError> {
        self.elements
            .get_mut(handle.index())
            .and_then(Option::as_mut)
            .ok_or_else(|| stale(handle))
    }
}

impl Default for MemorySurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for MemorySurface {
    type Element = ElementHandle;

    fn create_element(&mut self, kind: &ElementKind) -> Result<ElementHandle, SurfaceError> {
        let element = MemoryElement {
            tag: kind.as_str().to_string(),
            text: String::new(),
            style: BTreeMap::new(),
        };

        let handle = match self.free_list.pop() {
            Some(index) => {
                self.elements[index as usize] = Some(element);
                ElementHandle(index)
            }
            None => {
                self.elements.push(Some(element));
                ElementHandle((self.elements.len() - 1) as u32)
            }
        };

        self.ops.push(SurfaceOp::Create {
            handle,
            tag: kind.as_str().to_string(),
        });
        Ok(handle)
    }

    fn append_to_root(&mut self, element: &ElementHandle) -> Result<(), SurfaceError> {
        self.get_mut(*element)?;
        self.root.retain(|h| h != element);
        self.root.push(*element);
        self.ops.push(SurfaceOp::Append { handle: *element });
        Ok(())
    }

    fn remove(&mut self, element: &ElementHandle) -> Result<(), SurfaceError> {
        self.get_mut(*element)?;
        self.root.retain(|h| h != element);
        self.elements[element.index()] = None;
        self.free_list.push(element.0);
        self.ops.push(SurfaceOp::Remove { handle: *element });
        Ok(())
    }

    fn set_text(&mut self, element: &ElementHandle, text: &str) -> Result<(), SurfaceError> {
        self.get_mut(*element)?.text = text.to_string();
        self.ops.push(SurfaceOp::SetText {
            handle: *element,
            text: text.to_string(),
        });
        Ok(())
    }

    fn set_style(
        &mut self,
        element: &ElementHandle,
        property: StyleProperty,
        value: &StyleValue,
    ) -> Result<(), SurfaceError> {
        let css = value.to_string();
        self.get_mut(*element)?
            .style
            .insert(property.css_name().to_string(), css.clone());
        self.ops.push(SurfaceOp::SetStyle {
            handle: *element,
            property,
            value: css,
        });
        Ok(())
    }
}

fn stale(handle: ElementHandle) -> SurfaceError {
    SurfaceError::new(format!("element {} is not live", handle.0))
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
