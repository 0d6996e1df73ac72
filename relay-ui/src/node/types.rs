use crate::error::CommandError;
use serde::{Deserialize, Serialize};
use smartstring::{LazyCompact, SmartString};
use std::fmt;

/// Caller-assigned key for one rendered element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Tag name of the element a `createNode` instantiates
///
/// Always lower-case ASCII: a letter followed by letters, digits or `-`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ElementKind(SmartString<LazyCompact>);

impl ElementKind {
    pub fn new(tag: &str) -> Result<Self, CommandError> {
        let mut chars = tag.chars();
        let valid = match chars.next() {
            Some(first) => {
                first.is_ascii_alphabetic()
                    && chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
            }
            None => false,
        };

        if !valid {
            return Err(CommandError::InvalidElementKind(tag.to_string()));
        }

        Ok(Self(tag.to_ascii_lowercase().into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_kind_lowercases() {
        let kind = ElementKind::new("DIV").unwrap();
        assert_eq!(kind.as_str(), "div");
    }

    #[test]
    fn test_element_kind_allows_custom_elements() {
        assert!(ElementKind::new("my-widget").is_ok());
        assert!(ElementKind::new("h1").is_ok());
        assert!(ElementKind::new("text").is_ok());
    }

    #[test]
    fn test_element_kind_rejects_invalid_names() {
        for bad in ["", "1div", "-x", "di v", "<div>", "span!"] {
            assert_eq!(
                ElementKind::new(bad),
                Err(CommandError::InvalidElementKind(bad.to_string())),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_node_id_serializes_as_number() {
        assert_eq!(serde_json::to_string(&NodeId(7)).unwrap(), "7");
        let id: NodeId = serde_json::from_str("42").unwrap();
        assert_eq!(id, NodeId(42));
    }
}
