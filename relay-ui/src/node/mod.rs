mod registry;
mod types;

pub use registry::NodeRegistry;
pub use types::{ElementKind, NodeId};
