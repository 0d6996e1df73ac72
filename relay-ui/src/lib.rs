//! Applies batches of declarative UI mutations to a rendering surface.
//!
//! A host queues [`Command`]s in a [`CommandBuffer`], ships them to the web
//! view as a JSON frame, and a [`CommandApplier`] there creates, updates and
//! removes elements on a [`Surface`], keeping the node id to element map.

pub mod applier;
pub mod command;
pub mod config;
pub mod error;
pub mod host;
pub mod node;
pub mod style;
pub mod surface;

pub use applier::{BatchError, BatchReport, CommandApplier, FrameError};
pub use command::{Command, Layout};
pub use config::{ApplierConfig, DuplicatePolicy, FailurePolicy};
pub use error::{ApplyError, CommandError, DecodeError, SurfaceError};
pub use host::CommandBuffer;
pub use node::{ElementKind, NodeId};
pub use style::{StyleProperty, StyleValue};
pub use surface::{MemorySurface, Surface};
