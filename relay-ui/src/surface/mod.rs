mod memory;
mod traits;

pub use memory::{ElementHandle, MemoryElement, MemorySurface, SurfaceOp};
pub use traits::Surface;
