mod property;
mod value;

pub use property::{StyleProperty, ValueKind};
pub use value::{Color, Length, StyleValue};
