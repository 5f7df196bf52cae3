//! Domain types for accent color detection.

mod color;
pub mod palette;

pub use color::{AccentColor, ColorParseError};
pub use palette::Palette;
