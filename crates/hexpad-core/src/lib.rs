//! Fixed-width hex color helpers.
//!
//! `pad_hex` is total over every string input: it pads or truncates, and it
//! never checks that the characters are hex digits. Use `is_hex_color` when a
//! caller needs that guarantee.

pub mod color;
pub mod pad;

pub use color::{is_hex_color, rgb_hex};
pub use pad::{HEX_COLOR_WIDTH, pad_hex};
