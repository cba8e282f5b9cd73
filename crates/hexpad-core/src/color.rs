use crate::pad::{HEX_COLOR_WIDTH, pad_hex};

/// Format a numeric RGB value as a six-character lowercase hex code.
///
/// Values wider than 24 bits keep their leading six hex digits, the same
/// truncation `pad_hex` applies to long strings.
pub fn rgb_hex(rgb: u32) -> String {
    pad_hex(&format!("{rgb:x}"))
}

/// True when `s` is exactly six ASCII hex digits (either case).
pub fn is_hex_color(s: &str) -> bool {
    s.len() == HEX_COLOR_WIDTH && s.bytes().all(|b| b.is_ascii_hexdigit())
}
