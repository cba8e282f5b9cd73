/// Width of an RGB hex color code, in characters.
pub const HEX_COLOR_WIDTH: usize = 6;

/// Left-pad `input` with `'0'` to six characters, then keep the first six.
///
/// Length is counted in `char`s, so multi-byte input is never split inside a
/// code point. Characters past the sixth are dropped on the right.
///
/// ```
/// use hexpad_core::pad_hex;
///
/// assert_eq!(pad_hex(""), "000000");
/// assert_eq!(pad_hex("ff"), "0000ff");
/// assert_eq!(pad_hex("abcdefgh"), "abcdef");
/// ```
pub fn pad_hex(input: &str) -> String {
    let len = input.chars().count();

    if len >= HEX_COLOR_WIDTH {
        return input.chars().take(HEX_COLOR_WIDTH).collect();
    }

    let mut out = String::with_capacity(HEX_COLOR_WIDTH - len + input.len());
    for _ in len..HEX_COLOR_WIDTH {
        out.push('0');
    }
    out.push_str(input);
    out
}
