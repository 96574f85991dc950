use super::codes::CodeMatch;
use super::text::{char_len, head_chars, tail_chars};

pub const LEFT_WINDOW_CHARS: usize = 260;
pub const RIGHT_WINDOW_CHARS: usize = 240;

/// Slices of page text around one code match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window<'a> {
    /// Text before the code, used for the name.
    pub left: &'a str,
    /// `left` + code token + text after it, used for the price.
    pub context: &'a str,
    /// Character offset of the code token inside `context`.
    pub code_offset: usize,
}

pub fn carve<'a>(text: &'a str, m: &CodeMatch) -> Window<'a> {
    let left = tail_chars(&text[..m.start], LEFT_WINDOW_CHARS);
    let right = head_chars(&text[m.end..], RIGHT_WINDOW_CHARS);
    let left_start = m.start - left.len();
    let right_end = m.end + right.len();

    Window {
        left,
        context: &text[left_start..right_end],
        code_offset: char_len(left),
    }
}
