//! Character-based slicing. Window sizes and name limits count characters,
//! so these never split a multi-byte sequence.

use super::patterns::SPACES_RE;

pub fn normalize_spaces(value: &str) -> String {
    SPACES_RE.replace_all(value, " ").trim().to_string()
}

/// The last `n` characters of `s`.
pub fn tail_chars(s: &str, n: usize) -> &str {
    if n == 0 {
        return &s[s.len()..];
    }
    match s.char_indices().rev().nth(n - 1) {
        Some((idx, _)) => &s[idx..],
        None => s,
    }
}

/// The first `n` characters of `s`.
pub fn head_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_whitespace() {
        assert_eq!(normalize_spaces("  Óleo \n\t Trifásico  "), "Óleo Trifásico");
        assert_eq!(normalize_spaces(" \n "), "");
    }

    #[test]
    fn slices_by_chars() {
        assert_eq!(tail_chars("perfumação", 4), "ação");
        assert_eq!(tail_chars("abc", 10), "abc");
        assert_eq!(tail_chars("abc", 0), "");
        assert_eq!(head_chars("ção de", 3), "ção");
        assert_eq!(head_chars("ab", 5), "ab");
        assert_eq!(char_len("ção"), 3);
    }
}
