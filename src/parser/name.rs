use super::patterns::{LETTER_RE, NAME_NOISE_RE, ORDINAL_RE};
use super::text::{char_len, normalize_spaces, tail_chars};

const NAME_SOURCE_CHARS: usize = 220;
const MAX_NAME_CHARS: usize = 120;
const MIN_LETTERS: usize = 4;
const EDGE_CHARS: &[char] = &[' ', '-', '.', ',', ';', ':'];

/// Best-effort product name from the text left of a code.
pub fn extract_name(left: &str) -> Option<String> {
    let candidate = normalize_spaces(tail_chars(left, NAME_SOURCE_CHARS));
    if candidate.is_empty() {
        return None;
    }

    let candidate = NAME_NOISE_RE.replace_all(&candidate, "");
    let candidate = ORDINAL_RE.replace(&candidate, "");
    let mut candidate = normalize_spaces(candidate.trim_matches(EDGE_CHARS));
    if candidate.is_empty() {
        return None;
    }

    // The product label sits right before the code.
    if char_len(&candidate) > MAX_NAME_CHARS {
        candidate = tail_chars(&candidate, MAX_NAME_CHARS)
            .trim_start_matches(EDGE_CHARS)
            .to_string();
    }

    if candidate.to_lowercase().starts_with("r$") {
        return None;
    }
    if LETTER_RE.find_iter(&candidate).count() < MIN_LETTERS {
        return None;
    }

    Some(candidate)
}
