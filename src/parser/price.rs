use regex::Captures;

use super::patterns::{PRICE_BRL_RE, PRICE_LOOSE_RE};
use super::text::char_len;

/// Loose matches outside this range are page numbers, percentages and such.
const LOOSE_MIN: f64 = 1.0;
const LOOSE_MAX: f64 = 5000.0;

/// Price nearest to the code at `code_offset` (characters into `context`).
///
/// Currency-prefixed prices win outright. Bare `12,34` numbers are only
/// considered when no `R$` price is present at all. On equal distance the
/// earlier match is kept.
pub fn nearest_price(context: &str, code_offset: usize) -> Option<f64> {
    let strict = PRICE_BRL_RE
        .captures_iter(context)
        .filter_map(|caps| parse_match(&caps));
    if let Some(price) = nearest(context, code_offset, strict) {
        return Some(price);
    }

    let loose = loose_matches(context)
        .into_iter()
        .filter(|(_, value)| (LOOSE_MIN..=LOOSE_MAX).contains(value));
    nearest(context, code_offset, loose)
}

/// `1.234` + `56` -> 1234.56
pub fn parse_brl(integer_part: &str, decimal_part: &str) -> Option<f64> {
    format!("{}.{}", integer_part.replace('.', ""), decimal_part)
        .parse()
        .ok()
}

fn parse_match(caps: &Captures) -> Option<(usize, f64)> {
    let start = caps.get(0)?.start();
    let value = parse_brl(caps.get(1)?.as_str(), caps.get(2)?.as_str())?;
    Some((start, value))
}

/// Loose pattern hits that are not glued to other digits. A hit rejected for
/// a neighbouring digit is retried one character later.
fn loose_matches(context: &str) -> Vec<(usize, f64)> {
    let mut found = Vec::new();
    let mut pos = 0;

    while pos <= context.len() {
        let Some(caps) = PRICE_LOOSE_RE.captures_at(context, pos) else {
            break;
        };
        let Some(whole) = caps.get(0) else {
            break;
        };

        let digit_before = context[..whole.start()]
            .chars()
            .next_back()
            .is_some_and(|c| c.is_ascii_digit());
        let digit_after = context[whole.end()..]
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_digit());

        if digit_before || digit_after {
            pos = whole.start()
                + context[whole.start()..]
                    .chars()
                    .next()
                    .map_or(1, char::len_utf8);
            continue;
        }

        if let Some(hit) = parse_match(&caps) {
            found.push(hit);
        }
        pos = whole.end();
    }

    found
}

fn nearest(
    context: &str,
    code_offset: usize,
    hits: impl IntoIterator<Item = (usize, f64)>,
) -> Option<f64> {
    let mut best: Option<(usize, f64)> = None;

    for (byte_start, value) in hits {
        let distance = char_len(&context[..byte_start]).abs_diff(code_offset);
        if best.map_or(true, |(d, _)| distance < d) {
            best = Some((distance, value));
        }
    }

    best.map(|(_, value)| value)
}
