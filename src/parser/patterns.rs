use std::sync::LazyLock;

use regex::Regex;

/// Parenthesized product code, e.g. `(1234567)` or `(12 34 567)`.
pub static CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([0-9][0-9\s]{3,10})\)").unwrap());

/// `R$ 1.234,56` style price. Group 1 is the integer part, group 2 the cents.
pub static PRICE_BRL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"R\$\s*([0-9]{1,3}(?:\.[0-9]{3})*|[0-9]+)\s*,\s*([0-9]{2})").unwrap()
});

/// Same numeric shape without the currency marker. The scanner in `price`
/// additionally requires no digit immediately before or after the match.
pub static PRICE_LOOSE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]{1,3}(?:\.[0-9]{3})*|[0-9]+)\s*,\s*([0-9]{2})").unwrap());

/// Trailing clauses that describe offers rather than the product.
pub static NAME_NOISE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:\bde\s*R\$.*$|\beconomize\b.*$|\bna compra\b.*$|\bdurante o ciclo\b.*$)")
        .unwrap()
});

pub static SPACES_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
pub static ORDINAL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+\.\s*").unwrap());
pub static LETTER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Za-zÀ-ÿ]").unwrap());
