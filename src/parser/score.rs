use super::text::char_len;

const PRICE_WEIGHT: f64 = 3.0;
const NAME_CHARS_CAP: usize = 100;
const NAME_CHARS_PER_POINT: f64 = 50.0;
const REPEATED_REFIL_PENALTY: f64 = 0.5;

/// Ranks candidates for the same code. A price is worth more than any name.
pub fn score(name: Option<&str>, price: Option<f64>) -> f64 {
    let mut score = 0.0;
    if price.is_some() {
        score += PRICE_WEIGHT;
    }
    if let Some(name) = name.filter(|n| !n.is_empty()) {
        score += char_len(name).min(NAME_CHARS_CAP) as f64 / NAME_CHARS_PER_POINT;
        // text extraction sometimes doubles words
        if name.to_uppercase().contains("REFIL REFIL") {
            score -= REPEATED_REFIL_PENALTY;
        }
    }
    score
}
