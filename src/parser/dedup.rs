use std::collections::BTreeMap;

use crate::model::{Candidate, ExtractionResult, Meta};

#[derive(Debug)]
struct Scored {
    candidate: Candidate,
    score: f64,
}

/// Best candidate per code for one extraction run.
///
/// Keyed by a `BTreeMap` so the final ordering by code string falls out of
/// iteration. A later candidate replaces the stored one only on a strictly
/// higher score, so the earliest page wins ties.
#[derive(Debug, Default)]
pub struct Deduplicator {
    best: BTreeMap<String, Scored>,
    matches_scanned: usize,
}

impl Deduplicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_hits(&mut self, hits: usize) {
        self.matches_scanned += hits;
    }

    /// Returns true when `candidate` became the best for its code.
    pub fn offer(&mut self, candidate: Candidate, score: f64) -> bool {
        if let Some(current) = self.best.get(&candidate.code) {
            if current.score >= score {
                return false;
            }
        }
        self.best
            .insert(candidate.code.clone(), Scored { candidate, score });
        true
    }

    pub fn unique_codes(&self) -> usize {
        self.best.len()
    }

    /// Sorted by code, truncated to `limit` (at least 1), scores dropped.
    pub fn finish(self, total_pages: usize, limit: usize) -> ExtractionResult {
        let unique_codes = self.best.len();
        let data: Vec<Candidate> = self
            .best
            .into_values()
            .take(limit.max(1))
            .map(|s| s.candidate)
            .collect();

        ExtractionResult {
            meta: Meta {
                total_pages,
                matches_scanned: self.matches_scanned,
                unique_codes,
                returned: data.len(),
            },
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(code: &str, name: Option<&str>, price: Option<f64>, page: usize) -> Candidate {
        Candidate {
            code: code.to_string(),
            name: name.map(str::to_string),
            price,
            page,
        }
    }

    #[test]
    fn priced_candidate_beats_long_name() {
        let long_name = "Hidratante Desodorante Corporal Ekos Castanha Edição Especial";

        let mut dedup = Deduplicator::new();
        assert!(dedup.offer(candidate("123456", Some(long_name), None, 1), 1.5));
        assert!(dedup.offer(candidate("123456", None, Some(29.9), 2), 3.0));
        let first = dedup.finish(2, 10);
        assert_eq!(first.data[0].page, 2);

        let mut dedup = Deduplicator::new();
        assert!(dedup.offer(candidate("123456", None, Some(29.9), 1), 3.0));
        assert!(!dedup.offer(candidate("123456", Some(long_name), None, 2), 1.5));
        let second = dedup.finish(2, 10);
        assert_eq!(second.data[0].page, 1);
        assert_eq!(second.data[0].price, Some(29.9));
    }

    #[test]
    fn tie_keeps_first_seen() {
        let mut dedup = Deduplicator::new();
        dedup.offer(candidate("5555", Some("Primeiro"), None, 1), 0.16);
        assert!(!dedup.offer(candidate("5555", Some("Segundo!"), None, 2), 0.16));
        let result = dedup.finish(2, 10);
        assert_eq!(result.data[0].name.as_deref(), Some("Primeiro"));
    }

    #[test]
    fn sorts_by_code_string_and_truncates() {
        let mut dedup = Deduplicator::new();
        dedup.record_hits(4);
        for code in ["90000", "100000", "12345", "55555"] {
            dedup.offer(candidate(code, None, None, 1), 0.0);
        }
        let result = dedup.finish(1, 3);
        let codes: Vec<&str> = result.data.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, vec!["100000", "12345", "55555"]);
        assert_eq!(
            result.meta,
            Meta {
                total_pages: 1,
                matches_scanned: 4,
                unique_codes: 4,
                returned: 3,
            }
        );
    }

    #[test]
    fn zero_limit_still_returns_one() {
        let mut dedup = Deduplicator::new();
        dedup.offer(candidate("1111", None, None, 1), 0.0);
        dedup.offer(candidate("2222", None, None, 1), 0.0);
        let result = dedup.finish(1, 0);
        assert_eq!(result.data.len(), 1);
        assert_eq!(result.meta.unique_codes, 2);
    }

    #[test]
    fn empty_run() {
        let result = Deduplicator::new().finish(5, 10);
        assert!(result.data.is_empty());
        assert_eq!(result.meta.total_pages, 5);
        assert_eq!(result.meta.returned, 0);
    }
}
