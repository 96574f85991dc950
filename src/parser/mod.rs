pub mod codes;
pub mod dedup;
pub mod name;
pub mod patterns;
pub mod price;
pub mod score;
pub mod text;
pub mod window;

use anyhow::Result;
use indicatif::ProgressBar;
use tracing::{debug, info};

use crate::model::{Candidate, ExtractionResult};
use crate::pdf::PageSource;
use dedup::Deduplicator;

/// Page text → codes → windows → scored candidates, folded across pages.
pub fn extract_products<S: PageSource>(source: &S, limit: usize) -> Result<ExtractionResult> {
    extract_with_progress(source, limit, &ProgressBar::hidden())
}

pub fn extract_with_progress<S: PageSource>(
    source: &S,
    limit: usize,
    pb: &ProgressBar,
) -> Result<ExtractionResult> {
    let total_pages = source.page_count();
    let mut dedup = Deduplicator::new();
    pb.set_length(total_pages as u64);

    for page in 1..=total_pages {
        let text = source.page_text(page)?;
        pb.inc(1);
        if text.trim().is_empty() {
            debug!(page, "empty page text, skipping");
            continue;
        }
        scan_page(&mut dedup, page, &text);
    }
    pb.finish_and_clear();

    let result = dedup.finish(total_pages, limit);
    info!(
        pages = result.meta.total_pages,
        scanned = result.meta.matches_scanned,
        unique = result.meta.unique_codes,
        returned = result.meta.returned,
        "extraction finished"
    );
    Ok(result)
}

/// Fold every code on one page into `dedup`.
pub fn scan_page(dedup: &mut Deduplicator, page: usize, text: &str) {
    let scan = codes::detect(text);
    dedup.record_hits(scan.hits);

    let mut kept = 0;
    for m in &scan.matches {
        let w = window::carve(text, m);
        let name = name::extract_name(w.left);
        let price = price::nearest_price(w.context, w.code_offset);
        let score = score::score(name.as_deref(), price);

        let candidate = Candidate {
            code: m.code.clone(),
            name,
            price,
            page,
        };
        if dedup.offer(candidate, score) {
            kept += 1;
        }
    }

    debug!(
        page,
        hits = scan.hits,
        codes = scan.matches.len(),
        kept,
        unique = dedup.unique_codes(),
        "page scanned"
    );
}
