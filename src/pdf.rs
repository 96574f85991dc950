use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use lopdf::Document;

use crate::error::ExtractError;

const PDF_SIGNATURE: &[u8] = b"%PDF-";

/// Per-page text, pages numbered from 1.
pub trait PageSource {
    fn page_count(&self) -> usize;
    fn page_text(&self, page: usize) -> Result<String>;
}

/// A PDF loaded with `lopdf`. The document lives as long as this value.
pub struct PdfDocument {
    doc: Document,
    pages: Vec<u32>,
}

impl PdfDocument {
    pub fn open(path: &Path) -> Result<Self, ExtractError> {
        if !path.is_file() {
            return Err(ExtractError::PdfNotFound(resolve_missing(path)));
        }

        let bytes = std::fs::read(path)
            .with_context(|| format!("failed to read PDF: {}", path.display()))?;
        Ok(Self::from_bytes(&bytes)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if !bytes.starts_with(PDF_SIGNATURE) {
            anyhow::bail!("not a PDF file (missing %PDF- header)");
        }
        let doc = Document::load_mem(bytes).context("failed to parse PDF")?;
        let pages = doc.get_pages().into_keys().collect();
        Ok(Self { doc, pages })
    }
}

/// Absolute form of a path that may not exist. The parent directory is
/// canonicalized when it exists, so `..` and symlinks are resolved there.
fn resolve_missing(path: &Path) -> PathBuf {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    match (absolute.parent(), absolute.file_name()) {
        (Some(parent), Some(name)) => std::fs::canonicalize(parent)
            .map(|dir| dir.join(name))
            .unwrap_or(absolute),
        _ => absolute,
    }
}

impl PageSource for PdfDocument {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_text(&self, page: usize) -> Result<String> {
        let number = page
            .checked_sub(1)
            .and_then(|idx| self.pages.get(idx))
            .with_context(|| format!("page {page} out of range"))?;
        self.doc
            .extract_text(&[*number])
            .with_context(|| format!("failed to extract text from page {page}"))
    }
}

/// Pages already in memory.
#[cfg(test)]
impl PageSource for Vec<String> {
    fn page_count(&self) -> usize {
        self.len()
    }

    fn page_text(&self, page: usize) -> Result<String> {
        page.checked_sub(1)
            .and_then(|idx| self.get(idx))
            .cloned()
            .with_context(|| format!("page {page} out of range"))
    }
}
