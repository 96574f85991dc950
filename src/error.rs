use std::path::PathBuf;

use thiserror::Error;

use crate::model::ErrorPayload;

/// Failures reported to the caller as a JSON error line.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("PDF file not found: {}", .0.display())]
    PdfNotFound(PathBuf),

    #[error("{0:#}")]
    ParseFailed(#[from] anyhow::Error),
}

impl ExtractError {
    pub fn kind(&self) -> &'static str {
        match self {
            ExtractError::PdfNotFound(_) => "pdf_not_found",
            ExtractError::ParseFailed(_) => "magazine_parse_failed",
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            ExtractError::PdfNotFound(_) => 2,
            ExtractError::ParseFailed(_) => 1,
        }
    }

    pub fn payload(&self) -> ErrorPayload<'static> {
        ErrorPayload {
            error: self.kind(),
            message: self.to_string(),
        }
    }
}
