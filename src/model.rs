use serde::Serialize;

/// One product candidate as written to stdout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candidate {
    pub code: String,
    pub name: Option<String>,
    pub price: Option<f64>,
    /// 1-based page index.
    pub page: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    pub total_pages: usize,
    pub matches_scanned: usize,
    pub unique_codes: usize,
    pub returned: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractionResult {
    pub data: Vec<Candidate>,
    pub meta: Meta,
}

#[derive(Debug, Serialize)]
pub struct ErrorPayload<'a> {
    pub error: &'a str,
    pub message: String,
}
