use super::patterns::CODE_RE;

pub const MIN_CODE_DIGITS: usize = 4;
pub const MAX_CODE_DIGITS: usize = 8;

/// A product code found in page text. Offsets are byte offsets of the whole
/// parenthesized token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeMatch {
    pub code: String,
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Default)]
pub struct CodeScan {
    /// Every pattern hit, including the ones dropped for their digit count.
    pub hits: usize,
    pub matches: Vec<CodeMatch>,
}

pub fn detect(text: &str) -> CodeScan {
    let mut scan = CodeScan::default();

    for caps in CODE_RE.captures_iter(text) {
        scan.hits += 1;
        let Some(whole) = caps.get(0) else {
            continue;
        };
        let code: String = caps[1].chars().filter(|c| c.is_ascii_digit()).collect();
        if !(MIN_CODE_DIGITS..=MAX_CODE_DIGITS).contains(&code.len()) {
            continue;
        }
        scan.matches.push(CodeMatch {
            code,
            start: whole.start(),
            end: whole.end(),
        });
    }

    scan
}
