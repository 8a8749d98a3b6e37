//! Line splitter: turns a raw line into an ordered field vector.

use settle_core::DelimiterKind;

/// Split `line` according to `kind`. Never fails — a short or empty
/// line simply yields a short vector. `Positional` yields no fields at
/// all; positional extractors read byte offsets off the raw line
/// directly (see `extractors::unionbank`, `::sm`, `::bancnet`).
pub fn split_fields(line: &str, kind: DelimiterKind) -> Vec<String> {
    match kind {
        DelimiterKind::Pipe => split_structured(line, '|'),
        DelimiterKind::Caret => split_structured(line, '^'),
        DelimiterKind::Comma => split_structured(line, ','),
        DelimiterKind::Whitespace => line
            .split_whitespace()
            .map(|f| f.trim().to_string())
            .collect(),
        DelimiterKind::MixedCaretPipe => line
            .split('|')
            .flat_map(|piece| piece.split('^'))
            .map(|f| f.trim().to_string())
            .filter(|f| !f.is_empty())
            .collect(),
        DelimiterKind::Positional => Vec::new(),
    }
}

/// Split on a single-character structured delimiter. Empty fields are
/// retained (a structured format's column count is meaningful even
/// when a column is blank).
fn split_structured(line: &str, delimiter: char) -> Vec<String> {
    line.split(delimiter).map(|f| f.trim().to_string()).collect()
}
