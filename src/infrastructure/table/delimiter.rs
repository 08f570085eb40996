// ============================================================
// DELIMITER DETECTION
// ============================================================
// Sampling-based inference of the field separator used by a
// delimited export

use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of non-blank lines sampled for detection.
pub const SAMPLE_LINE_LIMIT: usize = 10;

/// The closed set of separators heterogeneous exports use. Exactly one is
/// active for a whole file; mixed-delimiter files are unsupported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Delimiter {
    Tab,
    Comma,
    Semicolon,
    Pipe,
}

impl Delimiter {
    /// Candidates in testing order. This order is also the detection
    /// tie-break: at equal modal field counts the earlier candidate wins.
    pub const CANDIDATES: [Delimiter; 4] = [
        Delimiter::Tab,
        Delimiter::Comma,
        Delimiter::Semicolon,
        Delimiter::Pipe,
    ];

    pub fn as_byte(self) -> u8 {
        match self {
            Delimiter::Tab => b'\t',
            Delimiter::Comma => b',',
            Delimiter::Semicolon => b';',
            Delimiter::Pipe => b'|',
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Delimiter::Tab => "tab",
            Delimiter::Comma => "comma",
            Delimiter::Semicolon => "semicolon",
            Delimiter::Pipe => "pipe",
        };
        write!(f, "{}", name)
    }
}

/// Split one line into trimmed fields using the given delimiter.
///
/// Quote character `"`, backslash as escape for embedded quotes. Parsing is
/// best-effort: unterminated quotes consume to end of line, malformed quoting
/// never errors.
pub fn split_line(line: &str, delimiter: Delimiter) -> Vec<String> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter.as_byte())
        .has_headers(false)
        .flexible(true)
        .escape(Some(b'\\'))
        .from_reader(line.as_bytes());

    match reader.records().next() {
        Some(Ok(record)) => record.iter().map(|f| f.trim().to_string()).collect(),
        _ => Vec::new(),
    }
}

/// Most frequent field count across the sample for one candidate delimiter.
/// Tallies are kept in first-seen order so the frequency sort (stable) breaks
/// frequency ties deterministically.
fn modal_field_count(sample: &[&str], delimiter: Delimiter) -> usize {
    let mut tally: Vec<(usize, usize)> = Vec::new();
    for line in sample {
        let count = split_line(line, delimiter).len();
        match tally.iter_mut().find(|(c, _)| *c == count) {
            Some((_, seen)) => *seen += 1,
            None => tally.push((count, 1)),
        }
    }

    tally.sort_by(|a, b| b.1.cmp(&a.1));
    tally.first().map(|(count, _)| *count).unwrap_or(0)
}

/// Pick the delimiter whose modal field count over the sample is largest.
///
/// More columns split correctly implies a better match: a separator absent
/// from the data collapses every line to one field and cannot beat one that
/// actually segments it. An empty sample defaults to comma.
pub fn detect(sample: &[&str]) -> Delimiter {
    if sample.is_empty() {
        return Delimiter::Comma;
    }

    let mut best = Delimiter::CANDIDATES[0];
    let mut best_count = 0usize;

    for candidate in Delimiter::CANDIDATES {
        let modal = modal_field_count(sample, candidate);
        if modal > best_count {
            best_count = modal;
            best = candidate;
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_each_candidate() {
        assert_eq!(detect(&["a\tb\tc", "d\te\tf"]), Delimiter::Tab);
        assert_eq!(detect(&["a,b,c", "d,e,f"]), Delimiter::Comma);
        assert_eq!(detect(&["a;b;c", "d;e;f"]), Delimiter::Semicolon);
        assert_eq!(detect(&["a|b|c", "d|e|f"]), Delimiter::Pipe);
    }

    #[test]
    fn test_detection_is_deterministic() {
        let sample = ["Title,Link", "Foo,http://a", "Bar,http://b"];
        let first = detect(&sample);
        for _ in 0..10 {
            assert_eq!(detect(&sample), first);
        }
    }

    #[test]
    fn test_tie_break_prefers_tab_over_comma() {
        // Every line splits into 3 fields under tab and under comma.
        let sample = ["a\tb\tc,d,e", "f\tg\th,i,j", "k\tl\tm,n,o"];
        assert_eq!(detect(&sample), Delimiter::Tab);
    }

    #[test]
    fn test_empty_sample_defaults_to_comma() {
        assert_eq!(detect(&[]), Delimiter::Comma);
    }

    #[test]
    fn test_modal_count_ignores_outlier_lines() {
        // One comma-free line must not drag the winner away from comma.
        let sample = ["a,b,c", "d,e,f", "no separators here", "g,h,i"];
        assert_eq!(detect(&sample), Delimiter::Comma);
    }

    #[test]
    fn test_split_line_respects_quotes() {
        let fields = split_line("\"a,b\",c", Delimiter::Comma);
        assert_eq!(fields, vec!["a,b", "c"]);
    }

    #[test]
    fn test_split_line_backslash_escaped_quote() {
        let fields = split_line("\"a\\\"b\",c", Delimiter::Comma);
        assert_eq!(fields, vec!["a\"b", "c"]);
    }

    #[test]
    fn test_split_line_unterminated_quote_consumes_to_end() {
        let fields = split_line("\"open,never closed", Delimiter::Comma);
        assert_eq!(fields, vec!["open,never closed"]);
    }
}
