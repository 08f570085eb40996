// ============================================================
// TABLE LOADER
// ============================================================
// Read a delimited export, detect its delimiter, and normalize
// rows into tiles

use std::fs;
use std::path::Path;

use encoding_rs::UTF_8;
use serde::Serialize;
use tracing::warn;

use super::delimiter::{detect, split_line, Delimiter, SAMPLE_LINE_LIMIT};
use crate::domain::error::{AppError, Result};
use crate::domain::tile::Tile;

/// Diagnostics for one load pass. Returned by value so no global state
/// survives between loads; the status endpoint serializes it as-is.
#[derive(Debug, Clone, Serialize)]
pub struct LoadReport {
    pub delimiter: Delimiter,
    pub header: Vec<String>,
    pub sample_lines: Vec<String>,
    /// Non-blank data lines parsed (retained or not)
    pub rows_parsed: usize,
    /// Rows dropped for carrying no title and no links
    pub rows_discarded: usize,
}

/// Result of one load pass: the retained tiles plus the report.
#[derive(Debug)]
pub struct LoadOutcome {
    pub tiles: Vec<Tile>,
    pub report: LoadReport,
}

/// Strip a leading UTF-8 byte-order-mark. BOM bytes left on the first header
/// cell silently corrupt column matching. Idempotent.
pub fn strip_bom(line: &str) -> &str {
    line.strip_prefix('\u{feff}').unwrap_or(line)
}

/// Replace `\r\n` and lone `\r` with `\n` so line splitting behaves the same
/// regardless of the export's origin platform.
pub fn normalize_newlines(content: &str) -> String {
    content.replace("\r\n", "\n").replace('\r', "\n")
}

/// Loads a delimited text source into tiles.
pub struct TableLoader;

impl TableLoader {
    /// Load from a file. Fails with `SourceUnavailable` if the file cannot be
    /// read; the caller substitutes the fallback dataset in that case rather
    /// than surfacing the failure.
    pub fn load_file(path: &Path) -> Result<LoadOutcome> {
        let bytes = fs::read(path).map_err(|err| {
            AppError::SourceUnavailable(format!("{}: {}", path.display(), err))
        })?;
        Ok(Self::load_bytes(&bytes))
    }

    /// Load from raw bytes, decoding as UTF-8 with lossy replacement.
    pub fn load_bytes(bytes: &[u8]) -> LoadOutcome {
        let (decoded, _, _) = UTF_8.decode(bytes);
        Self::load_content(&decoded)
    }

    /// Load from already-decoded text. Never fails: malformed quoting and
    /// mismatched field counts degrade row by row instead of halting.
    pub fn load_content(content: &str) -> LoadOutcome {
        let normalized = normalize_newlines(content);
        let lines: Vec<&str> = normalized.split('\n').map(strip_bom).collect();

        let sample: Vec<&str> = lines
            .iter()
            .copied()
            .filter(|line| !line.trim().is_empty())
            .take(SAMPLE_LINE_LIMIT)
            .collect();
        let delimiter = detect(&sample);

        let header: Vec<String> = match lines.first() {
            Some(line) => split_line(line, delimiter),
            None => Vec::new(),
        };

        let mut tiles = Vec::new();
        let mut rows_parsed = 0usize;
        let mut rows_discarded = 0usize;

        for line in lines.iter().skip(1) {
            if line.trim().is_empty() {
                continue;
            }
            rows_parsed += 1;

            let fields = split_line(line, delimiter);
            let tile = Tile::new(tiles.len(), &header, &fields);
            if tile.has_content() {
                tiles.push(tile);
            } else {
                rows_discarded += 1;
            }
        }

        if tiles.is_empty() && !content.trim().is_empty() {
            warn!(
                delimiter = %delimiter,
                header_fields = header.len(),
                "zero rows parsed from a non-empty source, likely a header or delimiter mismatch"
            );
        }

        LoadOutcome {
            tiles,
            report: LoadReport {
                delimiter,
                header,
                sample_lines: sample.iter().map(|s| s.to_string()).collect(),
                rows_parsed,
                rows_discarded,
            },
        }
    }
}
