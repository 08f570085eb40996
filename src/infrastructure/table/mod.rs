// ============================================================
// TABLE INFRASTRUCTURE LAYER
// ============================================================
// Delimiter detection and delimited-text loading

mod delimiter;
mod loader;

pub use delimiter::{detect, split_line, Delimiter, SAMPLE_LINE_LIMIT};
pub use loader::{normalize_newlines, strip_bom, LoadOutcome, LoadReport, TableLoader};
