// ============================================================
// TILE GROUPS
// ============================================================
// Tag-keyed collections of tiles and the section ordering rules

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::cmp::Ordering;

use super::tile::Tile;

/// Tag assigned to tiles whose `Taglines` field is absent or blank.
pub const FALLBACK_TAG: &str = "Other";

static PHASE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)phase\s*(\d+)").unwrap());

/// One dashboard section: a tag and the tiles that declared it.
///
/// Members borrow from the loaded tile slice; a tile with several tags is
/// referenced by several groups, never copied. Member order follows source
/// row order.
#[derive(Debug, Serialize)]
pub struct TileGroup<'a> {
    pub tag: String,
    pub members: Vec<&'a Tile>,
}

/// Extract the phase number from a tag containing "Phase <digits>" anywhere,
/// case-insensitive.
pub fn phase_number(tag: &str) -> Option<u64> {
    PHASE_RE
        .captures(tag)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u64>().ok())
}

/// Two-key tag ordering: tags with a phase number sort first, ascending by
/// that number; everything else sorts after, and ties fall back to ordinal
/// string comparison. "Phase 10" lands after "Phase 1" because the primary
/// key is numeric, not lexical.
pub fn compare_tags(a: &str, b: &str) -> Ordering {
    let key_a = phase_number(a).unwrap_or(u64::MAX);
    let key_b = phase_number(b).unwrap_or(u64::MAX);
    key_a.cmp(&key_b).then_with(|| a.cmp(b))
}
