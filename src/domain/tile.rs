// ============================================================
// TILE TYPES
// ============================================================
// Data structures representing one displayable dashboard record

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Column names recognized by the renderer. Header matching is case-sensitive;
/// unrecognized columns are retained in the value map but unused.
pub const COL_TITLE: &str = "Title";
pub const COL_LINK: &str = "Link";
pub const COL_REFERENCE_LINK: &str = "Reference Link";
pub const COL_DESCRIPTION: &str = "Description";
pub const COL_TAGLINES: &str = "Taglines";
pub const COL_ICON: &str = "Icon";

/// A single tile parsed from one non-blank data line.
///
/// Immutable after construction. Values are trimmed at build time and the
/// link/icon fields are materialized up front so downstream access never has
/// to re-derive them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tile {
    /// Source row index (0-based, counting retained rows)
    pub index: usize,

    /// Column name -> trimmed value
    pub values: HashMap<String, String>,

    /// Trimmed value of the `Link` column (may be empty)
    pub url: String,

    /// Trimmed value of the `Reference Link` column (may be empty)
    pub reference_url: String,

    /// Trimmed value of the optional `Icon` column (may be empty)
    pub icon: String,
}

impl Tile {
    /// Build a tile by zipping header names to field values positionally.
    /// A short row yields empty strings for missing trailing columns; extra
    /// fields beyond the header are ignored.
    pub fn new(index: usize, header: &[String], fields: &[String]) -> Self {
        let mut values = HashMap::new();
        for (idx, name) in header.iter().enumerate() {
            let value = fields
                .get(idx)
                .map(|v| v.trim().to_string())
                .unwrap_or_default();
            // Duplicate header names: last value wins.
            values.insert(name.clone(), value);
        }

        let url = values.get(COL_LINK).cloned().unwrap_or_default();
        let reference_url = values.get(COL_REFERENCE_LINK).cloned().unwrap_or_default();
        let icon = values.get(COL_ICON).cloned().unwrap_or_default();

        Self {
            index,
            values,
            url,
            reference_url,
            icon,
        }
    }

    /// Build one of the fallback tiles substituted when the source is missing.
    pub fn synthetic(index: usize, title: &str) -> Self {
        let mut values = HashMap::new();
        values.insert(COL_TITLE.to_string(), title.to_string());
        values.insert(COL_LINK.to_string(), "#".to_string());
        values.insert(COL_REFERENCE_LINK.to_string(), "#".to_string());
        values.insert(COL_DESCRIPTION.to_string(), String::new());
        values.insert(COL_TAGLINES.to_string(), "Other".to_string());
        values.insert(COL_ICON.to_string(), String::new());

        Self {
            index,
            values,
            url: "#".to_string(),
            reference_url: "#".to_string(),
            icon: String::new(),
        }
    }

    /// Explicit field lookup: missing columns read as the empty string.
    pub fn field(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn title(&self) -> &str {
        self.field(COL_TITLE)
    }

    pub fn description(&self) -> &str {
        self.field(COL_DESCRIPTION)
    }

    pub fn taglines(&self) -> &str {
        self.field(COL_TAGLINES)
    }

    /// A tile with no title and no links carries nothing displayable and is
    /// dropped by the loader.
    pub fn has_content(&self) -> bool {
        !(self.title().is_empty() && self.url.is_empty() && self.reference_url.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn fields(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_builds_derived_fields() {
        let h = header(&["Title", "Link", "Reference Link", "Icon"]);
        let tile = Tile::new(0, &h, &fields(&["Foo", " http://a ", "http://b", "star"]));

        assert_eq!(tile.title(), "Foo");
        assert_eq!(tile.url, "http://a");
        assert_eq!(tile.reference_url, "http://b");
        assert_eq!(tile.icon, "star");
    }

    #[test]
    fn test_short_row_pads_with_empty_strings() {
        let h = header(&["Title", "Link", "Reference Link", "Description"]);
        let tile = Tile::new(0, &h, &fields(&["Foo"]));

        assert_eq!(tile.title(), "Foo");
        assert_eq!(tile.url, "");
        assert_eq!(tile.description(), "");
    }

    #[test]
    fn test_long_row_ignores_extra_fields() {
        let h = header(&["Title", "Link"]);
        let tile = Tile::new(0, &h, &fields(&["Foo", "http://a", "spill", "over"]));

        assert_eq!(tile.values.len(), 2);
        assert_eq!(tile.url, "http://a");
    }

    #[test]
    fn test_duplicate_header_last_value_wins() {
        let h = header(&["Title", "Title", "Link"]);
        let tile = Tile::new(0, &h, &fields(&["First", "Second", "http://a"]));

        assert_eq!(tile.title(), "Second");
    }

    #[test]
    fn test_discard_invariant_ignores_description_and_taglines() {
        let h = header(&["Title", "Link", "Reference Link", "Description", "Taglines"]);
        let with_description = Tile::new(0, &h, &fields(&["", "", "", "x", ""]));
        let with_taglines = Tile::new(0, &h, &fields(&["", "", "", "", "x"]));
        let with_title = Tile::new(0, &h, &fields(&["x", "", "", "", ""]));

        assert!(!with_description.has_content());
        assert!(!with_taglines.has_content());
        assert!(with_title.has_content());
    }

    #[test]
    fn test_missing_column_reads_as_empty() {
        let h = header(&["Title"]);
        let tile = Tile::new(0, &h, &fields(&["Foo"]));

        assert_eq!(tile.field("No Such Column"), "");
        assert_eq!(tile.taglines(), "");
    }

    #[test]
    fn test_synthetic_tile_shape() {
        let tile = Tile::synthetic(0, "SOPs");

        assert_eq!(tile.title(), "SOPs");
        assert_eq!(tile.url, "#");
        assert_eq!(tile.reference_url, "#");
        assert_eq!(tile.taglines(), "Other");
        assert!(tile.has_content());
    }
}
