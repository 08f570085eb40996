// ============================================================
// TILE GROUPER
// ============================================================
// Fan tiles out into tag groups and order the sections

use std::collections::{HashMap, HashSet};

use crate::domain::group::{compare_tags, TileGroup, FALLBACK_TAG};
use crate::domain::tile::Tile;

/// Pure transform from loaded tiles to ordered dashboard sections.
pub struct TileGrouper;

impl TileGrouper {
    /// Expand each tile's taglines into group membership and sort the groups
    /// with the phase-aware comparator. Member order within a group follows
    /// source row order.
    pub fn group(tiles: &[Tile]) -> Vec<TileGroup<'_>> {
        let mut members: HashMap<String, Vec<&Tile>> = HashMap::new();

        for tile in tiles {
            for tag in Self::tags_for(tile) {
                members.entry(tag).or_default().push(tile);
            }
        }

        let mut groups: Vec<TileGroup> = members
            .into_iter()
            .map(|(tag, members)| TileGroup { tag, members })
            .collect();
        groups.sort_by(|a, b| compare_tags(&a.tag, &b.tag));
        groups
    }

    /// Split a tile's taglines on commas, trim each piece, and drop empties.
    /// Blank taglines fall back to the synthetic "Other" tag, and so does a
    /// tagline that is nothing but separators. Duplicate tag text within one
    /// row fans out once, not twice.
    fn tags_for(tile: &Tile) -> Vec<String> {
        let raw = tile.taglines().trim();
        if raw.is_empty() {
            return vec![FALLBACK_TAG.to_string()];
        }

        let mut seen = HashSet::new();
        let mut tags = Vec::new();
        for piece in raw.split(',') {
            let tag = piece.trim();
            if tag.is_empty() {
                continue;
            }
            if seen.insert(tag.to_string()) {
                tags.push(tag.to_string());
            }
        }

        if tags.is_empty() {
            vec![FALLBACK_TAG.to_string()]
        } else {
            tags
        }
    }
}
