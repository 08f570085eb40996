// ============================================================
// DOMAIN LAYER
// ============================================================
// Core tile and group types plus the error taxonomy
// No I/O, no async

pub mod error;
pub mod group;
pub mod tile;

pub use error::{AppError, Result};
pub use group::{compare_tags, phase_number, TileGroup, FALLBACK_TAG};
pub use tile::Tile;
