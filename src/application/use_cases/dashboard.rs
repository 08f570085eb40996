// ============================================================
// DASHBOARD USE CASE
// ============================================================
// Orchestrate load, fallback substitution, and grouping into
// the view the renderer consumes

use chrono::Local;
use serde::Serialize;
use tracing::info;

use super::grouper::TileGrouper;
use crate::domain::error::{AppError, Result};
use crate::domain::group::TileGroup;
use crate::domain::tile::Tile;
use crate::infrastructure::config::Settings;
use crate::infrastructure::table::{LoadOutcome, LoadReport, TableLoader};

/// Everything one render pass needs: the retained tiles plus ambient
/// metadata for the status line. Groups are derived on demand so they can
/// borrow the tiles they reference.
#[derive(Debug)]
pub struct DashboardView {
    pub tiles: Vec<Tile>,
    pub source_name: String,
    pub page_title: String,
    /// True when the built-in two-tile dataset was substituted
    pub fallback_active: bool,
    /// Absent when the fallback replaced a failed load
    pub report: Option<LoadReport>,
    pub generated_at: String,
}

impl DashboardView {
    pub fn groups(&self) -> Vec<TileGroup<'_>> {
        TileGrouper::group(&self.tiles)
    }

    pub fn status(&self) -> DashboardStatus {
        let groups = self
            .groups()
            .iter()
            .map(|group| GroupSummary {
                tag: group.tag.clone(),
                tile_count: group.members.len(),
            })
            .collect();

        DashboardStatus {
            source_name: self.source_name.clone(),
            tile_count: self.tiles.len(),
            fallback_active: self.fallback_active,
            groups,
            report: self.report.clone(),
            generated_at: self.generated_at.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GroupSummary {
    pub tag: String,
    pub tile_count: usize,
}

/// JSON shape served by the status endpoint.
#[derive(Debug, Serialize)]
pub struct DashboardStatus {
    pub source_name: String,
    pub tile_count: usize,
    pub fallback_active: bool,
    pub groups: Vec<GroupSummary>,
    pub report: Option<LoadReport>,
    pub generated_at: String,
}

/// One full pipeline run per call; no state is shared between runs.
pub struct DashboardUseCase {
    settings: Settings,
}

impl DashboardUseCase {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Load the source and assemble the view. A missing source or an empty
    /// result substitutes the fallback dataset so the renderer always
    /// receives at least one group.
    pub fn execute(&self) -> DashboardView {
        let outcome = TableLoader::load_file(&self.settings.source_path);
        self.build_view(outcome)
    }

    pub(crate) fn build_view(&self, outcome: Result<LoadOutcome>) -> DashboardView {
        let generated_at = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

        match outcome {
            Ok(outcome) if !outcome.tiles.is_empty() => {
                info!(
                    source = %self.settings.source_name(),
                    tiles = outcome.tiles.len(),
                    delimiter = %outcome.report.delimiter,
                    "dashboard loaded"
                );
                DashboardView {
                    tiles: outcome.tiles,
                    source_name: self.settings.source_name(),
                    page_title: self.settings.page_title.clone(),
                    fallback_active: false,
                    report: Some(outcome.report),
                    generated_at,
                }
            }
            Ok(outcome) => {
                // Present but empty source: keep the report, substitute tiles.
                DashboardView {
                    tiles: Self::fallback_tiles(),
                    source_name: self.settings.source_name(),
                    page_title: self.settings.page_title.clone(),
                    fallback_active: true,
                    report: Some(outcome.report),
                    generated_at,
                }
            }
            Err(err) => {
                self.log_fallback(&err);
                DashboardView {
                    tiles: Self::fallback_tiles(),
                    source_name: self.settings.source_name(),
                    page_title: self.settings.page_title.clone(),
                    fallback_active: true,
                    report: None,
                    generated_at,
                }
            }
        }
    }

    fn log_fallback(&self, err: &AppError) {
        tracing::warn!(error = %err, "source unavailable, serving fallback dataset");
    }

    fn fallback_tiles() -> Vec<Tile> {
        vec![
            Tile::synthetic(0, "SOPs"),
            Tile::synthetic(1, "Jira Tickets"),
        ]
    }
}
