pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub use application::{DashboardStatus, DashboardUseCase, DashboardView, TileGrouper};
pub use domain::{AppError, Result, Tile, TileGroup};
pub use infrastructure::config::Settings;
pub use infrastructure::table::{Delimiter, LoadOutcome, LoadReport, TableLoader};
