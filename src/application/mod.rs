pub mod use_cases;

pub use use_cases::dashboard::{DashboardStatus, DashboardUseCase, DashboardView};
pub use use_cases::grouper::TileGrouper;
