pub mod dashboard;
pub mod grouper;
