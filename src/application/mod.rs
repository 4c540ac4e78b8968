// Roster management and persistence orchestration
pub mod athlete_service;

// Sample data for demonstrations
pub mod demo_data;

// Progress summaries
pub mod progress_report;

pub use athlete_service::AthleteService;
pub use progress_report::{MetricProgress, ProgressReport};
