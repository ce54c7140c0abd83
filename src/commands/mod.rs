//! Command implementations

pub mod analyze;
pub mod simple;
pub mod survey;

pub use analyze::{AnalysisResult, analyze_root};
pub use simple::{PlaySummary, play_lines, run_simple};
pub use survey::{SurveyStatistics, run_survey};
