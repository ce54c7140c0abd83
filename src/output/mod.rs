//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_analysis_result, print_survey_statistics};
pub use formatters::{create_progress_bar, format_rejection, length_badge, score_bar};
