//! Report generation modules
//!
//! - artifact: the persisted result file (universal room and chosen cycle)
//! - human: Human-readable console output
//! - json: JSON format for programmatic use

pub mod artifact;
pub mod human;
pub mod json;

use crate::analyzer::HotelAnalysis;
use crate::core::Component;
use crate::error::HotelError;

/// Everything a console report needs about one analysis run
#[derive(Debug, Clone, Copy)]
pub struct AnalysisReport<'a> {
    pub analysis: &'a HotelAnalysis,
    pub selected_cycle: Option<&'a Component>,
    pub rejected_corridors: usize,
}

/// Common trait for all console report generators
pub trait ReportGenerator {
    /// Generate a report from analysis results
    fn generate_report(&self, report: &AnalysisReport<'_>) -> Result<String, HotelError>;
}

// Re-export for convenience
pub use artifact::ArtifactWriter;
pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;
