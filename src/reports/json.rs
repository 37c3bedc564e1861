//! JSON format report generation

use serde_json::json;

use super::{AnalysisReport, ReportGenerator};
use crate::constants::output::NO_CYCLES_NOTICE;
use crate::error::HotelError;

pub struct JsonReportGenerator;

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(&self, report: &AnalysisReport<'_>) -> Result<String, HotelError> {
        let analysis = report.analysis;
        let value = json!({
            "has_cycles": analysis.has_cycles(),
            "component_count": analysis.cycle_count(),
            "components": analysis.components(),
            "universal_room": analysis.universal_room(),
            "selected_cycle": report.selected_cycle,
            "rejected_corridors": report.rejected_corridors,
            "message": (!analysis.has_cycles()).then_some(NO_CYCLES_NOTICE),
        });

        serde_json::to_string_pretty(&value).map_err(HotelError::Json)
    }
}
