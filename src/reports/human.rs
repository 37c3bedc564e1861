//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::{AnalysisReport, ReportGenerator};
use crate::constants::output::NO_CYCLES_NOTICE;
use crate::error::HotelError;
use crate::utils::string::pluralize;

pub struct HumanReportGenerator {
    max_cycles: Option<usize>,
}

impl HumanReportGenerator {
    pub fn new(max_cycles: Option<usize>) -> Self {
        Self { max_cycles }
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_report(&self, report: &AnalysisReport<'_>) -> Result<String, HotelError> {
        let mut output = String::new();
        let analysis = report.analysis;

        if report.rejected_corridors > 0 {
            writeln!(
                output,
                "{} Dropped {} invalid {}",
                style("⚠").yellow(),
                style(report.rejected_corridors).yellow(),
                pluralize("corridor", report.rejected_corridors)
            )?;
        }

        if !analysis.has_cycles() {
            writeln!(
                output,
                "{} {}",
                style("✅").green().bold(),
                NO_CYCLES_NOTICE
            )?;
            return Ok(output);
        }

        let total = analysis.cycle_count();
        writeln!(
            output,
            "\n{} Found {} strongly connected {}:\n",
            style("🔄").yellow().bold(),
            style(total).yellow().bold(),
            pluralize("component", total)
        )?;

        let shown = self.max_cycles.map_or(total, |limit| limit.min(total));
        for (i, component) in analysis.components().iter().take(shown).enumerate() {
            writeln!(
                output,
                "  {} #{} ({} {}): {}",
                style("•").dim(),
                i + 1,
                component.len(),
                pluralize("room", component.len()),
                style(component).bold()
            )?;
        }

        if shown < total {
            writeln!(
                output,
                "\n{} Showing {} of {} components. Use --max-cycles to see more.",
                style("ℹ️").blue(),
                style(shown).yellow(),
                style(total).yellow()
            )?;
        }

        writeln!(output)?;
        match analysis.universal_room() {
            Some(room) => writeln!(
                output,
                "{} Universal room: {}",
                style("🏨").cyan(),
                style(room).green().bold()
            )?,
            None => writeln!(
                output,
                "{} No room belongs to every component",
                style("🏨").cyan()
            )?,
        }

        if let Some(cycle) = report.selected_cycle {
            writeln!(
                output,
                "{} Selected cycle: {}",
                style("🎲").magenta(),
                style(cycle).bold()
            )?;
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::HotelAnalysis;
    use crate::core::Component;

    fn plain(text: String) -> String {
        console::strip_ansi_codes(&text).into_owned()
    }

    #[test]
    fn test_no_cycles_notice() {
        let analysis = HotelAnalysis::new(Vec::new());
        let report = AnalysisReport {
            analysis: &analysis,
            selected_cycle: None,
            rejected_corridors: 0,
        };

        let output = plain(HumanReportGenerator::new(None).generate_report(&report).unwrap());
        assert!(output.contains("No infinite cycles in the hotel."));
    }

    #[test]
    fn test_lists_components_and_universal_room() {
        let analysis = HotelAnalysis::new(vec![Component::new(vec![3, 2, 1])]);
        let report = AnalysisReport {
            analysis: &analysis,
            selected_cycle: analysis.components().first(),
            rejected_corridors: 1,
        };

        let output = plain(HumanReportGenerator::new(None).generate_report(&report).unwrap());
        assert!(output.contains("Dropped 1 invalid corridor"));
        assert!(output.contains("Found 1 strongly connected component:"));
        assert!(output.contains("#1 (3 rooms): {3, 2, 1}"));
        assert!(output.contains("Universal room: 1"));
        assert!(output.contains("Selected cycle: {3, 2, 1}"));
    }

    #[test]
    fn test_max_cycles_limits_listing() {
        let analysis = HotelAnalysis::new(vec![
            Component::new(vec![2, 1]),
            Component::new(vec![4, 3]),
            Component::new(vec![5]),
        ]);
        let report = AnalysisReport {
            analysis: &analysis,
            selected_cycle: analysis.components().get(2),
            rejected_corridors: 0,
        };

        let output = plain(HumanReportGenerator::new(Some(1)).generate_report(&report).unwrap());
        assert!(output.contains("#1 (2 rooms): {2, 1}"));
        assert!(!output.contains("#2"));
        assert!(output.contains("Showing 1 of 3 components"));
        assert!(output.contains("No room belongs to every component"));
    }
}
