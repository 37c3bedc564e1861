//! Inspect command executor

use console::style;
use miette::{Result, WrapErr};
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::load_with_warnings;
use crate::analyzer::HotelAnalyzer;
use crate::cli::OutputFormat;
use crate::config::InspectConfig;
use crate::executors::CommandExecutor;
use crate::reports::{
    AnalysisReport, ArtifactWriter, HumanReportGenerator, JsonReportGenerator, ReportGenerator,
};

pub struct InspectExecutor;

impl CommandExecutor for InspectExecutor {
    type Config = InspectConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Inspecting hotel described in {}...",
            style("🏨").cyan(),
            style(config.input.display()).bold()
        );

        let loaded = load_with_warnings(&config.input)?;
        eprintln!(
            "  {} {} rooms, {} corridors",
            style("→").dim(),
            loaded.hotel.room_count(),
            loaded.hotel.corridor_count()
        );

        let analysis = HotelAnalyzer::analyze(&loaded.hotel);

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let selected_cycle = analysis.select_cycle(&mut rng);

        let written = ArtifactWriter::write_file(&config.output, &analysis, selected_cycle)
            .wrap_err("Failed to write the result artifact")?;
        if written {
            eprintln!(
                "  {} Result written to {}",
                style("→").dim(),
                style(config.output.display()).bold()
            );
        }

        let report = AnalysisReport {
            analysis: &analysis,
            selected_cycle,
            rejected_corridors: loaded.rejected.len(),
        };
        let output = match config.format {
            OutputFormat::Human => {
                HumanReportGenerator::new(config.max_cycles).generate_report(&report)
            }
            OutputFormat::Json => JsonReportGenerator::new().generate_report(&report),
        }
        .wrap_err("Failed to generate report")?;
        print!("{output}");

        Ok(())
    }
}
