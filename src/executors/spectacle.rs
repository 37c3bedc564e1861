//! Spectacle command executor

use std::fs::File;
use std::io::{self, BufWriter, Write};

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use super::load_with_warnings;
use crate::analyzer::HotelAnalyzer;
use crate::cli::GraphFormat;
use crate::config::SpectacleConfig;
use crate::error::HotelError;
use crate::executors::CommandExecutor;
use crate::graph::GraphRenderer;

pub struct SpectacleExecutor;

impl CommandExecutor for SpectacleExecutor {
    type Config = SpectacleConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Drawing the floor plan of {}...",
            style("🎨").magenta(),
            style(config.input.display()).bold()
        );

        let loaded = load_with_warnings(&config.input)?;
        let analysis = HotelAnalyzer::analyze(&loaded.hotel);
        let renderer = GraphRenderer::new(config.highlight_cycles);

        let mut output: Box<dyn Write> = match &config.output {
            Some(path) => {
                let file = File::create(path).map_err(|source| HotelError::FileWriteError {
                    path: path.clone(),
                    source,
                })?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout().lock()),
        };

        match config.format {
            GraphFormat::Dot => {
                renderer.render_dot(&loaded.hotel, analysis.components(), &mut output)
            }
            GraphFormat::Mermaid => {
                renderer.render_mermaid(&loaded.hotel, analysis.components(), &mut output)
            }
        }
        .wrap_err("Failed to render graph")?;

        output.flush().into_diagnostic()?;

        if let Some(path) = &config.output {
            eprintln!(
                "{} Graph written to {}",
                style("✅").green(),
                style(path.display()).bold()
            );
        }

        Ok(())
    }
}
