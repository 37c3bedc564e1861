//! The persisted result artifact
//!
//! With no components nothing is written at all. Otherwise the artifact is
//! either a single `-1` line, or the universal room on one line followed by
//! the chosen cycle as `size room room ...`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::analyzer::HotelAnalysis;
use crate::core::Component;
use crate::error::HotelError;

pub struct ArtifactWriter;

impl ArtifactWriter {
    /// Write the artifact body to `output`
    pub fn write(
        analysis: &HotelAnalysis,
        selected_cycle: Option<&Component>,
        output: &mut dyn Write,
    ) -> Result<(), HotelError> {
        if !analysis.has_cycles() {
            return Ok(());
        }

        match (analysis.universal_room(), selected_cycle) {
            (Some(room), Some(cycle)) => {
                writeln!(output, "{room}")?;
                write!(output, "{}", cycle.len())?;
                for room in cycle.rooms() {
                    write!(output, " {room}")?;
                }
                writeln!(output)?;
            }
            _ => writeln!(output, "-1")?,
        }

        Ok(())
    }

    /// Create `path` and write the artifact into it
    ///
    /// Returns `false` without touching the filesystem when there are no
    /// components to report.
    pub fn write_file(
        path: &Path,
        analysis: &HotelAnalysis,
        selected_cycle: Option<&Component>,
    ) -> Result<bool, HotelError> {
        if !analysis.has_cycles() {
            return Ok(false);
        }

        let write_error = |source| HotelError::FileWriteError {
            path: path.to_path_buf(),
            source,
        };

        let file = File::create(path).map_err(write_error)?;
        let mut output = BufWriter::new(file);
        Self::write(analysis, selected_cycle, &mut output).map_err(|err| match err {
            HotelError::Io(source) => write_error(source),
            other => other,
        })?;
        output.flush().map_err(write_error)?;

        Ok(true)
    }
}
