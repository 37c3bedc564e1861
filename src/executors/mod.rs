//! Command executors that handle the actual logic for each command

pub mod inspect;
pub mod spectacle;

use std::path::Path;

use miette::{GraphicalReportHandler, Result, WrapErr};

use crate::error::HotelError;
use crate::loader::{LoadedHotel, load_hotel};

/// Trait for command executors
pub trait CommandExecutor {
    type Config;

    /// Execute the command with the given configuration
    fn execute(config: Self::Config) -> Result<()>;
}

/// Load the hotel, warning about every corridor that had to be dropped
fn load_with_warnings(path: &Path) -> Result<LoadedHotel> {
    let loaded = load_hotel(path).wrap_err("Failed to load the hotel description")?;
    for warning in rejected_corridor_warnings(&loaded.rejected)? {
        eprint!("{warning}");
    }
    Ok(loaded)
}

/// Render each dropped corridor as a full diagnostic, code and help included
pub fn rejected_corridor_warnings(rejected: &[HotelError]) -> Result<Vec<String>, HotelError> {
    let handler = GraphicalReportHandler::new();
    rejected
        .iter()
        .map(|err| -> Result<String, HotelError> {
            let mut rendered = String::new();
            handler.render_report(&mut rendered, err)?;
            Ok(rendered)
        })
        .collect()
}
