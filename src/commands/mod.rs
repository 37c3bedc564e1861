//! Command implementations for the hotel-cycles CLI
//!
//! - inspect: Walk the corridors looking for rooms you can never leave
//! - spectacle: Draw the floor plan with its loops highlighted

pub mod inspect;
pub mod spectacle;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Inspect { .. } => inspect::execute_inspect_command(command),
        Commands::Spectacle { .. } => spectacle::execute_spectacle_command(command),
    }
}
