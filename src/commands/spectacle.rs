//! Spectacle command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::SpectacleConfig;
use crate::error::HotelError;

impl FromCommand for SpectacleConfig {
    fn from_command(command: Commands) -> Result<Self, HotelError> {
        match command {
            Commands::Spectacle {
                input,
                format,
                output,
                highlight_cycles,
            } => SpectacleConfig::builder()
                .with_input(input.input)
                .with_format(format)
                .with_output(output)
                .with_highlight_cycles(highlight_cycles)
                .build(),
            _ => Err(HotelError::ConfigurationError {
                message: "Invalid command type for SpectacleConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(SpectacleConfig);

/// Execute the spectacle command for rendering the corridor graph
pub fn execute_spectacle_command(command: Commands) -> Result<()> {
    let config = SpectacleConfig::from_command(command)
        .wrap_err("Failed to parse spectacle command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::spectacle::SpectacleExecutor;
    SpectacleExecutor::execute(config)
}
