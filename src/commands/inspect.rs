//! Inspect command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::InspectConfig;
use crate::error::HotelError;

impl FromCommand for InspectConfig {
    fn from_command(command: Commands) -> Result<Self, HotelError> {
        match command {
            Commands::Inspect {
                input,
                output,
                seed,
                format,
                cycle_display,
            } => InspectConfig::builder()
                .with_input(input.input)
                .with_output(output)
                .with_seed(seed)
                .with_format(format.format)
                .with_max_cycles(cycle_display.max_cycles)
                .build(),
            _ => Err(HotelError::ConfigurationError {
                message: "Invalid command type for InspectConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(InspectConfig);

/// Execute the inspect command
pub fn execute_inspect_command(command: Commands) -> Result<()> {
    let config = InspectConfig::from_command(command)
        .wrap_err("Failed to parse inspect command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::inspect::InspectExecutor;
    InspectExecutor::execute(config)
}
