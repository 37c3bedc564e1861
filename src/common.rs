//! Common functionality shared across commands

use std::path::PathBuf;

use clap::Args;

/// Hotel description input shared by every command
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Hotel description file
    #[arg(
        value_name = "INPUT",
        default_value = crate::constants::files::DEFAULT_INPUT,
        env = "HOTEL_CYCLES_INPUT"
    )]
    pub input: PathBuf,
}

/// Common output format arguments
#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    /// Report format
    #[arg(short, long, value_enum, default_value = crate::constants::output::DEFAULT_FORMAT, env = "HOTEL_CYCLES_FORMAT")]
    pub format: crate::cli::OutputFormat,
}

/// Common cycle display arguments
#[derive(Args, Debug, Clone)]
pub struct CycleDisplayArgs {
    /// Maximum number of components to list (shows all by default)
    #[arg(long, env = "HOTEL_CYCLES_MAX_CYCLES")]
    pub max_cycles: Option<usize>,
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, crate::error::HotelError>;
}

/// Trait for configurations that can be created from CLI commands
pub trait FromCommand: Sized {
    fn from_command(command: crate::cli::Commands) -> Result<Self, crate::error::HotelError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::HotelError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}

/// Build the "missing field" error used by every config builder
pub(crate) fn missing_field(field: &str) -> crate::error::HotelError {
    crate::error::HotelError::ConfigurationError {
        message: format!("Missing required field: {field}"),
    }
}
