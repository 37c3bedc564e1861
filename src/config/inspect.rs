//! Inspect command configuration

use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::common::missing_field;
use crate::error::HotelError;

/// Configuration for the inspect command
#[derive(Debug, Clone)]
pub struct InspectConfig {
    /// Hotel description to read
    pub input: PathBuf,
    /// Result artifact to write
    pub output: PathBuf,
    /// Console report format
    pub format: OutputFormat,
    /// Seed for the cycle selection (None = seeded from OS entropy)
    pub seed: Option<u64>,
    /// Maximum number of components to list (None = all)
    pub max_cycles: Option<usize>,
}

impl InspectConfig {
    pub fn builder() -> InspectConfigBuilder {
        InspectConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct InspectConfigBuilder {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    format: Option<OutputFormat>,
    seed: Option<u64>,
    max_cycles: Option<usize>,
}

impl InspectConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(mut self, input: PathBuf) -> Self {
        self.input = Some(input);
        self
    }

    pub fn with_output(mut self, output: PathBuf) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_max_cycles(mut self, max_cycles: Option<usize>) -> Self {
        self.max_cycles = max_cycles;
        self
    }
}

impl crate::common::ConfigBuilder for InspectConfigBuilder {
    type Config = InspectConfig;

    fn build(self) -> Result<Self::Config, HotelError> {
        Ok(InspectConfig {
            input: self.input.ok_or_else(|| missing_field("input"))?,
            output: self.output.ok_or_else(|| missing_field("output"))?,
            format: self.format.ok_or_else(|| missing_field("format"))?,
            seed: self.seed,
            max_cycles: self.max_cycles,
        })
    }
}
