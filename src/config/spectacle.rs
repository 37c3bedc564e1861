//! Spectacle command configuration

use std::path::PathBuf;

use crate::cli::GraphFormat;
use crate::common::missing_field;
use crate::error::HotelError;

#[derive(Debug, Clone)]
pub struct SpectacleConfig {
    pub input: PathBuf,
    pub format: GraphFormat,
    pub output: Option<PathBuf>,
    pub highlight_cycles: bool,
}

impl SpectacleConfig {
    pub fn builder() -> SpectacleConfigBuilder {
        SpectacleConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct SpectacleConfigBuilder {
    input: Option<PathBuf>,
    format: Option<GraphFormat>,
    output: Option<PathBuf>,
    highlight_cycles: Option<bool>,
}

impl SpectacleConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(mut self, input: PathBuf) -> Self {
        self.input = Some(input);
        self
    }

    pub fn with_format(mut self, format: GraphFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }

    pub fn with_highlight_cycles(mut self, highlight_cycles: bool) -> Self {
        self.highlight_cycles = Some(highlight_cycles);
        self
    }
}

impl crate::common::ConfigBuilder for SpectacleConfigBuilder {
    type Config = SpectacleConfig;

    fn build(self) -> Result<Self::Config, HotelError> {
        Ok(SpectacleConfig {
            input: self.input.ok_or_else(|| missing_field("input"))?,
            format: self.format.ok_or_else(|| missing_field("format"))?,
            output: self.output,
            highlight_cycles: self.highlight_cycles.unwrap_or(true),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ConfigBuilder;

    #[test]
    fn test_highlighting_defaults_on() {
        let config = SpectacleConfig::builder()
            .with_input(PathBuf::from("input.txt"))
            .with_format(GraphFormat::Dot)
            .build()
            .unwrap();

        assert!(config.highlight_cycles);
        assert_eq!(config.output, None);
    }

    #[test]
    fn test_missing_format_is_rejected() {
        let err = SpectacleConfig::builder()
            .with_input(PathBuf::from("input.txt"))
            .build()
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Configuration error: Missing required field: format"
        );
    }
}
