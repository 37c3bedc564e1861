//! # Configuration Module
//!
//! Configuration structures for the hotel-cycles commands, each with a
//! builder implementing [`ConfigBuilder`](crate::common::ConfigBuilder).
//!
//! - **InspectConfig**: Configuration for the `inspect` command
//! - **SpectacleConfig**: Configuration for the `spectacle` command
//!
//! ## Example
//!
//! ```
//! use hotel_cycles::cli::OutputFormat;
//! use hotel_cycles::common::ConfigBuilder;
//! use hotel_cycles::config::InspectConfig;
//!
//! let config = InspectConfig::builder()
//!     .with_input("input.txt".into())
//!     .with_output("output.txt".into())
//!     .with_format(OutputFormat::Json)
//!     .with_seed(Some(7))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.seed, Some(7));
//! ```

pub mod inspect;
pub mod spectacle;

pub use inspect::InspectConfig;
pub use spectacle::SpectacleConfig;
