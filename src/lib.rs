//! # Hotel Cycles - Find Infinite Corridor Loops
//!
//! A hotel is a set of rooms `1..=N` joined by one-way corridors. Hotel
//! Cycles decomposes the corridor graph into strongly connected components,
//! checks whether a single room belongs to every component (a "universal
//! room"), and reports one component chosen at random as "the cycle".
//!
//! ## Main Components
//!
//! - **Graph**: The [`Hotel`](graph::Hotel) model and its renderer
//! - **Detector**: Tarjan's SCC algorithm over the hotel
//! - **Analyzer**: Universal room search and cycle selection
//! - **Loader**: Reads the text hotel description
//! - **Reports**: The result artifact plus human and JSON console reports
//!
//! ## Usage
//!
//! ```
//! use hotel_cycles::analyzer::HotelAnalyzer;
//! use hotel_cycles::loader::parse_hotel;
//! use hotel_cycles::reports::ArtifactWriter;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let loaded = parse_hotel("input.txt", "3 3\n1 2\n2 3\n3 1\n")?;
//! assert!(loaded.rejected.is_empty());
//!
//! let analysis = HotelAnalyzer::analyze(&loaded.hotel);
//! assert_eq!(analysis.universal_room(), Some(1));
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let cycle = analysis.select_cycle(&mut rng);
//!
//! let mut artifact = Vec::new();
//! ArtifactWriter::write(&analysis, cycle, &mut artifact)?;
//! assert_eq!(String::from_utf8(artifact)?, "1\n3 3 2 1\n");
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod utils;

// Public modules
pub mod analyzer;
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod core;
pub mod detector;
pub mod error;
pub mod executors;
pub mod graph;
pub mod loader;
pub mod reports;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();
    execute_command(cli.command)
}
