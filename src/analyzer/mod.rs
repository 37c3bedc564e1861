//! # Hotel Analysis Module
//!
//! Post-detection analysis of a hotel's components.
//!
//! ## Key Components
//!
//! - **HotelAnalyzer**: Runs detection and produces a [`HotelAnalysis`]
//! - **UniversalRoomAnalyzer**: Finds a room that belongs to every component
//! - **CycleSelector**: Picks one component through an [`IndexSource`]
//!
//! ## Example
//!
//! ```
//! use hotel_cycles::analyzer::HotelAnalyzer;
//! use hotel_cycles::graph::Hotel;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut hotel = Hotel::new(4);
//! hotel.add_corridor(1, 2)?;
//! hotel.add_corridor(2, 1)?;
//! hotel.add_corridor(3, 4)?;
//! hotel.add_corridor(4, 3)?;
//!
//! let analysis = HotelAnalyzer::analyze(&hotel);
//! assert_eq!(analysis.cycle_count(), 2);
//! assert_eq!(analysis.universal_room(), None);
//!
//! let mut rng = StdRng::seed_from_u64(0);
//! let cycle = analysis.select_cycle(&mut rng).expect("two components");
//! assert_eq!(cycle.len(), 2);
//! # Ok(())
//! # }
//! ```

mod selector;
mod universal;

pub use selector::{CycleSelector, IndexSource};
pub use universal::UniversalRoomAnalyzer;

mod analyzer_impl;
pub use analyzer_impl::*;
