//! # Cycle Detection Module
//!
//! This module finds the strongly connected components of a hotel's corridor
//! graph.
//!
//! ## Algorithm
//!
//! Tarjan's Strongly Connected Components algorithm, O(V + E) in rooms and
//! corridors. Rooms are tried as DFS roots in ascending order and corridors
//! are followed in insertion order, so the component sequence and the room
//! order inside each component are fully determined by the hotel.
//!
//! A component is reported when it holds more than one room, or when its
//! single room has at least one outgoing corridor.
//!
//! ## Example
//!
//! ```
//! use hotel_cycles::detector::CycleDetector;
//! use hotel_cycles::graph::Hotel;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut hotel = Hotel::new(3);
//! hotel.add_corridor(1, 2)?;
//! hotel.add_corridor(2, 3)?;
//! hotel.add_corridor(3, 1)?;
//!
//! let mut detector = CycleDetector::new();
//! detector.detect_cycles(&hotel);
//!
//! assert!(detector.has_cycles());
//! assert_eq!(detector.components()[0].rooms(), &[3, 2, 1]);
//! # Ok(())
//! # }
//! ```

mod detector_impl;

pub use detector_impl::*;
