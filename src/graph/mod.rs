//! # Hotel Graph Module
//!
//! The corridor graph and its visual rendering.
//!
//! - **Hotel**: rooms `1..=N` and their one-way corridors, in insertion order
//! - **GraphRenderer**: renders a hotel as DOT or Mermaid, optionally
//!   highlighting the detected components
//!
//! ## Example
//!
//! ```
//! use hotel_cycles::graph::{GraphRenderer, Hotel};
//! use miette::IntoDiagnostic;
//!
//! # fn main() -> miette::Result<()> {
//! let mut hotel = Hotel::new(2);
//! hotel.add_corridor(1, 2)?;
//!
//! // Rooms outside 1..=2 are rejected
//! assert!(hotel.add_corridor(3, 1).is_err());
//!
//! let mut output = Vec::new();
//! GraphRenderer::new(false).render_dot(&hotel, &[], &mut output)?;
//! assert!(String::from_utf8(output).into_diagnostic()?.contains(r#""1" -> "2""#));
//! # Ok(())
//! # }
//! ```

mod hotel;
mod renderer;

pub use hotel::Hotel;
pub use renderer::GraphRenderer;
