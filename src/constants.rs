//! Default values used throughout hotel-cycles
//!
//! Each of these can be overridden on the command line or through the
//! matching `HOTEL_CYCLES_*` environment variable.

/// File locations used when none are given
pub mod files {
    /// Hotel description read by `inspect` and `spectacle`
    pub const DEFAULT_INPUT: &str = "input.txt";

    /// Result artifact written by `inspect`
    pub const DEFAULT_OUTPUT: &str = "output.txt";
}

/// Output formatting configuration
pub mod output {
    /// Default report format when not specified
    pub const DEFAULT_FORMAT: &str = "human";

    /// Default graph format for `spectacle`
    pub const DEFAULT_GRAPH_FORMAT: &str = "dot";

    /// Notice shown when the hotel has no components at all
    pub const NO_CYCLES_NOTICE: &str = "No infinite cycles in the hotel.";
}

/// Input size limits
pub mod limits {
    /// Largest room count accepted from a hotel description
    pub const MAX_ROOMS: usize = u32::MAX as usize;
}
