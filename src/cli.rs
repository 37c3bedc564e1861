use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::common::{CycleDisplayArgs, FormatArgs, InputArgs};

#[derive(Parser)]
#[command(
    name = "hotel-cycles",
    about = "🏨 Find infinite corridor loops in a hotel of one-way corridors",
    long_about = "hotel-cycles reads a hotel described as rooms joined by one-way corridors, \
                  decomposes it into strongly connected components with Tarjan's algorithm, \
                  looks for a room shared by every component, and reports one randomly chosen \
                  cycle.",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Walk the corridors looking for rooms you can never leave
    ///
    /// Analyzes the hotel, writes the result artifact and prints a report.
    #[command(
        long_about = "Load the hotel description, find every strongly connected component, \
                      determine whether one room belongs to all of them, and pick one component \
                      at random as the reported cycle. When a universal room exists the artifact \
                      holds that room and the chosen cycle, otherwise it holds -1. If the hotel \
                      has no cycles at all, no artifact is written."
    )]
    Inspect {
        #[command(flatten)]
        input: InputArgs,

        /// Result artifact to write
        #[arg(
            short,
            long,
            default_value = crate::constants::files::DEFAULT_OUTPUT,
            env = "HOTEL_CYCLES_OUTPUT"
        )]
        output: PathBuf,

        /// Seed for the cycle selection (random when omitted)
        #[arg(long, env = "HOTEL_CYCLES_SEED")]
        seed: Option<u64>,

        #[command(flatten)]
        format: FormatArgs,

        #[command(flatten)]
        cycle_display: CycleDisplayArgs,
    },

    /// Draw the floor plan with its loops highlighted
    #[command(
        long_about = "Render the hotel's corridor graph as Graphviz DOT or a Mermaid diagram. \
                      Rooms and corridors inside a detected component can be highlighted."
    )]
    Spectacle {
        #[command(flatten)]
        input: InputArgs,

        /// Graph format
        #[arg(
            short,
            long,
            value_enum,
            default_value = crate::constants::output::DEFAULT_GRAPH_FORMAT,
            env = "HOTEL_CYCLES_GRAPH_FORMAT"
        )]
        format: GraphFormat,

        /// Output file (stdout if not specified)
        #[arg(short, long, env = "HOTEL_CYCLES_GRAPH_OUTPUT")]
        output: Option<PathBuf>,

        /// Highlight cycles in the graph
        #[arg(
            long,
            default_value_t = true,
            action = clap::ArgAction::Set,
            env = "HOTEL_CYCLES_HIGHLIGHT_CYCLES"
        )]
        highlight_cycles: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum GraphFormat {
    Dot,
    Mermaid,
}
