use std::io::Write;

use miette::Result;

use crate::core::{Component, Room};
use crate::error::HotelError;
use crate::graph::Hotel;

// Blue-Orange Accessible Palette
mod colors {
    pub const NORMAL_NODE_FILL: &str = "#E3F2FD"; // Light blue
    pub const NORMAL_NODE_STROKE: &str = "#1976D2"; // Medium blue
    pub const CYCLE_NODE_FILL: &str = "#FFF3E0"; // Light orange
    pub const CYCLE_NODE_STROKE: &str = "#F57C00"; // Vibrant orange
    pub const NORMAL_EDGE: &str = "#64B5F6"; // Soft blue
    pub const CYCLE_EDGE: &str = "#FF6500"; // Deep orange
}

// Helper macro for write operations that converts IO errors
macro_rules! writeln_out {
    ($dst:expr) => {
        writeln!($dst).map_err(HotelError::from)
    };
    ($dst:expr, $($arg:tt)*) => {
        writeln!($dst, $($arg)*).map_err(HotelError::from)
    };
}

/// Renders a hotel's corridor graph as Graphviz DOT or Mermaid
pub struct GraphRenderer {
    highlight_cycles: bool,
}

impl GraphRenderer {
    pub fn new(highlight_cycles: bool) -> Self {
        Self { highlight_cycles }
    }

    pub fn render_dot(
        &self,
        hotel: &Hotel,
        components: &[Component],
        output: &mut dyn Write,
    ) -> Result<()> {
        let membership = self.membership(hotel, components);

        writeln_out!(output, "digraph hotel {{")?;
        writeln_out!(output, "    rankdir=LR;")?;
        writeln_out!(output, "    node [shape=circle];")?;
        writeln_out!(output)?;

        for room in hotel.rooms() {
            let (fill_color, stroke_color) = if membership[room].is_some() {
                (colors::CYCLE_NODE_FILL, colors::CYCLE_NODE_STROKE)
            } else {
                (colors::NORMAL_NODE_FILL, colors::NORMAL_NODE_STROKE)
            };
            writeln_out!(
                output,
                r#"    "{room}" [style=filled, fillcolor="{fill_color}", color="{stroke_color}", penwidth=2];"#
            )?;
        }

        if hotel.corridor_count() > 0 {
            writeln_out!(output)?;
        }

        for (from, to) in hotel.corridors() {
            if Self::same_component(&membership, from, to) {
                writeln_out!(
                    output,
                    r#"    "{from}" -> "{to}" [color="{}", penwidth=2];"#,
                    colors::CYCLE_EDGE
                )?;
            } else {
                writeln_out!(
                    output,
                    r#"    "{from}" -> "{to}" [color="{}"];"#,
                    colors::NORMAL_EDGE
                )?;
            }
        }

        writeln_out!(output, "}}")?;
        Ok(())
    }

    pub fn render_mermaid(
        &self,
        hotel: &Hotel,
        components: &[Component],
        output: &mut dyn Write,
    ) -> Result<()> {
        let membership = self.membership(hotel, components);

        writeln_out!(output, "graph LR")?;

        for room in hotel.rooms() {
            if membership[room].is_some() {
                writeln_out!(output, "    room{room}((\"{room}\"))")?;
            } else {
                writeln_out!(output, "    room{room}[\"{room}\"]")?;
            }
        }

        // Mermaid numbers links in declaration order; remember the ones to color
        let mut cycle_links = Vec::new();
        for (link, (from, to)) in hotel.corridors().enumerate() {
            if Self::same_component(&membership, from, to) {
                writeln_out!(output, "    room{from} ==> room{to}")?;
                cycle_links.push(link);
            } else {
                writeln_out!(output, "    room{from} --> room{to}")?;
            }
        }

        for room in hotel.rooms().filter(|&room| membership[room].is_some()) {
            writeln_out!(
                output,
                "    style room{room} fill:{},stroke:{},stroke-width:3px",
                colors::CYCLE_NODE_FILL,
                colors::CYCLE_NODE_STROKE
            )?;
        }

        if !cycle_links.is_empty() {
            let links: Vec<String> = cycle_links.iter().map(ToString::to_string).collect();
            writeln_out!(
                output,
                "    linkStyle {} stroke:{},stroke-width:3px",
                links.join(","),
                colors::CYCLE_EDGE
            )?;
        }

        Ok(())
    }

    /// Component index per room slot, or all `None` when highlighting is off
    fn membership(&self, hotel: &Hotel, components: &[Component]) -> Vec<Option<usize>> {
        let mut membership = vec![None; hotel.room_count() + 1];
        if self.highlight_cycles {
            for (index, component) in components.iter().enumerate() {
                for &room in component.rooms() {
                    if let Some(slot) = membership.get_mut(room) {
                        *slot = Some(index);
                    }
                }
            }
        }
        membership
    }

    fn same_component(membership: &[Option<usize>], from: Room, to: Room) -> bool {
        matches!((membership[from], membership[to]), (Some(a), Some(b)) if a == b)
    }
}
