use super::{CycleSelector, IndexSource, UniversalRoomAnalyzer};
use crate::core::{Component, Room};
use crate::detector::CycleDetector;
use crate::graph::Hotel;

/// Result of analyzing a hotel: its components and the universal room
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotelAnalysis {
    components: Vec<Component>,
    universal_room: Option<Room>,
}

impl HotelAnalysis {
    pub fn new(components: Vec<Component>) -> Self {
        let universal_room = UniversalRoomAnalyzer::find(&components);
        Self {
            components,
            universal_room,
        }
    }

    /// Components in discovery order
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn universal_room(&self) -> Option<Room> {
        self.universal_room
    }

    pub fn has_cycles(&self) -> bool {
        !self.components.is_empty()
    }

    pub fn cycle_count(&self) -> usize {
        self.components.len()
    }

    /// Pick the reported cycle; independent of the universal room
    pub fn select_cycle<S>(&self, source: &mut S) -> Option<&Component>
    where
        S: IndexSource + ?Sized,
    {
        CycleSelector::select(&self.components, source)
    }
}

/// Runs cycle detection followed by the universal room search
pub struct HotelAnalyzer;

impl HotelAnalyzer {
    pub fn analyze(hotel: &Hotel) -> HotelAnalysis {
        let mut detector = CycleDetector::new();
        detector.detect_cycles(hotel);
        HotelAnalysis::new(detector.into_components())
    }
}
