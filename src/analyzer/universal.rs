use std::collections::BTreeSet;

use crate::core::{Component, Room};

/// Finds a room shared by every reported component
///
/// Reported components never overlap, so a universal room only exists when
/// exactly one component was reported. The general membership check is kept
/// so the answer does not depend on that property.
pub struct UniversalRoomAnalyzer;

impl UniversalRoomAnalyzer {
    /// Return the lowest room id present in every component, if any
    pub fn find(components: &[Component]) -> Option<Room> {
        let candidates: BTreeSet<Room> = components
            .iter()
            .flat_map(|component| component.rooms().iter().copied())
            .collect();

        candidates
            .into_iter()
            .find(|&room| components.iter().all(|component| component.contains(room)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_components_no_universal_room() {
        assert_eq!(UniversalRoomAnalyzer::find(&[]), None);
    }

    #[test]
    fn test_single_component_yields_lowest_room() {
        let components = vec![Component::new(vec![3, 2, 1])];
        assert_eq!(UniversalRoomAnalyzer::find(&components), Some(1));
    }

    #[test]
    fn test_singleton_component() {
        let components = vec![Component::new(vec![7])];
        assert_eq!(UniversalRoomAnalyzer::find(&components), Some(7));
    }

    #[test]
    fn test_disjoint_components_have_no_universal_room() {
        let components = vec![Component::new(vec![2, 1]), Component::new(vec![4, 3])];
        assert_eq!(UniversalRoomAnalyzer::find(&components), None);
    }

    #[test]
    fn test_overlapping_components_share_a_room() {
        let components = vec![Component::new(vec![5, 2]), Component::new(vec![2, 9])];
        assert_eq!(UniversalRoomAnalyzer::find(&components), Some(2));
    }
}
