//! Core type definitions
//!
//! This module contains the basic data structures used throughout the
//! application, with minimal logic - focusing on data representation.

use serde::Serialize;

/// A room identifier, always in `1..=room_count` once accepted by the hotel
pub type Room = usize;

/// A strongly connected component reported by the detector
///
/// Rooms are kept in the order they were popped off the traversal stack,
/// which is the order they are written to the output artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Component {
    rooms: Vec<Room>,
}

impl Component {
    pub fn new(rooms: Vec<Room>) -> Self {
        Self { rooms }
    }

    /// Rooms in stack-pop order
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Linear membership scan
    pub fn contains(&self, room: Room) -> bool {
        self.rooms.contains(&room)
    }
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rooms: Vec<String> = self.rooms.iter().map(|room| room.to_string()).collect();
        write!(f, "{{{}}}", rooms.join(", "))
    }
}
