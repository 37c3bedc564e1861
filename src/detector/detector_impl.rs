use crate::core::{Component, Room};
use crate::graph::Hotel;

/// Detector for finding corridor loops in a hotel
///
/// Uses Tarjan's Strongly Connected Components algorithm, run with an
/// explicit frame stack so deep corridor chains cannot overflow the call
/// stack.
#[derive(Debug, Default)]
pub struct CycleDetector {
    components: Vec<Component>,
}

impl CycleDetector {
    /// Create a new cycle detector
    pub fn new() -> Self {
        Self {
            components: Vec::new(),
        }
    }

    /// Detect every component of interest in the hotel
    ///
    /// Rooms are used as DFS roots in ascending order, so components come out
    /// in discovery order. Previous results are discarded.
    pub fn detect_cycles(&mut self, hotel: &Hotel) {
        let mut search = TarjanSearch::new(hotel);
        for room in hotel.rooms() {
            if search.index[room].is_none() {
                search.strong_connect(room);
            }
        }
        self.components = search.components;
    }

    /// Get all detected components, in discovery order
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn into_components(self) -> Vec<Component> {
        self.components
    }

    /// Check if any components were detected
    pub fn has_cycles(&self) -> bool {
        !self.components.is_empty()
    }

    /// Get the number of detected components
    pub fn cycle_count(&self) -> usize {
        self.components.len()
    }
}

/// One suspended `strong_connect` call: the room and the next corridor to try
struct Frame {
    room: Room,
    next_corridor: usize,
}

/// Per-room Tarjan bookkeeping in flat arrays indexed by room id
struct TarjanSearch<'a> {
    hotel: &'a Hotel,
    next_index: usize,
    index: Vec<Option<usize>>,
    low_link: Vec<usize>,
    on_stack: Vec<bool>,
    stack: Vec<Room>,
    components: Vec<Component>,
}

impl<'a> TarjanSearch<'a> {
    fn new(hotel: &'a Hotel) -> Self {
        let slots = hotel.room_count() + 1;
        Self {
            hotel,
            next_index: 0,
            index: vec![None; slots],
            low_link: vec![0; slots],
            on_stack: vec![false; slots],
            stack: Vec::new(),
            components: Vec::new(),
        }
    }

    fn visit(&mut self, room: Room) {
        self.index[room] = Some(self.next_index);
        self.low_link[room] = self.next_index;
        self.next_index += 1;
        self.stack.push(room);
        self.on_stack[room] = true;
    }

    fn strong_connect(&mut self, root: Room) {
        self.visit(root);
        let mut frames = vec![Frame {
            room: root,
            next_corridor: 0,
        }];

        while let Some(frame) = frames.last_mut() {
            let room = frame.room;

            if let Some(&target) = self.hotel.corridors_from(room).get(frame.next_corridor) {
                frame.next_corridor += 1;
                match self.index[target] {
                    None => {
                        self.visit(target);
                        frames.push(Frame {
                            room: target,
                            next_corridor: 0,
                        });
                    }
                    Some(target_index) if self.on_stack[target] => {
                        self.low_link[room] = self.low_link[room].min(target_index);
                    }
                    // Already closed into another component
                    Some(_) => {}
                }
                continue;
            }

            // All corridors explored: return from this room
            frames.pop();
            if Some(self.low_link[room]) == self.index[room] {
                self.close_component(room);
            }
            if let Some(parent) = frames.last() {
                self.low_link[parent.room] = self.low_link[parent.room].min(self.low_link[room]);
            }
        }
    }

    /// Pop the stack down to and including `root`
    fn close_component(&mut self, root: Room) {
        let mut rooms = Vec::new();
        while let Some(room) = self.stack.pop() {
            self.on_stack[room] = false;
            rooms.push(room);
            if room == root {
                break;
            }
        }

        // A lone room counts as soon as it has any outgoing corridor, even one
        // that never leads back to it.
        if rooms.len() > 1 || self.hotel.has_corridors(root) {
            self.components.push(Component::new(rooms));
        }
    }
}
