use std::ops::RangeInclusive;

use crate::core::Room;
use crate::error::HotelError;

/// A hotel: a fixed set of rooms joined by one-way corridors
///
/// Adjacency lists are indexed by room id; slot 0 is never used so room `n`
/// lives at index `n`. Corridor targets keep their insertion order because
/// the detector walks them in that order.
#[derive(Debug, Clone, Default)]
pub struct Hotel {
    corridors: Vec<Vec<Room>>,
}

impl Hotel {
    /// Create a hotel with rooms `1..=room_count` and no corridors
    pub fn new(room_count: usize) -> Self {
        Self {
            corridors: vec![Vec::new(); room_count + 1],
        }
    }

    /// Like [`Hotel::new`], but returns `None` instead of aborting when the
    /// adjacency storage cannot be allocated
    pub fn try_new(room_count: usize) -> Option<Self> {
        let slots = room_count.checked_add(1)?;
        let mut corridors = Vec::new();
        corridors.try_reserve_exact(slots).ok()?;
        corridors.resize_with(slots, Vec::new);
        Some(Self { corridors })
    }

    pub fn room_count(&self) -> usize {
        self.corridors.len().saturating_sub(1)
    }

    /// Room identifiers in ascending order
    pub fn rooms(&self) -> RangeInclusive<Room> {
        1..=self.room_count()
    }

    /// Append a corridor `from -> to`
    ///
    /// Endpoints outside `1..=room_count` are rejected and the hotel is left
    /// untouched. Duplicates and self-corridors are accepted.
    pub fn add_corridor(&mut self, from: i64, to: i64) -> Result<(), HotelError> {
        match (self.room(from), self.room(to)) {
            (Some(from), Some(to)) => {
                self.corridors[from].push(to);
                Ok(())
            }
            _ => Err(HotelError::InvalidCorridor {
                from,
                to,
                room_count: self.room_count(),
            }),
        }
    }

    /// Outgoing corridor targets of `room`, in insertion order
    pub fn corridors_from(&self, room: Room) -> &[Room] {
        self.corridors
            .get(room)
            .filter(|_| room != 0)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn has_corridors(&self, room: Room) -> bool {
        !self.corridors_from(room).is_empty()
    }

    /// Every corridor as a `(from, to)` pair, grouped by source room
    pub fn corridors(&self) -> impl Iterator<Item = (Room, Room)> + '_ {
        self.rooms()
            .flat_map(move |from| self.corridors_from(from).iter().map(move |&to| (from, to)))
    }

    pub fn corridor_count(&self) -> usize {
        self.corridors.iter().map(Vec::len).sum()
    }

    fn room(&self, id: i64) -> Option<Room> {
        usize::try_from(id)
            .ok()
            .filter(|&room| (1..=self.room_count()).contains(&room))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_hotel_has_no_corridors() {
        let hotel = Hotel::new(3);
        assert_eq!(hotel.room_count(), 3);
        assert_eq!(hotel.corridor_count(), 0);
        assert_eq!(hotel.rooms().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_try_new_matches_new() {
        let hotel = Hotel::try_new(3).unwrap();
        assert_eq!(hotel.room_count(), 3);
        assert_eq!(hotel.rooms().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_try_new_rejects_unrepresentable_room_count() {
        assert!(Hotel::try_new(usize::MAX).is_none());
        assert!(Hotel::try_new(usize::MAX / 2).is_none());
    }

    #[test]
    fn test_empty_hotel() {
        let hotel = Hotel::new(0);
        assert_eq!(hotel.room_count(), 0);
        assert_eq!(hotel.rooms().count(), 0);
        assert!(hotel.corridors_from(0).is_empty());
    }

    #[test]
    fn test_corridors_keep_insertion_order() {
        let mut hotel = Hotel::new(4);
        hotel.add_corridor(1, 4).unwrap();
        hotel.add_corridor(1, 2).unwrap();
        hotel.add_corridor(1, 3).unwrap();

        assert_eq!(hotel.corridors_from(1), &[4, 2, 3]);
        assert!(hotel.has_corridors(1));
        assert!(!hotel.has_corridors(2));
    }

    #[test]
    fn test_duplicates_and_self_corridors_are_kept() {
        let mut hotel = Hotel::new(2);
        hotel.add_corridor(1, 2).unwrap();
        hotel.add_corridor(1, 2).unwrap();
        hotel.add_corridor(2, 2).unwrap();

        assert_eq!(hotel.corridors_from(1), &[2, 2]);
        assert_eq!(hotel.corridors_from(2), &[2]);
        assert_eq!(hotel.corridor_count(), 3);
    }

    #[test]
    fn test_out_of_range_corridor_is_rejected() {
        let mut hotel = Hotel::new(3);
        hotel.add_corridor(1, 2).unwrap();

        for (from, to) in [(5, 1), (1, 4), (0, 1), (1, 0), (-1, 2)] {
            let err = hotel.add_corridor(from, to).unwrap_err();
            match err {
                HotelError::InvalidCorridor {
                    from: f,
                    to: t,
                    room_count,
                } => {
                    assert_eq!((f, t), (from, to));
                    assert_eq!(room_count, 3);
                }
                other => panic!("Expected InvalidCorridor, got {other:?}"),
            }
        }

        assert_eq!(hotel.corridors().collect::<Vec<_>>(), vec![(1, 2)]);
    }

    #[test]
    fn test_corridors_iterates_by_source_room() {
        let mut hotel = Hotel::new(3);
        hotel.add_corridor(3, 1).unwrap();
        hotel.add_corridor(1, 2).unwrap();
        hotel.add_corridor(2, 3).unwrap();

        assert_eq!(
            hotel.corridors().collect::<Vec<_>>(),
            vec![(1, 2), (2, 3), (3, 1)]
        );
    }
}
