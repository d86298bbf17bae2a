//! Room model.

use serde::{Deserialize, Serialize};

/// A room that sessions occupy.
///
/// Occupancy checks are id-equality per slot. Capacity is carried from the
/// catalog for the caller's benefit but not enforced by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Unique room identifier.
    pub id: String,
    /// Human-readable name or number (e.g. "C1.237").
    pub name: String,
    /// Seat count. 0 = unspecified.
    pub capacity: u32,
}

impl Room {
    /// Creates a new room with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            capacity: 0,
        }
    }

    /// Sets the room name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the seat count.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_builder() {
        let r = Room::new("c1-237").with_name("C1.237").with_capacity(60);
        assert_eq!(r.id, "c1-237");
        assert_eq!(r.name, "C1.237");
        assert_eq!(r.capacity, 60);
    }
}
