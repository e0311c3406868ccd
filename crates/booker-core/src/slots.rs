/// Static catalog of bookable consultation slots
use serde::{Serialize, Serializer};
use std::fmt;

/// A consultation time slot, identified by its display label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeSlot(&'static str);

pub const AVAILABLE_TIME_SLOTS: [TimeSlot; 5] = [
    TimeSlot("09:00 - 09:30 ( BST )"),
    TimeSlot("10:00 - 10:30 ( BST )"),
    TimeSlot("11:00 - 11:30 ( BST )"),
    TimeSlot("12:00 - 12:30 ( BST )"),
    TimeSlot("13:00 - 13:30 ( BST )"),
];

impl TimeSlot {
    pub fn label(&self) -> &'static str {
        self.0
    }

    /// Look up a label in the catalog. Matching is exact.
    pub fn find(label: &str) -> Option<TimeSlot> {
        AVAILABLE_TIME_SLOTS
            .iter()
            .copied()
            .find(|slot| slot.0 == label)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl Serialize for TimeSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0)
    }
}

/// One rendered entry of the time-slot list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotButton {
    pub slot: TimeSlot,
    pub active: bool,
}
