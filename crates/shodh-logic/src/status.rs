//! Room status classification.
//!
//! A total function over rooms: faculty presence dominates, then raw
//! occupancy, then free. Every room maps to exactly one status.

use serde::{Deserialize, Serialize};

use crate::room::Room;

/// Discrete occupancy status of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomStatus {
    /// An instructor-led session is active, regardless of head count.
    Lecture,
    /// No lecture, but at least one occupant.
    Occupied,
    /// Empty and unscheduled.
    Free,
}

impl RoomStatus {
    /// Classify a room. First match wins: faculty presence, then count.
    pub fn classify(room: &Room) -> Self {
        if room.faculty_present {
            Self::Lecture
        } else if room.count > 0 {
            Self::Occupied
        } else {
            Self::Free
        }
    }

    /// Short badge label for the room list.
    pub fn label(self) -> &'static str {
        match self {
            Self::Lecture => "Lecture Ongoing",
            Self::Occupied => "Occupied",
            Self::Free => "Free",
        }
    }

    /// One-line summary under the badge in the room list.
    pub fn blurb(self) -> &'static str {
        match self {
            Self::Lecture => "Lecture in progress",
            Self::Occupied | Self::Free => "Available for students",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(count: u32, faculty_present: bool) -> Room {
        Room {
            id: "c013".into(),
            name: "C-013".into(),
            count,
            capacity: Some(60),
            faculty_present,
        }
    }

    #[test]
    fn test_faculty_presence_dominates() {
        assert_eq!(RoomStatus::classify(&room(0, true)), RoomStatus::Lecture);
        assert_eq!(RoomStatus::classify(&room(45, true)), RoomStatus::Lecture);
    }

    #[test]
    fn test_count_implies_occupied() {
        assert_eq!(RoomStatus::classify(&room(1, false)), RoomStatus::Occupied);
        assert_eq!(RoomStatus::classify(&room(60, false)), RoomStatus::Occupied);
    }

    #[test]
    fn test_empty_room_is_free() {
        assert_eq!(RoomStatus::classify(&room(0, false)), RoomStatus::Free);
    }

    #[test]
    fn test_labels() {
        assert_eq!(RoomStatus::Lecture.label(), "Lecture Ongoing");
        assert_eq!(RoomStatus::Occupied.label(), "Occupied");
        assert_eq!(RoomStatus::Free.label(), "Free");
        assert_eq!(RoomStatus::Lecture.blurb(), "Lecture in progress");
        assert_eq!(RoomStatus::Free.blurb(), "Available for students");
    }
}
