//! Seat-availability arithmetic for the room detail view.
//!
//! `available` is a signed difference and is deliberately not clamped:
//! an over-capacity room reports a negative seat count alongside
//! `is_full`, and the presentation layer decides how to render that.

use serde::{Deserialize, Serialize};

use crate::room::Room;

/// How a room's seating capacity is resolved.
///
/// Exactly one policy is active per dashboard; it comes from
/// [`DashboardConfig`](crate::config::DashboardConfig) and is applied to
/// every room uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CapacityPolicy {
    /// Use the room's own `capacity` field, with a fallback for rooms
    /// whose deployment reports none.
    PerRoom { fallback: u32 },
    /// Ignore per-room data and assume one fixed capacity everywhere.
    Fixed(u32),
}

impl Default for CapacityPolicy {
    fn default() -> Self {
        Self::PerRoom { fallback: 0 }
    }
}

impl CapacityPolicy {
    /// Resolve the effective capacity for a room under this policy.
    pub fn resolve(self, room: &Room) -> u32 {
        match self {
            Self::PerRoom { fallback } => room.capacity.unwrap_or(fallback),
            Self::Fixed(capacity) => capacity,
        }
    }
}

/// Activity label shown on the detail page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Activity {
    FormalLecture,
    OpenForStudy,
}

impl Activity {
    pub fn from_room(room: &Room) -> Self {
        if room.faculty_present {
            Self::FormalLecture
        } else {
            Self::OpenForStudy
        }
    }

    /// "Current Activity" stat label.
    pub fn label(self) -> &'static str {
        match self {
            Self::FormalLecture => "Formal Lecture",
            Self::OpenForStudy => "Open for Study",
        }
    }

    /// Detail-page status line.
    pub fn status_line(self) -> &'static str {
        match self {
            Self::FormalLecture => "Lecture in Progress",
            Self::OpenForStudy => "Available for Study",
        }
    }
}

/// Derived facts for one focused room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomDetail {
    pub occupants: u32,
    pub capacity: u32,
    /// Seats remaining; negative when occupancy exceeds capacity.
    pub available: i64,
    pub is_full: bool,
    pub activity: Activity,
}

/// Compute the detail view facts for a room under the given policy.
pub fn detail(room: &Room, policy: CapacityPolicy) -> RoomDetail {
    let capacity = policy.resolve(room);
    let available = capacity as i64 - room.count as i64;

    RoomDetail {
        occupants: room.count,
        capacity,
        available,
        is_full: available <= 0,
        activity: Activity::from_room(room),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(count: u32, capacity: Option<u32>, faculty_present: bool) -> Room {
        Room {
            id: "c013".into(),
            name: "C-013".into(),
            count,
            capacity,
            faculty_present,
        }
    }

    #[test]
    fn test_seats_available() {
        let d = detail(&room(45, Some(60), false), CapacityPolicy::default());
        assert_eq!(d.available, 15);
        assert!(!d.is_full);
        assert_eq!(d.occupants, 45);
        assert_eq!(d.capacity, 60);
    }

    #[test]
    fn test_exactly_full() {
        let d = detail(&room(60, Some(60), false), CapacityPolicy::default());
        assert_eq!(d.available, 0);
        assert!(d.is_full);
    }

    #[test]
    fn test_over_capacity_goes_negative() {
        let d = detail(&room(75, Some(60), false), CapacityPolicy::default());
        assert_eq!(d.available, -15);
        assert!(d.is_full);
    }

    #[test]
    fn test_per_room_fallback() {
        let policy = CapacityPolicy::PerRoom { fallback: 40 };
        assert_eq!(detail(&room(10, None, false), policy).capacity, 40);
        assert_eq!(detail(&room(10, Some(80), false), policy).capacity, 80);
    }

    #[test]
    fn test_fixed_policy_ignores_room_capacity() {
        let d = detail(&room(45, Some(120), false), CapacityPolicy::Fixed(60));
        assert_eq!(d.capacity, 60);
        assert_eq!(d.available, 15);
    }

    #[test]
    fn test_activity_labels() {
        let lecture = detail(&room(30, Some(60), true), CapacityPolicy::default());
        assert_eq!(lecture.activity, Activity::FormalLecture);
        assert_eq!(lecture.activity.label(), "Formal Lecture");
        assert_eq!(lecture.activity.status_line(), "Lecture in Progress");

        let open = detail(&room(0, Some(60), false), CapacityPolicy::default());
        assert_eq!(open.activity.label(), "Open for Study");
        assert_eq!(open.activity.status_line(), "Available for Study");
    }
}
