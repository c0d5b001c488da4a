//! Pinned-first room ordering.
//!
//! One designated room always sorts to the top of the list; everything
//! else follows in ascending name order. The pin is matched by display
//! name and is not assumed to be unique: every match pins, and the sort
//! is stable, so equal names (pinned or not) keep their input order.

use crate::room::Room;

/// Sort rooms in place: pinned name first, then ascending by name.
///
/// Degrades to a plain alphabetical sort when nothing matches `pinned`.
pub fn sort_rooms(rooms: &mut [Room], pinned: &str) {
    rooms.sort_by(|a, b| {
        let rank_a = pin_rank(a, pinned);
        let rank_b = pin_rank(b, pinned);
        rank_a.cmp(&rank_b).then_with(|| a.name.cmp(&b.name))
    });
}

fn pin_rank(room: &Room, pinned: &str) -> u8 {
    if room.name == pinned {
        0
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(id: &str, name: &str) -> Room {
        Room {
            id: id.into(),
            name: name.into(),
            count: 0,
            capacity: None,
            faculty_present: false,
        }
    }

    fn names(rooms: &[Room]) -> Vec<&str> {
        rooms.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_pinned_room_sorts_first() {
        let mut rooms = vec![named("b", "B-2"), named("c", "C-013"), named("a", "A-1")];
        sort_rooms(&mut rooms, "C-013");
        assert_eq!(names(&rooms), ["C-013", "A-1", "B-2"]);
    }

    #[test]
    fn test_plain_alphabetical_without_pin_match() {
        let mut rooms = vec![named("a", "A-1"), named("b", "B-2"), named("z", "Z-9")];
        sort_rooms(&mut rooms, "C-013");
        assert_eq!(names(&rooms), ["A-1", "B-2", "Z-9"]);
    }

    #[test]
    fn test_duplicate_pinned_names_keep_input_order() {
        let mut rooms = vec![
            named("a", "A-1"),
            named("c1", "C-013"),
            named("b", "B-2"),
            named("c2", "C-013"),
        ];
        sort_rooms(&mut rooms, "C-013");
        assert_eq!(names(&rooms), ["C-013", "C-013", "A-1", "B-2"]);
        assert_eq!(rooms[0].id, "c1");
        assert_eq!(rooms[1].id, "c2");
    }

    #[test]
    fn test_equal_non_pinned_names_are_stable() {
        let mut rooms = vec![named("x", "Lab"), named("y", "Lab"), named("a", "A-1")];
        sort_rooms(&mut rooms, "C-013");
        assert_eq!(names(&rooms), ["A-1", "Lab", "Lab"]);
        assert_eq!(rooms[1].id, "x");
        assert_eq!(rooms[2].id, "y");
    }
}
