//! Snapshot normalization: feed value → ordered room list.
//!
//! The feed delivers either nothing or a JSON mapping from room key to
//! raw record. An absent, null, or empty snapshot is an ordinary display
//! state (an empty list), never an error.

use serde_json::Value;

use crate::ordering::sort_rooms;
use crate::room::{normalize, RawRoomRecord, Room};

/// Normalize a full snapshot into rooms ordered for the list view.
///
/// One [`Room`] per mapping entry, `id` equal to the key; ordering per
/// [`sort_rooms`] with the given pinned name. A snapshot that is not a
/// mapping produces an empty list (with a warning for non-null junk).
pub fn list_rooms(snapshot: Option<&Value>, pinned: &str) -> Vec<Room> {
    let Some(value) = snapshot else {
        return Vec::new();
    };

    let entries = match value {
        Value::Object(map) => map,
        Value::Null => return Vec::new(),
        other => {
            log::warn!("rooms snapshot is not a mapping ({other}), rendering empty list");
            return Vec::new();
        }
    };

    let mut rooms: Vec<Room> = entries
        .iter()
        .map(|(key, raw)| normalize(key, &RawRoomRecord::from_value(key, raw)))
        .collect();

    sort_rooms(&mut rooms, pinned);
    rooms
}
