//! Normalized views over a raw feed.
//!
//! These are the two subscriptions the presentation layer actually
//! mounts: the ordered room list, and one focused room with its display
//! states. Both keep the pure core pure — derivation runs inside the
//! feed callback, state lives nowhere.

use serde_json::Value;

use shodh_logic::config::DashboardConfig;
use shodh_logic::lookup::RoomLookupError;
use shodh_logic::room::{normalize, RawRoomRecord, Room};
use shodh_logic::snapshot::list_rooms;

use crate::subscription::{RoomFeed, Subscription};

/// Subscribe to the normalized, ordered room list.
///
/// The callback fires with the full list on every feed change; an absent
/// or empty snapshot is delivered as an empty list.
pub fn watch_rooms(
    feed: &dyn RoomFeed,
    config: &DashboardConfig,
    mut on_rooms: impl FnMut(Vec<Room>) + Send + 'static,
) -> Subscription {
    let pinned = config.pinned_room.clone();
    feed.subscribe(
        &config.rooms_path,
        Box::new(move |value| on_rooms(list_rooms(value, &pinned))),
    )
}

/// Subscribe to one room's normalized entity, by id.
///
/// Watches the whole collection so the two display states stay distinct:
/// no snapshot at all is [`RoomLookupError::MissingData`] (the "loading"
/// state), a snapshot without this id is [`RoomLookupError::RoomNotFound`].
pub fn watch_room(
    feed: &dyn RoomFeed,
    config: &DashboardConfig,
    id: &str,
    mut on_room: impl FnMut(Result<Room, RoomLookupError>) + Send + 'static,
) -> Subscription {
    let id = id.to_string();
    feed.subscribe(
        &config.rooms_path,
        Box::new(move |value| on_room(lookup_in_snapshot(value, &id))),
    )
}

fn lookup_in_snapshot(snapshot: Option<&Value>, id: &str) -> Result<Room, RoomLookupError> {
    let entries = snapshot
        .and_then(Value::as_object)
        .ok_or(RoomLookupError::MissingData)?;
    let raw = entries
        .get(id)
        .ok_or_else(|| RoomLookupError::RoomNotFound(id.to_string()))?;
    Ok(normalize(id, &RawRoomRecord::from_value(id, raw)))
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use serde_json::json;

    use super::*;
    use crate::memory::MemoryFeed;

    fn snapshot() -> Value {
        json!({
            "b2": {"name": "B-2", "count": 12},
            "c013": {"name": "C-013", "count": 45, "capacity": 60},
            "a1": {"name": "A-1", "faculty_present": true}
        })
    }

    #[test]
    fn test_watch_rooms_delivers_ordered_list() {
        let feed = MemoryFeed::new();
        let config = DashboardConfig::default();
        let seen: Arc<Mutex<Vec<Vec<Room>>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();

        let _sub = watch_rooms(&feed, &config, move |rooms| {
            sink.lock().unwrap().push(rooms)
        });
        feed.publish(&config.rooms_path, snapshot());

        let seen = seen.lock().unwrap();
        // Initial (empty) delivery plus the published snapshot.
        assert_eq!(seen.len(), 2);
        assert!(seen[0].is_empty());
        let names: Vec<&str> = seen[1].iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["C-013", "A-1", "B-2"]);
    }

    #[test]
    fn test_watch_room_loading_then_found() {
        let feed = MemoryFeed::new();
        let config = DashboardConfig::default();
        let seen: Arc<Mutex<Vec<Result<Room, RoomLookupError>>>> =
            Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();

        let _sub = watch_room(&feed, &config, "c013", move |room| {
            sink.lock().unwrap().push(room)
        });
        feed.publish(&config.rooms_path, snapshot());

        let seen = seen.lock().unwrap();
        assert_eq!(seen[0], Err(RoomLookupError::MissingData));
        let room = seen[1].as_ref().unwrap();
        assert_eq!(room.name, "C-013");
        assert_eq!(room.count, 45);
        assert_eq!(room.capacity, Some(60));
    }

    #[test]
    fn test_watch_room_not_found() {
        let feed = MemoryFeed::new();
        let config = DashboardConfig::default();
        feed.publish(&config.rooms_path, snapshot());

        let seen: Arc<Mutex<Vec<Result<Room, RoomLookupError>>>> =
            Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let _sub = watch_room(&feed, &config, "z9", move |room| {
            sink.lock().unwrap().push(room)
        });

        assert_eq!(
            seen.lock().unwrap()[0],
            Err(RoomLookupError::RoomNotFound("z9".into()))
        );
    }

    #[test]
    fn test_watch_room_single_room_update() {
        let feed = MemoryFeed::new();
        let config = DashboardConfig::default();
        feed.publish(&config.rooms_path, snapshot());

        let seen: Arc<Mutex<Vec<Result<Room, RoomLookupError>>>> =
            Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let _sub = watch_room(&feed, &config, "c013", move |room| {
            sink.lock().unwrap().push(room)
        });

        // A single-room publish re-fires the collection watcher too.
        feed.publish(
            &config.room_path("c013"),
            json!({"name": "C-013", "count": 60, "capacity": 60}),
        );

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[1].as_ref().unwrap().count, 60);
    }
}
