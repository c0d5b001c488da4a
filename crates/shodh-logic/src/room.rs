//! Room entity and lenient raw-record normalization.
//!
//! The feed delivers duck-typed per-room records: every field besides the
//! key is optional and may arrive with the wrong JSON type when a sensor
//! deployment misbehaves. This module is the single validation boundary.
//! Absent or wrong-typed optional fields collapse to their documented
//! defaults here, so the rest of the crate only ever sees a well-typed
//! [`Room`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A normalized room entity.
///
/// Rooms are ephemeral view projections, fully reconstructed from the
/// feed on every snapshot. Nothing in this crate mutates or persists one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Stable identifier — the key of this room in the feed mapping.
    pub id: String,
    /// Display name; defaults from the key when the record has none.
    pub name: String,
    /// Current occupant count.
    pub count: u32,
    /// Seating capacity, when the deployment reports one per room.
    pub capacity: Option<u32>,
    /// True while an instructor-led session is active.
    pub faculty_present: bool,
}

/// The raw per-room record as the feed supplies it.
///
/// Default values per field: `name` → derived from the key, `count` → 0,
/// `capacity` → none, `faculty_present` → false.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawRoomRecord {
    pub name: Option<String>,
    pub count: Option<u32>,
    pub capacity: Option<u32>,
    pub faculty_present: Option<bool>,
}

impl RawRoomRecord {
    /// Extract a record from an arbitrary JSON value, leniently.
    ///
    /// A wrong-typed field is treated exactly like an absent one (after a
    /// warning); a non-object value yields an all-default record. This
    /// never fails: malformed upstream data is a display concern, not an
    /// error condition.
    pub fn from_value(key: &str, value: &Value) -> Self {
        let Some(fields) = value.as_object() else {
            if !value.is_null() {
                log::warn!("room `{key}`: record is not an object, using defaults");
            }
            return Self::default();
        };

        Self {
            name: lenient_string(key, "name", fields.get("name")),
            count: lenient_uint(key, "count", fields.get("count")),
            capacity: lenient_uint(key, "capacity", fields.get("capacity")),
            faculty_present: lenient_bool(key, "faculty_present", fields.get("faculty_present")),
        }
    }
}

impl From<&Room> for RawRoomRecord {
    fn from(room: &Room) -> Self {
        Self {
            name: Some(room.name.clone()),
            count: Some(room.count),
            capacity: room.capacity,
            faculty_present: Some(room.faculty_present),
        }
    }
}

/// Normalize one feed entry into a [`Room`].
///
/// The entity id is the feed key. The display name falls back to the key
/// with underscores spaced out (`"room_101"` → `"room 101"`) when the
/// record carries no non-empty name. Normalization is idempotent: feeding
/// a room's own fields back through yields an identical entity.
pub fn normalize(key: &str, raw: &RawRoomRecord) -> Room {
    let name = match &raw.name {
        Some(name) if !name.is_empty() => name.clone(),
        _ => display_name_from_key(key),
    };

    Room {
        id: key.to_string(),
        name,
        count: raw.count.unwrap_or(0),
        capacity: raw.capacity,
        faculty_present: raw.faculty_present.unwrap_or(false),
    }
}

/// Default display name for a key: underscores become single spaces.
pub fn display_name_from_key(key: &str) -> String {
    key.replace('_', " ")
}

fn lenient_string(key: &str, field: &str, value: Option<&Value>) -> Option<String> {
    match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            log::warn!("room `{key}`: field `{field}` is not a string ({other}), ignoring");
            None
        }
    }
}

fn lenient_uint(key: &str, field: &str, value: Option<&Value>) -> Option<u32> {
    match value {
        None | Some(Value::Null) => None,
        Some(Value::Number(n)) => match n.as_u64() {
            Some(v) if v <= u32::MAX as u64 => Some(v as u32),
            _ => {
                log::warn!("room `{key}`: field `{field}` is not a non-negative integer ({n}), ignoring");
                None
            }
        },
        Some(other) => {
            log::warn!("room `{key}`: field `{field}` is not a number ({other}), ignoring");
            None
        }
    }
}

fn lenient_bool(key: &str, field: &str, value: Option<&Value>) -> Option<bool> {
    match value {
        None | Some(Value::Null) => None,
        Some(Value::Bool(b)) => Some(*b),
        Some(other) => {
            log::warn!("room `{key}`: field `{field}` is not a boolean ({other}), ignoring");
            None
        }
    }
}
