//! Dashboard configuration.
//!
//! One explicit config object, constructed by the host and passed where
//! needed — there is no ambient global client or settings singleton.

use serde::{Deserialize, Serialize};

use crate::occupancy::CapacityPolicy;

/// Feed path of the rooms collection.
pub const ROOMS_PATH: &str = "rooms";

/// Room pinned to the top of the list in the observed deployment.
pub const DEFAULT_PINNED_ROOM: &str = "C-013";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Path of the rooms collection in the feed.
    pub rooms_path: String,
    /// Display name of the room that always sorts first.
    pub pinned_room: String,
    /// How seating capacity is resolved for the detail view.
    pub capacity_policy: CapacityPolicy,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            rooms_path: ROOMS_PATH.to_string(),
            pinned_room: DEFAULT_PINNED_ROOM.to_string(),
            capacity_policy: CapacityPolicy::default(),
        }
    }
}

impl DashboardConfig {
    /// Feed path of a single room, e.g. `rooms/c013`.
    pub fn room_path(&self, id: &str) -> String {
        format!("{}/{}", self.rooms_path, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.rooms_path, "rooms");
        assert_eq!(config.pinned_room, "C-013");
        assert_eq!(config.capacity_policy, CapacityPolicy::PerRoom { fallback: 0 });
    }

    #[test]
    fn test_room_path() {
        let config = DashboardConfig::default();
        assert_eq!(config.room_path("c013"), "rooms/c013");
    }

    #[test]
    fn test_partial_deserialization_fills_defaults() {
        let config: DashboardConfig =
            serde_json::from_str(r#"{"pinned_room": "B-2"}"#).unwrap();
        assert_eq!(config.pinned_room, "B-2");
        assert_eq!(config.rooms_path, "rooms");
    }
}
