//! Room lookup and its two display states.
//!
//! Neither variant is a failure in the operational sense: the feed
//! returning nothing renders as "loading", and an unknown id renders as
//! a not-found page. There is nothing to retry.

use thiserror::Error;

use crate::room::Room;

/// Display states for a detail-view lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoomLookupError {
    /// The feed has not delivered a snapshot, or delivered null.
    #[error("no room data available from the feed")]
    MissingData,
    /// A snapshot is present but contains no room with this id.
    #[error("room `{0}` not found in the current snapshot")]
    RoomNotFound(String),
}

/// Find a room by id in the current normalized snapshot.
pub fn find_room<'a>(rooms: &'a [Room], id: &str) -> Result<&'a Room, RoomLookupError> {
    rooms
        .iter()
        .find(|room| room.id == id)
        .ok_or_else(|| RoomLookupError::RoomNotFound(id.to_string()))
}
