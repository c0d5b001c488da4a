//! Observer-style feed client for Shodh.
//!
//! The realtime platform owns transport, persistence, and reconnection;
//! this crate owns only the subscription surface the dashboard consumes:
//! subscribe to a path, receive the latest full snapshot on every change,
//! detach via a cancellation handle. [`MemoryFeed`] is the in-process
//! implementation used by tests and the headless harness; a platform
//! binding would implement [`RoomFeed`] against the real service.
//!
//! The feed client is an explicitly constructed object passed to whoever
//! needs it. There is no module-scope connection singleton.

mod memory;
mod subscription;
mod watch;

pub use memory::MemoryFeed;
pub use subscription::{RoomFeed, SnapshotFn, Subscription};
pub use watch::{watch_room, watch_rooms};
