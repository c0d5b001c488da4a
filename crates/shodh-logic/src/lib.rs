//! Pure occupancy-derivation logic for Shodh.
//!
//! This crate contains every business rule of the classroom dashboard
//! that is independent of the realtime platform, the transport, and the
//! UI. Functions take plain data and return results, making them
//! unit-testable and portable across any feed binding or frontend.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | Dashboard configuration (feed path, pinned room, capacity policy) |
//! | [`lookup`] | Room lookup against a snapshot, missing/not-found display states |
//! | [`occupancy`] | Seat-availability arithmetic and activity labeling |
//! | [`ordering`] | Pinned-first alphabetical room ordering |
//! | [`room`] | Room entity and lenient raw-record normalization |
//! | [`snapshot`] | Snapshot mapping → ordered list of normalized rooms |
//! | [`status`] | Room status classification (lecture / occupied / free) |

pub mod config;
pub mod lookup;
pub mod occupancy;
pub mod ordering;
pub mod room;
pub mod snapshot;
pub mod status;
