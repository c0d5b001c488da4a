//! In-process feed backed by a single JSON document.
//!
//! `publish` writes a value at a path; every subscriber whose path is the
//! published path, a parent of it, or a child of it gets re-notified with
//! the value at its own path. That matches the managed platform's
//! behavior: updating the collection re-fires single-room listeners and
//! vice versa.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde_json::{Map, Value};

use crate::subscription::{RoomFeed, SnapshotFn, Subscription};

type SharedCallback = Arc<Mutex<SnapshotFn>>;

struct FeedState {
    document: Value,
    subscribers: HashMap<u64, (String, SharedCallback)>,
    next_id: u64,
}

/// An in-process [`RoomFeed`] with no transport underneath.
///
/// Used by the test suites and the headless harness; anything that works
/// against `MemoryFeed` works unchanged against a platform binding.
#[derive(Clone)]
pub struct MemoryFeed {
    state: Arc<Mutex<FeedState>>,
}

impl Default for MemoryFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryFeed {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(FeedState {
                document: Value::Null,
                subscribers: HashMap::new(),
                next_id: 0,
            })),
        }
    }

    /// Write `value` at `path` and notify related subscribers.
    pub fn publish(&self, path: &str, value: Value) {
        let notify: Vec<(String, SharedCallback)> = {
            let mut state = self.state.lock().unwrap();
            let segments: Vec<&str> = split_path(path);
            set_at_path(&mut state.document, &segments, value);
            log::debug!("feed: published at `{path}`");
            state
                .subscribers
                .values()
                .filter(|(sub_path, _)| paths_related(path, sub_path))
                .cloned()
                .collect()
        };

        for (sub_path, callback) in notify {
            self.deliver(&sub_path, &callback);
        }
    }

    /// Remove the value at `path`, notifying subscribers with `None`.
    pub fn clear(&self, path: &str) {
        self.publish(path, Value::Null);
    }

    /// Resolve and deliver the current value at `sub_path`.
    ///
    /// The value is cloned out under the lock and the callback runs
    /// without it, so a callback may publish or detach without deadlock.
    fn deliver(&self, sub_path: &str, callback: &SharedCallback) {
        let value = {
            let state = self.state.lock().unwrap();
            resolve(&state.document, sub_path).cloned()
        };
        if let Ok(mut callback) = callback.lock() {
            callback(value.as_ref());
        }
    }
}

impl RoomFeed for MemoryFeed {
    fn subscribe(&self, path: &str, callback: SnapshotFn) -> Subscription {
        let callback: SharedCallback = Arc::new(Mutex::new(callback));
        let id = {
            let mut state = self.state.lock().unwrap();
            let id = state.next_id;
            state.next_id += 1;
            state
                .subscribers
                .insert(id, (path.to_string(), callback.clone()));
            id
        };
        log::debug!("feed: subscriber {id} attached at `{path}`");

        // Initial delivery of the last-known value.
        self.deliver(path, &callback);

        let state = self.state.clone();
        Subscription::new(move || {
            state.lock().unwrap().subscribers.remove(&id);
            log::debug!("feed: subscriber {id} detached");
        })
    }
}

fn split_path(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Whether a publish at `published` affects a subscription at `watched`.
fn paths_related(published: &str, watched: &str) -> bool {
    let published = split_path(published);
    let watched = split_path(watched);
    let shared = published.len().min(watched.len());
    published[..shared] == watched[..shared]
}

fn resolve<'a>(document: &'a Value, path: &str) -> Option<&'a Value> {
    let mut node = document;
    for segment in split_path(path) {
        node = node.get(segment)?;
    }
    if node.is_null() {
        None
    } else {
        Some(node)
    }
}

fn set_at_path(node: &mut Value, segments: &[&str], value: Value) {
    let Some((head, rest)) = segments.split_first() else {
        *node = value;
        return;
    };
    if !node.is_object() {
        *node = Value::Object(Map::new());
    }
    if let Value::Object(map) = node {
        let child = map.entry(head.to_string()).or_insert(Value::Null);
        set_at_path(child, rest, value);
    }
}
