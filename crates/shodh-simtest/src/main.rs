//! Shodh Headless Validation Harness
//!
//! Exercises the derivation pipeline end to end without the realtime
//! platform. Runs entirely in-process — no network, no rendering.
//!
//! Usage:
//!   cargo run -p shodh-simtest
//!   cargo run -p shodh-simtest -- --verbose

use std::sync::{Arc, Mutex};

use serde_json::Value;

use shodh_feed::{watch_room, watch_rooms, MemoryFeed};
use shodh_logic::config::DashboardConfig;
use shodh_logic::lookup::{find_room, RoomLookupError};
use shodh_logic::occupancy::{detail, Activity};
use shodh_logic::room::Room;
use shodh_logic::snapshot::list_rooms;
use shodh_logic::status::RoomStatus;

// ── Sample snapshot (same shape the feed delivers) ──────────────────────
const SNAPSHOT_JSON: &str = include_str!("../../../data/rooms_snapshot.json");

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn check(name: &str, passed: bool, detail: impl Into<String>) -> TestResult {
    TestResult {
        name: name.into(),
        passed,
        detail: detail.into(),
    }
}

fn main() {
    let _ = env_logger::try_init();
    let verbose = std::env::args().any(|a| a == "--verbose");
    println!("=== Shodh Occupancy Harness ===\n");

    let mut results = Vec::new();

    // 1. Snapshot fixture sanity
    let snapshot = load_snapshot(&mut results);

    // 2. Normalization & ordering
    results.extend(validate_normalization(&snapshot));

    // 3. Status classification sweep
    results.extend(validate_classifier(&snapshot));

    // 4. Seat-availability arithmetic
    results.extend(validate_detail(&snapshot));

    // 5. Feed pipeline (subscribe / publish / detach)
    results.extend(validate_feed_pipeline(&snapshot));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── 1. Snapshot fixture ─────────────────────────────────────────────────

fn load_snapshot(results: &mut Vec<TestResult>) -> Value {
    println!("--- Snapshot Fixture ---");
    match serde_json::from_str::<Value>(SNAPSHOT_JSON) {
        Ok(snapshot) => {
            let entries = snapshot.as_object().map(|m| m.len()).unwrap_or(0);
            results.push(check(
                "fixture_parse",
                entries >= 5,
                format!("{} room records loaded", entries),
            ));
            snapshot
        }
        Err(e) => {
            results.push(check("fixture_parse", false, format!("JSON parse error: {}", e)));
            Value::Null
        }
    }
}

// ── 2. Normalization & ordering ─────────────────────────────────────────

fn validate_normalization(snapshot: &Value) -> Vec<TestResult> {
    println!("--- Normalization & Ordering ---");
    let mut results = Vec::new();
    let config = DashboardConfig::default();

    let rooms = list_rooms(Some(snapshot), &config.pinned_room);
    let keys = snapshot.as_object().map(|m| m.len()).unwrap_or(0);

    results.push(check(
        "one_room_per_key",
        rooms.len() == keys,
        format!("{} rooms from {} keys", rooms.len(), keys),
    ));

    results.push(check(
        "pinned_room_first",
        rooms.first().map(|r| r.name.as_str()) == Some(config.pinned_room.as_str()),
        format!(
            "first room is {:?}",
            rooms.first().map(|r| r.name.as_str()).unwrap_or("<none>")
        ),
    ));

    let rest: Vec<&str> = rooms.iter().skip(1).map(|r| r.name.as_str()).collect();
    let sorted = rest.windows(2).all(|w| w[0] <= w[1]);
    results.push(check(
        "rest_alphabetical",
        sorted,
        format!("order after pin: {}", rest.join(", ")),
    ));

    let key_named = find_room(&rooms, "room_101").map(|r| r.name.clone());
    results.push(check(
        "name_defaults_from_key",
        key_named.as_deref() == Ok("room 101"),
        format!("room_101 displays as {:?}", key_named),
    ));

    results.push(check(
        "empty_feed_is_empty_list",
        list_rooms(None, &config.pinned_room).is_empty()
            && list_rooms(Some(&Value::Null), &config.pinned_room).is_empty(),
        "absent and null snapshots render as empty lists",
    ));

    results
}

// ── 3. Status classification ────────────────────────────────────────────

fn validate_classifier(snapshot: &Value) -> Vec<TestResult> {
    println!("--- Status Classification ---");
    let mut results = Vec::new();
    let config = DashboardConfig::default();
    let rooms = list_rooms(Some(snapshot), &config.pinned_room);

    let mut lectures = 0;
    let mut occupied = 0;
    let mut free = 0;
    for room in &rooms {
        match RoomStatus::classify(room) {
            RoomStatus::Lecture => lectures += 1,
            RoomStatus::Occupied => occupied += 1,
            RoomStatus::Free => free += 1,
        }
    }
    results.push(check(
        "classifier_total",
        lectures + occupied + free == rooms.len(),
        format!("{} lecture, {} occupied, {} free", lectures, occupied, free),
    ));

    let lecture_rooms_ok = rooms
        .iter()
        .filter(|r| r.faculty_present)
        .all(|r| RoomStatus::classify(r) == RoomStatus::Lecture);
    results.push(check(
        "faculty_presence_dominates",
        lecture_rooms_ok,
        "every faculty_present room classifies as Lecture",
    ));

    let c013_status = find_room(&rooms, "c013").map(|r| RoomStatus::classify(r).label());
    results.push(check(
        "pinned_room_in_lecture",
        c013_status == Ok("Lecture Ongoing"),
        format!("c013 status: {:?}", c013_status),
    ));

    results
}

// ── 4. Seat availability ────────────────────────────────────────────────

fn validate_detail(snapshot: &Value) -> Vec<TestResult> {
    println!("--- Seat Availability ---");
    let mut results = Vec::new();
    let config = DashboardConfig::default();
    let rooms = list_rooms(Some(snapshot), &config.pinned_room);
    let policy = config.capacity_policy;

    if let Ok(c013) = find_room(&rooms, "c013") {
        let d = detail(c013, policy);
        results.push(check(
            "seats_available",
            d.available == 15 && !d.is_full,
            format!("c013: {}/{} seated, {} available", d.occupants, d.capacity, d.available),
        ));
        results.push(check(
            "lecture_activity_label",
            d.activity == Activity::FormalLecture && d.activity.label() == "Formal Lecture",
            format!("c013 activity: {}", d.activity.label()),
        ));
    }

    if let Ok(hall) = find_room(&rooms, "seminar_hall") {
        let d = detail(hall, policy);
        results.push(check(
            "over_capacity_negative",
            d.available == -15 && d.is_full,
            format!("seminar_hall: {} available, full={}", d.available, d.is_full),
        ));
    }

    if let Ok(lab) = find_room(&rooms, "lab_3") {
        let d = detail(lab, policy);
        results.push(check(
            "missing_capacity_uses_fallback",
            d.capacity == 0 && d.is_full,
            format!("lab_3 capacity resolves to {}", d.capacity),
        ));
        results.push(check(
            "open_for_study",
            d.activity.status_line() == "Available for Study",
            format!("lab_3 status line: {}", d.activity.status_line()),
        ));
    }

    results
}

// ── 5. Feed pipeline ────────────────────────────────────────────────────

fn validate_feed_pipeline(snapshot: &Value) -> Vec<TestResult> {
    println!("--- Feed Pipeline ---");
    let mut results = Vec::new();
    let config = DashboardConfig::default();
    let feed = MemoryFeed::new();

    let lists: Arc<Mutex<Vec<Vec<Room>>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = lists.clone();
    let list_sub = watch_rooms(&feed, &config, move |rooms| {
        sink.lock().unwrap().push(rooms)
    });

    let details: Arc<Mutex<Vec<Result<Room, RoomLookupError>>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = details.clone();
    let _detail_sub = watch_room(&feed, &config, "b2", move |room| {
        sink.lock().unwrap().push(room)
    });

    {
        let lists = lists.lock().unwrap();
        results.push(check(
            "initial_delivery",
            lists.len() == 1 && lists[0].is_empty(),
            "list subscriber sees an immediate empty snapshot",
        ));
    }
    results.push(check(
        "detail_loading_state",
        details.lock().unwrap().first() == Some(&Err(RoomLookupError::MissingData)),
        "detail subscriber starts in the loading state",
    ));

    feed.publish(&config.rooms_path, snapshot.clone());
    {
        let lists = lists.lock().unwrap();
        let latest = lists.last().cloned().unwrap_or_default();
        results.push(check(
            "publish_fans_out",
            latest.len() == snapshot.as_object().map(|m| m.len()).unwrap_or(0)
                && latest.first().map(|r| r.name.as_str()) == Some("C-013"),
            format!("list delivery has {} ordered rooms", latest.len()),
        ));
    }
    results.push(check(
        "detail_found",
        matches!(details.lock().unwrap().last(), Some(Ok(room)) if room.count == 12),
        "detail subscriber resolves b2 after publish",
    ));

    // Single-room update reaches both subscribers.
    feed.publish(
        &config.room_path("b2"),
        serde_json::json!({"name": "B-2", "count": 13, "capacity": 50}),
    );
    results.push(check(
        "child_publish_updates_detail",
        matches!(details.lock().unwrap().last(), Some(Ok(room)) if room.count == 13),
        "child-path publish re-fires the detail watcher",
    ));

    let deliveries_before = lists.lock().unwrap().len();
    list_sub.detach();
    feed.publish(&config.rooms_path, snapshot.clone());
    results.push(check(
        "detach_stops_list",
        lists.lock().unwrap().len() == deliveries_before,
        "detached list subscriber receives nothing further",
    ));

    let missing: Arc<Mutex<Vec<Result<Room, RoomLookupError>>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = missing.clone();
    let _missing_sub = watch_room(&feed, &config, "z9", move |room| {
        sink.lock().unwrap().push(room)
    });
    results.push(check(
        "unknown_room_not_found",
        missing.lock().unwrap().first() == Some(&Err(RoomLookupError::RoomNotFound("z9".into()))),
        "unknown id renders the not-found state",
    ));

    results
}
