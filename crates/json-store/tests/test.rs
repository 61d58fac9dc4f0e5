/*
 * Copyright (c) Peter Bjorklund. All rights reserved. https://github.com/nimble-rust/workspace
 * Licensed under the MIT License. See LICENSE in the project root for license information.
 */
use log::info;
use parkade_json_store::JsonFileStore;
use parkade_lot::prelude::*;
use std::fs;
use std::path::PathBuf;

fn test_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("parkade_json_store_{name}"));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("temp dir");
    dir
}

#[test_log::test]
fn missing_file_loads_nothing() {
    let dir = test_dir("missing");
    let mut store = JsonFileStore::new(dir.join("parking_data.json"));
    assert_eq!(store.path(), dir.join("parking_data.json").as_path());
    assert!(store.load().expect("missing is not an error").is_none());

    let lot = SpotAllocator::new(store);
    assert_eq!(lot.available_count(), 40);
    assert_eq!(lot.parked_count(), 0);

    let _ = fs::remove_dir_all(&dir);
}

#[test_log::test]
fn assignment_survives_restart() {
    let dir = test_dir("restart");
    let path = dir.join("parking_data.json");

    let assigned = {
        let mut lot = SpotAllocator::new(JsonFileStore::new(&path));
        lot.assign("V1").expect("lot is empty")
    };
    info!("V1 assigned to {assigned}");

    let mut lot = SpotAllocator::new(JsonFileStore::new(&path));
    assert_eq!(lot.lookup("V1").expect("restored from file"), assigned);
    assert_eq!(lot.available_count(), 39);
    assert!(matches!(lot.assign("V1"), Err(LotError::AlreadyParked(_))));

    let _ = fs::remove_dir_all(&dir);
}

#[test_log::test]
fn file_uses_named_fields() {
    let dir = test_dir("layout");
    let path = dir.join("parking_data.json");

    let mut lot = SpotAllocator::new(JsonFileStore::new(&path));
    lot.assign("car1").expect("lot is empty");
    lot.assign("car2").expect("spots remain");

    let text = fs::read_to_string(&path).expect("saved file");
    let value: serde_json::Value = serde_json::from_str(&text).expect("valid json");
    assert_eq!(value["vehicle_spot_map"]["car1"], 1);
    assert_eq!(value["vehicle_spot_map"]["car2"], 2);
    let available = value["available_spots"].as_array().expect("array");
    assert_eq!(available.len(), 38);
    assert_eq!(available[0], 3);

    let _ = fs::remove_dir_all(&dir);
}

#[test_log::test]
fn reads_hand_written_file() {
    let dir = test_dir("hand_written");
    let path = dir.join("parking_data.json");
    let available: Vec<u8> = (1..=40).filter(|spot| *spot != 21).collect();
    let document = serde_json::json!({
        "available_spots": available,
        "vehicle_spot_map": { "XYZ-9": 21 },
    });
    fs::write(&path, document.to_string()).expect("write");

    let lot = SpotAllocator::new(JsonFileStore::new(&path));
    let found = lot.lookup("XYZ-9").expect("restored");
    assert_eq!(found.spot.value(), 21);
    assert_eq!(found.level, Level::B);

    let _ = fs::remove_dir_all(&dir);
}

#[test_log::test]
fn corrupt_file_gives_empty_lot() {
    let dir = test_dir("corrupt");
    let path = dir.join("parking_data.json");
    fs::write(&path, b"{\"available_spots\": [1, 2,").expect("write");

    let mut store = JsonFileStore::new(&path);
    assert!(matches!(store.load(), Err(StoreError::Decode(_))));

    let mut lot = SpotAllocator::new(store);
    assert_eq!(lot.available_count(), 40);
    assert_eq!(lot.parked_count(), 0);

    // the next assign overwrites the corrupt file
    lot.assign("V1").expect("lot is empty");
    let restarted = SpotAllocator::new(JsonFileStore::new(&path));
    assert_eq!(restarted.lookup("V1").expect("saved").spot.value(), 1);

    let _ = fs::remove_dir_all(&dir);
}

#[test_log::test]
fn wrong_shape_gives_empty_lot() {
    let dir = test_dir("wrong_shape");
    let path = dir.join("parking_data.json");
    fs::write(&path, b"{\"available_spots\": \"all\", \"vehicle_spot_map\": {}}").expect("write");

    let lot = SpotAllocator::new(JsonFileStore::new(&path));
    assert_eq!(lot.available_count(), 40);

    let _ = fs::remove_dir_all(&dir);
}

#[test_log::test]
fn unwritable_path_keeps_assignment() {
    let dir = test_dir("unwritable");
    let blocker = dir.join("not_a_dir");
    fs::write(&blocker, b"file").expect("write");

    let mut lot = SpotAllocator::new(JsonFileStore::new(blocker.join("parking_data.json")));
    let err = lot.assign("V1").expect_err("parent is a file");
    assert!(matches!(err, LotError::Persistence { .. }));
    assert_eq!(lot.lookup("V1").expect("kept in memory").spot.value(), 1);

    let _ = fs::remove_dir_all(&dir);
}
