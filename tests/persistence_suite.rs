use chrono::{DateTime, TimeZone, Utc};
use std::fs;
use subtrack_core::{
    core::services::{CategoryService, ClientService, PaymentService},
    storage::JsonStorage,
    subscription::{Category, Client, Duration, Roster},
};
use tempfile::tempdir;

fn utc(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

#[test]
fn absent_store_loads_as_none_and_seeds_defaults() {
    let temp = tempdir().unwrap();
    let storage = JsonStorage::new(Some(temp.path().to_path_buf())).unwrap();

    assert!(storage.load().unwrap().is_none());

    let roster = storage.load_or_default(utc(2024, 1, 1)).unwrap();
    assert_eq!(roster.categories.len(), 3);
    assert_eq!(roster.clients.len(), 6);
    assert!(roster
        .clients
        .iter()
        .any(|client| client.name == "Acme Corporation"));
}

#[test]
fn save_and_load_round_trip_preserves_payment_order() {
    let temp = tempdir().unwrap();
    let storage = JsonStorage::new(Some(temp.path().to_path_buf())).unwrap();

    let now = utc(2024, 1, 1);
    let mut roster = Roster::new(now);
    let category_id =
        CategoryService::add(&mut roster, Category::new("Hosting", "#3B82F6", now)).unwrap();
    let client_id = ClientService::add(
        &mut roster,
        Client::new("Acme", category_id, Duration::OneMonth, now, now),
    )
    .unwrap();
    // Entered out of date order on purpose.
    PaymentService::add(&mut roster, &client_id, 10.0, utc(2024, 3, 1), None).unwrap();
    PaymentService::add(&mut roster, &client_id, 20.0, utc(2024, 1, 15), Some("late".into()))
        .unwrap();

    storage.save(&roster).unwrap();
    let loaded = storage.load().unwrap().expect("roster should exist");

    let client = loaded.client(&client_id).unwrap();
    assert_eq!(client.payments.len(), 2);
    assert_eq!(client.payments[0].amount, 10.0);
    assert_eq!(client.payments[1].amount, 20.0);
    assert_eq!(client.payments[1].notes.as_deref(), Some("late"));
    assert_eq!(client.duration, Duration::OneMonth);
}

#[test]
fn duration_serializes_with_the_on_disk_vocabulary() {
    let temp = tempdir().unwrap();
    let storage = JsonStorage::new(Some(temp.path().to_path_buf())).unwrap();

    let now = utc(2024, 1, 1);
    let mut roster = Roster::new(now);
    ClientService::add(
        &mut roster,
        Client::new("Acme", "1", Duration::OneYear, now, now),
    )
    .unwrap();
    storage.save(&roster).unwrap();

    let json = fs::read_to_string(storage.roster_path()).unwrap();
    assert!(json.contains("\"ONE_YEAR\""));
}

#[test]
fn corrupt_store_degrades_to_defaults_and_is_moved_aside() {
    let temp = tempdir().unwrap();
    let storage = JsonStorage::new(Some(temp.path().to_path_buf())).unwrap();

    fs::write(storage.roster_path(), "{ not json").unwrap();
    assert!(storage.load().unwrap().is_none());
    assert!(!storage.roster_path().exists());
    assert!(temp.path().join("roster.json.corrupt").exists());

    let roster = storage.load_or_default(utc(2024, 1, 1)).unwrap();
    assert_eq!(roster.clients.len(), 6);
}

#[test]
fn failed_atomic_save_preserves_the_original_file() {
    let temp = tempdir().unwrap();
    let storage = JsonStorage::new(Some(temp.path().to_path_buf())).unwrap();

    let mut roster = Roster::default_dataset(utc(2024, 1, 1));
    storage.save(&roster).unwrap();
    let original = fs::read_to_string(storage.roster_path()).unwrap();

    // A directory squatting on the staging path forces the write to fail.
    fs::create_dir_all(temp.path().join("roster.json.tmp")).unwrap();
    roster.clients.clear();
    assert!(storage.save(&roster).is_err());

    let current = fs::read_to_string(storage.roster_path()).unwrap();
    assert_eq!(current, original, "failed save must not corrupt the store");
}

#[test]
fn clear_removes_the_store_so_defaults_reseed() {
    let temp = tempdir().unwrap();
    let storage = JsonStorage::new(Some(temp.path().to_path_buf())).unwrap();

    storage.save(&Roster::new(utc(2024, 1, 1))).unwrap();
    assert!(storage.roster_path().exists());
    storage.clear().unwrap();
    assert!(storage.load().unwrap().is_none());
}
