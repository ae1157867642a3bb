use super::store::PersistentRoster;
use crate::core::StudentRecord;
use std::path::PathBuf;

fn record(name: &str, id: &str, grade: &str, age: u32, address: &str) -> StudentRecord {
    StudentRecord {
        name: name.to_string(),
        id: id.to_string(),
        grade: grade.to_string(),
        age,
        address: address.to_string(),
    }
}

#[test]
fn test_open_without_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let roster = PersistentRoster::with_path(dir.path().join("students.dat"));

    assert!(roster.is_empty());
}

#[test]
fn test_add_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("students.dat");

    {
        let mut roster = PersistentRoster::with_path(path.clone());
        roster.add(record("Ann", "R1", "A", 20, "X"));
        roster.add(record("Bob", "R2", "B", 21, "Y"));
    }

    let roster = PersistentRoster::with_path(path);
    assert_eq!(roster.len(), 2);
    assert_eq!(roster.records()[0].name, "Ann");
    assert_eq!(roster.records()[1].name, "Bob");
}

#[test]
fn test_remove_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("students.dat");

    {
        let mut roster = PersistentRoster::with_path(path.clone());
        roster.add(record("Ann", "R1", "A", 20, "X"));
        roster.add(record("Bob", "R2", "B", 21, "Y"));
        assert_eq!(roster.remove("R1"), 1);
    }

    let roster = PersistentRoster::with_path(path);
    assert_eq!(roster.len(), 1);
    assert_eq!(roster.records()[0].name, "Bob");
}

#[test]
fn test_duplicate_ids_persist_and_bulk_remove() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("students.dat");

    {
        let mut roster = PersistentRoster::with_path(path.clone());
        roster.add(record("Ann", "R1", "A", 20, "X"));
        roster.add(record("Ann again", "R1", "A", 20, "X"));
        roster.add(record("Bob", "R2", "B", 21, "Y"));
    }

    let mut roster = PersistentRoster::with_path(path.clone());
    assert_eq!(roster.len(), 3);
    assert_eq!(roster.remove("R1"), 2);

    let roster = PersistentRoster::with_path(path);
    assert_eq!(roster.len(), 1);
    assert_eq!(roster.records()[0].id, "R2");
}

#[test]
fn test_corrupt_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("students.dat");

    std::fs::write(&path, b"this is not a roster snapshot").unwrap();

    let roster = PersistentRoster::with_path(path);
    assert!(roster.is_empty());
}

#[test]
fn test_failed_save_keeps_in_memory_mutation() {
    let dir = tempfile::tempdir().unwrap();

    // The snapshot path is a directory, so every save fails
    let mut roster = PersistentRoster::with_path(PathBuf::from(dir.path()));
    roster.add(record("Ann", "R1", "A", 20, "X"));

    assert_eq!(roster.len(), 1);
    assert!(roster.save().is_err());
}

#[test]
fn test_end_to_end_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("students.dat");

    let mut roster = PersistentRoster::with_path(path.clone());
    roster.add(record("Ann", "R1", "A", 20, "X"));
    roster.add(record("Bob", "R2", "B", 21, "Y"));

    let found = roster.search("R2").unwrap();
    assert_eq!(found.name, "Bob");
    assert_eq!(found.age, 21);

    assert_eq!(roster.remove("R1"), 1);

    let ids: Vec<&str> = roster.records().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["R2"]);

    // Reloading from the persisted file yields the same single record
    let reloaded = PersistentRoster::with_path(path);
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded.records()[0].name, "Bob");
}
