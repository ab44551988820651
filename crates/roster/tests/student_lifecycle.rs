//! End-to-end record lifecycle against a real data file.

use std::fs;

use roster::{Record, RecordStore, StudentFields, StudentService};
use tempfile::TempDir;

fn service_in(dir: &TempDir) -> StudentService {
    StudentService::new(RecordStore::new(dir.path().join("students.txt")))
}

#[test]
fn add_delete_add_never_reuses_ids() {
    let dir = TempDir::new().unwrap();
    let service = service_in(&dir);

    let alice = service
        .add(&StudentFields::new("Alice", "10", "B", "X"))
        .unwrap();
    assert_eq!(alice, "1");
    assert_eq!(
        service.list().unwrap(),
        vec![Record::new("1", "Alice", "10", "B", "X")]
    );

    let bob = service
        .add(&StudentFields::new("Bob", "11", "A", "Y"))
        .unwrap();
    assert_eq!(bob, "2");

    service.delete("1").unwrap();
    assert!(service.find("1").unwrap().is_none());
    assert_eq!(service.find("2").unwrap().unwrap().name, "Bob");

    let cara = service
        .add(&StudentFields::new("Cara", "9", "C", "Z"))
        .unwrap();
    assert_eq!(cara, "3");

    let content = fs::read_to_string(dir.path().join("students.txt")).unwrap();
    assert_eq!(content, "2|Bob|11|A|Y\n3|Cara|9|C|Z\n");
}

#[test]
fn separate_services_share_state_only_through_the_file() {
    let dir = TempDir::new().unwrap();
    let writer = service_in(&dir);
    let reader = service_in(&dir);

    writer
        .add(&StudentFields::new("Alice", "10", "B", "X"))
        .unwrap();
    assert_eq!(reader.find("1").unwrap().unwrap().name, "Alice");

    reader
        .update("1", &StudentFields::new("Alice", "11", "A", "X"))
        .unwrap();
    assert_eq!(writer.find("1").unwrap().unwrap().age, "11");
}

#[test]
fn existing_file_is_picked_up() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("students.txt"),
        "1|Alice|10|B|X\n3|Dan|12|D|Q\n7|Eve|8|E|R\n",
    )
    .unwrap();
    let service = service_in(&dir);

    let id = service
        .add(&StudentFields::new("Finn", "13", "f", "S"))
        .unwrap();
    assert_eq!(id, "8");
    assert_eq!(service.find("8").unwrap().unwrap().grade, "F");
}

#[test]
fn malformed_file_blocks_every_operation() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("students.txt"), "1|Alice|10|B|X\nbroken\n").unwrap();
    let service = service_in(&dir);

    assert!(service.list().unwrap_err().is_format_error());
    assert!(service.find("1").unwrap_err().is_format_error());
    assert!(service.delete("1").unwrap_err().is_format_error());
    assert!(service
        .add(&StudentFields::new("Bob", "11", "A", "Y"))
        .unwrap_err()
        .is_format_error());
}
