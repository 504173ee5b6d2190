use taskline::model::{Item, ItemProperties, TaskStatus};
use taskline::store::fs::FileStore;
use taskline::store::{Bucket, DataStore};

fn props(id: u32, description: &str) -> ItemProperties {
    ItemProperties {
        id,
        date: "Mon Sep 02 2019".into(),
        timestamp: 1567434272855,
        description: description.into(),
        boards: vec!["My Board".into()],
        ..Default::default()
    }
}

#[test]
fn test_missing_files_load_empty() {
    let temp_dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(temp_dir.path());

    assert!(store.load_active().unwrap().is_empty());
    assert!(store.load_archive().unwrap().is_empty());
}

#[test]
fn test_buckets_live_in_separate_files() {
    let temp_dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::new(temp_dir.path());

    store
        .save_active(&[Item::note(props(1, "active note"))])
        .unwrap();
    store
        .save_archive(&[Item::task(props(1, "old task").with_status(TaskStatus::Complete))])
        .unwrap();

    assert!(temp_dir.path().join("storage/storage.json").is_file());
    assert!(temp_dir.path().join("archive/archive.json").is_file());

    let active = store.load_active().unwrap();
    let archive = store.load_archive().unwrap();
    assert_eq!(active[0].description, "active note");
    assert_eq!(archive[0].status(), Some(TaskStatus::Complete));
}

#[test]
fn test_items_survive_a_reload() {
    let temp_dir = tempfile::tempdir().unwrap();
    let items = vec![
        Item::task(
            props(1, "Ship")
                .with_priority(3)
                .with_due_date(1_900_000_000_000)
                .with_status(TaskStatus::InProgress)
                .starred(),
        ),
        Item::note(props(2, "Idea").with_boards(vec!["work".into(), "home".into()])),
    ];

    FileStore::new(temp_dir.path()).save_active(&items).unwrap();
    let loaded = FileStore::new(temp_dir.path()).load_active().unwrap();

    assert_eq!(loaded, items);
}

#[test]
fn test_snapshot_is_keyed_by_id() {
    let temp_dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::new(temp_dir.path());
    store
        .save_active(&[Item::note(props(2, "b")), Item::note(props(1, "a"))])
        .unwrap();

    let raw = std::fs::read_to_string(store.bucket_path(Bucket::Active)).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["1"]["_id"], 1);
    assert_eq!(json["2"]["description"], "b");
    assert_eq!(json["1"]["_isTask"], false);

    let ids: Vec<u32> = store.load_active().unwrap().iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn test_save_replaces_previous_snapshot() {
    let temp_dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::new(temp_dir.path());

    store
        .save_active(&[Item::note(props(1, "a")), Item::note(props(2, "b"))])
        .unwrap();
    store.save_active(&[Item::note(props(1, "b"))]).unwrap();

    let loaded = store.load_active().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].description, "b");

    let leftovers: Vec<_> = std::fs::read_dir(temp_dir.path().join("storage"))
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty());
}
