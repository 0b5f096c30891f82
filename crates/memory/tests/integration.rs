//! Integration tests for the JSON memory store.

use tempfile::TempDir;
use wellness_memory::{MemoryConfig, MemoryRecord, MemoryStore};

fn test_store(dir: &TempDir) -> MemoryStore {
    MemoryStore::new(MemoryConfig {
        path: dir.path().join("user_memory.json"),
    })
}

#[tokio::test]
async fn test_absent_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let store = test_store(&dir);

    let record = store.load().await;
    assert_eq!(record, MemoryRecord::default());
    assert!(!store.path().exists());
}

#[tokio::test]
async fn test_save_then_load() {
    let dir = TempDir::new().unwrap();
    let store = test_store(&dir);

    let mut record = MemoryRecord::default();
    record.record_topic("stress");
    record.record_topic("diet");
    record.flag_risk();
    store.save(&record).await.unwrap();

    let loaded = store.load().await;
    assert_eq!(loaded.topics, vec!["stress", "diet"]);
    assert!(loaded.risk_flag);
}

#[tokio::test]
async fn test_save_of_load_is_unchanged() {
    let dir = TempDir::new().unwrap();
    let store = test_store(&dir);

    let mut record = MemoryRecord::default();
    record.record_topic("fitness");
    store.save(&record).await.unwrap();
    let before = std::fs::read(store.path()).unwrap();

    let loaded = store.load().await;
    store.save(&loaded).await.unwrap();
    let after = std::fs::read(store.path()).unwrap();

    assert_eq!(before, after);
}

#[tokio::test]
async fn test_save_overwrites_instead_of_merging() {
    let dir = TempDir::new().unwrap();
    let store = test_store(&dir);

    let mut first = MemoryRecord::default();
    first.record_topic("sleep");
    first.record_topic("sleep");
    store.save(&first).await.unwrap();

    let mut second = MemoryRecord::default();
    second.record_topic("motivation");
    store.save(&second).await.unwrap();

    assert_eq!(store.load().await.topics, vec!["motivation"]);
}

#[tokio::test]
async fn test_malformed_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let store = test_store(&dir);
    std::fs::write(store.path(), "{ not json").unwrap();

    assert_eq!(store.load().await, MemoryRecord::default());
}

#[tokio::test]
async fn test_wrong_shape_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let store = test_store(&dir);
    std::fs::write(store.path(), r#"{"topics": "stress", "risk_flag": 1}"#).unwrap();

    assert_eq!(store.load().await, MemoryRecord::default());
}

#[tokio::test]
async fn test_save_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let store = MemoryStore::new(MemoryConfig {
        path: dir.path().join("profiles").join("default").join("memory.json"),
    });

    store.save(&MemoryRecord::default()).await.unwrap();
    assert!(store.path().exists());
}
