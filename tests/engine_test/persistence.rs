//! Tests for the JSON store

use tempfile::tempdir;

use levelup::store::{SaveData, Store};

use crate::common::{day, orchestrator_at};

#[test]
fn test_played_state_round_trips_through_disk() {
    let dir = tempdir().unwrap();
    let store = Store::new(dir.path().join("nested").join("data.json"));

    let mut orch = orchestrator_at(SaveData::default(), day(8, 1));
    orch.check_in();
    orch.dispatch(&levelup::domain::ActivityKind::NoteCreated.into_event("a.md", 1));
    let save = orch.into_save_data();
    assert!(!save.data.quests.is_empty());
    assert!(!save.data.earned_badges.is_empty());

    store.save(&save).unwrap();
    assert_eq!(store.load().unwrap(), save);
    assert!(!dir.path().join("nested").join("data.json.tmp").exists());
}

#[test]
fn test_saved_document_uses_plugin_field_names() {
    let mut save = SaveData::default();
    save.data.last_activity_date = Some(day(8, 2));
    save.data.record_history(day(8, 2), 40);
    let json = save.to_json().unwrap();

    assert!(json.contains("\"lastDateJoined\": \"2024-08-02\""));
    assert!(json.contains("\"xpHistory\""));
    assert!(json.contains("\"2024-08-02\": 40"));
    assert!(json.contains("\"earnedBadges\""));
    assert!(json.contains("\"xpPerNote\": 50"));
}

#[test]
fn test_partial_document_backfills_and_normalizes() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data.json");
    std::fs::write(
        &path,
        r#"{
            "data": {
                "level": 1,
                "currentXp": 150,
                "nextLevelXp": 100,
                "totalXp": 150,
                "lastDateJoined": "",
                "earnedBadges": ["note-1", "note-1"]
            },
            "settings": { "excludedFolders": "Templates/" }
        }"#,
    )
    .unwrap();

    let save = Store::new(&path).load().unwrap();
    assert_eq!(save.data.level, 2);
    assert_eq!(save.data.current_xp, 50);
    assert_eq!(save.data.total_xp, 150);
    assert_eq!(save.data.last_activity_date, None);
    assert_eq!(save.data.earned_badges, ["note-1"]);
    assert!(save.data.quests.is_empty());
    assert!(save.settings.is_excluded("Templates/weekly.md"));
    assert_eq!(save.settings.xp_per_note, 50);
}

#[test]
fn test_corrupt_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(Store::new(&path).load().is_err());
}

#[test]
fn test_reset_removes_progress() {
    let dir = tempdir().unwrap();
    let store = Store::new(dir.path().join("data.json"));
    let mut save = SaveData::default();
    save.data.total_xp = 10;
    store.save(&save).unwrap();

    store.reset().unwrap();
    assert_eq!(store.load().unwrap(), SaveData::default());
}
