use std::path::PathBuf;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use fc_project::{FieldCard, FieldNote, LATEST_VERSION, MeasurementInput, MeasurementSet, SiteInfo};
use fc_sizing::{AreaBasedInput, SizingConfig, SizingMethod};
use fc_store::{CardRepository, FileCardStore, StoreError};

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("{}_{}", prefix, nanos));
    dir
}

fn card(id: &str, created_at: &str, area_km2: f64) -> FieldCard {
    let input = AreaBasedInput::new(area_km2, 50.0, None);
    let result = input.size(&SizingConfig::default(), None).unwrap();
    FieldCard {
        version: LATEST_VERSION,
        id: id.to_string(),
        title: format!("Card {}", id),
        created_at: created_at.to_string(),
        updated_at: created_at.to_string(),
        site: SiteInfo::default(),
        location: None,
        measurements: MeasurementSet {
            input: MeasurementInput::AreaBased(input),
            climate_projection_factor: None,
        },
        result,
        wtp: None,
        notes: vec![],
        photos: vec![],
    }
}

#[test]
fn save_list_load_delete_roundtrip() {
    let workspace = unique_temp_dir("fc_store_workspace");
    let store = FileCardStore::for_workspace(&workspace).expect("failed to create store");

    store
        .save(&card("b-card", "2026-06-02T10:00:00Z", 2.0))
        .expect("failed to save card");
    store
        .save(&card("a-card", "2026-06-01T10:00:00Z", 8.0))
        .expect("failed to save card");

    let cards = store.list().expect("failed to list cards");
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].id, "a-card");
    assert_eq!(cards[1].id, "b-card");
    assert_eq!(cards[1].final_size_mm, 400);

    let loaded = store.load("b-card").expect("failed to load card");
    assert_eq!(loaded, card("b-card", "2026-06-02T10:00:00Z", 2.0));
    assert!(store.exists("a-card").unwrap());

    store.delete("a-card").expect("failed to delete card");
    assert!(!store.exists("a-card").unwrap());
    assert_eq!(store.list().unwrap().len(), 1);
    store.delete("a-card").expect("deleting twice is fine");
}

#[test]
fn save_replaces_existing_card() {
    let store = FileCardStore::new(unique_temp_dir("fc_store_replace")).unwrap();
    let mut c = card("replace-me", "2026-06-01T00:00:00Z", 2.0);
    store.save(&c).unwrap();

    c.notes.push(FieldNote {
        created_at: "2026-06-01T01:00:00Z".to_string(),
        text: "Second visit".to_string(),
    });
    store.save(&c).unwrap();

    let loaded = store.load("replace-me").unwrap();
    assert_eq!(loaded.notes.len(), 1);
    assert_eq!(store.list().unwrap().len(), 1);
}

#[test]
fn missing_card_is_not_found() {
    let store = FileCardStore::new(unique_temp_dir("fc_store_missing")).unwrap();
    assert!(matches!(
        store.load("nope"),
        Err(StoreError::CardNotFound { .. })
    ));
}

#[test]
fn path_like_ids_are_rejected() {
    let store = FileCardStore::new(unique_temp_dir("fc_store_ids")).unwrap();
    assert!(matches!(
        store.load("../secret"),
        Err(StoreError::InvalidId { .. })
    ));
    assert!(matches!(
        store.save(&card("a/b", "2026-06-01T00:00:00Z", 1.0)),
        Err(StoreError::InvalidId { .. })
    ));
}

#[test]
fn corrupt_files_are_skipped_in_listing() {
    let dir = unique_temp_dir("fc_store_corrupt");
    let store = FileCardStore::new(dir.clone()).unwrap();
    store.save(&card("good", "2026-06-01T00:00:00Z", 1.0)).unwrap();
    std::fs::write(dir.join("bad.json"), "{ not json").unwrap();

    let cards = store.list().unwrap();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].id, "good");
    assert!(store.load("bad").is_err());
}

#[test]
fn concurrent_writes_to_one_card_stay_readable() {
    let store = Arc::new(FileCardStore::new(unique_temp_dir("fc_store_concurrent")).unwrap());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let store = Arc::clone(&store);
            std::thread::spawn(move || {
                let c = card("shared", "2026-06-01T00:00:00Z", 1.0 + i as f64);
                store.save(&c).unwrap();
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    let loaded = store.load("shared").unwrap();
    assert_eq!(loaded.id, "shared");
    assert_eq!(store.list().unwrap().len(), 1);
}

#[test]
fn concurrent_updates_to_one_card_all_apply() {
    let store = Arc::new(FileCardStore::new(unique_temp_dir("fc_store_update")).unwrap());
    store
        .save(&card("tally", "2026-06-01T00:00:00Z", 1.0))
        .unwrap();

    let handles: Vec<_> = (0..12)
        .map(|i| {
            let store = Arc::clone(&store);
            std::thread::spawn(move || {
                store
                    .update("tally", &mut |c| {
                        c.notes.push(FieldNote {
                            created_at: "2026-06-02T00:00:00Z".to_string(),
                            text: format!("visit {}", i),
                        })
                    })
                    .unwrap();
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    assert_eq!(store.load("tally").unwrap().notes.len(), 12);
}

#[test]
fn update_rejects_invalid_edit_and_keeps_stored_card() {
    let store = FileCardStore::new(unique_temp_dir("fc_store_bad_update")).unwrap();
    store
        .save(&card("keep", "2026-06-01T00:00:00Z", 1.0))
        .unwrap();

    let result = store.update("keep", &mut |c| c.title.clear());
    assert!(matches!(result, Err(StoreError::Project(_))));
    assert_eq!(store.load("keep").unwrap().title, "Card keep");

    assert!(matches!(
        store.update("absent", &mut |_| {}),
        Err(StoreError::CardNotFound { .. })
    ));
}
