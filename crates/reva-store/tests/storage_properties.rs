//! # Storage Laws
//!
//! Property tests for the `Storage` contract over `FileStorage`: whatever is
//! stored under a key is what comes back, the newest write wins, and reads
//! of unknown keys are absent and leave the data directory untouched.

use proptest::prelude::*;
use reva_core::{Calculation, CommitId};
use reva_store::{FileStorage, Storage};
use serde_json::{json, Value};

fn commit_id() -> impl Strategy<Value = CommitId> {
    "[0-9a-f]{3,40}".prop_map(|s| CommitId::new(&s).unwrap())
}

fn payload_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::from),
        any::<bool>().prop_map(Value::from),
        ".{0,24}".prop_map(Value::from),
        prop::collection::vec("[a-z]{1,8}", 0..4).prop_map(|names| {
            Value::Array(names.into_iter().map(|n| json!({"name": n})).collect())
        }),
    ]
}

fn calculation() -> impl Strategy<Value = Calculation> {
    (
        commit_id(),
        prop::collection::btree_map("[a-zA-Z]{1,12}", payload_value(), 0..6),
    )
        .prop_map(|(id, fields)| {
            let mut calc = Calculation::new(id);
            for (name, value) in fields {
                if name != reva_core::COMMIT_ID_FIELD {
                    calc.insert(&name, value).unwrap();
                }
            }
            calc
        })
}

proptest! {
    #[test]
    fn fetch_after_store_returns_stored_value(calc in calculation()) {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());

        storage.store(&calc);

        prop_assert_eq!(storage.fetch(&calc.commit_id), Some(calc));
    }

    #[test]
    fn last_store_wins(first in calculation(), second in calculation()) {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());

        let mut second = second;
        second.commit_id = first.commit_id.clone();
        storage.store(&first);
        storage.store(&second);

        prop_assert_eq!(storage.fetch(&first.commit_id), Some(second));
    }

    #[test]
    fn unknown_key_is_absent(id in commit_id()) {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());

        prop_assert!(storage.fetch(&id).is_none());
        prop_assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}

#[test]
fn example_scenario_layout() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path());

    let id = CommitId::new("ab34ef56").unwrap();
    let calc = Calculation::new(id.clone())
        .with_field("suggestions", json!(["alice", "bob"]))
        .unwrap();
    storage.store(&calc);

    assert!(dir.path().join("ab").join("34ef56").is_file());
    let fetched = storage.fetch(&id).unwrap();
    assert_eq!(fetched.field("suggestions"), Some(&json!(["alice", "bob"])));
}

#[test]
fn shared_instance_across_threads() {
    let dir = tempfile::tempdir().unwrap();
    let storage: std::sync::Arc<dyn Storage> =
        std::sync::Arc::new(FileStorage::new(dir.path()));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let storage = storage.clone();
            std::thread::spawn(move || {
                let id = CommitId::new(&format!("c{i}ffee")).unwrap();
                let calc = Calculation::new(id).with_field("worker", i).unwrap();
                storage.store(&calc);
                calc
            })
        })
        .collect();

    for handle in handles {
        let calc = handle.join().unwrap();
        assert_eq!(storage.fetch(&calc.commit_id), Some(calc));
    }
}
