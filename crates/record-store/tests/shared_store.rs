//! Integration tests for sharing an in-memory store across threads.

use std::thread;

use record_store::{EntityKind, InMemoryStore, Record, RecordStore, StoreError};

#[derive(Debug, Clone)]
struct Tag {
    name: String,
    writer: usize,
}

impl Record for Tag {
    const KIND: EntityKind = EntityKind::Place;

    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

#[test]
fn concurrent_adds_of_one_name_admit_exactly_one() {
    let store: InMemoryStore<Tag> = InMemoryStore::new();

    let handles: Vec<_> = (0..8)
        .map(|writer| {
            let store = store.clone();
            thread::spawn(move || {
                store.add(Tag {
                    name: "shared".to_string(),
                    writer,
                })
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    let successes = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(successes, 1);
    assert!(results.iter().all(|r| match r {
        Ok(()) => true,
        Err(StoreError::DuplicateName { kind, name }) =>
            *kind == EntityKind::Place && name == "shared",
        Err(_) => false,
    }));
    assert_eq!(store.len(), 1);
}

#[test]
fn concurrent_adds_of_distinct_names_all_land() {
    let store: InMemoryStore<Tag> = InMemoryStore::new();

    let handles: Vec<_> = (0..8)
        .map(|writer| {
            let store = store.clone();
            thread::spawn(move || {
                store.add(Tag {
                    name: format!("tag-{writer}"),
                    writer,
                })
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap().unwrap();
    }

    let all = store.list_all().unwrap();
    assert_eq!(all.len(), 8);
    let mut writers: Vec<_> = all.iter().map(|t| t.writer).collect();
    writers.sort_unstable();
    assert_eq!(writers, (0..8).collect::<Vec<_>>());
}
