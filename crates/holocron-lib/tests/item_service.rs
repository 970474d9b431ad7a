use holocron_lib::{CharacterRecord, Error, ItemService, RecordStore, SEED_RECORD_COUNT};

fn character(id: i64, name: &str) -> CharacterRecord {
    CharacterRecord {
        id,
        name: name.to_string(),
        height: 180,
        mass: 80,
        hair_color: "brown".to_string(),
        skin_color: "fair".to_string(),
        eye_color: "blue".to_string(),
        birth_year: Some("41.9BBY".to_string()),
    }
}

#[test]
fn get_all_tracks_store_size() {
    let service = ItemService::seeded();
    assert_eq!(service.get_all().len(), SEED_RECORD_COUNT);

    service.add(character(100, "Han Solo")).expect("add");
    service.add(character(101, "Chewbacca")).expect("add");
    assert_eq!(service.get_all().len(), SEED_RECORD_COUNT + 2);

    service.delete_by_id(3).expect("delete");
    assert_eq!(service.get_all().len(), SEED_RECORD_COUNT + 1);
    assert_eq!(service.get_all().len(), service.len());
}

#[test]
fn get_all_keeps_insertion_order() {
    let service = ItemService::seeded();
    service.add(character(50, "Obi-Wan Kenobi")).expect("add");

    let names: Vec<String> = service.get_all().into_iter().map(|s| s.name).collect();
    assert_eq!(names.first().map(String::as_str), Some("Luke Skywalker"));
    assert_eq!(names.last().map(String::as_str), Some("Obi-Wan Kenobi"));
}

#[test]
fn added_records_found_under_any_case_variant() {
    let service = ItemService::seeded();
    let added = service.add(character(10, "Obi-Wan Kenobi")).expect("add");

    for variant in ["Obi-Wan Kenobi", "obi-wan kenobi", "OBI-WAN KENOBI", "oBi-WaN kEnObI"] {
        let found = service.get_by_name(variant);
        assert!(
            found.contains(&added),
            "lookup with {variant:?} should include the added record"
        );
    }
}

#[test]
fn duplicate_names_are_all_returned() {
    let service = ItemService::seeded();
    service.add(character(20, "luke skywalker")).expect("add");

    let found = service.get_by_name("Luke Skywalker");
    let ids: Vec<i64> = found.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 20]);
}

#[test]
fn repeated_add_never_stores_twice() {
    let service = ItemService::seeded();
    let record = character(9, "Yoda");

    service.add(record.clone()).expect("first add");
    let before = service.get_all();

    let mut changed = record.clone();
    changed.name = "Not Yoda".to_string();
    assert_eq!(service.add(changed), Err(Error::DuplicateId { id: 9 }));

    assert_eq!(service.get_all(), before);
    assert_eq!(service.get_by_id(9), Some(record));
}

#[test]
fn delete_twice_fails_second_time() {
    let service = ItemService::seeded();

    assert!(service.delete_by_id(8).is_ok());
    assert_eq!(service.delete_by_id(8), Err(Error::NotFound { id: 8 }));
    assert_eq!(service.len(), SEED_RECORD_COUNT - 1);
}

#[test]
fn delete_luke_then_lookup_is_empty() {
    let service = ItemService::seeded();

    service.delete_by_id(1).expect("delete luke");
    assert_eq!(service.len(), SEED_RECORD_COUNT - 1);
    assert!(service.get_by_name("Luke Skywalker").is_empty());
}

#[test]
fn services_do_not_share_state() {
    let first = ItemService::seeded();
    let second = ItemService::seeded();

    first.delete_by_id(1).expect("delete");
    assert_eq!(first.len(), SEED_RECORD_COUNT - 1);
    assert_eq!(second.len(), SEED_RECORD_COUNT);
}

#[test]
fn service_over_custom_store() {
    let store = RecordStore::from_records(vec![character(1, "Wedge Antilles")]);
    let service = ItemService::new(store);

    assert_eq!(service.len(), 1);
    assert_eq!(service.get_by_name("wedge antilles").len(), 1);
}

#[test]
fn concurrent_adds_with_same_id_store_one_record() {
    use std::sync::Arc;
    use std::thread;

    let service = Arc::new(ItemService::seeded());
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let service = Arc::clone(&service);
            thread::spawn(move || service.add(character(77, &format!("Clone {i}"))).is_ok())
        })
        .collect();

    let successes = handles
        .into_iter()
        .map(|h| h.join().expect("thread join"))
        .filter(|ok| *ok)
        .count();

    assert_eq!(successes, 1);
    assert_eq!(service.len(), SEED_RECORD_COUNT + 1);
}
