use std::io;

use directory_core::cache::{FileStore, KeyValueStore, MemoryStore, StoreError};
use directory_core::selection::{FeaturedSelector, SelectionConfig};
use directory_core::text::fuzzy_match;
use directory_core::types::{Directory, Office, OfficeId};
use tempfile::tempdir;

fn sample_directory() -> Directory {
    let cairo: Vec<Office> = (1..=10)
        .map(|i| Office::new(OfficeId::Number(i), format!("مكتب القاهرة {i}")))
        .collect();
    let alexandria: Vec<Office> = (11..=15)
        .map(|i| Office::new(OfficeId::Number(i), format!("مكتب الإسكندرية {i}")))
        .collect();

    [("القاهرة", cairo), ("الإسكندرية", alexandria)]
        .into_iter()
        .collect()
}

struct ReadOnlyStore;

impl KeyValueStore for ReadOnlyStore {
    fn read(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Ok(None)
    }

    fn write(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Io(io::Error::new(io::ErrorKind::Other, "quota exceeded")))
    }
}

#[test]
fn two_governorate_directory_end_to_end() {
    let directory = sample_directory();
    let mut selector = FeaturedSelector::new(MemoryStore::new());

    let offices = selector.select_offices(&directory);
    assert_eq!(offices.len(), 4);
    assert!(offices.iter().all(|o| o.gov_name == "القاهرة"));
    for featured in &offices {
        let OfficeId::Number(id) = featured.office.id.clone().unwrap() else {
            panic!("numeric ids expected");
        };
        assert!((1..=10).contains(&id));
    }

    let governorates = selector.select_governorates(&directory);
    assert_eq!(governorates, vec!["القاهرة", "الإسكندرية"]);
}

#[test]
fn failing_writes_still_produce_well_formed_selections() {
    let directory = sample_directory();
    let mut selector = FeaturedSelector::new(ReadOnlyStore);

    for _ in 0..5 {
        let governorates = selector.select_governorates(&directory);
        assert_eq!(governorates, vec!["القاهرة", "الإسكندرية"]);

        let offices = selector.select_offices(&directory);
        assert_eq!(offices.len(), 4);
    }
}

#[test]
fn selection_survives_a_process_restart() {
    let dir = tempdir().unwrap();
    let directory: Directory = (1..=25)
        .map(|i| (format!("Governorate {i}"), Vec::<Office>::new()))
        .collect();

    let first = {
        let store = FileStore::open(dir.path()).unwrap();
        FeaturedSelector::new(store).select_governorates(&directory)
    };

    let store = FileStore::open(dir.path()).unwrap();
    let second = FeaturedSelector::new(store).select_governorates(&directory);

    assert_eq!(first.len(), 5);
    assert_eq!(first, second);
    assert!(dir
        .path()
        .join(format!("{}.json", SelectionConfig::v1().governorates_key))
        .is_file());
}

#[test]
fn search_and_selection_agree_on_anchor_names() {
    let directory = sample_directory();
    let mut selector = FeaturedSelector::new(MemoryStore::new());
    let governorates = selector.select_governorates(&directory);

    let hits: Vec<&String> = governorates
        .iter()
        .filter(|name| fuzzy_match(name, "قاهره"))
        .collect();
    assert_eq!(hits, vec!["القاهرة"]);
}
