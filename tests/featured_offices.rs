use chrono::{Duration, TimeZone, Utc};
use directory_core::cache::{CacheEntry, ManualClock, MemoryStore};
use directory_core::selection::{pick_offices, FeaturedSelector, SelectionConfig};
use directory_core::types::{Directory, FeaturedOffice, Office, OfficeId};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn offices(prefix: &str, range: std::ops::RangeInclusive<i64>) -> Vec<Office> {
    range
        .map(|i| Office::new(OfficeId::Number(i), format!("{prefix} office {i}")))
        .collect()
}

fn start_clock() -> ManualClock {
    ManualClock::new(Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap())
}

fn count_from(selected: &[FeaturedOffice], gov: &str) -> usize {
    selected.iter().filter(|o| o.gov_name == gov).count()
}

#[test]
fn four_from_cairo_then_two_from_giza() {
    let directory: Directory = [
        ("Alexandria", offices("alex", 1..=5)),
        ("Giza", offices("giza", 6..=12)),
        ("Cairo", offices("cairo", 13..=30)),
    ]
    .into_iter()
    .collect();

    let selected = pick_offices(&directory, &SelectionConfig::v1(), &mut StdRng::seed_from_u64(1));

    assert_eq!(selected.len(), 6);
    assert!(selected[..4].iter().all(|o| o.gov_name == "Cairo"));
    assert!(selected[4..].iter().all(|o| o.gov_name == "Giza"));
    for featured in &selected {
        assert!(directory.offices(&featured.gov_name).contains(&featured.office));
    }
    let ids: std::collections::HashSet<_> = selected.iter().map(|o| o.office.id.clone()).collect();
    assert_eq!(ids.len(), 6, "no office is picked twice");
}

#[test]
fn small_anchor_pools_yield_fewer_offices() {
    let directory: Directory = [
        ("القاهرة", offices("cairo", 1..=2)),
        ("الجيزة", offices("giza", 3..=3)),
    ]
    .into_iter()
    .collect();

    let selected = pick_offices(&directory, &SelectionConfig::v1(), &mut StdRng::seed_from_u64(2));

    assert_eq!(count_from(&selected, "القاهرة"), 2);
    assert_eq!(count_from(&selected, "الجيزة"), 1);
    assert_eq!(selected.last().unwrap().gov_name, "الجيزة");
}

#[test]
fn anchors_without_offices_contribute_nothing() {
    let directory: Directory = [("Cairo", Vec::new()), ("Giza", offices("giza", 1..=4))]
        .into_iter()
        .collect();

    let selected = pick_offices(&directory, &SelectionConfig::v1(), &mut StdRng::seed_from_u64(3));

    assert_eq!(selected.len(), 2);
    assert!(selected.iter().all(|o| o.gov_name == "Giza"));
}

#[test]
fn no_anchors_means_no_featured_offices() {
    let directory: Directory = [("Luxor", offices("luxor", 1..=9)), ("Aswan", offices("aswan", 10..=12))]
        .into_iter()
        .collect();

    let selected = pick_offices(&directory, &SelectionConfig::v1(), &mut StdRng::seed_from_u64(4));
    assert!(selected.is_empty());
}

#[test]
fn empty_directory_returns_nothing_and_leaves_store_untouched() {
    let clock = start_clock();
    let mut selector = FeaturedSelector::with_config(MemoryStore::new(), &clock, SelectionConfig::v1());

    assert!(selector.select_offices(&Directory::new()).is_empty());
    assert!(selector.cache().store().is_empty());
}

#[test]
fn office_selection_is_stable_within_the_ttl() {
    let clock = start_clock();
    let mut selector = FeaturedSelector::with_config(MemoryStore::new(), &clock, SelectionConfig::v1());
    let directory: Directory = [("Cairo", offices("cairo", 1..=40)), ("Giza", offices("giza", 41..=60))]
        .into_iter()
        .collect();

    let first = selector.select_offices_with(&directory, &mut StdRng::seed_from_u64(5));
    clock.advance(Duration::days(3));
    let second = selector.select_offices_with(&directory, &mut StdRng::seed_from_u64(6));

    assert_eq!(first, second);
}

#[test]
fn office_selection_refreshes_after_the_ttl() {
    let clock = start_clock();
    let config = SelectionConfig::v1();
    let mut selector = FeaturedSelector::with_config(MemoryStore::new(), &clock, config.clone());
    let before: Directory = [("Cairo", offices("cairo", 1..=4))].into_iter().collect();
    let after: Directory = [("Giza", offices("giza", 5..=6))].into_iter().collect();

    let first = selector.select_offices(&before);
    clock.advance(Duration::days(7));
    let second = selector.select_offices(&after);

    assert_eq!(count_from(&first, "Cairo"), 4);
    assert_eq!(count_from(&second, "Giza"), 2);
    assert_eq!(count_from(&second, "Cairo"), 0);

    let entry: CacheEntry<Vec<FeaturedOffice>> = selector.cache().get(&config.offices_key).unwrap();
    assert_eq!(entry.data, second);
}

#[test]
fn governorate_and_office_selections_use_separate_keys() {
    let clock = start_clock();
    let config = SelectionConfig::v1();
    let mut selector = FeaturedSelector::with_config(MemoryStore::new(), &clock, config.clone());
    let directory: Directory = [("Cairo", offices("cairo", 1..=5)), ("Luxor", offices("luxor", 6..=7))]
        .into_iter()
        .collect();

    let govs = selector.select_governorates(&directory);
    let featured = selector.select_offices(&directory);

    assert_eq!(govs[0], "Cairo");
    assert_eq!(featured.len(), 4);
    assert_eq!(selector.cache().store().len(), 2);
    assert!(selector.cache().get::<Vec<String>>(&config.governorates_key).is_some());
    assert!(selector.cache().get::<Vec<FeaturedOffice>>(&config.offices_key).is_some());
}

#[test]
fn a_governorate_matching_both_anchors_yields_only_the_cairo_quota() {
    let directory: Directory = [("Cairo & Giza", offices("metro", 1..=10)), ("Luxor", offices("luxor", 11..=12))]
        .into_iter()
        .collect();

    let selected = pick_offices(&directory, &SelectionConfig::v1(), &mut StdRng::seed_from_u64(8));

    assert_eq!(selected.len(), 4);
    assert_eq!(count_from(&selected, "Cairo & Giza"), 4);
    let ids: std::collections::HashSet<_> = selected.iter().map(|o| o.office.id.clone()).collect();
    assert_eq!(ids.len(), 4, "the shared governorate is sampled once");
}
