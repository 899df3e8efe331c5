use flagphone_core::prelude::*;
use std::cell::RefCell;

#[test]
fn search_then_pick_from_the_bundled_dataset() {
    let repository = CountryRepository::load().unwrap();
    let picked = RefCell::new(Vec::new());

    let mut picker = Picker::with_repository(repository, PickerConfig::default()).unwrap();
    picker.on_select(|c: &Country| picked.borrow_mut().push(c.clone()));

    let titles = picker.section_index_titles().unwrap();
    assert_eq!(titles.first().map(String::as_str), Some("A"));
    assert_eq!(titles.last().map(String::as_str), Some("Å"));

    picker.activate_search();
    picker.update_query("switz").unwrap();
    assert_eq!(picker.section_index_titles().unwrap(), ["S"]);

    let row = picker.row(0, 0).unwrap();
    assert_eq!(row.name, "Switzerland");
    assert_eq!(row.phone_code, Some("+41"));
    assert_eq!(row.flag.emoji(), "🇨🇭");

    let chosen = picker.select(0, 0).unwrap();
    assert_eq!(chosen.code(), RegionCode::CH);
    assert!(!picker.is_searching());
    assert_eq!(picker.results(), None);
    assert!(picker.is_closed());

    drop(picker);
    let picked = picked.into_inner();
    assert_eq!(picked.len(), 1);
    assert_eq!(picked[0].name(), "Switzerland");
}

#[test]
fn empty_query_shows_everything() {
    let repository = CountryRepository::load().unwrap();
    let mut picker = Picker::with_repository(repository, PickerConfig::default()).unwrap();

    picker.activate_search();
    picker.update_query("").unwrap();
    assert_eq!(picker.results(), None);
    assert_eq!(
        picker.display_model().unwrap().iter().count(),
        repository.len()
    );
}

#[test]
fn folded_matching_is_opt_in() {
    let repository = CountryRepository::load().unwrap();

    let mut plain = Picker::with_repository(repository, PickerConfig::default()).unwrap();
    plain.activate_search();
    plain.update_query("reunion").unwrap();
    assert!(plain.display_model().unwrap().is_empty());

    let config = PickerConfig::default().with_match_mode(MatchMode::Folded);
    let mut folded = Picker::with_repository(repository, config).unwrap();
    folded.activate_search();
    folded.update_query("reunion").unwrap();
    let hits: Vec<_> = folded.display_model().unwrap().iter().map(|c| c.code()).collect();
    assert_eq!(hits, [RegionCode::RE]);
}

#[test]
fn dial_code_queries_cross_sections() {
    let repository = CountryRepository::load().unwrap();
    let mut picker = Picker::with_repository(repository, PickerConfig::default()).unwrap();

    picker.activate_search();
    picker.update_query("+44").unwrap();
    let names: Vec<_> = picker
        .display_model()
        .unwrap()
        .iter()
        .map(|c| c.name())
        .collect();
    assert_eq!(names, ["Guernsey", "Isle of Man", "Jersey", "United Kingdom"]);
}
