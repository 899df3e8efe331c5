use flagphone_core::prelude::*;

const SMALL_DATASET: &str = r#"[
    {"name": "Germany", "dial_code": "+49", "code": "DE"},
    {"name": "France", "dial_code": "+33", "code": "FR"},
    {"name": "Atlantis", "dial_code": "+000", "code": "ZZ"}
]"#;

#[test]
fn loads_plain_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("countries.json");
    std::fs::write(&path, SMALL_DATASET).unwrap();

    let repository = CountryRepository::load_from_path(&path).unwrap();
    let names: Vec<_> = repository.countries().iter().map(|c| c.name()).collect();
    assert_eq!(names, ["Germany", "France"]);
}

#[cfg(feature = "compact")]
#[test]
fn loads_gzipped_json_file() {
    use flate2::{write::GzEncoder, Compression};
    use std::io::Write;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("countries.json.gz");
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(SMALL_DATASET.as_bytes()).unwrap();
    std::fs::write(&path, encoder.finish().unwrap()).unwrap();

    let repository = CountryRepository::load_from_path(&path).unwrap();
    assert_eq!(repository.len(), 2);
    assert!(repository.find_by_code("fr").is_some());
}

#[test]
fn missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let err = CountryRepository::load_from_path(dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, PickerError::NotFound(_)));
}

#[cfg(unix)]
#[test]
fn unreadable_path_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let plain = dir.path().join("plain");
    std::fs::write(&plain, SMALL_DATASET).unwrap();

    // A regular file used as a directory fails with ENOTDIR, not ENOENT.
    let err = CountryRepository::load_from_path(plain.join("countries.json")).unwrap_err();
    assert!(matches!(err, PickerError::Io(_)), "{err:?}");
}

#[test]
fn shipped_data_file_matches_embedded_dataset() {
    let path = CountryRepository::default_data_dir().join(CountryRepository::default_dataset_filename());
    let from_disk = CountryRepository::load_from_path(path).unwrap();
    let embedded = CountryRepository::load().unwrap();
    assert_eq!(from_disk.countries(), embedded.countries());
}
