// crates/flagphone-core/src/repository.rs

//! # Country Repository
//!
//! Owns the canonical, ordered country list the picker reads from. The list
//! comes from the dataset embedded in the crate, from a file on disk
//! (`.json`, or `.json.gz` with the `compact` feature) or from caller-built
//! values.

use crate::country::Country;
#[cfg(feature = "json")]
use crate::error::{PickerError, Result};
use crate::raw::{CountriesRaw, Rejected};
use crate::region::RegionCode;
#[cfg(feature = "json")]
use once_cell::sync::OnceCell;
#[cfg(feature = "json")]
use std::fs::File;
#[cfg(feature = "json")]
use std::io::{BufReader, Read};
#[cfg(feature = "json")]
use std::path::Path;
use std::path::PathBuf;

#[cfg(feature = "json")]
static EMBEDDED_JSON: &str = include_str!("../data/countries.json");

#[cfg(feature = "json")]
static DEFAULT_REPOSITORY: OnceCell<CountryRepository> = OnceCell::new();

/// Read-only, ordered access to a list of countries.
///
/// The picker only ever reads through this trait, so hosts can plug in their
/// own storage.
pub trait CountrySource {
    fn countries(&self) -> &[Country];

    /// Find a country by region code string, case-insensitive (e.g. "DE", "fr").
    fn find_by_code(&self, code: &str) -> Option<&Country> {
        let code = code.parse::<RegionCode>().ok()?;
        self.countries().iter().find(|c| c.code() == code)
    }

    /// Find countries whose dial code starts with `prefix` ("+1", "49").
    ///
    /// The leading `+` is optional on both sides.
    fn find_by_phone_code(&self, prefix: &str) -> Vec<&Country> {
        let prefix = prefix.trim().trim_start_matches('+');
        if prefix.is_empty() {
            return Vec::new();
        }
        self.countries()
            .iter()
            .filter(|c| c.phone_code().trim_start_matches('+').starts_with(prefix))
            .collect()
    }
}

/// In-memory country list, kept in dataset order.
#[derive(Debug, Clone, Default)]
pub struct CountryRepository {
    countries: Vec<Country>,
}

impl CountrySource for CountryRepository {
    fn countries(&self) -> &[Country] {
        &self.countries
    }
}

impl CountrySource for [Country] {
    fn countries(&self) -> &[Country] {
        self
    }
}

impl CountrySource for Vec<Country> {
    fn countries(&self) -> &[Country] {
        self
    }
}

impl From<Vec<Country>> for CountryRepository {
    fn from(countries: Vec<Country>) -> Self {
        Self { countries }
    }
}

impl CountryRepository {
    pub fn new(countries: Vec<Country>) -> Self {
        Self { countries }
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "countries.json"
    }

    /// Builds a repository from raw records, skipping the ones that fail the
    /// presence checks of [`CountryRaw::into_country`](crate::raw::CountryRaw::into_country).
    pub fn from_raw(raw: CountriesRaw) -> Self {
        let total = raw.len();
        let mut countries = Vec::with_capacity(total);
        for (index, record) in raw.into_iter().enumerate() {
            match record.into_country() {
                Ok(country) => countries.push(country),
                Err(Rejected::MissingField(field)) => {
                    tracing::warn!(index, field, "skipping dataset record with missing field");
                }
                Err(Rejected::UnknownCode(code)) => {
                    tracing::warn!(index, %code, "skipping dataset record with unknown region code");
                }
            }
        }
        tracing::debug!(loaded = countries.len(), total, "country repository built");
        Self { countries }
    }
}

#[cfg(feature = "json")]
impl CountryRepository {
    /// The repository backed by the dataset embedded in the crate.
    ///
    /// Parsed once per process; later calls return the cached instance.
    pub fn load() -> Result<&'static CountryRepository> {
        DEFAULT_REPOSITORY.get_or_try_init(|| Self::from_json_str(EMBEDDED_JSON))
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: CountriesRaw = serde_json::from_str(json)?;
        Ok(Self::from_raw(raw))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: CountriesRaw = serde_json::from_reader(reader)?;
        Ok(Self::from_raw(raw))
    }

    /// Loads a dataset file. Paths ending in `.gz` are decompressed when the
    /// `compact` feature is enabled.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading country dataset");
        let reader = open_stream(path)?;
        Self::from_reader(reader)
    }
}

/// Opens a file, buffers it, and wraps it in a Gzip decoder when the path
/// ends in `.gz`.
#[cfg(feature = "json")]
fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => {
            PickerError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
        }
        _ => PickerError::Io(e),
    })?;

    let reader = BufReader::new(file);
    let gzipped = path.extension().is_some_and(|ext| ext == "gz");

    #[cfg(feature = "compact")]
    {
        if gzipped {
            use flate2::read::GzDecoder;
            return Ok(Box::new(GzDecoder::new(reader)));
        }
    }

    #[cfg(not(feature = "compact"))]
    {
        if gzipped {
            return Err(PickerError::NotFound(format!(
                "{} is gzip-compressed; enable the `compact` feature",
                path.display()
            )));
        }
    }

    Ok(Box::new(reader))
}
