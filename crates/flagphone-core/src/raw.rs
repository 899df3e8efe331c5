// crates/flagphone-core/src/raw.rs

//! Raw dataset records, exactly as they appear in `countries.json`.

use crate::country::Country;
use crate::region::RegionCode;
use serde::Deserialize;

/// One entry of the source dataset:
/// `{ "name": "France", "dial_code": "+33", "code": "FR" }`.
///
/// Fields are optional so an incomplete record can be skipped instead of
/// failing the whole file.
#[derive(Debug, Clone, Deserialize)]
pub struct CountryRaw {
    pub name: Option<String>,
    pub dial_code: Option<String>,
    pub code: Option<String>,
}

pub type CountriesRaw = Vec<CountryRaw>;

/// Why a raw record was not turned into a [`Country`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejected {
    MissingField(&'static str),
    UnknownCode(String),
}

impl CountryRaw {
    /// Presence checks only: every field must exist and the code must be a
    /// known [`RegionCode`]. Values are otherwise taken as-is.
    pub fn into_country(self) -> Result<Country, Rejected> {
        let name = self.name.ok_or(Rejected::MissingField("name"))?;
        let dial_code = self.dial_code.ok_or(Rejected::MissingField("dial_code"))?;
        let code = self.code.ok_or(Rejected::MissingField("code"))?;
        let code = code
            .parse::<RegionCode>()
            .map_err(|_| Rejected::UnknownCode(code))?;
        Ok(Country::new(name, code, dial_code))
    }
}
