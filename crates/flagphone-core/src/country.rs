// crates/flagphone-core/src/country.rs
use crate::region::RegionCode;
use crate::text::MatchMode;
use serde::{Deserialize, Serialize};

/// Reference to the flag artwork of a country.
///
/// Hosts with bundled image assets look them up by [`Flag::asset_name`]
/// (the region code, e.g. `"FR"`); text frontends use [`Flag::emoji`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Flag(RegionCode);

impl Flag {
    pub fn asset_name(&self) -> &'static str {
        self.0.as_str()
    }

    pub fn emoji(&self) -> String {
        self.0.flag_emoji()
    }
}

/// A country entry as shown in the picker.
///
/// Identity is the [`RegionCode`]; two entries with the same code describe
/// the same country.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Country {
    name: String,
    code: RegionCode,
    phone_code: String,
}

impl Country {
    pub fn new(name: impl Into<String>, code: RegionCode, phone_code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code,
            phone_code: phone_code.into(),
        }
    }

    /// Country display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// ISO region identifier.
    pub fn code(&self) -> RegionCode {
        self.code
    }

    /// International dial code rendered as a string (e.g. "+49").
    pub fn phone_code(&self) -> &str {
        &self.phone_code
    }

    pub fn flag(&self) -> Flag {
        Flag(self.code)
    }

    /// True if `needle` occurs in the name, the region code or the dial code.
    ///
    /// `needle` must already be normalized with `mode`
    /// (see [`MatchMode::normalize`]); each field is normalized here.
    pub fn matches(&self, needle: &str, mode: MatchMode) -> bool {
        mode.normalize(&self.name).contains(needle)
            || mode.normalize(self.code.as_str()).contains(needle)
            || mode.normalize(&self.phone_code).contains(needle)
    }
}

impl PartialEq for Country {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Country {}

impl std::hash::Hash for Country {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}
