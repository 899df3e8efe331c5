// crates/flagphone-core/src/config.rs
use crate::text::MatchMode;
use serde::{Deserialize, Serialize};

/// Runtime options of a [`Picker`](crate::picker::Picker).
///
/// Every field has a default, so a partial JSON object such as
/// `{"show_country_phone_code": false}` is a valid configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Include the dial code in each row.
    pub show_country_phone_code: bool,
    /// How queries are compared with country fields.
    pub match_mode: MatchMode,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            show_country_phone_code: true,
            match_mode: MatchMode::Lowercase,
        }
    }
}

impl PickerConfig {
    pub fn with_phone_code(mut self, show: bool) -> Self {
        self.show_country_phone_code = show;
        self
    }

    pub fn with_match_mode(mut self, mode: MatchMode) -> Self {
        self.match_mode = mode;
        self
    }

    #[cfg(feature = "json")]
    pub fn from_json_str(json: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(all(test, feature = "json"))]
mod tests {
    use super::*;

    #[test]
    fn defaults_show_phone_code() {
        let config = PickerConfig::default();
        assert!(config.show_country_phone_code);
        assert_eq!(config.match_mode, MatchMode::Lowercase);
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let config = PickerConfig::from_json_str(r#"{"match_mode": "folded"}"#).unwrap();
        assert!(config.show_country_phone_code);
        assert_eq!(config.match_mode, MatchMode::Folded);

        let config = PickerConfig::from_json_str(r#"{"show_country_phone_code": false}"#).unwrap();
        assert!(!config.show_country_phone_code);
    }
}
