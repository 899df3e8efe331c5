// crates/flagphone-core/src/text.rs
use serde::{Deserialize, Serialize};

/// How a search query is compared against country fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Plain Unicode lowercasing on both sides. `"fr"` matches `"France"`,
    /// but `"aland"` does not match `"Åland Islands"`.
    #[default]
    Lowercase,
    /// Transliterate to ASCII before lowercasing, so accents are ignored.
    Folded,
}

impl MatchMode {
    /// Normalizes `s` into the comparison form of this mode.
    pub fn normalize(self, s: &str) -> String {
        match self {
            MatchMode::Lowercase => s.to_lowercase(),
            MatchMode::Folded => fold_key(s),
        }
    }
}

/// Convert a string into a folded key suitable for comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Réunion` -> `Reunion`)
/// 2\) Normalize to lowercase
///
/// # Examples
///
/// ```rust
/// use flagphone_core::text::fold_key;
///
/// assert_eq!(fold_key("Åland Islands"), "aland islands");
/// assert_eq!(fold_key("Türkiye"), "turkiye");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Uppercased first character of `s`, or `None` for an empty string.
///
/// The result is a `String` because some characters uppercase to more than
/// one (`'ß'` becomes `"SS"`).
pub fn initial_key(s: &str) -> Option<String> {
    s.chars().next().map(|c| c.to_uppercase().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercase_mode_keeps_accents() {
        assert_eq!(MatchMode::Lowercase.normalize("Åland"), "åland");
        assert_eq!(MatchMode::Folded.normalize("Åland"), "aland");
    }

    #[test]
    fn initial_key_uppercases_first_char() {
        assert_eq!(initial_key("fiji").as_deref(), Some("F"));
        assert_eq!(initial_key("Åland").as_deref(), Some("Å"));
        assert_eq!(initial_key("ßtadt").as_deref(), Some("SS"));
        assert_eq!(initial_key(""), None);
    }
}
