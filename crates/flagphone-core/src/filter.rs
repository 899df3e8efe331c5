// crates/flagphone-core/src/filter.rs
use crate::country::Country;
use crate::text::MatchMode;

/// Countries whose name, region code or dial code contains `query`,
/// compared case-insensitively. Input order is kept and each country
/// appears at most once, however many of its fields match.
///
/// An empty query matches every country; the picker never calls this with
/// one and shows the unfiltered list instead.
///
/// # Examples
///
/// ```rust
/// use flagphone_core::{filter, Country, RegionCode};
///
/// let countries = vec![
///     Country::new("France", RegionCode::FR, "+33"),
///     Country::new("Germany", RegionCode::DE, "+49"),
/// ];
/// let hits = filter(&countries, "49");
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].name(), "Germany");
/// ```
pub fn filter<'a, I>(countries: I, query: &str) -> Vec<&'a Country>
where
    I: IntoIterator<Item = &'a Country>,
{
    filter_with(countries, query, MatchMode::Lowercase)
}

/// [`filter`] with an explicit [`MatchMode`].
pub fn filter_with<'a, I>(countries: I, query: &str, mode: MatchMode) -> Vec<&'a Country>
where
    I: IntoIterator<Item = &'a Country>,
{
    let needle = mode.normalize(query);
    countries
        .into_iter()
        .filter(|c| c.matches(&needle, mode))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::RegionCode;

    fn sample() -> Vec<Country> {
        vec![
            Country::new("France", RegionCode::FR, "+33"),
            Country::new("Germany", RegionCode::DE, "+49"),
            Country::new("fiji", RegionCode::FJ, "+679"),
        ]
    }

    fn names<'a>(hits: &[&'a Country]) -> Vec<&'a str> {
        hits.iter().map(|c| c.name()).collect()
    }

    #[test]
    fn matches_dial_code() {
        let countries = sample();
        assert_eq!(names(&filter(&countries, "49")), ["Germany"]);
    }

    #[test]
    fn name_and_code_hits_do_not_duplicate() {
        let countries = sample();
        assert_eq!(names(&filter(&countries, "fr")), ["France"]);
        assert_eq!(names(&filter(&countries, "FR")), ["France"]);
    }

    #[test]
    fn keeps_input_order() {
        let countries = sample();
        assert_eq!(names(&filter(&countries, "f")), ["France", "fiji"]);
    }

    #[test]
    fn no_match_is_empty() {
        let countries = sample();
        assert!(filter(&countries, "xyz").is_empty());
    }

    #[test]
    fn folded_mode_ignores_accents() {
        let countries = vec![
            Country::new("Réunion", RegionCode::RE, "+262"),
            Country::new("Åland Islands", RegionCode::AX, "+358"),
        ];
        assert!(filter(&countries, "reunion").is_empty());
        assert_eq!(
            names(&filter_with(&countries, "reunion", MatchMode::Folded)),
            ["Réunion"]
        );
        assert_eq!(
            names(&filter_with(&countries, "ÅLAND", MatchMode::Folded)),
            ["Åland Islands"]
        );
    }
}
