// crates/flagphone-core/src/group.rs

//! Alphabetic sectioning of a country list.

use crate::country::Country;
use crate::text::initial_key;
use serde::Serialize;
use std::collections::BTreeMap;

/// Countries sharing the same uppercased initial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bucket<'a> {
    pub key: String,
    pub countries: Vec<&'a Country>,
}

impl<'a> Bucket<'a> {
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    /// Always `false` for buckets produced by [`group`].
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

/// Ordered buckets as displayed by the picker.
///
/// Invariants (upheld by [`group`]): no bucket is empty, keys are unique and
/// strictly increasing, and each bucket is ordered by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DisplayModel<'a> {
    buckets: Vec<Bucket<'a>>,
}

impl<'a> DisplayModel<'a> {
    pub fn buckets(&self) -> &[Bucket<'a>] {
        &self.buckets
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn section_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn row_count(&self, section: usize) -> Option<usize> {
        self.buckets.get(section).map(Bucket::len)
    }

    pub fn get(&self, section: usize, row: usize) -> Option<&'a Country> {
        self.buckets.get(section)?.countries.get(row).copied()
    }

    /// Bucket keys in display order.
    pub fn keys(&self) -> Vec<&str> {
        self.buckets.iter().map(|b| b.key.as_str()).collect()
    }

    /// All countries, section after section.
    pub fn iter(&self) -> impl Iterator<Item = &'a Country> + '_ {
        self.buckets.iter().flat_map(|b| b.countries.iter().copied())
    }

    pub fn into_buckets(self) -> Vec<Bucket<'a>> {
        self.buckets
    }
}

/// Groups `countries` into alphabetic buckets.
///
/// - The key is the uppercased first character of the name.
/// - Keys are sorted by ordinal string comparison, so `"Å"` follows `"Z"`.
/// - Inside a bucket, countries are sorted by name, ordinally; `"France"`
///   sorts before `"fiji"` because `'F' < 'f'`. The sort is stable.
/// - Countries with an empty name have no key and are left out.
pub fn group<'a, I>(countries: I) -> DisplayModel<'a>
where
    I: IntoIterator<Item = &'a Country>,
{
    let mut by_key: BTreeMap<String, Vec<&'a Country>> = BTreeMap::new();
    let mut unnamed = 0usize;

    for country in countries {
        match initial_key(country.name()) {
            Some(key) => by_key.entry(key).or_default().push(country),
            None => unnamed += 1,
        }
    }

    if unnamed > 0 {
        tracing::debug!(unnamed, "countries without a name left out of grouping");
    }

    let buckets = by_key
        .into_iter()
        .map(|(key, mut countries)| {
            countries.sort_by(|a, b| a.name().cmp(b.name()));
            Bucket { key, countries }
        })
        .collect();

    DisplayModel { buckets }
}
