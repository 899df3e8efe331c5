// crates/flagphone-core/src/view.rs

//! Toolkit-neutral display contract.
//!
//! A host list view (GUI table, TUI list, plain stdout) reads sections and
//! rows through [`SectionedDataProvider`] and reports taps through
//! [`SelectionSink`].

use crate::config::PickerConfig;
use crate::country::{Country, Flag};
use crate::group::DisplayModel;
use serde::Serialize;

/// Read access to a sectioned list.
pub trait SectionedDataProvider {
    type Item;

    fn section_count(&self) -> usize;

    /// Rows in `section`; `0` for a section that does not exist.
    fn row_count(&self, section: usize) -> usize;

    fn item(&self, section: usize, row: usize) -> Option<Self::Item>;

    /// Titles for a jump index, one per section.
    fn section_index_titles(&self) -> Vec<String>;

    /// Section to scroll to when the index entry `title` at `index` is
    /// tapped. Titles and sections correspond one to one.
    fn section_for_index_title(&self, _title: &str, index: usize) -> usize {
        index
    }
}

/// Receives the country the user picked.
///
/// Any `FnMut(&Country)` closure is a sink.
pub trait SelectionSink {
    fn did_select(&mut self, country: &Country);
}

impl<F> SelectionSink for F
where
    F: FnMut(&Country),
{
    fn did_select(&mut self, country: &Country) {
        self(country)
    }
}

impl<'a> SectionedDataProvider for DisplayModel<'a> {
    type Item = &'a Country;

    fn section_count(&self) -> usize {
        DisplayModel::section_count(self)
    }

    fn row_count(&self, section: usize) -> usize {
        DisplayModel::row_count(self, section).unwrap_or(0)
    }

    fn item(&self, section: usize, row: usize) -> Option<&'a Country> {
        self.get(section, row)
    }

    fn section_index_titles(&self) -> Vec<String> {
        self.buckets().iter().map(|b| b.key.clone()).collect()
    }
}

/// What one row shows: flag, name and, if configured, the dial code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowDisplay<'a> {
    pub flag: Flag,
    pub name: &'a str,
    pub phone_code: Option<&'a str>,
}

impl<'a> RowDisplay<'a> {
    pub fn new(country: &'a Country, config: &PickerConfig) -> Self {
        Self {
            flag: country.flag(),
            name: country.name(),
            phone_code: config
                .show_country_phone_code
                .then_some(country.phone_code()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::group;
    use crate::region::RegionCode;

    #[test]
    fn display_model_as_provider() {
        let countries = vec![
            Country::new("Germany", RegionCode::DE, "+49"),
            Country::new("France", RegionCode::FR, "+33"),
        ];
        let model = group(&countries);

        assert_eq!(SectionedDataProvider::section_count(&model), 2);
        assert_eq!(SectionedDataProvider::row_count(&model, 1), 1);
        assert_eq!(SectionedDataProvider::row_count(&model, 9), 0);
        assert_eq!(model.item(0, 0).map(Country::name), Some("France"));
        assert_eq!(model.section_index_titles(), ["F", "G"]);
        assert_eq!(model.section_for_index_title("G", 1), 1);
    }

    #[test]
    fn row_display_honours_phone_code_flag() {
        let fr = Country::new("France", RegionCode::FR, "+33");

        let shown = RowDisplay::new(&fr, &PickerConfig::default());
        assert_eq!(shown.name, "France");
        assert_eq!(shown.phone_code, Some("+33"));
        assert_eq!(shown.flag.asset_name(), "FR");

        let hidden = RowDisplay::new(&fr, &PickerConfig::default().with_phone_code(false));
        assert_eq!(hidden.phone_code, None);
    }

    #[test]
    fn closures_are_sinks() {
        let mut picked = Vec::new();
        {
            let mut sink = |c: &Country| picked.push(c.code());
            sink.did_select(&Country::new("Chad", RegionCode::TD, "+235"));
        }
        assert_eq!(picked, [RegionCode::TD]);
    }
}
