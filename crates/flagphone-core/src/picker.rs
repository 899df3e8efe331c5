// crates/flagphone-core/src/picker.rs

//! # Country Picker
//!
//! [`Picker`] is the interaction model behind a country selection screen:
//! a sectioned list, a search overlay narrowing it, and a one-shot selection.
//!
//! ```text
//!   Idle ──activate_search──▶ Searching ──deactivate_search──▶ Idle
//!     │                          │ update_query (re-filter)
//!     └────────select────────────┴──▶ emit to sink, force Idle, close
//! ```
//!
//! Every transition recomputes the [`DisplayModel`] from the current source
//! (search results while a non-empty query is set, the full repository
//! otherwise). Nothing is cached between transitions.
//!
//! # Example
//!
//! ```rust
//! use flagphone_core::prelude::*;
//!
//! # fn main() -> flagphone_core::Result<()> {
//! let repository = CountryRepository::load()?;
//! let mut chosen = None;
//! let mut picker = Picker::with_repository(repository, PickerConfig::default())?;
//! picker.on_select(|c: &Country| chosen = Some(c.code()));
//!
//! picker.activate_search();
//! picker.update_query("49")?;
//! let hits: Vec<_> = picker.display_model()?.iter().map(|c| c.name()).collect();
//! assert_eq!(hits, ["Dominican Republic", "Germany", "Sudan", "Turks and Caicos Islands"]);
//!
//! picker.update_query("germ")?;
//! let germany = picker.select(0, 0)?;
//! assert_eq!(germany.name(), "Germany");
//! assert!(!picker.is_searching());
//! drop(picker);
//! assert_eq!(chosen, Some(RegionCode::DE));
//! # Ok(()) }
//! ```

use crate::config::PickerConfig;
use crate::country::Country;
use crate::error::{PickerError, Result};
use crate::filter::filter_with;
use crate::group::{group, DisplayModel};
use crate::repository::{CountryRepository, CountrySource};
use crate::view::{RowDisplay, SectionedDataProvider, SelectionSink};

/// Search overlay state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SearchState<'a> {
    /// No search overlay; the full list is shown.
    #[default]
    Idle,
    /// Overlay active. `results` is `Some` only once a non-empty query has
    /// been entered.
    Searching {
        query: String,
        results: Option<Vec<&'a Country>>,
    },
}

impl<'a> SearchState<'a> {
    pub fn is_active(&self) -> bool {
        matches!(self, SearchState::Searching { .. })
    }

    pub fn query(&self) -> &str {
        match self {
            SearchState::Idle => "",
            SearchState::Searching { query, .. } => query,
        }
    }

    pub fn results(&self) -> Option<&[&'a Country]> {
        match self {
            SearchState::Searching {
                results: Some(results),
                ..
            } => Some(results),
            _ => None,
        }
    }
}

/// A country picker bound to a [`CountrySource`].
///
/// The repository is attached with [`Picker::setup`] (or given up front
/// through [`Picker::with_repository`]). Until then every data access fails
/// with [`PickerError::RepositoryNotSet`].
pub struct Picker<'a, S: CountrySource + ?Sized = CountryRepository> {
    repository: Option<&'a S>,
    config: PickerConfig,
    state: SearchState<'a>,
    display: DisplayModel<'a>,
    sink: Option<Box<dyn SelectionSink + 'a>>,
    closed: bool,
}

impl<'a, S: CountrySource + ?Sized> Picker<'a, S> {
    /// A picker without a repository. Call [`Picker::setup`] before use.
    pub fn new(config: PickerConfig) -> Self {
        Self {
            repository: None,
            config,
            state: SearchState::Idle,
            display: DisplayModel::default(),
            sink: None,
            closed: false,
        }
    }

    pub fn with_repository(repository: &'a S, config: PickerConfig) -> Result<Self> {
        let mut picker = Self::new(config);
        picker.setup(repository)?;
        Ok(picker)
    }

    /// Attaches (or replaces) the country source and rebuilds the display.
    ///
    /// An active query is re-run against the new source.
    pub fn setup(&mut self, repository: &'a S) -> Result<()> {
        self.repository = Some(repository);
        tracing::debug!(countries = repository.countries().len(), "picker repository attached");
        let mode = self.config.match_mode;
        if let SearchState::Searching {
            query,
            results: results @ Some(_),
        } = &mut self.state
        {
            *results = Some(filter_with(repository.countries(), query, mode));
        }
        self.refresh()
    }

    /// Registers the callback that receives the selected country.
    pub fn on_select(&mut self, sink: impl SelectionSink + 'a) {
        self.sink = Some(Box::new(sink));
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn state(&self) -> &SearchState<'a> {
        &self.state
    }

    pub fn is_searching(&self) -> bool {
        self.state.is_active()
    }

    pub fn query(&self) -> &str {
        self.state.query()
    }

    pub fn results(&self) -> Option<&[&'a Country]> {
        self.state.results()
    }

    /// True once a country was selected or the picker was dismissed.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn repository(&self) -> Result<&'a S> {
        self.repository.ok_or(PickerError::RepositoryNotSet)
    }

    /// The sections and rows to render.
    pub fn display_model(&self) -> Result<&DisplayModel<'a>> {
        self.repository()?;
        Ok(&self.display)
    }

    pub fn section_index_titles(&self) -> Result<Vec<String>> {
        Ok(self.display_model()?.section_index_titles())
    }

    /// Row contents at `(section, row)`, with the dial code gated by
    /// [`PickerConfig::show_country_phone_code`].
    pub fn row(&self, section: usize, row: usize) -> Result<RowDisplay<'a>> {
        let country = self.country_at(section, row)?;
        Ok(RowDisplay::new(country, &self.config))
    }

    /// Idle → Searching. Already searching: no change.
    pub fn activate_search(&mut self) {
        if self.state.is_active() {
            return;
        }
        tracing::debug!("search activated");
        self.state = SearchState::Searching {
            query: String::new(),
            results: None,
        };
    }

    /// Applies a new query while searching.
    ///
    /// An empty query clears the results so the full list shows again. While
    /// idle the call only checks the repository precondition.
    pub fn update_query(&mut self, query: &str) -> Result<()> {
        let repository = self.repository()?;
        let mode = self.config.match_mode;

        match &mut self.state {
            SearchState::Idle => {
                tracing::debug!(query, "query ignored, search is not active");
                return Ok(());
            }
            SearchState::Searching {
                query: current,
                results,
            } => {
                current.clear();
                current.push_str(query);
                *results = if query.is_empty() {
                    None
                } else {
                    Some(filter_with(repository.countries(), query, mode))
                };
                tracing::debug!(
                    query,
                    hits = results.as_ref().map(Vec::len),
                    "search query updated"
                );
            }
        }

        self.refresh()
    }

    /// Searching → Idle, dropping any results.
    pub fn deactivate_search(&mut self) -> Result<()> {
        if self.state.is_active() {
            tracing::debug!("search deactivated");
        }
        self.state = SearchState::Idle;
        self.refresh()
    }

    /// Selects the row at `(section, row)` of the current display model.
    ///
    /// The country goes to the registered sink, then the search overlay is
    /// closed and the picker marked closed. A closed picker rejects further
    /// selections until [`Picker::present`] is called.
    pub fn select(&mut self, section: usize, row: usize) -> Result<&'a Country> {
        self.ensure_open()?;
        let country = self.country_at(section, row)?;
        self.finish_selection(country)
    }

    /// Selects `country` directly, bypassing positional lookup.
    ///
    /// The country must belong to the attached repository; it does not have
    /// to be part of the current search results.
    pub fn select_country(&mut self, country: &'a Country) -> Result<&'a Country> {
        self.ensure_open()?;
        if !self.repository()?.countries().contains(country) {
            return Err(PickerError::NotFound(format!(
                "{} ({}) is not in the picker's repository",
                country.name(),
                country.code()
            )));
        }
        self.finish_selection(country)
    }

    /// Closes the picker without a selection.
    pub fn dismiss(&mut self) -> Result<()> {
        tracing::debug!("picker dismissed");
        self.closed = true;
        self.deactivate_search()
    }

    /// Starts a new presentation: reopens a closed picker with search idle.
    pub fn present(&mut self) -> Result<()> {
        tracing::debug!("picker presented");
        self.closed = false;
        self.deactivate_search()
    }

    fn ensure_open(&self) -> Result<()> {
        if self.closed {
            return Err(PickerError::Closed);
        }
        Ok(())
    }

    fn country_at(&self, section: usize, row: usize) -> Result<&'a Country> {
        self.display_model()?
            .get(section, row)
            .ok_or(PickerError::OutOfRange { section, row })
    }

    fn finish_selection(&mut self, country: &'a Country) -> Result<&'a Country> {
        tracing::debug!(code = %country.code(), "country selected");
        if let Some(sink) = self.sink.as_mut() {
            sink.did_select(country);
        }
        self.closed = true;
        self.deactivate_search()?;
        Ok(country)
    }

    fn refresh(&mut self) -> Result<()> {
        let repository = self.repository()?;
        self.display = match self.state.results() {
            Some(results) => group(results.iter().copied()),
            None => group(repository.countries()),
        };
        tracing::debug!(
            sections = self.display.section_count(),
            "display model recomputed"
        );
        Ok(())
    }
}
