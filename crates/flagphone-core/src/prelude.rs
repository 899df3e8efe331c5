//! flagphone prelude: bring common types and traits into scope for demos.

pub use super::config::PickerConfig;
pub use super::country::{Country, Flag};
pub use super::error::{PickerError, Result};
pub use super::filter::{filter, filter_with};
pub use super::group::{group, Bucket, DisplayModel};
pub use super::picker::{Picker, SearchState};
pub use super::region::RegionCode;
pub use super::repository::{CountryRepository, CountrySource};
pub use super::text::MatchMode;
pub use super::view::{RowDisplay, SectionedDataProvider, SelectionSink};
