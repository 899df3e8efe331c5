// crates/flagphone-core/src/lib.rs

//! # flagphone-core
//!
//! Model of a country picker for phone-number entry: a searchable list of
//! countries (flag, name, dial code) grouped alphabetically into sections.
//!
//! - [`group`] buckets countries by uppercased initial.
//! - [`filter`] keeps countries whose name, region code or dial code
//!   contains a query.
//! - [`Picker`] ties both to a [`CountrySource`] through the
//!   Idle/Searching search state machine and emits one selection per
//!   presentation.
//!
//! Rendering is left to the host: it reads a [`DisplayModel`] through
//! [`SectionedDataProvider`] and receives picks through a [`SelectionSink`].

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod config;
pub mod country;
pub mod error;
pub mod filter;
pub mod group;
pub mod picker;
pub mod prelude;
#[doc(hidden)]
pub mod raw; // Dataset records, used by the repository loader
pub mod region;
pub mod repository;
pub mod text;
pub mod view;

// Re-exports
pub use crate::config::PickerConfig;
pub use crate::country::{Country, Flag};
pub use crate::error::{PickerError, Result};
pub use crate::filter::{filter, filter_with};
pub use crate::group::{group, Bucket, DisplayModel};
pub use crate::picker::{Picker, SearchState};
pub use crate::region::RegionCode;
pub use crate::repository::{CountryRepository, CountrySource};
pub use crate::text::MatchMode;
pub use crate::view::{RowDisplay, SectionedDataProvider, SelectionSink};
