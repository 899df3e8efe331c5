// crates/flagphone-core/src/error.rs
use thiserror::Error;

/// Errors raised by the country picker and its dataset loader.
#[derive(Debug, Error)]
pub enum PickerError {
    /// A data access happened before a repository was attached with
    /// [`Picker::setup`](crate::picker::Picker::setup).
    #[error("no country repository configured; call `setup` before accessing data")]
    RepositoryNotSet,

    /// The picker already emitted its selection (or was dismissed) for the
    /// current presentation.
    #[error("picker is closed; call `present` to start a new presentation")]
    Closed,

    /// A `(section, row)` pair that does not address a row of the current
    /// display model.
    #[error("no row at section {section}, row {row}")]
    OutOfRange { section: usize, row: usize },

    #[error("not found: {0}")]
    NotFound(String),

    #[error("unknown region code: {0:?}")]
    UnknownRegionCode(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PickerError>;
