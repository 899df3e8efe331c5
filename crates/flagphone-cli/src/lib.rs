//! flagphone-cli
//! =============
//!
//! Command-line country picker built on [`flagphone-core`].
//!
//! This crate primarily provides a binary (`flagphone`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview.
//!
//! Quick start
//! -----------
//!
//! ```text
//! cargo install flagphone-cli
//! flagphone --help
//! flagphone sections
//! flagphone search +44
//! flagphone pick --query germ 0 0
//! ```
//!
//! For programmatic access to the picker model, use the
//! [`flagphone-core`] crate directly.
//!
//! [`flagphone-core`]: https://docs.rs/flagphone-core
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable.
