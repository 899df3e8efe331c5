//! flagphone-rs: umbrella crate.
//!
//! Re-exports [`flagphone_core`] so the demos under `demos/` can use a single
//! `flagphone_rs::prelude::*` import.

pub use flagphone_core::*;
