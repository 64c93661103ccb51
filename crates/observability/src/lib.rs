//! `gildedrose-observability` — log output for the simulation binaries.
//!
//! Diagnostics are written to stderr through `tracing`; the text report owns
//! stdout. `RUST_LOG` picks the filter, `GILDED_ROSE_LOG_FORMAT=json` the
//! line format.

pub mod tracing;

pub use self::tracing::{LOG_FORMAT_ENV, LogFormat, init, init_with};
