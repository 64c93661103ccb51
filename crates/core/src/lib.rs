//! `gildedrose-core` — primitives shared by the aging rules and their callers.
//!
//! Aging stock never fails, so the error model here only covers the edges:
//! checking items a caller built and reporting a broken quality bound.

pub mod error;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use value_object::ValueObject;
