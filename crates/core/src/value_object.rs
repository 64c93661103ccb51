//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**; they are defined entirely by their
//! attribute values. Two value objects with the same values are equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one with the new values.
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// struct Quality(i32);
///
/// impl ValueObject for Quality {}
///
/// assert_eq!(Quality(7), Quality(7));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
