//! Quality score value object and its bounded step operations.

use gildedrose_core::ValueObject;

/// Quality score of a stocked item.
///
/// Every step saturates at the `[MIN, MAX]` bounds, but a step never pulls an
/// already out-of-range value back in: an increment leaves a quality above
/// `MAX` as it is, a decrement leaves a negative quality as it is.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quality(i32);

impl ValueObject for Quality {}

impl Quality {
    pub const MIN: i32 = 0;
    pub const MAX: i32 = 50;

    pub fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn value(self) -> i32 {
        self.0
    }

    pub fn is_in_range(self) -> bool {
        (Self::MIN..=Self::MAX).contains(&self.0)
    }

    /// +1, unless already at the ceiling.
    pub fn raised(self) -> Self {
        if self.0 < Self::MAX {
            Self(self.0 + 1)
        } else {
            self
        }
    }

    /// −1, unless already at the floor.
    pub fn lowered(self) -> Self {
        if self.0 > Self::MIN {
            Self(self.0 - 1)
        } else {
            self
        }
    }

    /// −2, landing on the floor when fewer than two points remain.
    pub fn lowered_twice(self) -> Self {
        if self.0 >= Self::MIN + 2 {
            Self(self.0 - 2)
        } else {
            Self(Self::MIN)
        }
    }

    pub fn worthless() -> Self {
        Self(Self::MIN)
    }
}

impl From<Quality> for i32 {
    fn from(value: Quality) -> Self {
        value.0
    }
}

impl core::fmt::Display for Quality {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}
