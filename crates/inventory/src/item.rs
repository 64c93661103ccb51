use serde::{Deserialize, Serialize};

use gildedrose_core::{DomainError, DomainResult};

use crate::category::Category;
use crate::quality::Quality;

/// A stocked item: what it is called, how many days are left to sell it, and
/// how valuable it currently is.
///
/// `sell_in` goes negative once the sell-by date has passed; that is a state,
/// not an error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub sell_in: i32,
    pub quality: i32,
}

impl Item {
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }

    pub fn category(&self) -> Category {
        Category::of(&self.name)
    }

    /// Returns a copy of this item one day older. `self` is left untouched.
    pub fn aged(&self) -> Item {
        let mut next = self.clone();
        self.category().age(&mut next);
        next
    }

    /// Check a freshly constructed item before it is stocked.
    ///
    /// Legendary items are exempt from the quality bound.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if !self.category().is_legendary() && !Quality::new(self.quality).is_in_range() {
            return Err(DomainError::validation(format!(
                "quality of {:?} must be within {}..={} (got {})",
                self.name,
                Quality::MIN,
                Quality::MAX,
                self.quality
            )));
        }
        Ok(())
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

/// Decode a JSON array of items, e.g.
/// `[{"name": "Aged Brie", "sell_in": 2, "quality": 0}]`.
pub fn items_from_json(json: &str) -> DomainResult<Vec<Item>> {
    serde_json::from_str(json)
        .map_err(|e| DomainError::validation(format!("malformed inventory: {e}")))
}
