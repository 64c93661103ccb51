//! Daily update engine.
//!
//! Items are classified once when stocked; each call to
//! [`GildedRose::update_quality`] ages every item by exactly one day.

use gildedrose_core::{DomainError, DomainResult};

use crate::category::Category;
use crate::item::Item;
use crate::quality::Quality;

/// A fixed collection of items aged together, one simulated day per update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GildedRose {
    items: Vec<Item>,
    // Parallel to `items`; items are never handed out mutably, so names
    // cannot drift away from their category.
    categories: Vec<Category>,
    days_elapsed: u64,
}

impl GildedRose {
    pub fn new(items: Vec<Item>) -> Self {
        let categories = items.iter().map(Item::category).collect();
        Self {
            items,
            categories,
            days_elapsed: 0,
        }
    }

    /// Items in their original input order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    pub fn category(&self, index: usize) -> Option<Category> {
        self.categories.get(index).copied()
    }

    pub fn days_elapsed(&self) -> u64 {
        self.days_elapsed
    }

    /// Age every item by one day.
    ///
    /// Not idempotent: each call is one more elapsed day.
    pub fn update_quality(&mut self) {
        let span = tracing::debug_span!(
            "update_quality",
            day = self.days_elapsed + 1,
            items = self.items.len()
        );
        let _guard = span.enter();

        for (item, category) in self.items.iter_mut().zip(&self.categories) {
            age_traced(*category, item);
        }

        self.days_elapsed += 1;
    }

    pub fn advance_days(&mut self, days: u32) {
        for _ in 0..days {
            self.update_quality();
        }
    }

    /// Every non-legendary item must hold a quality within bounds.
    pub fn check_invariants(&self) -> DomainResult<()> {
        for (item, category) in self.items.iter().zip(&self.categories) {
            if category.is_legendary() {
                continue;
            }
            if !Quality::new(item.quality).is_in_range() {
                return Err(DomainError::invariant(format!(
                    "{:?} has quality {} outside {}..={} after day {}",
                    item.name,
                    item.quality,
                    Quality::MIN,
                    Quality::MAX,
                    self.days_elapsed
                )));
            }
        }
        Ok(())
    }
}

/// Age a plain slice of items by one day, classifying each on the fly.
pub fn update_quality(items: &mut [Item]) {
    for item in items.iter_mut() {
        age_traced(item.category(), item);
    }
}

fn age_traced(category: Category, item: &mut Item) {
    let (sell_in, quality) = (item.sell_in, item.quality);
    category.age(item);
    tracing::trace!(
        name = %item.name,
        category = category.as_str(),
        sell_in_before = sell_in,
        quality_before = quality,
        sell_in = item.sell_in,
        quality = item.quality,
        "item aged"
    );
}
