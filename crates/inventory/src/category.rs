use crate::item::Item;
use crate::quality::Quality;

pub const LEGENDARY_NAME: &str = "Sulfuras, Hand of Ragnaros";
pub const AGED_BRIE_NAME: &str = "Aged Brie";
pub const BACKSTAGE_PASS_PREFIX: &str = "Backstage passes";
pub const CONJURED_PREFIX: &str = "Conjured";

/// Backstage passes gain an extra point per day below this many days.
const BACKSTAGE_FIRST_SURGE: i32 = 11;
/// ...and one more point per day below this many days.
const BACKSTAGE_SECOND_SURGE: i32 = 6;

/// Aging behavior of an item, derived from its name.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    /// Loses quality every day, twice as fast once expired.
    Normal,
    /// Gains quality with age ("Aged Brie").
    Appreciating,
    /// Gains quality faster as the event approaches, worthless afterwards.
    TimeSensitiveAppreciating,
    /// Loses quality twice as fast as a normal item ("Conjured ...").
    AcceleratedDecay,
    /// Never sold and never changes ("Sulfuras").
    Legendary,
}

impl Category {
    /// Classify an item name. First match wins.
    pub fn of(name: &str) -> Self {
        if name == LEGENDARY_NAME {
            Category::Legendary
        } else if name == AGED_BRIE_NAME {
            Category::Appreciating
        } else if name.starts_with(BACKSTAGE_PASS_PREFIX) {
            Category::TimeSensitiveAppreciating
        } else if name.starts_with(CONJURED_PREFIX) {
            Category::AcceleratedDecay
        } else {
            Category::Normal
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Normal => "normal",
            Category::Appreciating => "appreciating",
            Category::TimeSensitiveAppreciating => "time_sensitive_appreciating",
            Category::AcceleratedDecay => "accelerated_decay",
            Category::Legendary => "legendary",
        }
    }

    pub fn is_legendary(self) -> bool {
        self == Category::Legendary
    }

    /// Age `item` by one day under this category's rule.
    ///
    /// Quality moves first, then `sell_in` drops by one, then the expiry
    /// correction runs against the pre-decrement `sell_in`.
    pub fn age(self, item: &mut Item) {
        let days_left = item.sell_in;
        let expired = days_left <= 0;
        let quality = Quality::new(item.quality);

        let quality = match self {
            Category::Legendary => return,
            Category::Normal => {
                let q = quality.lowered();
                if expired { q.lowered() } else { q }
            }
            Category::Appreciating => {
                let q = quality.raised();
                if expired { q.raised() } else { q }
            }
            Category::TimeSensitiveAppreciating => {
                if expired {
                    Quality::worthless()
                } else {
                    let mut q = quality.raised();
                    if days_left < BACKSTAGE_FIRST_SURGE {
                        q = q.raised();
                    }
                    if days_left < BACKSTAGE_SECOND_SURGE {
                        q = q.raised();
                    }
                    q
                }
            }
            Category::AcceleratedDecay => {
                let q = quality.lowered_twice();
                if expired { q.lowered_twice() } else { q }
            }
        };

        // Unbounded in practice; saturate rather than wrap at i32::MIN.
        item.sell_in = days_left.saturating_sub(1);
        item.quality = quality.value();
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
