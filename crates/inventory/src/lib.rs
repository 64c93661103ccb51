//! Inventory domain module (daily quality aging).
//!
//! This crate contains the business rules for aging stock by one simulated
//! day, implemented purely as deterministic domain logic (no IO, no storage).

pub mod category;
pub mod engine;
pub mod item;
pub mod quality;

pub use category::Category;
pub use engine::{GildedRose, update_quality};
pub use item::{Item, items_from_json};
pub use quality::Quality;
