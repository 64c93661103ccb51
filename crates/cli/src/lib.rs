//! `gildedrose-cli` — text fixture runner.
//!
//! Thin caller around the inventory engine: loads the opening stock, prints
//! it, then ages it one day at a time and prints it again.

pub mod config;
pub mod fixture;
pub mod report;

use std::io;

use anyhow::Context;

use gildedrose_inventory::{GildedRose, Item, items_from_json};

pub use config::Config;

/// Load the configured inventory, or the standard fixture.
pub fn load_inventory(config: &Config) -> anyhow::Result<Vec<Item>> {
    let Some(path) = &config.inventory else {
        return Ok(fixture::standard_inventory());
    };

    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read inventory {}", path.display()))?;
    let items = items_from_json(&json)
        .with_context(|| format!("failed to decode inventory {}", path.display()))?;

    // Out-of-range stock is legal input to the engine.
    for (index, item) in items.iter().enumerate() {
        if let Err(err) = item.validate() {
            tracing::warn!(index, reason = err.detail(), "loading unusual inventory item as-is");
        }
    }

    tracing::info!(path = %path.display(), items = items.len(), "inventory loaded");
    Ok(items)
}

/// Print day 0, then one report per simulated day.
pub fn run(config: &Config, out: &mut impl io::Write) -> anyhow::Result<()> {
    let mut app = GildedRose::new(load_inventory(config)?);
    tracing::info!(days = config.days, items = app.items().len(), "simulation started");

    for day in 0..=config.days {
        if day > 0 {
            app.update_quality();
            if let Err(err) = app.check_invariants() {
                tracing::warn!(day, reason = err.detail(), "inventory invariant violated");
            }
        }
        report::render_day(out, day, app.items()).context("failed to write report")?;
    }

    out.flush().context("failed to flush report")?;
    tracing::info!(days = app.days_elapsed(), "simulation finished");
    Ok(())
}
