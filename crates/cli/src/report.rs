use std::io;

use gildedrose_inventory::Item;

/// Write the stock listing for one simulated day.
pub fn render_day(out: &mut impl io::Write, day: u32, items: &[Item]) -> io::Result<()> {
    writeln!(out, "-------- day {day} --------")?;
    writeln!(out, "name, sellIn, quality")?;
    for item in items {
        writeln!(out, "{item}")?;
    }
    writeln!(out)
}
