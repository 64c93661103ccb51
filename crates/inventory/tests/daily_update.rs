//! Black-box scenarios for one simulated day.

use gildedrose_inventory::{GildedRose, Item};

const BACKSTAGE: &str = "Backstage passes to a TAFKAL80ETC concert";

fn one_day(items: Vec<Item>) -> GildedRose {
    let mut app = GildedRose::new(items);
    app.update_quality();
    app
}

fn observe(app: &GildedRose, index: usize) -> (i32, i32) {
    let item = &app.items()[index];
    (item.sell_in, item.quality)
}

#[test]
fn conjured_item_keeps_its_name() {
    let app = one_day(vec![Item::new("Conjured Mana Cake", 3, 6)]);
    assert_eq!(app.items()[0].name, "Conjured Mana Cake");
}

#[test]
fn sell_in_and_quality_drop_at_end_of_day() {
    let app = one_day(vec![Item::new("foo", 5, 6)]);
    assert_eq!(observe(&app, 0), (4, 5));
}

#[test]
fn quality_is_never_negative() {
    let app = one_day(vec![Item::new("foo", 5, 0)]);
    assert_eq!(observe(&app, 0), (4, 0));
}

#[test]
fn expired_item_degrades_twice_as_fast() {
    let app = one_day(vec![Item::new("foo", -1, 6)]);
    assert_eq!(observe(&app, 0), (-2, 4));
}

#[test]
fn aged_brie_gains_quality() {
    let app = one_day(vec![Item::new("Aged Brie", 3, 8)]);
    assert_eq!(observe(&app, 0), (2, 9));
}

#[test]
fn quality_never_exceeds_fifty() {
    let app = one_day(vec![
        Item::new("Aged Brie", 2, 50),
        Item::new(BACKSTAGE, 4, 49),
        Item::new(BACKSTAGE, 8, 49),
    ]);

    assert_eq!(observe(&app, 0), (1, 50));
    assert_eq!(observe(&app, 1), (3, 50));
    assert_eq!(observe(&app, 2), (7, 50));
}

#[test]
fn sulfuras_never_changes() {
    let app = one_day(vec![Item::new("Sulfuras, Hand of Ragnaros", 3, 7)]);
    assert_eq!(observe(&app, 0), (3, 7));
}

#[test]
fn backstage_passes_surge_then_drop_to_zero() {
    let app = one_day(vec![
        Item::new(BACKSTAGE, 4, 10),
        Item::new(BACKSTAGE, 8, 10),
        Item::new(BACKSTAGE, 0, 10),
    ]);

    assert_eq!(observe(&app, 0), (3, 13));
    assert_eq!(observe(&app, 1), (7, 12));
    assert_eq!(observe(&app, 2), (-1, 0));
}

#[test]
fn conjured_item_degrades_twice_as_fast_as_normal() {
    let app = one_day(vec![
        Item::new("Conjured Mana Cake", 3, 6),
        Item::new("Mana Cake", 3, 6),
    ]);

    assert_eq!(observe(&app, 0), (2, 4));
    assert_eq!(observe(&app, 1), (2, 5));
}

#[test]
fn repeated_updates_are_not_idempotent() {
    let mut app = GildedRose::new(vec![Item::new("Aged Brie", 2, 0)]);

    app.update_quality();
    assert_eq!(observe(&app, 0), (1, 1));

    app.update_quality();
    assert_eq!(observe(&app, 0), (0, 2));

    app.update_quality();
    assert_eq!(observe(&app, 0), (-1, 4));
}

#[test]
fn backstage_pass_lifecycle_over_a_fortnight() {
    let mut app = GildedRose::new(vec![Item::new(BACKSTAGE, 12, 10)]);

    let mut quality = Vec::new();
    for _ in 0..14 {
        app.update_quality();
        quality.push(app.items()[0].quality);
    }

    // +1 at 12 and 11, +2 from 10 down to 6, +3 from 5 down to 1, then 0.
    assert_eq!(
        quality,
        vec![11, 12, 14, 16, 18, 20, 22, 25, 28, 31, 34, 37, 0, 0]
    );
    assert_eq!(app.items()[0].sell_in, -2);
}
