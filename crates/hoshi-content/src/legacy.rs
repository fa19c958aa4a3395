//! # Legacy Menu Migration
//!
//! The first generation of the menu page kept display-ready category
//! arrays: names with the size baked in, **tax-inclusive** price strings
//! such as `"1,320円"`, and ad-hoc fields for tiered and non-numeric
//! prices. The canonical model stores pre-tax figures only, so migrating a
//! legacy category means recovering `excl = round(incl / 1.1)` for every
//! numeric price.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  LegacyCategory ("1,320円", priceTiers, ※price notes)                   │
//! │       │                                                                 │
//! │       ▼  convert_category()                                             │
//! │  MenuSection (pre-tax Pricing::Single / Tiers / Note)                   │
//! │       │                                                                 │
//! │       ▼  section_to_display_items()                                     │
//! │  the same tax-inclusive figures the old page printed                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! This module is a migration source, not a runtime path: nothing renders
//! the legacy shape. It stays so that the remaining printed menus (and any
//! future data drops from the old site) can be converted mechanically.

use serde::{Deserialize, Serialize};

use hoshi_core::menu::{MenuItem, MenuSection, Pricing};
use hoshi_core::price::{price_excl_from_incl, Price};

// =============================================================================
// Legacy Shapes
// =============================================================================

/// One `{ excl, incl }` pair from the old bottle-wine data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyTier {
    pub excl: i64,
    pub incl: i64,
}

/// One entry of the old display arrays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyItem {
    pub name: String,
    /// Display price string: `"1,320円"`, `"3,300円〜"`, or a ※ note.
    pub price: String,
    pub description: Option<String>,
    /// Placeholder label shown when no photo existed ("ステーキ" etc.).
    /// Dropped on conversion; the renderer has its own default.
    pub image: Option<String>,
    pub image_path: Option<String>,
    pub price_tiers: Option<Vec<LegacyTier>>,
}

/// One category of the old display arrays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyCategory {
    pub category: String,
    pub items: Vec<LegacyItem>,
}

// =============================================================================
// Conversion
// =============================================================================

/// Converts a legacy category into a canonical section.
///
/// - tiered items keep their pre-tax tiers (the stored tax-inclusive
///   figures are discarded; they are derivable)
/// - numeric display prices are treated as tax-inclusive and the pre-tax
///   price is recovered with half-up rounding
/// - non-numeric display prices become free-text price notes
pub fn convert_category(category: &LegacyCategory) -> MenuSection {
    MenuSection::new(
        category.category.clone(),
        category.items.iter().map(convert_item).collect(),
    )
}

fn convert_item(item: &LegacyItem) -> MenuItem {
    let pricing = match &item.price_tiers {
        Some(tiers) if !tiers.is_empty() => Pricing::Tiers(
            tiers
                .iter()
                .map(|tier| Price::from_yen(tier.excl))
                .collect(),
        ),
        _ => match parse_display_price(&item.price) {
            Some(incl) => Pricing::Single(price_excl_from_incl(incl)),
            None => Pricing::Note(item.price.clone()),
        },
    };

    let mut converted = match pricing {
        Pricing::Single(price) => MenuItem::single(item.name.clone(), price.yen()),
        Pricing::Tiers(tiers) => {
            let yen: Vec<i64> = tiers.iter().map(Price::yen).collect();
            MenuItem::with_tiers(item.name.clone(), &yen)
        }
        Pricing::Note(note) => MenuItem::priced_by_note(item.name.clone(), note),
        Pricing::Variants(_) => unreachable!("legacy data never carried variants"),
    };
    if let Some(description) = &item.description {
        converted = converted.description(description.clone());
    }
    if let Some(path) = &item.image_path {
        converted = converted.image_path(path.clone());
    }
    converted
}

/// Extracts the leading numeric run of a display price string:
/// `"1,320円"` → 1320 yen. Returns `None` when the string carries no
/// ASCII digits (the ※ "ask staff" notes).
fn parse_display_price(price: &str) -> Option<Price> {
    let digits: String = price
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit() || *c == ',')
        .filter(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        return None;
    }
    // The digit run is bounded by the display format; it always fits i64.
    digits.parse::<i64>().ok().map(Price::from_yen)
}

// =============================================================================
// Unit Tests
// =============================================================================
