//! # Display Expansion
//!
//! Turns a [`MenuSection`] into the flat, card-ready list the menu page
//! renders.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  MenuSection (authored)                                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  section_to_display_items()  ← THIS MODULE                              │
//! │       │   • one card per single/tier/note item                          │
//! │       │   • one card per variant of a variant item                      │
//! │       │   • tax-inclusive prices derived (round half-up)                │
//! │       ▼                                                                 │
//! │  Vec<DisplayItem> ──► presentation shell ──► rendered cards             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The expansion is pure: it reads its argument, allocates a fresh vector,
//! and touches nothing else. Output order always matches declaration order;
//! nothing is sorted, cached or deduplicated.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::menu::{MenuItem, MenuSection, Pricing};
use crate::price::{price_incl, Price};

/// Separator used when joining an item's options into one description line,
/// e.g. `ガーリック／甘辛鉄板／赤ワイン`.
pub const OPTION_SEPARATOR: &str = "／";

// =============================================================================
// Display Types
// =============================================================================

/// One pre-tax/tax-inclusive price pair on a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PriceTier {
    pub excl: Price,
    pub incl: Price,
}

/// The price block of a card. Exactly one of three mutually exclusive forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum PriceDisplay {
    /// Standard single price pair.
    Single { excl: Price, incl: Price },
    /// Ordered price pairs for items sold at several tiers (bottle wine).
    Tiers(Vec<PriceTier>),
    /// Free-text price ("ask staff").
    Note(String),
}

/// Style hint passed through to the card's description element.
/// Opaque to the core; the presentation shell fills it in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DescriptionStyle {
    pub margin_top: Option<String>,
}

/// The card-ready, flattened projection of an item or variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DisplayItem {
    pub name: String,
    pub name_en: Option<String>,
    pub description: Option<String>,
    pub image_path: Option<String>,
    pub options: Vec<String>,
    pub notes: Vec<String>,
    pub description_style: Option<DescriptionStyle>,
    pub price: PriceDisplay,
}

// =============================================================================
// Expansion
// =============================================================================

/// Expands a section into its display cards.
///
/// For each item, in order:
/// - a variants item yields one card per variant, in declared order: the
///   card name is `"{item.name} {variant.label}"`, the variant image wins
///   over the item image, and the pre-tax/tax-inclusive pair is derived
///   from the variant price;
/// - a single-priced item yields exactly one card with its fields copied
///   verbatim and the tax-inclusive price derived;
/// - a tiered item yields one card whose tiers each get a derived
///   tax-inclusive price, in declared order;
/// - a note-priced item yields one card carrying the note text.
///
/// Output length is therefore Σ max(1, variants.len()) over the items.
pub fn section_to_display_items(section: &MenuSection) -> Vec<DisplayItem> {
    let mut result = Vec::new();
    for item in &section.items {
        match &item.pricing {
            Pricing::Variants(variants) => {
                for variant in variants {
                    result.push(DisplayItem {
                        name: format!("{} {}", item.name, variant.label),
                        name_en: item.name_en.clone(),
                        description: variant_description(item, &variant.label),
                        image_path: variant
                            .image_path
                            .clone()
                            .or_else(|| item.image_path.clone()),
                        options: item.options.clone(),
                        notes: item.notes.clone(),
                        description_style: None,
                        price: single_price(variant.price_excl),
                    });
                }
            }
            Pricing::Single(excl) => result.push(card_from(item, single_price(*excl))),
            Pricing::Tiers(tiers) => {
                let tiers = tiers
                    .iter()
                    .map(|&excl| PriceTier {
                        excl,
                        incl: price_incl(excl),
                    })
                    .collect();
                result.push(card_from(item, PriceDisplay::Tiers(tiers)));
            }
            Pricing::Note(note) => result.push(card_from(item, PriceDisplay::Note(note.clone()))),
        }
    }
    result
}

/// Description for a variant card: the English name plus the size label,
/// with the joined options on a second line when any exist. Without an
/// English name, falls back to the item description, then to the joined
/// options, then to nothing.
fn variant_description(item: &MenuItem, label: &str) -> Option<String> {
    let joined_options = if item.options.is_empty() {
        None
    } else {
        Some(item.options.join(OPTION_SEPARATOR))
    };
    match (&item.name_en, joined_options) {
        (Some(name_en), Some(options)) => Some(format!("{name_en} {label}\n{options}")),
        (Some(name_en), None) => Some(format!("{name_en} {label}")),
        (None, joined_options) => item.description.clone().or(joined_options),
    }
}

fn card_from(item: &MenuItem, price: PriceDisplay) -> DisplayItem {
    DisplayItem {
        name: item.name.clone(),
        name_en: item.name_en.clone(),
        description: item.description.clone(),
        image_path: item.image_path.clone(),
        options: item.options.clone(),
        notes: item.notes.clone(),
        description_style: None,
        price,
    }
}

fn single_price(excl: Price) -> PriceDisplay {
    PriceDisplay::Single {
        excl,
        incl: price_incl(excl),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
