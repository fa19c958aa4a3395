//! # Menu Data Model
//!
//! Declarative description of menu sections, items and pricing variants.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Menu Model                                      │
//! │                                                                         │
//! │  MenuSection ──┬── section_title                                        │
//! │                ├── section_notes: Option<SectionNotes>                  │
//! │                │       ├── LeftRight { left?, right? }                  │
//! │                │       └── Block { lines }                              │
//! │                └── items: Vec<MenuItem>                                 │
//! │                        └── pricing: Pricing                             │
//! │                                ├── Single(Price)                        │
//! │                                ├── Variants(Vec<Variant>)               │
//! │                                ├── Tiers(Vec<Price>)                    │
//! │                                └── Note(String)                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why a Sum Type for Pricing?
//! The old site distinguished "single item" vs "item with variants" by which
//! optional field happened to be populated, leaving a representable state
//! with no price at all. Here `Pricing` is a closed enum, so a priceless
//! item cannot be constructed and no runtime fail-fast check is needed.
//! `Tiers` and `Note` exist so the legacy display data (bottle wine price
//! tiers, "ask staff" sake prices) converts fully into this model.
//!
//! All entities are immutable authored data; nothing here mutates after
//! construction.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::price::Price;

// =============================================================================
// Section Notes
// =============================================================================

/// Annotations rendered directly under a section heading.
///
/// A closed tagged union: renderers must handle both variants plus the
/// "no notes" case (an absent `section_notes` field), which falls back to a
/// generic image disclaimer at the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SectionNotes {
    /// Two independently positioned annotation strings (start / end).
    /// An absent side is omitted, never rendered as a placeholder.
    LeftRight {
        left: Option<String>,
        right: Option<String>,
    },
    /// A vertically stacked list of annotation lines, in declared order.
    Block { lines: Vec<String> },
}

// =============================================================================
// Variants
// =============================================================================

/// One size/quantity derivative of an item (100g / 200g / 300g and so on).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    /// Size label, e.g. "200g".
    pub label: String,
    /// Pre-tax price for this size.
    pub price_excl: Price,
    /// Per-variant image. Falls back to the parent item's image when absent.
    pub image_path: Option<String>,
}

impl Variant {
    pub fn new(label: impl Into<String>, price_excl: i64) -> Self {
        Variant {
            label: label.into(),
            price_excl: Price::from_yen(price_excl),
            image_path: None,
        }
    }

    /// Sets a per-variant image override.
    pub fn with_image(mut self, path: impl Into<String>) -> Self {
        self.image_path = Some(path.into());
        self
    }
}

// =============================================================================
// Pricing
// =============================================================================

/// How an item is priced. Exactly one of these applies to every item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum Pricing {
    /// A standard single pre-tax price.
    Single(Price),
    /// Size/quantity derivatives, each with its own price. Expansion emits
    /// one display card per variant, in declared order.
    Variants(Vec<Variant>),
    /// Ordered pre-tax price tiers (e.g. bottle wine at 3,000 / 5,000 /
    /// 10,000). Tax-inclusive figures are always derived, never stored.
    Tiers(Vec<Price>),
    /// A price that cannot be expressed numerically ("ask staff").
    Note(String),
}

// =============================================================================
// Menu Item
// =============================================================================

/// One menu entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// Display name (base name when the item has variants).
    pub name: String,
    /// English name, used as the first description line of variant cards.
    pub name_en: Option<String>,
    /// Description text. May contain embedded line breaks.
    pub description: Option<String>,
    /// Image path under /images/menu/.
    pub image_path: Option<String>,
    /// Selectable options such as sauces (display only).
    pub options: Vec<String>,
    /// Footnote-style annotations.
    pub notes: Vec<String>,
    /// How the item is priced.
    pub pricing: Pricing,
}

impl MenuItem {
    /// A single-priced item. `price_excl` is the pre-tax price in yen.
    pub fn single(name: impl Into<String>, price_excl: i64) -> Self {
        MenuItem::with_pricing(name, Pricing::Single(Price::from_yen(price_excl)))
    }

    /// An item expanded into one card per size variant.
    pub fn with_variants(name: impl Into<String>, variants: Vec<Variant>) -> Self {
        MenuItem::with_pricing(name, Pricing::Variants(variants))
    }

    /// An item sold at several discrete pre-tax price points.
    pub fn with_tiers(name: impl Into<String>, tiers_excl: &[i64]) -> Self {
        MenuItem::with_pricing(
            name,
            Pricing::Tiers(tiers_excl.iter().copied().map(Price::from_yen).collect()),
        )
    }

    /// An item whose price is a free-text note instead of a number.
    pub fn priced_by_note(name: impl Into<String>, note: impl Into<String>) -> Self {
        MenuItem::with_pricing(name, Pricing::Note(note.into()))
    }

    fn with_pricing(name: impl Into<String>, pricing: Pricing) -> Self {
        MenuItem {
            name: name.into(),
            name_en: None,
            description: None,
            image_path: None,
            options: Vec::new(),
            notes: Vec::new(),
            pricing,
        }
    }

    pub fn name_en(mut self, name_en: impl Into<String>) -> Self {
        self.name_en = Some(name_en.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn image_path(mut self, path: impl Into<String>) -> Self {
        self.image_path = Some(path.into());
        self
    }

    pub fn options<S: Into<String>>(mut self, options: impl IntoIterator<Item = S>) -> Self {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    pub fn notes<S: Into<String>>(mut self, notes: impl IntoIterator<Item = S>) -> Self {
        self.notes = notes.into_iter().map(Into::into).collect();
        self
    }
}

// =============================================================================
// Menu Section
// =============================================================================

/// One named group of menu items for display.
///
/// Item order is display order. Duplicate names are permitted and never
/// deduplicated (the lunch tab repeats the dinner steak sections verbatim).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MenuSection {
    /// Display heading.
    pub section_title: String,
    /// Optional annotations under the heading.
    pub section_notes: Option<SectionNotes>,
    /// Ordered menu entries.
    pub items: Vec<MenuItem>,
}

impl MenuSection {
    pub fn new(title: impl Into<String>, items: Vec<MenuItem>) -> Self {
        MenuSection {
            section_title: title.into(),
            section_notes: None,
            items,
        }
    }

    pub fn notes(mut self, notes: SectionNotes) -> Self {
        self.section_notes = Some(notes);
        self
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_notes_keep_original_wire_tagging() {
        let notes = SectionNotes::LeftRight {
            left: Some("※ソースは各種類から選べます。".to_string()),
            right: None,
        };
        let json = serde_json::to_value(&notes).unwrap();
        assert_eq!(json["type"], "leftRight");

        let block = SectionNotes::Block {
            lines: vec!["※メニューの写真や動画はイメージ図となります。".to_string()],
        };
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["type"], "block");
        assert_eq!(json["lines"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn variant_image_override_is_optional() {
        let plain = Variant::new("100g", 1200);
        assert!(plain.image_path.is_none());

        let with_image = Variant::new("200g", 2400).with_image("/images/menu/main/steak.jpg");
        assert_eq!(
            with_image.image_path.as_deref(),
            Some("/images/menu/main/steak.jpg")
        );
    }

    #[test]
    fn item_builders_fill_expected_pricing() {
        let single = MenuItem::single("コカ・コーラ", 300);
        assert_eq!(single.pricing, Pricing::Single(Price::from_yen(300)));

        let tiers = MenuItem::with_tiers("ボトルワイン（赤）", &[3000, 5000, 10000]);
        match &tiers.pricing {
            Pricing::Tiers(t) => assert_eq!(t.len(), 3),
            other => panic!("expected tiers, got {other:?}"),
        }

        let note = MenuItem::priced_by_note("獺祭", "※価格はスタッフまでお尋ねください");
        assert!(matches!(note.pricing, Pricing::Note(_)));
    }
}
