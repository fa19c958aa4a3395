//! # Validation Module
//!
//! Authoring checks for menu data.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Where Defects Are Caught                           │
//! │                                                                         │
//! │  Layer 1: The type system                                               │
//! │  ├── Pricing sum type — a priceless item cannot exist                   │
//! │  └── Option fields — "absent" is explicit, never a sentinel string      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE — content checks over authored sections           │
//! │  ├── empty names / labels / note lines                                  │
//! │  ├── negative prices                                                    │
//! │  └── empty variant / tier lists                                         │
//! │                                                                         │
//! │  There is no layer 3: render-time inputs are already validated data.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The content crate runs [`validate_section`] over every authored section
//! in its test suite, so a bad edit to the menu data fails CI rather than
//! rendering a broken card.

use crate::error::{ValidationError, ValidationResult};
use crate::menu::{MenuItem, MenuSection, Pricing, SectionNotes};
use crate::price::Price;

// =============================================================================
// Price Validators
// =============================================================================

/// Validates an authored pre-tax price.
///
/// ## Rules
/// - Must be non-negative (zero is allowed for "included" set items)
pub fn validate_price(field: &str, price: Price) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::NegativePrice {
            field: field.to_string(),
            yen: price.yen(),
        });
    }
    Ok(())
}

// =============================================================================
// Item Validators
// =============================================================================

/// Validates a single menu item.
///
/// ## Rules
/// - `name` must be non-empty
/// - variant lists and tier lists must be non-empty
/// - every variant needs a non-empty label and a non-negative price
/// - a price note must be non-empty
pub fn validate_item(item: &MenuItem) -> ValidationResult<()> {
    if item.name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    match &item.pricing {
        Pricing::Single(price) => validate_price("priceExcl", *price)?,
        Pricing::Variants(variants) => {
            if variants.is_empty() {
                return Err(ValidationError::Empty {
                    field: format!("variants of {}", item.name),
                });
            }
            for variant in variants {
                if variant.label.trim().is_empty() {
                    return Err(ValidationError::Required {
                        field: format!("variant label of {}", item.name),
                    });
                }
                validate_price("variant priceExcl", variant.price_excl)?;
            }
        }
        Pricing::Tiers(tiers) => {
            if tiers.is_empty() {
                return Err(ValidationError::Empty {
                    field: format!("priceTiers of {}", item.name),
                });
            }
            for tier in tiers {
                validate_price("tier priceExcl", *tier)?;
            }
        }
        Pricing::Note(note) => {
            if note.trim().is_empty() {
                return Err(ValidationError::Required {
                    field: format!("priceNote of {}", item.name),
                });
            }
        }
    }

    Ok(())
}

// =============================================================================
// Section Validators
// =============================================================================

/// Validates a whole authored section: title, notes and every item.
pub fn validate_section(section: &MenuSection) -> ValidationResult<()> {
    if section.section_title.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "sectionTitle".to_string(),
        });
    }

    if let Some(SectionNotes::Block { lines }) = &section.section_notes {
        if lines.is_empty() {
            return Err(ValidationError::Empty {
                field: format!("sectionNotes lines of {}", section.section_title),
            });
        }
    }

    for item in &section.items {
        validate_item(item)?;
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::Variant;

    #[test]
    fn accepts_well_formed_section() {
        let section = MenuSection::new(
            "サイド",
            vec![
                MenuItem::single("フレンチポテトフライ", 500),
                MenuItem::with_variants("ステーキ", vec![Variant::new("100g", 1200)]),
            ],
        );
        assert!(validate_section(&section).is_ok());
    }

    #[test]
    fn rejects_empty_names_and_titles() {
        let section = MenuSection::new("", vec![]);
        assert_eq!(
            validate_section(&section),
            Err(ValidationError::Required {
                field: "sectionTitle".to_string()
            })
        );

        let item = MenuItem::single("   ", 500);
        assert!(matches!(
            validate_item(&item),
            Err(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn rejects_negative_prices() {
        let item = MenuItem::single("酎ハイ", -550);
        assert_eq!(
            validate_item(&item),
            Err(ValidationError::NegativePrice {
                field: "priceExcl".to_string(),
                yen: -550,
            })
        );
    }

    #[test]
    fn zero_price_is_allowed() {
        // e.g. a set component that is included in the set price
        assert!(validate_item(&MenuItem::single("セット特典", 0)).is_ok());
    }

    #[test]
    fn rejects_empty_variant_and_tier_lists() {
        let item = MenuItem::with_variants("ステーキ", vec![]);
        assert!(matches!(
            validate_item(&item),
            Err(ValidationError::Empty { .. })
        ));

        let item = MenuItem::with_tiers("ボトルワイン", &[]);
        assert!(matches!(
            validate_item(&item),
            Err(ValidationError::Empty { .. })
        ));
    }

    #[test]
    fn rejects_blank_variant_label() {
        let item = MenuItem::with_variants("ステーキ", vec![Variant::new(" ", 1200)]);
        assert!(matches!(
            validate_item(&item),
            Err(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn rejects_empty_block_notes() {
        let section = MenuSection::new("ワイン", vec![]).notes(SectionNotes::Block {
            lines: vec![],
        });
        assert!(matches!(
            validate_section(&section),
            Err(ValidationError::Empty { .. })
        ));
    }
}
