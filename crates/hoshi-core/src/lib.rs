//! # hoshi-core: Pure Menu Domain for the Hoshi Kitchen Site
//!
//! This crate is the **heart** of the site's logic. It contains the menu
//! data model and the display expansion as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Hoshi Kitchen Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (Next.js)                           │   │
//! │  │    Menu tabs ──► Cards ──► Notices ──► Reviews ──► Contact      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ generated TS bindings (ts-rs)          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  hoshi-content (authored data)                  │   │
//! │  │    tab sections, notices, reviews, formatting, page models      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ hoshi-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   menu    │  │   price   │  │  display  │  │ validation│  │   │
//! │  │   │  Section  │  │   Price   │  │ DisplayItem│ │   rules   │  │   │
//! │  │   │   Item    │  │  TaxRate  │  │ expansion │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`menu`] - Menu data model (sections, items, variants, notes)
//! - [`price`] - Integer yen prices and the 10% tax derivation
//! - [`display`] - Expansion of sections into card-ready display items
//! - [`error`] - Authoring validation error types
//! - [`validation`] - Authoring checks over menu data
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: every function is deterministic - same input =
//!    same output; multiple concurrent expansions are safe by construction
//! 2. **No I/O**: network and file system access is FORBIDDEN here
//! 3. **Integer Prices**: all prices are whole yen (i64), tax-inclusive
//!    figures are derived with one rounding rule (half-up), never stored
//! 4. **Closed Sum Types**: pricing forms and section notes are enums with
//!    exhaustive matching, so malformed states cannot be represented
//!
//! ## Example Usage
//!
//! ```rust
//! use hoshi_core::{
//!     display::{section_to_display_items, PriceDisplay},
//!     menu::{MenuItem, MenuSection, Variant},
//! };
//!
//! let section = MenuSection::new(
//!     "国産和牛ミスジステーキ",
//!     vec![MenuItem::with_variants(
//!         "国産和牛ミスジステーキ",
//!         vec![Variant::new("100g", 1200), Variant::new("200g", 2400)],
//!     )],
//! );
//!
//! let cards = section_to_display_items(&section);
//! assert_eq!(cards.len(), 2);
//! assert_eq!(cards[1].name, "国産和牛ミスジステーキ 200g");
//! match &cards[1].price {
//!     PriceDisplay::Single { incl, .. } => assert_eq!(incl.yen(), 2640),
//!     _ => unreachable!(),
//! }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod display;
pub mod error;
pub mod menu;
pub mod price;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use hoshi_core::MenuSection` instead of
// `use hoshi_core::menu::MenuSection`

pub use display::{section_to_display_items, DisplayItem, PriceDisplay, PriceTier};
pub use error::{ValidationError, ValidationResult};
pub use menu::{MenuItem, MenuSection, Pricing, SectionNotes, Variant};
pub use price::{price_excl_from_incl, price_incl, Price, TaxRate};
