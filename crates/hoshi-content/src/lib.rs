//! # Hoshi Content
//!
//! Authored site content plus the presentation shell that turns it into
//! render-ready page models.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                            hoshi-content                                │
//! │                                                                         │
//! │  menus/       the five tabs, authored in the hoshi-core model           │
//! │  tabs         tab enum, labels, section dispatch                        │
//! │  legacy       old display-data arrays -> canonical sections             │
//! │  formatting   per-name line break / alignment rules                     │
//! │  render       tab -> MenuPage (sections, cards, annotations)            │
//! │  notices      announcement list                                         │
//! │  reviews      published customer reviews                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Like `hoshi-core`, this crate performs no I/O: everything is plain data
//! and pure functions, validated by tests rather than at render time.

pub mod formatting;
pub mod legacy;
pub mod menus;
pub mod notices;
pub mod render;
pub mod reviews;
pub mod tabs;

pub use formatting::{format_name, Align, NameLine};
pub use legacy::{convert_category, LegacyCategory, LegacyItem, LegacyTier};
pub use notices::{notices, Notice, NoticeKind};
pub use render::{page_model, CardView, MenuPage, SectionView, DEFAULT_IMAGE_DISCLAIMER};
pub use reviews::{reviews, Review, REVIEW_DISCLAIMER};
pub use tabs::MenuTab;
