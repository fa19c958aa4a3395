//! # Page Model Rendering
//!
//! Builds the complete, render-ready model of one menu tab. The frontend
//! receives this as JSON and prints it without further logic:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  MenuTab                                                                │
//! │    │  page_model()                                                      │
//! │    ▼                                                                    │
//! │  MenuPage                                                               │
//! │    ├─ label                        tab button text                      │
//! │    ├─ sections: Vec<SectionView>                                        │
//! │    │     ├─ title                                                       │
//! │    │     ├─ annotations            authored notes, or the default       │
//! │    │     │                         image disclaimer                     │
//! │    │     └─ cards: Vec<CardView>                                        │
//! │    │           ├─ name_lines       formatted break/alignment lines      │
//! │    │           └─ item             expanded card with prices            │
//! │    └─ footer_notes                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rendering is pure. The description margin tweaks for the メイン section
//! are applied here, not authored on the items, because they exist to line
//! up the four cards of that one grid.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use hoshi_core::display::{section_to_display_items, DescriptionStyle, DisplayItem};
use hoshi_core::menu::{MenuSection, SectionNotes};

use crate::formatting::{format_name, NameLine};
use crate::menus::FOOTER_NOTES;
use crate::tabs::MenuTab;

/// Annotation shown when a section has no authored notes.
pub const DEFAULT_IMAGE_DISCLAIMER: &str = "※メニューの写真や動画はイメージ図となります。";

// =============================================================================
// Page Model
// =============================================================================

/// One card, ready to print.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CardView {
    pub name_lines: Vec<NameLine>,
    pub item: DisplayItem,
}

/// One section of a tab, ready to print.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SectionView {
    pub title: String,
    pub annotations: SectionNotes,
    pub cards: Vec<CardView>,
}

/// The complete model of one menu tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MenuPage {
    pub tab: MenuTab,
    pub label: String,
    pub sections: Vec<SectionView>,
    pub footer_notes: Vec<String>,
}

// =============================================================================
// Rendering
// =============================================================================

/// Builds the render-ready model for one tab.
pub fn page_model(tab: MenuTab) -> MenuPage {
    MenuPage {
        tab,
        label: tab.label().to_string(),
        sections: tab.sections().iter().map(section_view).collect(),
        footer_notes: FOOTER_NOTES.iter().map(|note| note.to_string()).collect(),
    }
}

fn section_view(section: &MenuSection) -> SectionView {
    let cards = section_to_display_items(section)
        .into_iter()
        .map(|mut item| {
            item.description_style = description_style(&section.section_title, &item);
            CardView {
                name_lines: format_name(&item.name),
                item,
            }
        })
        .collect();
    SectionView {
        title: section.section_title.clone(),
        annotations: annotations_for(section.section_notes.as_ref()),
        cards,
    }
}

/// Authored notes pass through; a section without notes gets the image
/// disclaimer on the right.
fn annotations_for(notes: Option<&SectionNotes>) -> SectionNotes {
    match notes {
        Some(notes) => notes.clone(),
        None => SectionNotes::LeftRight {
            left: None,
            right: Some(DEFAULT_IMAGE_DISCLAIMER.to_string()),
        },
    }
}

/// Margin tweaks that align the descriptions of the メイン grid: the
/// sautes sit lower than the hamburger so the sauce lines line up.
fn description_style(section_title: &str, item: &DisplayItem) -> Option<DescriptionStyle> {
    if section_title != "メイン" || item.description.is_none() {
        return None;
    }
    let margin = if item.name.contains("チキンソテー")
        || item.name.contains("ポークソテー")
        || item.name.contains("カモソテー")
    {
        "3rem"
    } else if item.name.contains("当店自慢の自家製ハンバーグ") {
        "1rem"
    } else {
        return None;
    };
    Some(DescriptionStyle {
        margin_top: Some(margin.to_string()),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatting::Align;

    #[test]
    fn page_model_carries_label_sections_and_footer() {
        let page = page_model(MenuTab::Main);
        assert_eq!(page.label, "メインメニュー");
        assert_eq!(page.sections.len(), 4);
        assert_eq!(page.footer_notes.len(), 4);
    }

    #[test]
    fn unannotated_section_gets_the_default_disclaimer() {
        let page = page_model(MenuTab::DessertDrink);
        let soft_drinks = &page.sections[0];
        assert_eq!(
            soft_drinks.annotations,
            SectionNotes::LeftRight {
                left: None,
                right: Some(DEFAULT_IMAGE_DISCLAIMER.to_string()),
            }
        );
    }

    #[test]
    fn authored_annotations_pass_through() {
        let page = page_model(MenuTab::Main);
        let misuji = &page.sections[0];
        match &misuji.annotations {
            SectionNotes::Block { lines } => assert_eq!(lines.len(), 3),
            other => panic!("authored block expected, got {other:?}"),
        }
    }

    #[test]
    fn main_grid_descriptions_get_margin_tweaks() {
        let page = page_model(MenuTab::Main);
        let mains = &page.sections[3];
        assert_eq!(mains.title, "メイン");

        let margin = |index: usize| {
            mains.cards[index]
                .item
                .description_style
                .as_ref()
                .and_then(|style| style.margin_top.as_deref())
                .map(str::to_string)
        };
        assert_eq!(margin(0), Some("1rem".to_string())); // hamburger
        assert_eq!(margin(1), Some("3rem".to_string())); // chicken saute
        assert_eq!(margin(2), Some("3rem".to_string())); // pork saute
        assert_eq!(margin(3), Some("3rem".to_string())); // duck saute
    }

    #[test]
    fn margin_tweaks_apply_only_to_the_main_section() {
        for page in MenuTab::ALL.map(page_model) {
            for section in &page.sections {
                if section.title == "メイン" {
                    continue;
                }
                for card in &section.cards {
                    assert_eq!(card.item.description_style, None, "{}", card.item.name);
                }
            }
        }
    }

    #[test]
    fn card_names_are_formatted_into_lines() {
        let page = page_model(MenuTab::Main);
        let sirloin_100g = &page.sections[2].cards[0];
        assert_eq!(sirloin_100g.name_lines.len(), 2);
        assert_eq!(sirloin_100g.name_lines[0].text, "国産黒毛和牛");
        assert_eq!(sirloin_100g.name_lines[1].align, Align::Right);
    }

    #[test]
    fn page_model_serializes_with_camel_case_keys() {
        let page = page_model(MenuTab::Lunch);
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["tab"], "lunch");
        assert!(json["footerNotes"].is_array());
        let first_card = &json["sections"][0]["cards"][0];
        assert!(first_card["nameLines"].is_array());
        assert!(first_card["item"]["price"].is_object());
    }

    #[test]
    fn rendering_is_deterministic() {
        assert_eq!(page_model(MenuTab::Drink), page_model(MenuTab::Drink));
    }
}
