//! # Menu Tabs
//!
//! The menu page shows one tab at a time. The selected tab is an explicit
//! value passed into the renderer, never ambient mutable state: the
//! frontend holds the selection and asks for that tab's page model.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use hoshi_core::menu::MenuSection;

use crate::menus;

/// One of the five menu tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum MenuTab {
    Main,
    Ichipin,
    Lunch,
    DessertDrink,
    Drink,
}

impl MenuTab {
    /// Display order of the tab buttons.
    pub const ALL: [MenuTab; 5] = [
        MenuTab::Main,
        MenuTab::Ichipin,
        MenuTab::Lunch,
        MenuTab::DessertDrink,
        MenuTab::Drink,
    ];

    /// The tab button label.
    pub fn label(&self) -> &'static str {
        match self {
            MenuTab::Main => "メインメニュー",
            MenuTab::Ichipin => "一品メニュー",
            MenuTab::Lunch => "ランチメニュー",
            MenuTab::DessertDrink => "ドリンクメニュー",
            MenuTab::Drink => "アルコールメニュー",
        }
    }

    /// The authored sections shown under this tab, in display order.
    /// Built fresh on every call; callers own the result.
    pub fn sections(&self) -> Vec<MenuSection> {
        match self {
            MenuTab::Main => menus::mains::sections(),
            MenuTab::Ichipin => menus::ichipin::sections(),
            MenuTab::Lunch => menus::lunch::sections(),
            MenuTab::DessertDrink => menus::drinks::sections(),
            MenuTab::Drink => menus::alcohol::sections(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use hoshi_core::validation::validate_section;

    #[test]
    fn every_authored_section_passes_validation() {
        for tab in MenuTab::ALL {
            for section in tab.sections() {
                validate_section(&section).unwrap_or_else(|err| {
                    panic!("{} / {}: {err}", tab.label(), section.section_title)
                });
            }
        }
    }

    #[test]
    fn tab_labels_are_distinct() {
        let mut labels: Vec<_> = MenuTab::ALL.iter().map(|tab| tab.label()).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), MenuTab::ALL.len());
    }

    #[test]
    fn every_tab_has_sections() {
        for tab in MenuTab::ALL {
            assert!(!tab.sections().is_empty(), "{} is empty", tab.label());
        }
    }

    #[test]
    fn tab_serializes_to_the_frontend_keys() {
        assert_eq!(
            serde_json::to_value(MenuTab::DessertDrink).unwrap(),
            serde_json::json!("dessertDrink")
        );
        assert_eq!(
            serde_json::to_value(MenuTab::Ichipin).unwrap(),
            serde_json::json!("ichipin")
        );
    }
}
