//! ドリンクメニュー tab: soft drinks and float add-ons.

use hoshi_core::menu::{MenuItem, MenuSection};

pub fn sections() -> Vec<MenuSection> {
    vec![soft_drinks(), floats()]
}

fn soft_drinks() -> MenuSection {
    let items = [
        ("ウーロン茶", "Oolong Tea (Iced)"),
        ("緑茶", "Green Tea (Iced)"),
        ("コーン茶", "Corn Tea (Iced)"),
        ("カルピス", "Calpis (Iced)"),
        ("コカ・コーラ", "Coca-Cola (Iced)"),
        ("メロンソーダ", "Melon Soda (Iced)"),
        ("ジンジャーエール", "Ginger Ale (Iced)"),
        ("オレンジジュース", "Orange Juice (Iced)"),
        ("アイスティー", "Iced Tea"),
        ("アイスコーヒー", "Iced Coffee"),
        ("カフェオレ", "Cafe au Lait"),
        ("ウーロン茶（ホット）", "Oolong Tea (Hot)"),
        ("緑茶（ホット）", "Green Tea (Hot)"),
        ("紅茶（ホット）", "Black Tea (Hot)"),
        ("コーヒー（ホット）", "Coffee (Hot)"),
    ];
    MenuSection::new(
        "ソフトドリンク",
        items
            .into_iter()
            .map(|(name, en)| MenuItem::single(name, 300).description(en))
            .collect(),
    )
}

fn floats() -> MenuSection {
    MenuSection::new(
        "フロート",
        vec![MenuItem::single("各種フロート ＋", 150)
            .description("Float Add-on (Add to soft drinks)")],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use hoshi_core::display::{section_to_display_items, PriceDisplay};

    #[test]
    fn soft_drinks_are_uniformly_priced() {
        for card in section_to_display_items(&soft_drinks()) {
            assert!(
                matches!(card.price, PriceDisplay::Single { incl, .. } if incl.yen() == 330),
                "card {} should be 330円 incl",
                card.name
            );
        }
    }
}
