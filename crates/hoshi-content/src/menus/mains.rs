//! メインメニュー tab: the three steak cuts plus the plated mains.

use hoshi_core::menu::{MenuItem, MenuSection, SectionNotes};

use super::steaks;

pub fn sections() -> Vec<MenuSection> {
    vec![
        steaks::misuji_section(),
        steaks::rump_section(),
        steaks::sirloin_section(),
        plated_mains(),
    ]
}

/// The non-steak mains. Singles: their descriptions are authored verbatim
/// (English name line + sauce line), not composed from variants.
fn plated_mains() -> MenuSection {
    MenuSection::new(
        "メイン",
        vec![
            MenuItem::single("当店自慢の自家製ハンバーグ 200g", 1380)
                .description("House Hamburger 200g\nデミグラス／トマト／ホワイトチーズ／大根おろしポン酢")
                .image_path("/images/menu/main/26-01-29_116_2.jpg"),
            MenuItem::single("チキンソテー 270g", 1380)
                .description("Chicken Saute 270g\nデミグラス／トマト／ホワイトチーズ／大根おろしポン酢／ジンジャー")
                .image_path("/images/menu/main/26-01-29_097_2.jpg"),
            MenuItem::single("ポークソテー 240g", 1380)
                .description("Pork Saute 240g\nデミグラス／トマト／ホワイトチーズ／ジンジャー")
                .image_path("/images/menu/main/26-01-29_071_2.jpg"),
            MenuItem::single("カモソテー", 1480)
                .description("Duck Saute\n赤ワイン／バルサミコ／刻みわさび醤油／ゆずこしょう"),
        ],
    )
    .notes(SectionNotes::LeftRight {
        left: None,
        right: Some(
            "※ソースは各種類から選べます。※メニューの写真や動画はイメージ図となります。".to_string(),
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hoshi_core::display::{section_to_display_items, PriceDisplay};
    use hoshi_core::price::Price;

    #[test]
    fn tab_has_four_sections() {
        assert_eq!(sections().len(), 4);
    }

    #[test]
    fn hamburger_price_pair() {
        let cards = section_to_display_items(&plated_mains());
        assert_eq!(cards[0].name, "当店自慢の自家製ハンバーグ 200g");
        assert_eq!(
            cards[0].price,
            PriceDisplay::Single {
                excl: Price::from_yen(1380),
                incl: Price::from_yen(1518),
            }
        );
    }
}
