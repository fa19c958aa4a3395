//! Steak sections shared between the main and lunch tabs.
//!
//! All three cuts are variant items: one authored entry per cut, expanded
//! into one card per size by the core. The lunch tab repeats these sections
//! verbatim, so they are built here once.

use hoshi_core::menu::{MenuItem, MenuSection, SectionNotes, Variant};

/// Sauce choices shared by every steak cut.
pub const STEAK_SAUCES: [&str; 5] = [
    "ガーリック",
    "甘辛鉄板",
    "赤ワイン",
    "刻みわさび醤油",
    "ゆずこしょう",
];

/// 国産和牛ミスジステーキ: 100g/200g/300g/450g at 1,200/2,400/3,600/5,400円
/// pre-tax. Annotated with a stacked note block.
pub fn misuji_section() -> MenuSection {
    MenuSection::new(
        "国産和牛ミスジステーキ",
        vec![MenuItem::with_variants(
            "国産和牛ミスジステーキ",
            vec![
                Variant::new("100g", 1200),
                Variant::new("200g", 2400),
                Variant::new("300g", 3600),
                Variant::new("450g", 5400),
            ],
        )
        .name_en("Japanese Beef Misuji Steak")
        .image_path("/images/menu/main/26-01-30_188_2%20(1).jpg")
        .options(STEAK_SAUCES)],
    )
    .notes(SectionNotes::Block {
        lines: vec![
            "※ソースは各種類から選べます。".to_string(),
            "※メニューの写真や動画はイメージ図となります。".to_string(),
            "※ステーキの画像は200gを使用しております。".to_string(),
        ],
    })
}

/// 国産和牛ランプステーキ: 100g/200g/300g/450g at 1,500/3,000/4,500/6,750円
/// pre-tax.
pub fn rump_section() -> MenuSection {
    MenuSection::new(
        "国産和牛ランプステーキ",
        vec![MenuItem::with_variants(
            "国産和牛ランプステーキ",
            vec![
                Variant::new("100g", 1500),
                Variant::new("200g", 3000),
                Variant::new("300g", 4500),
                Variant::new("450g", 6750),
            ],
        )
        .name_en("Japanese Beef Rump Steak")
        .image_path("/images/menu/main/26-01-30_188_2%20(1).jpg")
        .options(STEAK_SAUCES)],
    )
    .notes(steak_right_note())
}

/// 国産黒毛和牛サーロインステーキ: 100g/200g/300g/450g at
/// 1,800/3,600/5,400/8,100円 pre-tax.
pub fn sirloin_section() -> MenuSection {
    MenuSection::new(
        "国産黒毛和牛サーロインステーキ",
        vec![MenuItem::with_variants(
            "国産黒毛和牛サーロインステーキ",
            vec![
                Variant::new("100g", 1800),
                Variant::new("200g", 3600),
                Variant::new("300g", 5400),
                Variant::new("450g", 8100),
            ],
        )
        .name_en("Japanese Black Beef Sirloin Steak")
        .options(STEAK_SAUCES)],
    )
    .notes(steak_right_note())
}

/// The combined right-aligned annotation the steak headings carry.
fn steak_right_note() -> SectionNotes {
    SectionNotes::LeftRight {
        left: None,
        right: Some(
            "※ソースは各種類から選べます。※メニューの写真や動画はイメージ図となります。※ステーキの画像は200gを使用しております。"
                .to_string(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hoshi_core::display::{section_to_display_items, PriceDisplay};

    #[test]
    fn each_cut_expands_to_four_cards() {
        for section in [misuji_section(), rump_section(), sirloin_section()] {
            assert_eq!(section_to_display_items(&section).len(), 4);
        }
    }

    #[test]
    fn misuji_prices_match_the_printed_menu() {
        let cards = section_to_display_items(&misuji_section());
        let incl: Vec<i64> = cards
            .iter()
            .map(|card| match card.price {
                PriceDisplay::Single { incl, .. } => incl.yen(),
                _ => unreachable!("steak cards are single-priced"),
            })
            .collect();
        assert_eq!(incl, vec![1320, 2640, 3960, 5940]);
    }

    #[test]
    fn sirloin_450g_card_name() {
        let cards = section_to_display_items(&sirloin_section());
        assert_eq!(cards[3].name, "国産黒毛和牛サーロインステーキ 450g");
    }
}
