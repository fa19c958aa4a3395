//! アルコールメニュー tab.
//!
//! This tab exercises every pricing form: singles throughout, price tiers
//! for bottle wine, and free-text price notes for the sake list.

use hoshi_core::menu::{MenuItem, MenuSection};

/// Price note shared by the sake entries.
const ASK_STAFF: &str = "※価格はスタッフまでお尋ねください";

pub fn sections() -> Vec<MenuSection> {
    vec![beer(), whisky(), tea_break(), sours(), wine(), champagne(), sake()]
}

fn beer() -> MenuSection {
    MenuSection::new(
        "ビール",
        vec![
            MenuItem::single("サッポロ生ビール", 680).description("Sapporo Draft Beer"),
            MenuItem::single("瓶ビール（赤星）", 780).description("Bottle Beer (Akaboshi)"),
            MenuItem::single("ノンアルコールビール", 680).description("Non-Alcoholic Beer"),
        ],
    )
}

fn whisky() -> MenuSection {
    MenuSection::new(
        "ウイスキー（デュワーズ）",
        vec![
            MenuItem::single("ハイボール", 680).description("Highball"),
            MenuItem::single("コークハイ", 680).description("Coke High"),
            MenuItem::single("ジンジャーハイボール", 680).description("Ginger Highball"),
            MenuItem::single("ホワイトボール", 700).description("Whiteball"),
        ],
    )
}

fn tea_break() -> MenuSection {
    MenuSection::new(
        "お茶割り（TEA BREAK）",
        vec![
            MenuItem::single("ウーロンハイ", 580).description("Oolong High"),
            MenuItem::single("緑茶ハイ", 580).description("Green Tea High"),
            MenuItem::single("コーン茶ハイ", 580).description("Corn Tea High"),
        ],
    )
}

fn sours() -> MenuSection {
    MenuSection::new(
        "サワー",
        vec![
            MenuItem::single("酎ハイ", 550).description("Chuhai"),
            MenuItem::single("レモンサワー", 580).description("Lemon Sour"),
            MenuItem::single("ゆずサワー", 580).description("Yuzu Sour"),
            MenuItem::single("男梅サワー", 580).description("Otoko Ume Sour"),
            MenuItem::single("クエン酸サワー", 580).description("Citric Acid Sour"),
            MenuItem::single("バイスサワー", 580).description("Vice Sour"),
            MenuItem::single("ライムサワー", 580).description("Lime Sour"),
            MenuItem::single("カルピスサワー", 600).description("Calpis Sour"),
        ],
    )
}

fn wine() -> MenuSection {
    MenuSection::new(
        "ワイン",
        vec![
            MenuItem::single("グラスワイン（赤）", 580).description("Glass Wine (Red)"),
            MenuItem::single("グラスワイン（白）", 580).description("Glass Wine (White)"),
            MenuItem::single("スパークリング（グラス）", 580).description("Sparkling (Glass)"),
            MenuItem::with_tiers("ボトルワイン（赤）", &[3000, 5000, 10000])
                .description("Bottle Wine (Red)\n※種類はスタッフまでお尋ねください"),
            MenuItem::with_tiers("ボトルワイン（白）", &[3000, 5000, 10000])
                .description("Bottle Wine (White)\n※種類はスタッフまでお尋ねください"),
        ],
    )
}

fn champagne() -> MenuSection {
    MenuSection::new(
        "シャンパン",
        vec![
            MenuItem::single("モエ・シャンドン 白", 10_000).description("Moët & Chandon (White)"),
            MenuItem::single("モエ・シャンドン ロゼ", 15_000).description("Moët & Chandon (Rosé)"),
            MenuItem::single("ドン・ペリニヨン 白", 50_000).description("Dom Pérignon (White)"),
            MenuItem::single("ドン・ペリニヨン ロゼ", 100_000).description("Dom Pérignon (Rosé)"),
        ],
    )
}

fn sake() -> MenuSection {
    MenuSection::new(
        "日本酒",
        vec![
            MenuItem::priced_by_note("富貴（淡麗辛口）", ASK_STAFF).description("Tuki (Dry)"),
            MenuItem::priced_by_note("久保田", ASK_STAFF).description("Kubota"),
            MenuItem::priced_by_note("獺祭", ASK_STAFF).description("Dassai"),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use hoshi_core::display::{section_to_display_items, PriceDisplay};

    #[test]
    fn bottle_wine_tiers_match_the_printed_menu() {
        let cards = section_to_display_items(&wine());
        let red = &cards[3];
        match &red.price {
            PriceDisplay::Tiers(tiers) => {
                let pairs: Vec<(i64, i64)> = tiers
                    .iter()
                    .map(|tier| (tier.excl.yen(), tier.incl.yen()))
                    .collect();
                assert_eq!(pairs, vec![(3000, 3300), (5000, 5500), (10000, 11000)]);
            }
            other => panic!("bottle wine should be tiered, got {other:?}"),
        }
    }

    #[test]
    fn sake_cards_carry_the_ask_staff_note() {
        for card in section_to_display_items(&sake()) {
            assert_eq!(card.price, PriceDisplay::Note(ASK_STAFF.to_string()));
        }
    }

    #[test]
    fn champagne_tops_out_at_six_figures() {
        let cards = section_to_display_items(&champagne());
        assert!(matches!(
            cards[3].price,
            PriceDisplay::Single { incl, .. } if incl.yen() == 110_000
        ));
    }
}
