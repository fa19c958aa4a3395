//! # Menu Name Formatting
//!
//! Long Japanese dish names do not fit a menu card on one line, and where
//! the break falls is an editorial decision, not a layout algorithm. This
//! module keeps that decision server-side: [`format_name`] maps a card name
//! to the exact lines the frontend prints, each with its alignment and
//! weight, so the frontend renders lines instead of re-implementing the
//! break rules.
//!
//! Overrides come in two forms, tried in this order:
//!
//! - structural rules for recognizable name shapes: a known prefix with a
//!   trailing size (`国産黒毛和牛サーロインステーキ 200g`), a sauce list
//!   suffix (`名前（ソース：a／b）`), a piece-count infix, the lunch set
//!   names authored with a leading `＋`
//! - a lookup table of hand-tuned layouts for individual exact names
//!
//! Unknown names fall through as a single plain line.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Line Model
// =============================================================================

/// Horizontal alignment of one printed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum Align {
    Left,
    Center,
    Right,
}

/// One line of a formatted card name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NameLine {
    pub text: String,
    pub align: Align,
    pub bold: bool,
    /// The line must not wrap even on narrow screens.
    pub no_wrap: bool,
}

impl NameLine {
    fn plain(text: impl Into<String>) -> Self {
        NameLine {
            text: text.into(),
            align: Align::Left,
            bold: false,
            no_wrap: false,
        }
    }

    fn plain_right(text: impl Into<String>) -> Self {
        NameLine {
            text: text.into(),
            align: Align::Right,
            bold: false,
            no_wrap: false,
        }
    }

    fn bold(text: impl Into<String>, align: Align) -> Self {
        NameLine {
            text: text.into(),
            align,
            bold: true,
            no_wrap: false,
        }
    }

    fn bold_no_wrap(text: impl Into<String>, align: Align) -> Self {
        NameLine {
            text: text.into(),
            align,
            bold: true,
            no_wrap: true,
        }
    }
}

// =============================================================================
// Layout Table
// =============================================================================

/// Hand-tuned layouts for exact names. One entry per dish whose break
/// points were chosen by eye on the printed menu.
static LAYOUTS: Lazy<HashMap<&'static str, Vec<NameLine>>> = Lazy::new(|| {
    let center = |name: &'static str| (name, vec![NameLine::bold(name, Align::Center)]);
    let one_line = |name: &'static str| (name, vec![NameLine::bold_no_wrap(name, Align::Left)]);

    HashMap::from([
        // Single centered bold line.
        center("茄子のニンニクソース"),
        center("ナスとトマトのチーズ焼き"),
        center("一口ミニステーキ"),
        center("生ハム"),
        center("2種チーズ盛り合わせ"),
        center("鳥ささみのチーズピンク揚げ"),
        center("赤いタルタルのチキン南蛮"),
        center("大エビフライ (3本)"),
        center("昔ながらのナポリタン"),
        center("濃厚カルボナーラ"),
        center("たこわさのポテトサラダ"),
        center("半熟卵のポテトサラダ"),
        center("温玉のせシーザーサラダ"),
        center("3種のチーズサラダ（サウザンドレッシング）"),
        center("ライス 小 180g"),
        center("ライス 中 220g"),
        center("ライス 大 300g"),
        center("バケット2個"),
        center("おかわりバケット4個"),
        center("バニラアイス"),
        center("季節のシャーベット"),
        center("コーヒーゼリー"),
        center("カモソテー"),
        center("自家製すじカレー"),
        center("野菜の旨みキーマカレー"),
        center("味噌汁"),
        center("味噌汁＋ミニサラダ"),
        center("洋風ちくわのチーズ揚げ"),
        center("エビのアヒージョ（バケット4枚）"),
        // Single bold line that must not wrap.
        one_line("イカカラ（マヨ・レモン付き）"),
        one_line("【期間限定】カキフライ (6個)"),
        one_line("バジル香るジェノベーゼパスタ"),
        // Multi-line layouts.
        (
            "とろ〜りクリーミーなカニコロッケ（1個・キャベツ）",
            vec![
                NameLine::plain("とろ〜りクリーミーな"),
                NameLine::bold("カニコロッケ　1個", Align::Right),
                NameLine::plain_right("（キャベツ付き）"),
            ],
        ),
        (
            "パンサラダセット：パン2個＋味噌汁＋ミニサラダ",
            vec![
                NameLine::plain("パンサラダセット：パン2個＋"),
                NameLine::bold("味噌汁＋ミニサラダ", Align::Right),
            ],
        ),
        (
            "やみつきビアフライドポテト（ケチャップ付き）",
            vec![
                NameLine::plain("やみつきビアフライドポテト"),
                NameLine::bold("（ケチャップ付き）", Align::Right),
            ],
        ),
        (
            "エビのケイジャンスパイスフライ",
            vec![
                NameLine::plain("エビの"),
                NameLine::bold("ケイジャンスパイスフライ", Align::Right),
            ],
        ),
        (
            "チェダーチーズのスティックフライ",
            vec![
                NameLine::plain("チェダーチーズの"),
                NameLine::bold("スティックフライ", Align::Right),
            ],
        ),
        (
            "アボカド＆クリームチーズのスティックフライ",
            vec![
                NameLine::plain("アボカド＆クリームチーズ"),
                NameLine::bold("のスティックフライ", Align::Right),
            ],
        ),
        (
            "チョリソー3本 粒マスタード添え",
            vec![
                NameLine::plain("チョリソー3本"),
                NameLine::bold("（粒マスタード添え）", Align::Right),
            ],
        ),
        (
            "キャベツマリネ ジンジャードレッシング",
            vec![
                NameLine::plain("キャベツマリネ"),
                NameLine::bold("ジンジャードレッシング", Align::Right),
            ],
        ),
        (
            "本日のメリメロカルパッチョ (3種)",
            vec![
                NameLine::plain("本日のメリメロカルパッチョ"),
                NameLine::bold("(3種)", Align::Right),
            ],
        ),
        (
            "ビックソーセージ2本(マッシュポテト・粒マスタード)",
            vec![
                NameLine::bold("ビックソーセージ2本", Align::Center),
                NameLine::bold_no_wrap("(マッシュポテト・粒マスタード)", Align::Left),
            ],
        ),
        (
            "ブラッターチーズとシャインマスカットのカプレーゼ(白ワインとライムジュレ)",
            vec![
                NameLine::plain("ブラッターチーズと"),
                NameLine::bold("シャインマスカットの", Align::Center),
                NameLine::bold("カプレーゼ", Align::Right),
                NameLine::bold("(白ワインとライムジュレ)", Align::Right),
            ],
        ),
        (
            "海鮮アヒージョ (厚切りバケット4個)",
            vec![
                NameLine::bold("海鮮アヒージョ", Align::Center),
                NameLine::bold("(厚切りバケット4個)", Align::Center),
            ],
        ),
        (
            "3種のキノコとしらすのアヒージョ (厚切りバケット4個)",
            vec![
                NameLine::plain("3種のキノコと"),
                NameLine::bold("しらすのアヒージョ", Align::Right),
                NameLine::bold("(厚切りバケット4個)", Align::Center),
            ],
        ),
        (
            "カマンベールとプチトマトのアヒージョ (厚切りバケット4個)",
            vec![
                NameLine::plain("カマンベールとプチトマトの"),
                NameLine::bold("アヒージョ", Align::Right),
                NameLine::bold("(厚切りバケット4個)", Align::Center),
            ],
        ),
        (
            "濃厚じゃがいものクリームニョッキ",
            vec![
                NameLine::plain("濃厚じゃがいもの"),
                NameLine::bold("クリームニョッキ", Align::Right),
            ],
        ),
        (
            "たっぷりしらすのペペロンチーノ（昆布茶仕立て）",
            vec![
                NameLine::bold_no_wrap("たっぷりしらすのペペロンチーノ", Align::Center),
                NameLine::bold("（昆布茶仕立て）", Align::Center),
            ],
        ),
        (
            "サーモンとアボカドのポキサラダ（ポキドレッシング）",
            vec![
                NameLine::bold_no_wrap("サーモンとアボカドのポキサラダ", Align::Center),
                NameLine::bold("（ポキドレッシング）", Align::Center),
            ],
        ),
        (
            "ダッチベビー（ベリベリストロベリー or チョコチョコチョコ + ホイップクリーム・バニラ）",
            vec![
                NameLine::bold("ダッチベビー", Align::Center),
                NameLine::bold("（ベリベリストロベリー or", Align::Left),
                NameLine::bold("チョコチョコチョコ +", Align::Center),
                NameLine::bold("ホイップクリーム・バニラ）", Align::Right),
            ],
        ),
        (
            "ミニパフェ（コーンフレーク・バニラ・ホイップ ストロベリーソース or チョコソース）",
            vec![
                NameLine::bold("ミニパフェ", Align::Center),
                NameLine::bold("（コーンフレーク・バニラ・", Align::Left),
                NameLine::bold_no_wrap("ホイップ・ストロベリーソース", Align::Left),
                NameLine::bold("or　チョコソース）", Align::Center),
            ],
        ),
        (
            "ベーコンと卵のクリームリゾット",
            vec![
                NameLine::plain("ベーコンと卵の"),
                NameLine::bold("クリームリゾット", Align::Right),
            ],
        ),
        // Bread set names drop the authored inner ＋.
        (
            "パンセット：＋パン2個＋味噌汁",
            vec![NameLine::bold("パンセット：パン2個＋味噌汁", Align::Center)],
        ),
        (
            "パンサラダセット：＋パン2個＋味噌汁＋ミニサラダ",
            vec![NameLine::bold(
                "パンサラダセット：パン2個＋味噌汁＋ミニサラダ",
                Align::Center,
            )],
        ),
    ])
});

// =============================================================================
// Formatting
// =============================================================================

/// Formats a card name into its printed lines.
pub fn format_name(name: &str) -> Vec<NameLine> {
    if let Some(lines) = structural_rule(name) {
        return lines;
    }
    if let Some(lines) = LAYOUTS.get(name) {
        return lines.clone();
    }
    // Sautes carry a weight suffix, so they cannot live in the exact table.
    if name.contains("チキンソテー") || name.contains("ポークソテー") {
        return vec![NameLine::bold(name, Align::Center)];
    }
    // Lunch set names are authored with a leading ＋ (add-ons to a main).
    if let Some(rest) = name.strip_prefix('＋') {
        return vec![NameLine::bold(rest, Align::Center)];
    }
    vec![NameLine::plain(name)]
}

/// Rules keyed on name shape rather than the exact name.
fn structural_rule(name: &str) -> Option<Vec<NameLine>> {
    if let Some(size) = name.strip_prefix("国産黒毛和牛サーロインステーキ ") {
        return Some(vec![
            NameLine::plain("国産黒毛和牛"),
            NameLine::bold(format!("サーロインステーキ　{size}"), Align::Right),
        ]);
    }
    if let Some(size) = name.strip_prefix("当店自慢の自家製ハンバーグ ") {
        return Some(vec![
            NameLine::plain("当店自慢の自家製ハンバーグ"),
            NameLine::bold(size, Align::Right),
        ]);
    }
    if let Some((dish, sauces)) = split_sauce_suffix(name) {
        return Some(vec![
            NameLine::plain(dish),
            NameLine::plain(format!("（{sauces}）")),
        ]);
    }
    if let Some(side) = delimited(name, "昔ながらのアジフライ（1枚・", "）") {
        return Some(vec![
            NameLine::bold("昔ながらのアジフライ　1枚", Align::Center),
            NameLine::plain_right(format!("（{side}）")),
        ]);
    }
    if let Some(side) = delimited(name, "手作りメンチカツ（1個・", "）") {
        return Some(vec![
            NameLine::bold("手作りメンチカツ　1個", Align::Center),
            NameLine::plain_right(format!("（{side}）")),
        ]);
    }
    // Steak names keep their size on one bold line; the frontend may break
    // between words on narrow screens.
    if name.contains("国産和牛ミスジステーキ") || name.contains("国産和牛ランプステーキ") {
        return Some(vec![NameLine::bold(name, Align::Left)]);
    }
    if name.contains("ライス（小／中／大）＋味噌汁＋ミニサラダ") {
        return Some(vec![
            NameLine::bold("ライス（小／中／大）＋", Align::Center),
            NameLine::bold("味噌汁＋ミニサラダ", Align::Right),
        ]);
    }
    if name.contains("ライス（小／中／大）＋味噌汁") {
        return Some(vec![
            NameLine::bold("ライス（小／中／大）＋", Align::Center),
            NameLine::bold("味噌汁", Align::Right),
        ]);
    }
    None
}

/// Splits `名前（ソース：a／b）` into `(名前, "a／b")`.
fn split_sauce_suffix(name: &str) -> Option<(&str, &str)> {
    let (dish, rest) = name.split_once("（ソース：")?;
    let sauces = rest.strip_suffix('）')?;
    Some((dish, sauces))
}

/// The text between a required prefix and a required suffix.
fn delimited<'a>(name: &'a str, prefix: &str, suffix: &str) -> Option<&'a str> {
    name.strip_prefix(prefix)?.strip_suffix(suffix)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_fallback_is_one_left_line() {
        let lines = format_name("フレンチポテトフライ");
        assert_eq!(lines, vec![NameLine::plain("フレンチポテトフライ")]);
    }

    #[test]
    fn sirloin_splits_before_the_bold_size_line() {
        let lines = format_name("国産黒毛和牛サーロインステーキ 200g");
        assert_eq!(
            lines,
            vec![
                NameLine::plain("国産黒毛和牛"),
                NameLine::bold("サーロインステーキ　200g", Align::Right),
            ]
        );
    }

    #[test]
    fn hamburger_size_goes_to_its_own_right_line() {
        let lines = format_name("当店自慢の自家製ハンバーグ 300g");
        assert_eq!(lines[0], NameLine::plain("当店自慢の自家製ハンバーグ"));
        assert_eq!(lines[1], NameLine::bold("300g", Align::Right));
    }

    #[test]
    fn sauce_suffix_moves_to_a_second_line() {
        let lines = format_name("フレンチポテトフライ（ソース：ケチャップ／マヨ）");
        assert_eq!(
            lines,
            vec![
                NameLine::plain("フレンチポテトフライ"),
                NameLine::plain("（ケチャップ／マヨ）"),
            ]
        );
    }

    #[test]
    fn aji_fry_reorders_the_piece_count() {
        let lines = format_name("昔ながらのアジフライ（1枚・タルタル）");
        assert_eq!(lines[0], NameLine::bold("昔ながらのアジフライ　1枚", Align::Center));
        assert_eq!(lines[1].text, "（タルタル）");
        assert_eq!(lines[1].align, Align::Right);
        assert!(!lines[1].bold);
    }

    #[test]
    fn steak_names_stay_on_one_bold_line() {
        let lines = format_name("国産和牛ミスジステーキ 450g");
        assert_eq!(lines, vec![NameLine::bold("国産和牛ミスジステーキ 450g", Align::Left)]);
    }

    #[test]
    fn exact_layout_table_applies() {
        for name in ["味噌汁", "カモソテー", "昔ながらのナポリタン"] {
            assert_eq!(format_name(name), vec![NameLine::bold(name, Align::Center)]);
        }
        let crab = format_name("とろ〜りクリーミーなカニコロッケ（1個・キャベツ）");
        assert_eq!(crab.len(), 3);
        assert_eq!(crab[1], NameLine::bold("カニコロッケ　1個", Align::Right));
    }

    #[test]
    fn rice_and_soup_set_matches_before_the_plus_strip() {
        // The authored name carries a leading ＋ but the rice set layout
        // still wins over the generic strip rule.
        let lines = format_name("＋ライス（小／中／大）＋味噌汁");
        assert_eq!(
            lines,
            vec![
                NameLine::bold("ライス（小／中／大）＋", Align::Center),
                NameLine::bold("味噌汁", Align::Right),
            ]
        );

        let with_salad = format_name("＋ライス（小／中／大）＋味噌汁＋ミニサラダ");
        assert_eq!(with_salad[1], NameLine::bold("味噌汁＋ミニサラダ", Align::Right));
    }

    #[test]
    fn plus_prefix_is_stripped_for_simple_sets() {
        assert_eq!(
            format_name("＋味噌汁"),
            vec![NameLine::bold("味噌汁", Align::Center)]
        );
        assert_eq!(
            format_name("＋味噌汁＋ミニサラダ"),
            vec![NameLine::bold("味噌汁＋ミニサラダ", Align::Center)]
        );
    }

    #[test]
    fn bread_set_names_drop_the_inner_plus() {
        assert_eq!(
            format_name("パンセット：＋パン2個＋味噌汁"),
            vec![NameLine::bold("パンセット：パン2個＋味噌汁", Align::Center)]
        );
    }

    #[test]
    fn sautes_with_any_size_center_in_bold() {
        assert_eq!(
            format_name("チキンソテー 270g"),
            vec![NameLine::bold("チキンソテー 270g", Align::Center)]
        );
        assert_eq!(
            format_name("ポークソテー 240g"),
            vec![NameLine::bold("ポークソテー 240g", Align::Center)]
        );
    }

    #[test]
    fn no_wrap_names_keep_one_line() {
        let lines = format_name("バジル香るジェノベーゼパスタ");
        assert_eq!(lines.len(), 1);
        assert!(lines[0].no_wrap);
        assert!(lines[0].bold);
    }

    #[test]
    fn mini_parfait_uses_the_hand_tuned_layout() {
        let lines = format_name(
            "ミニパフェ（コーンフレーク・バニラ・ホイップ ストロベリーソース or チョコソース）",
        );
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], NameLine::bold("ミニパフェ", Align::Center));
        assert!(lines[2].no_wrap);
    }
}
