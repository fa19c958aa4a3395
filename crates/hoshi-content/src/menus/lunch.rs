//! ランチメニュー tab. The steak sections repeat the dinner ones verbatim;
//! the lunch sets are zero-margin add-ons priced in tens of yen.

use hoshi_core::menu::{MenuItem, MenuSection, SectionNotes};

use super::steaks;

pub fn sections() -> Vec<MenuSection> {
    vec![
        lunch_mains(),
        steaks::misuji_section(),
        steaks::rump_section(),
        steaks::sirloin_section(),
        fried_plates(),
        pasta(),
        curry_and_risotto(),
        lunch_sets(),
    ]
}

fn lunch_mains() -> MenuSection {
    MenuSection::new(
        "メイン",
        vec![
            MenuItem::single("当店自慢の自家製ハンバーグ 200g", 1380)
                .description("House Hamburger 200g\nデミグラス／トマト／ホワイトチーズ／大根おろしポン酢")
                .image_path("/images/menu/lunch/26-01-29_116_2.jpg"),
            MenuItem::single("チキンソテー 270g", 1380)
                .description("Chicken Saute 270g\nデミグラス／トマト／ホワイトチーズ／大根おろしポン酢／ジンジャー")
                .image_path("/images/menu/lunch/26-01-29_097_2.jpg"),
            MenuItem::single("ポークソテー 240g", 1380)
                .description("Pork Saute 240g\nデミグラス／トマト／ホワイトチーズ／ジンジャー")
                .image_path("/images/menu/lunch/26-01-29_071_2.jpg"),
        ],
    )
    .notes(SectionNotes::LeftRight {
        left: None,
        right: Some(
            "※ソースは各種類から選べます。※メニューの写真や動画はイメージ図となります。".to_string(),
        ),
    })
}

fn fried_plates() -> MenuSection {
    MenuSection::new(
        "フライ",
        vec![
            MenuItem::single("大エビフライ (3本)", 1480).description("Large Fried Shrimp (3 pcs)"),
            MenuItem::single("鳥ささみのチーズピンク揚げ", 780)
                .description("Chicken Tender Cheese Fry"),
            MenuItem::single("赤いタルタルのチキン南蛮", 780)
                .description("Chicken Nanban with Red Tartar"),
            MenuItem::single("【期間限定】カキフライ (6個)", 1580)
                .description("[Limited] Fried Oyster (6 pcs)"),
        ],
    )
}

fn pasta() -> MenuSection {
    MenuSection::new(
        "パスタ",
        vec![
            MenuItem::single("昔ながらのナポリタン", 980)
                .description("Classic Napolitana")
                .image_path("/images/menu/side/26-01-29_069_2.jpg"),
            MenuItem::single("濃厚カルボナーラ", 1280).description("Rich Carbonara"),
            MenuItem::single("バジル香るジェノベーゼパスタ", 1280).description("Basil Pesto Pasta"),
            MenuItem::single("たっぷりしらすのペペロンチーノ（昆布茶仕立て）", 1280)
                .description("Shirasu Peperoncino (Kombu Tea Style)"),
        ],
    )
}

fn curry_and_risotto() -> MenuSection {
    MenuSection::new(
        "カレー＆リゾット",
        vec![
            MenuItem::single("自家製すじカレー", 1250).description("Homemade Beef Tendon Curry"),
            MenuItem::single("野菜の旨みキーマカレー", 1150).description("Vegetable Keema Curry"),
            MenuItem::single("ベーコンと卵のクリームリゾット", 1100)
                .description("Cream Risotto with Bacon & Egg"),
        ],
    )
}

fn lunch_sets() -> MenuSection {
    MenuSection::new(
        "ランチセット",
        vec![
            MenuItem::single("＋味噌汁", 50).description("Miso Soup"),
            MenuItem::single("＋味噌汁＋ミニサラダ", 150).description("Miso Soup + Mini Salad"),
            MenuItem::single("＋ライス（小／中／大）＋味噌汁", 100)
                .description("Rice (S/M/L) + Miso Soup"),
            MenuItem::single("＋ライス（小／中／大）＋味噌汁＋ミニサラダ", 200)
                .description("Rice (S/M/L) + Miso Soup + Mini Salad"),
            MenuItem::single("パンセット：＋パン2個＋味噌汁", 100)
                .description("Bread Set: + 2 Bread + Miso Soup"),
            MenuItem::single("パンサラダセット：＋パン2個＋味噌汁＋ミニサラダ", 200)
                .description("Bread & Salad Set: + 2 Bread + Miso\nSoup + Mini Salad"),
        ],
    )
}
