//! 一品メニュー tab: small plates, chef's specials, pasta, salads, curry,
//! rice & bread, and desserts. All singles; prices are authored pre-tax.

use hoshi_core::menu::{MenuItem, MenuSection, SectionNotes};

pub fn sections() -> Vec<MenuSection> {
    vec![
        otsumami(),
        rich_plates(),
        single_plates(),
        pasta(),
        salads(),
        curry_and_risotto(),
        rice_and_bread(),
        desserts(),
    ]
}

fn otsumami() -> MenuSection {
    let items = [
        ("やみつきビアフライドポテト（ケチャップ付き）", "Addictive Beer-battered Fries (with Ketchup)"),
        ("フレンチポテトフライ（ソース：ケチャップ／マヨ／明太マヨ／アンチョビマヨ）", "French Fries (Sauce: Ketchup / Mayo / Mentaiko Mayo / Anchovy Mayo)"),
        ("特製からあげ（レモン付き）", "Special Karaage (with Lemon)"),
        ("イカカラ（マヨ・レモン付き）", "Squid Karaage (Mayo & Lemon)"),
        ("エビのケイジャンスパイスフライ", "Cajun Spice Fried Shrimp"),
        ("洋風ちくわのチーズ揚げ", "Western-style Chikuwa Cheese Fry"),
        ("チェダーチーズのスティックフライ", "Cheddar Cheese Stick Fry"),
        ("アボカド＆クリームチーズのスティックフライ", "Avocado & Cream Cheese Stick Fry"),
        ("ゴロゴロ野菜のラタトゥーユ", "Chunky Vegetable Ratatouille"),
        ("とろ〜りクリーミーなカニコロッケ（1個・キャベツ）", "Creamy Crab Croquette (1 pc, with Cabbage)"),
        ("手作りメンチカツ（1個・キャベツ・マスタード）", "Homemade Menchi-katsu (1 pc, Cabbage & Mustard)"),
        ("昔ながらのアジフライ（1枚・キャベツ・マスタード）", "Classic Fried Whiting (1 pc, Cabbage & Mustard)"),
        ("茄子のニンニクソース", "Eggplant with Garlic Sauce"),
        ("ナスとトマトのチーズ焼き", "Eggplant & Tomato Cheese Bake"),
        ("一口ミニステーキ", "Bite-sized Mini Steak"),
        ("生ハム", "Prosciutto"),
        ("2種チーズ盛り合わせ", "Two Cheese Platter"),
        ("エビのアヒージョ（バケット4枚）", "Shrimp Ajillo (4 Slices Baguette)"),
        ("チョリソー3本 粒マスタード添え", "3 Chorizo (with Grain Mustard)"),
        ("キャベツマリネ ジンジャードレッシング", "Cabbage Marinade with Ginger Dressing"),
    ];
    MenuSection::new(
        "おつまみ",
        items
            .into_iter()
            .map(|(name, en)| MenuItem::single(name, 500).description(en))
            .collect(),
    )
    .notes(SectionNotes::LeftRight {
        left: Some("※ソースは各種類から選べます。".to_string()),
        right: Some("※メニューの写真や動画はイメージ図となります。".to_string()),
    })
}

fn rich_plates() -> MenuSection {
    MenuSection::new(
        "一品リッチメニュー / Chef'sSpecial & Ajillo",
        vec![
            MenuItem::single("本日のメリメロカルパッチョ (3種)", 1500)
                .description("Today's Carpaccio (3 types)"),
            MenuItem::single(
                "ブラッターチーズとシャインマスカットのカプレーゼ(白ワインとライムジュレ)",
                1500,
            )
            .description("Burrata & Shine Muscat Caprese (White Wine & Lime Jus)"),
            MenuItem::single("ビックソーセージ2本(マッシュポテト・粒マスタード)", 1350)
                .description("Big Sausage 2 (Mash Potato & Grain Mustard)"),
            MenuItem::single("海鮮アヒージョ (厚切りバケット4個)", 980)
                .description("Seafood Ajillo (4 Thick Baguette)"),
        ],
    )
}

fn single_plates() -> MenuSection {
    MenuSection::new(
        "一品メニュー",
        vec![
            MenuItem::single("3種のキノコとしらすのアヒージョ (厚切りバケット4個)", 880)
                .description("3 Mushroom & Shirasu Ajillo (4 Thick Baguette)"),
            MenuItem::single("カマンベールとプチトマトのアヒージョ (厚切りバケット4個)", 880)
                .description("Camembert & Cherry Tomato Ajillo (4 Thick Baguette)"),
            MenuItem::single("鳥ささみのチーズピンク揚げ", 780)
                .description("Chicken Tender Cheese Fry"),
            MenuItem::single("赤いタルタルのチキン南蛮", 780)
                .description("Chicken Nanban with Red Tartar"),
            MenuItem::single("濃厚じゃがいものクリームニョッキ", 680)
                .description("Creamy Potato Gnocchi"),
            MenuItem::single("大エビフライ (3本)", 1480).description("Large Fried Shrimp (3 pcs)"),
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

fn salads() -> MenuSection {
    MenuSection::new(
        "サラダ",
        vec![
            MenuItem::single("たこわさのポテトサラダ", 550)
                .description("Octopus & Wasabi Potato Salad"),
            MenuItem::single("半熟卵のポテトサラダ", 550)
                .description("Soft-boiled Egg Potato Salad"),
            MenuItem::single("温玉のせシーザーサラダ", 980)
                .description("Caesar Salad with Soft Boiled Egg")
                .notes(["※温玉別皿対応可"]),
            MenuItem::single("3種のチーズサラダ（サウザンドレッシング）", 1080)
                .description("3 Cheese Salad (Thousand Island)"),
            MenuItem::single("サーモンとアボカドのポキサラダ（ポキドレッシング）", 1200)
                .description("Salmon & Avocado Poke Salad (Poke Dressing)"),
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

fn rice_and_bread() -> MenuSection {
    MenuSection::new(
        "ライス & パン（ディナー単品）",
        vec![
            MenuItem::single("ライス 小 180g", 220).description("Rice S 180g"),
            MenuItem::single("ライス 中 220g", 280).description("Rice M 220g"),
            MenuItem::single("ライス 大 300g", 350).description("Rice L 300g"),
            MenuItem::single("バケット2個", 280).description("2 Baguette"),
            MenuItem::single("おかわりバケット4個", 540).description("Extra 4 Baguette"),
            MenuItem::single("おかわりバケットスライス4枚", 280)
                .description("Extra 4 Baguette Slices"),
        ],
    )
}

fn desserts() -> MenuSection {
    MenuSection::new(
        "デザート",
        vec![
            MenuItem::single("バニラアイス", 300).description("Vanilla Ice Cream"),
            MenuItem::single("季節のシャーベット", 300).description("Seasonal Sherbet"),
            MenuItem::single("コーヒーゼリー", 300).description("Coffee Jelly"),
            MenuItem::single(
                "ダッチベビー（ベリベリストロベリー or チョコチョコチョコ + ホイップクリーム・バニラ）",
                1280,
            )
            .description("Dutch Baby (Berry Blister Berry or Choco + Whipped Cream & Vanilla)"),
            MenuItem::single(
                "ミニパフェ（コーンフレーク・バニラ・ホイップ ストロベリーソース or チョコソース）",
                780,
            )
            .description("Mini Parfait (Cornflake, Vanilla, Whipped Cream / Strawberry or Chocolate Sauce)"),
        ],
    )
}
