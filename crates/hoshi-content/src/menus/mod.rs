//! Authored menu data for all five tabs, in the canonical
//! [`hoshi_core::menu`] model.
//!
//! The old display-data arrays (tax-inclusive price strings) were migrated
//! through [`crate::legacy`]; nothing here stores a tax-inclusive figure.
//! Every section in this module is covered by the validation sweep in
//! [`crate::tabs`]'s tests.

pub mod alcohol;
pub mod drinks;
pub mod ichipin;
pub mod lunch;
pub mod mains;
pub mod steaks;

/// Notes printed at the bottom of the menu page.
pub const FOOTER_NOTES: [&str; 4] = [
    "※当店の牛・豚・米は１００％国産になります。",
    "※価格は税抜き価格と税込み価格を併記しています。",
    "※メニューは季節により変更になる場合がございます。",
    "※アレルギーに関するお問い合わせは、お気軽にスタッフまでお尋ねください。",
];
