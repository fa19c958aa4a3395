//! # Customer Reviews
//!
//! Reviews are published manually, only after the customer grants
//! permission, so the list lives here as authored data rather than behind
//! a submission endpoint.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Disclaimer shown above the review list.
pub const REVIEW_DISCLAIMER: &str =
    "※口コミはオープン後、掲載許可をいただいたものから順次掲載予定です。";

/// One published customer review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: u32,
    pub nickname: String,
    /// Display date, authored as printed (`"2026.01.20"`).
    pub date: String,
    pub comment: String,
    pub image: Option<String>,
    /// A video takes precedence over the image when both are set.
    pub video_src: Option<String>,
    /// Star rating, 1 to 5.
    pub rating: u8,
}

impl Review {
    /// The five-character star row, e.g. `★★★★☆` for a rating of 4.
    pub fn stars(&self) -> String {
        let filled = usize::from(self.rating.min(5));
        let mut stars = "★".repeat(filled);
        stars.push_str(&"☆".repeat(5 - filled));
        stars
    }
}

/// The published reviews, newest first.
pub fn reviews() -> Vec<Review> {
    vec![
        Review {
            id: 1,
            nickname: "たろう".to_string(),
            date: "2026.01.20".to_string(),
            comment: "ハンバーグが絶品でした！肉汁がジューシーで、デミグラスソースとの相性も抜群です。また来たいと思います。"
                .to_string(),
            image: Some("/images/news/review1.jpg".to_string()),
            video_src: None,
            rating: 5,
        },
        Review {
            id: 2,
            nickname: "さくら".to_string(),
            date: "2026.01.18".to_string(),
            comment: "国産和牛のステーキをいただきました。柔らかくて美味しかったです。店内の雰囲気も良く、落ち着いて食事できました。"
                .to_string(),
            image: None,
            video_src: None,
            rating: 5,
        },
        Review {
            id: 3,
            nickname: "けんじ".to_string(),
            date: "2026.01.15".to_string(),
            comment: "ランチで利用しました。ボリュームもあり、コスパが良いです。スタッフの方も親切でした。"
                .to_string(),
            image: None,
            video_src: None,
            rating: 4,
        },
    ]
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reviews_are_newest_first_with_unique_ids() {
        let all = reviews();
        let dates: Vec<_> = all.iter().map(|review| review.date.as_str()).collect();
        assert_eq!(dates, vec!["2026.01.20", "2026.01.18", "2026.01.15"]);

        let mut ids: Vec<_> = all.iter().map(|review| review.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), all.len());
    }

    #[test]
    fn star_row_is_always_five_characters() {
        let review = &reviews()[2];
        assert_eq!(review.stars(), "★★★★☆");
        for review in reviews() {
            assert_eq!(review.stars().chars().count(), 5);
        }
    }

    #[test]
    fn ratings_are_in_range() {
        for review in reviews() {
            assert!((1..=5).contains(&review.rating), "review {}", review.id);
        }
    }
}
