//! # Notices
//!
//! The announcement list shared by the home page and the notices page.
//! Two kinds exist: free-text announcements and the business-hours card,
//! which the frontend renders from its own hours component and therefore
//! carries no body text.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// What a notice card shows below its image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum NoticeKind {
    /// Free-text announcement body.
    Text { content: String },
    /// Rendered from the shared business-hours component.
    Hours,
}

/// One entry of the notice list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    /// Display date, authored as printed (`"2026.2.5"`).
    pub date: String,
    pub image: Option<String>,
    pub image_alt: Option<String>,
    #[serde(flatten)]
    pub kind: NoticeKind,
}

/// The notice list, newest first.
pub fn notices() -> Vec<Notice> {
    vec![
        Notice {
            date: "2026.2.5".to_string(),
            image: Some("/images/C5B50238-CBBF-4624-AEE2-FB184924250C.png".to_string()),
            image_alt: Some("グランドオープン".to_string()),
            kind: NoticeKind::Text {
                content: "グランドオープン開店記念！2月5日・6日はファーストドリンク100円セール"
                    .to_string(),
            },
        },
        Notice {
            date: "2026.1.29".to_string(),
            image: Some("/images/LINE_20260130_211643.png".to_string()),
            image_alt: Some("営業時間".to_string()),
            kind: NoticeKind::Hours,
        },
        Notice {
            date: "2026.1.26".to_string(),
            image: Some("/images/LINE_20260130_211622.png".to_string()),
            image_alt: Some("定休日".to_string()),
            kind: NoticeKind::Text {
                content: "定休日のお知らせ：毎週火曜日がお休みです。".to_string(),
            },
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
    fn notices_are_newest_first() {
        let dates: Vec<_> = notices().into_iter().map(|notice| notice.date).collect();
        assert_eq!(dates, vec!["2026.2.5", "2026.1.29", "2026.1.26"]);
    }

    #[test]
    fn kind_serializes_as_a_tagged_union() {
        let all = notices();
        let text = serde_json::to_value(&all[0]).unwrap();
        assert_eq!(text["type"], "text");
        assert_eq!(
            text["content"],
            "グランドオープン開店記念！2月5日・6日はファーストドリンク100円セール"
        );

        let hours = serde_json::to_value(&all[1]).unwrap();
        assert_eq!(hours["type"], "hours");
        assert!(hours.get("content").is_none());
    }
}
