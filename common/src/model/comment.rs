use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of user reports after which the backend auto-hides a comment.
/// Surfaced here only so the moderation queue can render the flag badge;
/// the policy itself is enforced server-side.
pub const FLAG_AUTO_HIDE_THRESHOLD: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentStatus {
    Pending,
    Approved,
    Rejected,
    Flagged,
}

impl CommentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommentStatus::Pending => "pending",
            CommentStatus::Approved => "approved",
            CommentStatus::Rejected => "rejected",
            CommentStatus::Flagged => "flagged",
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, CommentStatus::Pending)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub document_id: i64,
    /// Title of the parent document; populated by the admin listing so the
    /// queue can group rows without a second fetch.
    #[serde(default)]
    pub document_title: Option<String>,
    /// Set when the comment is a reply inside a thread.
    #[serde(default)]
    pub parent_comment_id: Option<i64>,
    #[serde(default)]
    pub author_name: Option<String>,
    pub comment_text: String,
    pub status: CommentStatus,
    #[serde(default)]
    pub flag_count: u32,
    #[serde(default)]
    pub reply_count: u32,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Whether the moderation queue shows the "Flagged (N flags)" badge.
    pub fn shows_flag_badge(&self) -> bool {
        self.flag_count >= FLAG_AUTO_HIDE_THRESHOLD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment(flag_count: u32) -> Comment {
        Comment {
            id: 7,
            document_id: 42,
            document_title: None,
            parent_comment_id: None,
            author_name: None,
            comment_text: "anonymized sources confirm".into(),
            status: CommentStatus::Pending,
            flag_count,
            reply_count: 0,
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_flag_badge_at_threshold() {
        assert!(!comment(0).shows_flag_badge());
        assert!(!comment(2).shows_flag_badge());
        assert!(comment(3).shows_flag_badge());
        assert!(comment(9).shows_flag_badge());
    }
}
