//! State for the comment moderation queue.

use std::collections::HashSet;

use yew::NodeRef;

use common::model::comment::{Comment, CommentStatus};

use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueMode {
    /// Every comment, grouped by parent document.
    All,
    /// Only comments still awaiting a decision.
    Pending,
}

pub struct CommentsPage {
    pub session: Session,
    pub mode: QueueMode,
    pub comments: Vec<Comment>,
    pub loading: bool,
    /// Ids with a moderation call in flight. Rows act independently, so this
    /// is a set rather than a single flag.
    pub in_flight: HashSet<i64>,
    pub pending_delete: Option<i64>,
    pub delete_sheet_ref: NodeRef,
}

impl CommentsPage {
    pub fn new(session: Session) -> Self {
        CommentsPage {
            session,
            mode: QueueMode::Pending,
            comments: Vec::new(),
            loading: true,
            in_flight: HashSet::new(),
            pending_delete: None,
            delete_sheet_ref: NodeRef::default(),
        }
    }
}

/// Approve/reject only make sense while a comment awaits a decision. Flagged
/// comments were auto-hidden by the report threshold and still need one.
pub fn can_moderate(status: CommentStatus) -> bool {
    matches!(status, CommentStatus::Pending | CommentStatus::Flagged)
}

/// Groups comments under their parent document, keeping first-seen document
/// order and per-document row order as delivered by the backend.
pub fn group_by_document(comments: &[Comment]) -> Vec<(i64, String, Vec<&Comment>)> {
    let mut groups: Vec<(i64, String, Vec<&Comment>)> = Vec::new();
    for comment in comments {
        match groups.iter_mut().find(|(id, _, _)| *id == comment.document_id) {
            Some((_, _, rows)) => rows.push(comment),
            None => {
                let title = comment
                    .document_title
                    .clone()
                    .unwrap_or_else(|| format!("Document #{}", comment.document_id));
                groups.push((comment.document_id, title, vec![comment]));
            }
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment(id: i64, document_id: i64, title: Option<&str>) -> Comment {
        Comment {
            id,
            document_id,
            document_title: title.map(Into::into),
            parent_comment_id: None,
            author_name: None,
            comment_text: "text".into(),
            status: CommentStatus::Pending,
            flag_count: 0,
            reply_count: 0,
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_grouping_keeps_first_seen_order() {
        let comments = vec![
            comment(1, 10, Some("Tender A")),
            comment(2, 20, Some("Tender B")),
            comment(3, 10, Some("Tender A")),
        ];
        let groups = group_by_document(&comments);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, 10);
        assert_eq!(groups[0].1, "Tender A");
        assert_eq!(groups[0].2.len(), 2);
        assert_eq!(groups[1].0, 20);
    }

    #[test]
    fn test_grouping_falls_back_to_document_id() {
        let binding = [comment(1, 33, None)];
        let groups = group_by_document(&binding);
        assert_eq!(groups[0].1, "Document #33");
    }

    #[test]
    fn test_moderation_availability_by_status() {
        assert!(can_moderate(CommentStatus::Pending));
        assert!(can_moderate(CommentStatus::Flagged));
        assert!(!can_moderate(CommentStatus::Approved));
        assert!(!can_moderate(CommentStatus::Rejected));
    }
}
