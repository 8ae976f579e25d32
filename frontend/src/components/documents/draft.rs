//! Editable metadata form state.
//!
//! The draft overlays the last-fetched canonical document. Nothing here
//! touches the network: edits accumulate locally and are turned into a
//! partial update request by `pending_edits` when a save, approve, or reject
//! commits them. A refetch rebuilds the draft from server truth.

use common::model::document::Document;
use common::requests::UpdateDocumentRequest;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct DocumentDraft {
    pub title: String,
    pub description: String,
    pub country: String,
    pub state_province: String,
    pub admin_level: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TagError {
    #[error("tag is empty")]
    Empty,
    #[error("tag already present")]
    Duplicate,
}

impl DocumentDraft {
    pub fn from_document(document: &Document) -> Self {
        DocumentDraft {
            title: document.title.clone(),
            description: document.description.clone(),
            country: document.country.clone(),
            state_province: document.state_province.clone(),
            admin_level: document.admin_level.clone(),
            tags: document.generated_tags.clone(),
        }
    }

    pub fn is_dirty(&self, canonical: &Document) -> bool {
        self.pending_edits(canonical).is_some()
    }

    /// The partial update that would bring the canonical document in line
    /// with the draft, or `None` when there is nothing to persist. Only
    /// changed fields are populated, so an untouched field can never clobber
    /// a concurrent backend change to it.
    pub fn pending_edits(&self, canonical: &Document) -> Option<UpdateDocumentRequest> {
        let mut update = UpdateDocumentRequest::default();
        if self.title != canonical.title {
            update.title = Some(self.title.clone());
        }
        if self.description != canonical.description {
            update.description = Some(self.description.clone());
        }
        if self.country != canonical.country {
            update.country = Some(self.country.clone());
        }
        if self.state_province != canonical.state_province {
            update.state_province = Some(self.state_province.clone());
        }
        if self.admin_level != canonical.admin_level {
            update.admin_level = Some(self.admin_level.clone());
        }
        if self.tags != canonical.generated_tags {
            update.generated_tags = Some(self.tags.clone());
        }
        if update.is_empty() {
            None
        } else {
            Some(update)
        }
    }

    /// Adds a tag to the draft set. Rejects empty input and case-insensitive
    /// duplicates; on rejection the set is left untouched.
    pub fn add_tag(&mut self, raw: &str) -> Result<(), TagError> {
        let tag = raw.trim();
        if tag.is_empty() {
            return Err(TagError::Empty);
        }
        if self
            .tags
            .iter()
            .any(|existing| existing.eq_ignore_ascii_case(tag))
        {
            return Err(TagError::Duplicate);
        }
        self.tags.push(tag.to_string());
        Ok(())
    }

    /// Pure set difference on the displayed value.
    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.retain(|existing| existing != tag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::document::DocumentStatus;

    fn canonical() -> Document {
        Document {
            id: 42,
            title: "Procurement audit".into(),
            description: "Q3 audit of road contracts".into(),
            country: "Kenya".into(),
            state_province: "Nairobi".into(),
            admin_level: "county".into(),
            pdf_url: Some("https://files.example/42.pdf".into()),
            status: DocumentStatus::Pending,
            generated_tags: vec!["procurement".into(), "roads".into()],
            ocr_text: None,
            approved_by: None,
            approved_at: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_fresh_draft_is_clean() {
        let doc = canonical();
        let draft = DocumentDraft::from_document(&doc);
        assert!(!draft.is_dirty(&doc));
        assert!(draft.pending_edits(&doc).is_none());
    }

    #[test]
    fn test_pending_edits_carry_only_changed_fields() {
        let doc = canonical();
        let mut draft = DocumentDraft::from_document(&doc);
        draft.title = "Budget Leak 2024".into();

        let edits = draft.pending_edits(&doc).unwrap();
        assert_eq!(edits.title.as_deref(), Some("Budget Leak 2024"));
        assert!(edits.description.is_none());
        assert!(edits.country.is_none());
        assert!(edits.generated_tags.is_none());
        assert!(edits.status.is_none());
    }

    #[test]
    fn test_tag_edits_mark_draft_dirty() {
        let doc = canonical();
        let mut draft = DocumentDraft::from_document(&doc);
        draft.add_tag("corruption").unwrap();

        let edits = draft.pending_edits(&doc).unwrap();
        assert_eq!(
            edits.generated_tags.unwrap(),
            vec!["procurement", "roads", "corruption"]
        );
    }

    #[test]
    fn test_add_tag_rejects_empty_and_whitespace() {
        let doc = canonical();
        let mut draft = DocumentDraft::from_document(&doc);
        assert_eq!(draft.add_tag(""), Err(TagError::Empty));
        assert_eq!(draft.add_tag("   "), Err(TagError::Empty));
        assert_eq!(draft.tags, doc.generated_tags);
    }

    #[test]
    fn test_add_tag_rejects_case_insensitive_duplicate() {
        let doc = canonical();
        let mut draft = DocumentDraft::from_document(&doc);
        assert_eq!(draft.add_tag("Procurement"), Err(TagError::Duplicate));
        assert_eq!(draft.add_tag("ROADS"), Err(TagError::Duplicate));
        assert_eq!(draft.tags, doc.generated_tags);
    }

    #[test]
    fn test_add_tag_trims_before_insert() {
        let doc = canonical();
        let mut draft = DocumentDraft::from_document(&doc);
        draft.add_tag("  tender  ").unwrap();
        assert_eq!(draft.tags.last().unwrap(), "tender");
    }

    #[test]
    fn test_remove_tag_is_set_difference() {
        let doc = canonical();
        let mut draft = DocumentDraft::from_document(&doc);
        draft.remove_tag("roads");
        assert_eq!(draft.tags, vec!["procurement"]);
        // Removing something absent is a no-op.
        draft.remove_tag("missing");
        assert_eq!(draft.tags, vec!["procurement"]);
    }

    #[test]
    fn test_reverted_edit_reads_clean() {
        let doc = canonical();
        let mut draft = DocumentDraft::from_document(&doc);
        draft.title = "changed".into();
        draft.title = doc.title.clone();
        assert!(!draft.is_dirty(&doc));
    }
}
