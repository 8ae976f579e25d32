//! State for the document review page.

use std::collections::HashSet;

use yew::NodeRef;

use common::model::document::{Document, DocumentStatus};

use super::draft::DocumentDraft;
use super::machine::ReviewMachine;
use crate::session::Session;

/// The document currently open in the editor panel: last-fetched canonical
/// state, the draft overlaying it, and the review machine driving
/// save/approve/reject.
pub struct SelectedDocument {
    pub canonical: Document,
    pub draft: DocumentDraft,
    pub machine: ReviewMachine,
}

impl SelectedDocument {
    pub fn open(document: Document) -> Self {
        SelectedDocument {
            draft: DocumentDraft::from_document(&document),
            machine: ReviewMachine::new(&document),
            canonical: document,
        }
    }
}

pub struct DocumentsPage {
    pub session: Session,
    /// Which status bucket the list shows.
    pub filter: DocumentStatus,
    pub documents: Vec<Document>,
    pub loading: bool,
    pub selected: Option<SelectedDocument>,
    pub tag_input: String,
    /// Row awaiting delete confirmation in the top sheet.
    pub pending_delete: Option<i64>,
    pub deleting: HashSet<i64>,
    pub delete_sheet_ref: NodeRef,
}

impl DocumentsPage {
    pub fn new(session: Session) -> Self {
        DocumentsPage {
            session,
            filter: DocumentStatus::Pending,
            documents: Vec::new(),
            loading: true,
            selected: None,
            tag_input: String::new(),
            pending_delete: None,
            deleting: HashSet::new(),
            delete_sheet_ref: NodeRef::default(),
        }
    }
}
