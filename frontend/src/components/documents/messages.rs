use common::model::document::{Document, DocumentStatus};

use super::machine::ReviewEvent;
use crate::api::ApiError;

pub enum Msg {
    SetFilter(DocumentStatus),
    Loaded(Vec<Document>),
    LoadFailed(ApiError),
    Open(i64),
    CloseEditor,
    EditTitle(String),
    EditDescription(String),
    EditCountry(String),
    EditStateProvince(String),
    EditAdminLevel(String),
    TagInput(String),
    AddTag,
    RemoveTag(String),
    Save,
    Approve,
    Reject,
    /// Completion events funneled back into the review machine.
    Review(ReviewEvent),
    Refetched(Document),
    RefetchFailed(ApiError),
    RequestDelete(i64),
    CancelDelete,
    ConfirmDelete,
    Deleted(i64),
    DeleteFailed(i64, ApiError),
}
