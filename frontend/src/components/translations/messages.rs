use common::model::translation::TranslationEntry;

use crate::api::ApiError;

pub enum Msg {
    SetLanguage(String),
    SetSection(String),
    Loaded(Vec<TranslationEntry>),
    LoadFailed(ApiError),
    Edit { key: String, value: String },
    NewFaqQuestion(String),
    NewFaqAnswer(String),
    AddFaq,
    Save,
    /// Bulk save finished: pairs whose PUT succeeded and the error messages
    /// of those that did not.
    SaveFinished {
        cleared: Vec<(String, String)>,
        errors: Vec<String>,
    },
    ExportJson,
    CopyJson,
}
