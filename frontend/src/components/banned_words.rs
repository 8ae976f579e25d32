//! Banned-word list: plain CRUD over the backend filter table. Duplicate and
//! malformed entries are rejected locally before any call goes out.

use std::collections::HashSet;

use regex::Regex;
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::banned_word::BannedWord;
use common::requests::CreateBannedWordRequest;

use crate::api::comments::CommentApi;
use crate::api::ApiError;
use crate::notify;
use crate::session::Session;
use crate::tops_sheet::{close_top_sheet, open_top_sheet, TopSheet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NotASingleWord,
    Duplicate,
}

impl WordError {
    fn message(&self) -> &'static str {
        match self {
            WordError::Empty => "Enter a word to ban.",
            WordError::NotASingleWord => "Ban one word at a time, without spaces.",
            WordError::Duplicate => "That word is already banned.",
        }
    }
}

/// Validates a candidate entry against the in-memory list. Case-insensitive:
/// banning "Spam" while "spam" exists is rejected without a network call.
pub fn validate_new_word(existing: &[BannedWord], raw: &str) -> Result<String, WordError> {
    let word = raw.trim();
    if word.is_empty() {
        return Err(WordError::Empty);
    }
    let single_word = Regex::new(r"^[^\s]+$").unwrap();
    if !single_word.is_match(word) {
        return Err(WordError::NotASingleWord);
    }
    if existing
        .iter()
        .any(|entry| entry.word.eq_ignore_ascii_case(word))
    {
        return Err(WordError::Duplicate);
    }
    Ok(word.to_string())
}

pub enum Msg {
    Loaded(Vec<BannedWord>),
    LoadFailed(ApiError),
    WordInput(String),
    ReasonInput(String),
    Add,
    Added(BannedWord),
    AddFailed(ApiError),
    RequestDelete(i64),
    CancelDelete,
    ConfirmDelete,
    Deleted(i64),
    DeleteFailed(i64, ApiError),
}

pub struct BannedWordsPage {
    session: Session,
    words: Vec<BannedWord>,
    loading: bool,
    word_input: String,
    reason_input: String,
    adding: bool,
    pending_delete: Option<i64>,
    deleting: HashSet<i64>,
    delete_sheet_ref: NodeRef,
}

#[derive(Properties, PartialEq)]
pub struct BannedWordsProps {
    pub session: Session,
}

impl Component for BannedWordsPage {
    type Message = Msg;
    type Properties = BannedWordsProps;

    fn create(ctx: &Context<Self>) -> Self {
        BannedWordsPage {
            session: ctx.props().session.clone(),
            words: Vec::new(),
            loading: true,
            word_input: String::new(),
            reason_input: String::new(),
            adding: false,
            pending_delete: None,
            deleting: HashSet::new(),
            delete_sheet_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(words) => {
                self.words = words;
                self.loading = false;
                true
            }
            Msg::LoadFailed(err) => {
                self.loading = false;
                if !err.is_unauthorized() {
                    notify::error(&format!("Could not load banned words: {err}"));
                }
                true
            }
            Msg::WordInput(value) => {
                self.word_input = value;
                true
            }
            Msg::ReasonInput(value) => {
                self.reason_input = value;
                true
            }
            Msg::Add => {
                if self.adding {
                    return false;
                }
                let word = match validate_new_word(&self.words, &self.word_input) {
                    Ok(word) => word,
                    Err(err) => {
                        notify::error(err.message());
                        return false;
                    }
                };
                self.adding = true;
                let reason = self.reason_input.trim();
                let request = CreateBannedWordRequest {
                    word,
                    reason: (!reason.is_empty()).then(|| reason.to_string()),
                };
                let api = CommentApi::new(self.session.clone());
                let link = ctx.link().clone();
                spawn_local(async move {
                    match api.add_banned_word(&request).await {
                        Ok(entry) => link.send_message(Msg::Added(entry)),
                        Err(err) => link.send_message(Msg::AddFailed(err)),
                    }
                });
                true
            }
            Msg::Added(entry) => {
                self.adding = false;
                self.words.push(entry);
                self.word_input.clear();
                self.reason_input.clear();
                notify::info("Word banned.");
                true
            }
            Msg::AddFailed(err) => {
                self.adding = false;
                if !err.is_unauthorized() {
                    notify::error(&format!("Could not ban the word: {err}"));
                }
                true
            }
            Msg::RequestDelete(id) => {
                self.pending_delete = Some(id);
                open_top_sheet(self.delete_sheet_ref.clone());
                true
            }
            Msg::CancelDelete => {
                self.pending_delete = None;
                close_top_sheet(self.delete_sheet_ref.clone());
                true
            }
            Msg::ConfirmDelete => {
                let Some(id) = self.pending_delete.take() else {
                    return false;
                };
                close_top_sheet(self.delete_sheet_ref.clone());
                if !self.deleting.insert(id) {
                    return true;
                }
                let api = CommentApi::new(self.session.clone());
                let link = ctx.link().clone();
                spawn_local(async move {
                    match api.delete_banned_word(id).await {
                        Ok(()) => link.send_message(Msg::Deleted(id)),
                        Err(err) => link.send_message(Msg::DeleteFailed(id, err)),
                    }
                });
                true
            }
            Msg::Deleted(id) => {
                self.deleting.remove(&id);
                self.words.retain(|entry| entry.id != id);
                true
            }
            Msg::DeleteFailed(id, err) => {
                self.deleting.remove(&id);
                if !err.is_unauthorized() {
                    notify::error(&format!("Could not remove the word: {err}"));
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="banned-words-page">
                <h2>{ "Banned words" }</h2>
                <div class="add-word-row">
                    <input
                        placeholder="Word"
                        value={self.word_input.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            Msg::WordInput(e.target_unchecked_into::<HtmlInputElement>().value())
                        })}
                        onkeydown={link.batch_callback(|e: KeyboardEvent| {
                            if e.key() == "Enter" { vec![Msg::Add] } else { vec![] }
                        })}
                    />
                    <input
                        placeholder="Reason (optional)"
                        value={self.reason_input.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            Msg::ReasonInput(e.target_unchecked_into::<HtmlInputElement>().value())
                        })}
                    />
                    <button disabled={self.adding} onclick={link.callback(|_| Msg::Add)}>
                        { if self.adding { "Banning…" } else { "Ban word" } }
                    </button>
                </div>
                {
                    if self.loading {
                        html! { <p class="loading">{ "Loading…" }</p> }
                    } else if self.words.is_empty() {
                        html! { <p class="empty">{ "No banned words yet." }</p> }
                    } else {
                        html! {
                            <table class="banned-words-table">
                                <thead>
                                    <tr>
                                        <th>{ "Word" }</th>
                                        <th>{ "Reason" }</th>
                                        <th>{ "Banned by" }</th>
                                        <th>{ "Since" }</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    { self.words.iter().map(|entry| self.build_row(entry, link)).collect::<Html>() }
                                </tbody>
                            </table>
                        }
                    }
                }
                <TopSheet
                    title={"Remove banned word"}
                    node_ref={self.delete_sheet_ref.clone()}
                    on_close={link.callback(|_| Msg::CancelDelete)}
                >
                    <p>{ "Remove this word from the filter?" }</p>
                    <div class="sheet-actions">
                        <button onclick={link.callback(|_| Msg::CancelDelete)}>{ "Cancel" }</button>
                        <button class="danger" onclick={link.callback(|_| Msg::ConfirmDelete)}>
                            { "Remove" }
                        </button>
                    </div>
                </TopSheet>
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let api = CommentApi::new(self.session.clone());
            let link = ctx.link().clone();
            spawn_local(async move {
                match api.list_banned_words().await {
                    Ok(words) => link.send_message(Msg::Loaded(words)),
                    Err(err) => link.send_message(Msg::LoadFailed(err)),
                }
            });
        }
    }
}

impl BannedWordsPage {
    fn build_row(&self, entry: &BannedWord, link: &Scope) -> Html {
        let id = entry.id;
        let deleting = self.deleting.contains(&id);
        html! {
            <tr key={id.to_string()}>
                <td class="word">{ &entry.word }</td>
                <td>{ entry.reason.clone().unwrap_or_default() }</td>
                <td>{ &entry.banned_by }</td>
                <td>{ entry.created_at.format("%Y-%m-%d").to_string() }</td>
                <td>
                    <button
                        class="danger"
                        disabled={deleting}
                        onclick={link.callback(move |_| Msg::RequestDelete(id))}
                    >
                        { if deleting { "Removing…" } else { "Remove" } }
                    </button>
                </td>
            </tr>
        }
    }
}

type Scope = yew::html::Scope<BannedWordsPage>;

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(word: &str) -> BannedWord {
        BannedWord {
            id: 1,
            word: word.into(),
            reason: None,
            banned_by: "root@disclosure.example".into(),
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_rejects_empty_input() {
        assert_eq!(validate_new_word(&[], ""), Err(WordError::Empty));
        assert_eq!(validate_new_word(&[], "   "), Err(WordError::Empty));
    }

    #[test]
    fn test_rejects_multi_word_input() {
        assert_eq!(
            validate_new_word(&[], "two words"),
            Err(WordError::NotASingleWord)
        );
    }

    #[test]
    fn test_rejects_case_insensitive_duplicate() {
        let existing = vec![entry("spam")];
        assert_eq!(
            validate_new_word(&existing, "Spam"),
            Err(WordError::Duplicate)
        );
        assert_eq!(
            validate_new_word(&existing, "SPAM"),
            Err(WordError::Duplicate)
        );
    }

    #[test]
    fn test_accepts_and_trims_new_word() {
        let existing = vec![entry("spam")];
        assert_eq!(
            validate_new_word(&existing, "  scam  "),
            Ok("scam".to_string())
        );
    }
}
