//! Update logic for the translation bulk editor.

use std::collections::BTreeMap;

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::translation::{faq_answer_key, faq_question_key};
use common::requests::BulkTranslationUpdate;

use super::messages::Msg;
use super::state::{group_drafts, TranslationsPage};
use crate::api::translations::TranslationApi;
use crate::notify;

pub fn update(page: &mut TranslationsPage, ctx: &Context<TranslationsPage>, msg: Msg) -> bool {
    match msg {
        Msg::SetLanguage(language) => {
            if page.language == language {
                return false;
            }
            page.language = language;
            page.loading = true;
            fetch_rows(page, ctx);
            true
        }
        Msg::SetSection(section) => {
            if page.section == section {
                return false;
            }
            page.section = section;
            page.loading = true;
            fetch_rows(page, ctx);
            true
        }
        Msg::Loaded(rows) => {
            page.rows = rows;
            page.loading = false;
            true
        }
        Msg::LoadFailed(err) => {
            page.loading = false;
            if !err.is_unauthorized() {
                notify::error(&format!("Could not load translations: {err}"));
            }
            true
        }
        Msg::Edit { key, value } => {
            let address = (page.language.clone(), page.section.clone(), key.clone());
            let canonical = page
                .rows
                .iter()
                .find(|row| row.key == key)
                .map(|row| row.value.as_str());
            // Reverting an edit back to the canonical value drops the draft,
            // so the unsaved counter stays honest.
            if canonical == Some(value.as_str()) {
                page.drafts.remove(&address);
            } else {
                page.drafts.insert(address, value);
            }
            true
        }
        Msg::NewFaqQuestion(value) => {
            page.new_faq_question = value;
            true
        }
        Msg::NewFaqAnswer(value) => {
            page.new_faq_answer = value;
            true
        }
        Msg::AddFaq => {
            let question = page.new_faq_question.trim().to_string();
            let answer = page.new_faq_answer.trim().to_string();
            if question.is_empty() || answer.is_empty() {
                notify::error("A FAQ entry needs both a question and an answer.");
                return false;
            }
            let id = uuid::Uuid::new_v4().simple().to_string();
            let language = page.language.clone();
            let section = page.section.clone();
            page.drafts.insert(
                (language.clone(), section.clone(), faq_question_key(&id)),
                question,
            );
            page.drafts
                .insert((language, section, faq_answer_key(&id)), answer);
            page.new_faq_question.clear();
            page.new_faq_answer.clear();
            true
        }
        Msg::Save => {
            if page.saving || page.drafts.is_empty() {
                return false;
            }
            page.saving = true;
            let groups = group_drafts(&page.drafts);
            let api = TranslationApi::new(page.session.clone());
            let link = ctx.link().clone();
            spawn_local(async move {
                let mut cleared = Vec::new();
                let mut errors = Vec::new();
                for ((language, section), translations) in groups {
                    let update = BulkTranslationUpdate { translations };
                    match api.bulk_update(&language, &section, &update).await {
                        Ok(()) => cleared.push((language, section)),
                        Err(err) if err.is_unauthorized() => return,
                        Err(err) => errors.push(format!("{language}/{section}: {err}")),
                    }
                }
                link.send_message(Msg::SaveFinished { cleared, errors });
            });
            true
        }
        Msg::SaveFinished { cleared, errors } => {
            page.saving = false;
            page.drafts.retain(|(language, section, _), _| {
                !cleared
                    .iter()
                    .any(|(saved_language, saved_section)| {
                        saved_language == language && saved_section == section
                    })
            });
            if errors.is_empty() {
                notify::info("Translations saved.");
            } else {
                notify::error(&format!(
                    "Some sections could not be saved: {}",
                    errors.join("; ")
                ));
            }
            page.loading = true;
            fetch_rows(page, ctx);
            true
        }
        Msg::ExportJson => {
            download_json(page);
            false
        }
        Msg::CopyJson => {
            let json = fetched_as_json(page);
            spawn_local(async move {
                if let Some(window) = web_sys::window() {
                    let promise = window.navigator().clipboard().write_text(&json);
                    match JsFuture::from(promise).await {
                        Ok(_) => notify::info("Copied to the clipboard."),
                        Err(_) => notify::error("Could not access the clipboard."),
                    }
                }
            });
            false
        }
    }
}

/// JSON view of the fetched rows only; drafts are deliberately excluded.
fn fetched_as_json(page: &TranslationsPage) -> String {
    let map: BTreeMap<&str, &str> = page
        .rows
        .iter()
        .map(|row| (row.key.as_str(), row.value.as_str()))
        .collect();
    serde_json::to_string_pretty(&map).unwrap_or_else(|_| "{}".to_string())
}

fn download_json(page: &TranslationsPage) {
    let json = fetched_as_json(page);
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let parts = js_sys::Array::of1(&JsValue::from_str(&json));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/json");
    let Ok(blob) = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options) else {
        return;
    };
    let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
        return;
    };
    if let Ok(anchor) = document.create_element("a") {
        if let Ok(anchor) = anchor.dyn_into::<web_sys::HtmlAnchorElement>() {
            anchor.set_href(&url);
            anchor.set_download(&format!(
                "translations_{}_{}.json",
                page.language, page.section
            ));
            anchor.click();
        }
    }
    web_sys::Url::revoke_object_url(&url).ok();
}

pub fn fetch_rows(page: &TranslationsPage, ctx: &Context<TranslationsPage>) {
    let api = TranslationApi::new(page.session.clone());
    let language = page.language.clone();
    let section = page.section.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        match api.list(&language, &section).await {
            Ok(rows) => link.send_message(Msg::Loaded(rows)),
            Err(err) => link.send_message(Msg::LoadFailed(err)),
        }
    });
}
