//! View rendering for the document review page: status filter tabs, the
//! document table, and the editor panel with the metadata form and the
//! approve/reject actions.

use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use common::model::document::{Document, DocumentStatus};

use super::machine::ReviewPhase;
use super::messages::Msg;
use super::state::{DocumentsPage, SelectedDocument};
use crate::tops_sheet::TopSheet;

const FILTERS: [DocumentStatus; 3] = [
    DocumentStatus::Pending,
    DocumentStatus::Approved,
    DocumentStatus::Rejected,
];

pub fn view(page: &DocumentsPage, ctx: &Context<DocumentsPage>) -> Html {
    let link = ctx.link();
    html! {
        <div class="documents-page">
            <h2>{ "Document review" }</h2>
            { build_filter_tabs(page, link) }
            {
                if page.loading {
                    html! { <p class="loading">{ "Loading documents…" }</p> }
                } else {
                    build_table(page, link)
                }
            }
            {
                match &page.selected {
                    Some(selected) => build_editor(page, selected, link),
                    None => html! {},
                }
            }
            { build_delete_sheet(page, link) }
        </div>
    }
}

fn build_filter_tabs(page: &DocumentsPage, link: &Scope<DocumentsPage>) -> Html {
    html! {
        <div class="tab-bar">
            {
                FILTERS.iter().map(|status| {
                    let status = *status;
                    let active = if page.filter == status { "active" } else { "" };
                    html! {
                        <button
                            class={classes!("tab-btn", active)}
                            onclick={link.callback(move |_| Msg::SetFilter(status))}
                        >
                            { status.label() }
                        </button>
                    }
                }).collect::<Html>()
            }
        </div>
    }
}

fn build_table(page: &DocumentsPage, link: &Scope<DocumentsPage>) -> Html {
    if page.documents.is_empty() {
        return html! { <p class="empty">{ "No documents in this bucket." }</p> };
    }
    html! {
        <table class="documents-table">
            <thead>
                <tr>
                    <th>{ "Title" }</th>
                    <th>{ "Country" }</th>
                    <th>{ "Status" }</th>
                    <th>{ "Updated" }</th>
                    <th>{ "Tags" }</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                { page.documents.iter().map(|document| build_row(page, document, link)).collect::<Html>() }
            </tbody>
        </table>
    }
}

fn build_row(page: &DocumentsPage, document: &Document, link: &Scope<DocumentsPage>) -> Html {
    let id = document.id;
    let deleting = page.deleting.contains(&id);
    html! {
        <tr key={id.to_string()}>
            <td>{ &document.title }</td>
            <td>{ &document.country }</td>
            <td>{ status_badge(document.status) }</td>
            <td>{ document.updated_at.format("%Y-%m-%d").to_string() }</td>
            <td>{ document.generated_tags.len() }</td>
            <td>
                <button onclick={link.callback(move |_| Msg::Open(id))}>{ "Review" }</button>
                <button
                    class="danger"
                    disabled={deleting}
                    onclick={link.callback(move |_| Msg::RequestDelete(id))}
                >
                    { if deleting { "Deleting…" } else { "Delete" } }
                </button>
            </td>
        </tr>
    }
}

fn status_badge(status: DocumentStatus) -> Html {
    html! { <span class={classes!("status-badge", status.as_str())}>{ status.label() }</span> }
}

fn build_editor(
    page: &DocumentsPage,
    selected: &SelectedDocument,
    link: &Scope<DocumentsPage>,
) -> Html {
    let busy = selected.machine.is_busy();
    let dirty = selected.draft.is_dirty(&selected.canonical);
    let status = selected.machine.status();

    html! {
        <div class="editor-panel">
            <div class="editor-header">
                <h3>{ format!("Document #{}", selected.canonical.id) }</h3>
                { status_badge(status) }
                <button class="close-btn" onclick={link.callback(|_| Msg::CloseEditor)}>
                    { "\u{2715}" }
                </button>
            </div>

            <label>{ "Title" }
                <input
                    value={selected.draft.title.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::EditTitle(e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                />
            </label>
            <label>{ "Description" }
                <textarea
                    value={selected.draft.description.clone()}
                    rows={4}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::EditDescription(e.target_unchecked_into::<HtmlTextAreaElement>().value())
                    })}
                />
            </label>
            <div class="field-row">
                <label>{ "Country" }
                    <input
                        value={selected.draft.country.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            Msg::EditCountry(e.target_unchecked_into::<HtmlInputElement>().value())
                        })}
                    />
                </label>
                <label>{ "State / province" }
                    <input
                        value={selected.draft.state_province.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            Msg::EditStateProvince(e.target_unchecked_into::<HtmlInputElement>().value())
                        })}
                    />
                </label>
                <label>{ "Admin level" }
                    <input
                        value={selected.draft.admin_level.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            Msg::EditAdminLevel(e.target_unchecked_into::<HtmlInputElement>().value())
                        })}
                    />
                </label>
            </div>

            { build_tag_editor(page, selected, link) }

            {
                match &selected.canonical.ocr_text {
                    Some(text) if !text.is_empty() => html! {
                        <details class="ocr-preview">
                            <summary>{ "OCR text" }</summary>
                            <pre>{ text }</pre>
                        </details>
                    },
                    _ => html! {},
                }
            }

            <div class="editor-actions">
                <button
                    disabled={busy || !dirty}
                    onclick={link.callback(|_| Msg::Save)}
                >
                    { action_label(&selected.machine, ReviewPhase::Saving { then: None }, "Save") }
                </button>
                <button
                    class="approve"
                    disabled={busy || status == DocumentStatus::Approved}
                    onclick={link.callback(|_| Msg::Approve)}
                >
                    { action_label(&selected.machine, ReviewPhase::Transitioning(DocumentStatus::Approved), "Approve") }
                </button>
                <button
                    class="reject"
                    disabled={busy || status == DocumentStatus::Rejected}
                    onclick={link.callback(|_| Msg::Reject)}
                >
                    { action_label(&selected.machine, ReviewPhase::Transitioning(DocumentStatus::Rejected), "Reject") }
                </button>
            </div>
        </div>
    }
}

fn action_label(
    machine: &super::machine::ReviewMachine,
    when: ReviewPhase,
    idle_label: &'static str,
) -> &'static str {
    if *machine.phase() == when {
        "Working…"
    } else {
        idle_label
    }
}

fn build_tag_editor(
    page: &DocumentsPage,
    selected: &SelectedDocument,
    link: &Scope<DocumentsPage>,
) -> Html {
    html! {
        <div class="tag-editor">
            <span class="field-label">{ "Tags" }</span>
            <div class="tag-chips">
                {
                    selected.draft.tags.iter().map(|tag| {
                        let tag_for_remove = tag.clone();
                        html! {
                            <span class="tag-chip" key={tag.clone()}>
                                { tag }
                                <button
                                    class="chip-remove"
                                    onclick={link.callback(move |_| Msg::RemoveTag(tag_for_remove.clone()))}
                                >
                                    { "\u{2715}" }
                                </button>
                            </span>
                        }
                    }).collect::<Html>()
                }
            </div>
            <div class="tag-input-row">
                <input
                    placeholder="Add a tag"
                    value={page.tag_input.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::TagInput(e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                    onkeydown={link.batch_callback(|e: KeyboardEvent| {
                        if e.key() == "Enter" { vec![Msg::AddTag] } else { vec![] }
                    })}
                />
                <button onclick={link.callback(|_| Msg::AddTag)}>{ "Add" }</button>
            </div>
        </div>
    }
}

fn build_delete_sheet(page: &DocumentsPage, link: &Scope<DocumentsPage>) -> Html {
    let title = page
        .pending_delete
        .and_then(|id| page.documents.iter().find(|d| d.id == id))
        .map(|d| d.title.clone())
        .unwrap_or_default();
    html! {
        <TopSheet
            title={"Delete document"}
            node_ref={page.delete_sheet_ref.clone()}
            on_close={link.callback(|_| Msg::CancelDelete)}
        >
            <p>{ format!("Permanently delete \"{title}\"? This cannot be undone.") }</p>
            <div class="sheet-actions">
                <button onclick={link.callback(|_| Msg::CancelDelete)}>{ "Cancel" }</button>
                <button class="danger" onclick={link.callback(|_| Msg::ConfirmDelete)}>
                    { "Delete permanently" }
                </button>
            </div>
        </TopSheet>
    }
}
