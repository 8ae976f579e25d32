//! Update logic for the document review page.
//!
//! Button presses become `ReviewEvent`s for the machine; the commands it
//! returns are executed here (HTTP calls through `DocumentApi`, toasts,
//! refetches) and their completions are sent back as `Msg::Review` events.
//! The machine owns every ordering and guard decision; this module is glue.

use common::model::document::DocumentStatus;
use common::requests::UpdateDocumentRequest;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::draft::DocumentDraft;
use super::machine::{ReviewCommand, ReviewEvent};
use super::messages::Msg;
use super::state::{DocumentsPage, SelectedDocument};
use crate::api::documents::DocumentApi;
use crate::notify;
use crate::tops_sheet::{close_top_sheet, open_top_sheet};

pub fn update(page: &mut DocumentsPage, ctx: &Context<DocumentsPage>, msg: Msg) -> bool {
    match msg {
        Msg::SetFilter(status) => {
            page.filter = status;
            page.selected = None;
            page.loading = true;
            fetch_list(page, ctx);
            true
        }
        Msg::Loaded(documents) => {
            page.documents = documents;
            page.loading = false;
            true
        }
        Msg::LoadFailed(err) => {
            page.loading = false;
            if !err.is_unauthorized() {
                notify::error(&format!("Could not load documents: {err}"));
            }
            true
        }
        Msg::Open(id) => {
            if let Some(document) = page.documents.iter().find(|d| d.id == id) {
                page.selected = Some(SelectedDocument::open(document.clone()));
                page.tag_input.clear();
            }
            true
        }
        Msg::CloseEditor => {
            page.selected = None;
            true
        }
        Msg::EditTitle(value) => edit_field(page, |draft| draft.title = value),
        Msg::EditDescription(value) => edit_field(page, |draft| draft.description = value),
        Msg::EditCountry(value) => edit_field(page, |draft| draft.country = value),
        Msg::EditStateProvince(value) => edit_field(page, |draft| draft.state_province = value),
        Msg::EditAdminLevel(value) => edit_field(page, |draft| draft.admin_level = value),
        Msg::TagInput(value) => {
            page.tag_input = value;
            true
        }
        Msg::AddTag => {
            let Some(selected) = page.selected.as_mut() else {
                return false;
            };
            match selected.draft.add_tag(&page.tag_input) {
                Ok(()) => page.tag_input.clear(),
                Err(err) => notify::error(&err.to_string()),
            }
            true
        }
        Msg::RemoveTag(tag) => {
            if let Some(selected) = page.selected.as_mut() {
                selected.draft.remove_tag(&tag);
            }
            true
        }
        Msg::Save => dispatch(page, ctx, |selected| ReviewEvent::SaveRequested {
            edits: selected.draft.pending_edits(&selected.canonical),
        }),
        Msg::Approve => dispatch(page, ctx, |selected| ReviewEvent::TransitionRequested {
            target: DocumentStatus::Approved,
            edits: selected.draft.pending_edits(&selected.canonical),
        }),
        Msg::Reject => dispatch(page, ctx, |selected| ReviewEvent::TransitionRequested {
            target: DocumentStatus::Rejected,
            edits: selected.draft.pending_edits(&selected.canonical),
        }),
        Msg::Review(event) => {
            let Some(selected) = page.selected.as_mut() else {
                return false;
            };
            let document_id = selected.canonical.id;
            let commands = selected.machine.decide(event);
            run_commands(page, ctx, document_id, commands);
            true
        }
        Msg::Refetched(document) => {
            if let Some(selected) = page.selected.as_mut() {
                if selected.canonical.id == document.id {
                    selected.machine.sync(&document);
                    selected.draft = DocumentDraft::from_document(&document);
                    selected.canonical = document.clone();
                }
            }
            if let Some(row) = page.documents.iter_mut().find(|d| d.id == document.id) {
                *row = document;
            }
            // A row whose status moved on no longer belongs to this bucket.
            let filter = page.filter;
            page.documents.retain(|d| d.status == filter);
            true
        }
        Msg::RefetchFailed(err) => {
            if !err.is_unauthorized() {
                notify::error(&format!("Could not refresh the document: {err}"));
            }
            false
        }
        Msg::RequestDelete(id) => {
            page.pending_delete = Some(id);
            open_top_sheet(page.delete_sheet_ref.clone());
            true
        }
        Msg::CancelDelete => {
            page.pending_delete = None;
            close_top_sheet(page.delete_sheet_ref.clone());
            true
        }
        Msg::ConfirmDelete => {
            let Some(id) = page.pending_delete.take() else {
                return false;
            };
            close_top_sheet(page.delete_sheet_ref.clone());
            if !page.deleting.insert(id) {
                return true;
            }
            let api = DocumentApi::new(page.session.clone());
            let link = ctx.link().clone();
            spawn_local(async move {
                match api.delete(id).await {
                    Ok(()) => link.send_message(Msg::Deleted(id)),
                    Err(err) => link.send_message(Msg::DeleteFailed(id, err)),
                }
            });
            true
        }
        Msg::Deleted(id) => {
            page.deleting.remove(&id);
            page.documents.retain(|d| d.id != id);
            if page
                .selected
                .as_ref()
                .is_some_and(|selected| selected.canonical.id == id)
            {
                page.selected = None;
            }
            notify::info("Document deleted.");
            true
        }
        Msg::DeleteFailed(id, err) => {
            page.deleting.remove(&id);
            if !err.is_unauthorized() {
                notify::error(&format!("Could not delete the document: {err}"));
            }
            true
        }
    }
}

fn edit_field(page: &mut DocumentsPage, apply: impl FnOnce(&mut DocumentDraft)) -> bool {
    match page.selected.as_mut() {
        Some(selected) => {
            apply(&mut selected.draft);
            true
        }
        None => false,
    }
}

fn dispatch(
    page: &mut DocumentsPage,
    ctx: &Context<DocumentsPage>,
    build: impl FnOnce(&SelectedDocument) -> ReviewEvent,
) -> bool {
    let Some(selected) = page.selected.as_mut() else {
        return false;
    };
    let event = build(selected);
    let document_id = selected.canonical.id;
    let commands = selected.machine.decide(event);
    run_commands(page, ctx, document_id, commands);
    true
}

fn run_commands(
    page: &DocumentsPage,
    ctx: &Context<DocumentsPage>,
    document_id: i64,
    commands: Vec<ReviewCommand>,
) {
    for command in commands {
        let api = DocumentApi::new(page.session.clone());
        let link = ctx.link().clone();
        match command {
            ReviewCommand::PersistEdits(edits) => {
                spawn_local(async move {
                    match api.update(document_id, &edits).await {
                        Ok(_) => link.send_message(Msg::Review(ReviewEvent::SaveCompleted)),
                        Err(err) if err.is_unauthorized() => {}
                        Err(err) => link
                            .send_message(Msg::Review(ReviewEvent::SaveFailed(err.to_string()))),
                    }
                });
            }
            ReviewCommand::SetStatus(target) => {
                spawn_local(async move {
                    let update = UpdateDocumentRequest {
                        status: Some(target),
                        ..Default::default()
                    };
                    match api.update(document_id, &update).await {
                        Ok(document) => link
                            .send_message(Msg::Review(ReviewEvent::TransitionCompleted(document))),
                        Err(err) if err.is_unauthorized() => {}
                        Err(err) => link.send_message(Msg::Review(ReviewEvent::TransitionFailed(
                            err.to_string(),
                        ))),
                    }
                });
            }
            ReviewCommand::TriggerProcessing(request) => {
                spawn_local(async move {
                    match api.process(&request).await {
                        Ok(()) => {
                            link.send_message(Msg::Review(ReviewEvent::ProcessingAccepted));
                        }
                        Err(err) if err.is_unauthorized() => {}
                        Err(err) => link.send_message(Msg::Review(ReviewEvent::ProcessingFailed(
                            err.to_string(),
                        ))),
                    }
                });
            }
            ReviewCommand::Refetch => {
                spawn_local(async move {
                    match api.fetch(document_id).await {
                        Ok(document) => link.send_message(Msg::Refetched(document)),
                        Err(err) => link.send_message(Msg::RefetchFailed(err)),
                    }
                });
            }
            ReviewCommand::Notify(level, message) => notify::show(level, &message),
        }
    }
}

pub fn fetch_list(page: &DocumentsPage, ctx: &Context<DocumentsPage>) {
    let api = DocumentApi::new(page.session.clone());
    let status = page.filter;
    let link = ctx.link().clone();
    spawn_local(async move {
        match api.list_by_status(status).await {
            Ok(documents) => link.send_message(Msg::Loaded(documents)),
            Err(err) => link.send_message(Msg::LoadFailed(err)),
        }
    });
}
