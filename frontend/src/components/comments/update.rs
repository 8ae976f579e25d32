//! Update logic for the comment moderation queue.
//!
//! Each row's action is tracked by comment id so unrelated rows stay
//! responsive. Deletion is optimistic: the row disappears immediately and a
//! failure forces a refetch to reconcile whatever the backend really holds.

use common::model::comment::CommentStatus;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::{can_moderate, CommentsPage, QueueMode};
use crate::api::comments::CommentApi;
use crate::notify;
use crate::tops_sheet::{close_top_sheet, open_top_sheet};

pub fn update(page: &mut CommentsPage, ctx: &Context<CommentsPage>, msg: Msg) -> bool {
    match msg {
        Msg::SetMode(mode) => {
            if page.mode == mode {
                return false;
            }
            page.mode = mode;
            page.loading = true;
            fetch_list(page, ctx);
            true
        }
        Msg::Loaded(comments) => {
            page.comments = comments;
            page.loading = false;
            true
        }
        Msg::LoadFailed(err) => {
            page.loading = false;
            if !err.is_unauthorized() {
                notify::error(&format!("Could not load comments: {err}"));
            }
            true
        }
        Msg::Approve(id) => moderate(page, ctx, id, CommentStatus::Approved),
        Msg::Reject(id) => moderate(page, ctx, id, CommentStatus::Rejected),
        Msg::Moderated(comment) => {
            page.in_flight.remove(&comment.id);
            if let Some(row) = page.comments.iter_mut().find(|c| c.id == comment.id) {
                *row = comment;
            }
            if page.mode == QueueMode::Pending {
                page.comments.retain(|c| can_moderate(c.status));
            }
            true
        }
        Msg::ActionFailed(id, err) => {
            page.in_flight.remove(&id);
            if !err.is_unauthorized() {
                notify::error(&format!("Moderation failed: {err}"));
            }
            true
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
            if !page.in_flight.insert(id) {
                return true;
            }
            // Optimistic removal; a failure re-syncs below.
            page.comments.retain(|c| c.id != id);
            let api = CommentApi::new(page.session.clone());
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
            page.in_flight.remove(&id);
            notify::info("Comment permanently deleted.");
            false
        }
        Msg::DeleteFailed(id, err) => {
            page.in_flight.remove(&id);
            if !err.is_unauthorized() {
                notify::error(&format!("Could not delete the comment: {err}"));
            }
            page.loading = true;
            fetch_list(page, ctx);
            true
        }
    }
}

fn moderate(
    page: &mut CommentsPage,
    ctx: &Context<CommentsPage>,
    id: i64,
    status: CommentStatus,
) -> bool {
    let Some(current) = page.comments.iter().find(|c| c.id == id).map(|c| c.status) else {
        return false;
    };
    if !can_moderate(current) || !page.in_flight.insert(id) {
        return false;
    }
    let api = CommentApi::new(page.session.clone());
    let link = ctx.link().clone();
    spawn_local(async move {
        match api.set_status(id, status).await {
            Ok(updated) => link.send_message(Msg::Moderated(updated)),
            Err(err) => link.send_message(Msg::ActionFailed(id, err)),
        }
    });
    true
}

pub fn fetch_list(page: &CommentsPage, ctx: &Context<CommentsPage>) {
    let api = CommentApi::new(page.session.clone());
    let mode = page.mode;
    let link = ctx.link().clone();
    spawn_local(async move {
        let result = match mode {
            QueueMode::All => api.list_all().await,
            QueueMode::Pending => api.list_pending().await,
        };
        match result {
            Ok(comments) => link.send_message(Msg::Loaded(comments)),
            Err(err) => link.send_message(Msg::LoadFailed(err)),
        }
    });
}
