use yew::html::Scope;
use yew::prelude::*;

use common::model::comment::{Comment, CommentStatus};

use super::messages::Msg;
use super::state::{can_moderate, group_by_document, CommentsPage, QueueMode};
use crate::tops_sheet::TopSheet;

pub fn view(page: &CommentsPage, ctx: &Context<CommentsPage>) -> Html {
    let link = ctx.link();
    html! {
        <div class="comments-page">
            <h2>{ "Comment moderation" }</h2>
            <div class="tab-bar">
                <button
                    class={classes!("tab-btn", (page.mode == QueueMode::Pending).then_some("active"))}
                    onclick={link.callback(|_| Msg::SetMode(QueueMode::Pending))}
                >
                    { "Pending" }
                </button>
                <button
                    class={classes!("tab-btn", (page.mode == QueueMode::All).then_some("active"))}
                    onclick={link.callback(|_| Msg::SetMode(QueueMode::All))}
                >
                    { "All comments" }
                </button>
            </div>
            {
                if page.loading {
                    html! { <p class="loading">{ "Loading comments…" }</p> }
                } else if page.comments.is_empty() {
                    html! { <p class="empty">{ "Nothing waiting for review." }</p> }
                } else {
                    match page.mode {
                        QueueMode::All => build_grouped(page, link),
                        QueueMode::Pending => html! {
                            <div class="comment-list">
                                { page.comments.iter().map(|c| build_comment(page, c, link)).collect::<Html>() }
                            </div>
                        },
                    }
                }
            }
            { build_delete_sheet(page, link) }
        </div>
    }
}

fn build_grouped(page: &CommentsPage, link: &Scope<CommentsPage>) -> Html {
    group_by_document(&page.comments)
        .into_iter()
        .map(|(document_id, title, rows)| {
            html! {
                <section class="comment-group" key={document_id.to_string()}>
                    <h3>{ title }</h3>
                    { rows.into_iter().map(|c| build_comment(page, c, link)).collect::<Html>() }
                </section>
            }
        })
        .collect::<Html>()
}

fn build_comment(page: &CommentsPage, comment: &Comment, link: &Scope<CommentsPage>) -> Html {
    let id = comment.id;
    let busy = page.in_flight.contains(&id);
    let moderatable = can_moderate(comment.status);
    html! {
        <div class="comment-row" key={id.to_string()}>
            <div class="comment-meta">
                <span class="author">
                    { comment.author_name.clone().unwrap_or_else(|| "Anonymous".into()) }
                </span>
                <span class="date">{ comment.created_at.format("%Y-%m-%d %H:%M").to_string() }</span>
                { status_badge(comment.status) }
                {
                    if comment.shows_flag_badge() {
                        html! {
                            <span class="flag-badge">
                                { format!("Flagged ({} flags)", comment.flag_count) }
                            </span>
                        }
                    } else {
                        html! {}
                    }
                }
                {
                    if comment.parent_comment_id.is_some() {
                        html! { <span class="reply-marker">{ "\u{21b3} reply" }</span> }
                    } else if comment.reply_count > 0 {
                        html! { <span class="reply-count">{ format!("{} replies", comment.reply_count) }</span> }
                    } else {
                        html! {}
                    }
                }
            </div>
            <p class="comment-text">{ &comment.comment_text }</p>
            <div class="comment-actions">
                {
                    if moderatable {
                        html! {
                            <>
                                <button
                                    class="approve"
                                    disabled={busy}
                                    onclick={link.callback(move |_| Msg::Approve(id))}
                                >
                                    { "Approve" }
                                </button>
                                <button
                                    class="reject"
                                    disabled={busy}
                                    onclick={link.callback(move |_| Msg::Reject(id))}
                                >
                                    { "Reject" }
                                </button>
                            </>
                        }
                    } else {
                        html! {}
                    }
                }
                <button
                    class="danger"
                    disabled={busy}
                    onclick={link.callback(move |_| Msg::RequestDelete(id))}
                >
                    { "Delete" }
                </button>
            </div>
        </div>
    }
}

fn status_badge(status: CommentStatus) -> Html {
    html! { <span class={classes!("status-badge", status.as_str())}>{ status.as_str() }</span> }
}

fn build_delete_sheet(page: &CommentsPage, link: &Scope<CommentsPage>) -> Html {
    html! {
        <TopSheet
            title={"Delete comment"}
            node_ref={page.delete_sheet_ref.clone()}
            on_close={link.callback(|_| Msg::CancelDelete)}
        >
            <p>{ "Permanently delete this comment? This cannot be undone." }</p>
            <div class="sheet-actions">
                <button onclick={link.callback(|_| Msg::CancelDelete)}>{ "Cancel" }</button>
                <button class="danger" onclick={link.callback(|_| Msg::ConfirmDelete)}>
                    { "Delete permanently" }
                </button>
            </div>
        </TopSheet>
    }
}
