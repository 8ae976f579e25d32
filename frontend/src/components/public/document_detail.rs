//! Public document page: canonical metadata, an OCR excerpt, and the
//! threaded comment section with reporting and submission.

use std::collections::HashSet;

use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::comment::Comment;
use common::model::document::Document;
use common::requests::CreateCommentRequest;

use crate::api::public::PublicApi;
use crate::api::ApiError;
use crate::notify;

const OCR_EXCERPT_CHARS: usize = 600;

pub enum Msg {
    DocumentLoaded(Document),
    CommentsLoaded(Vec<Comment>),
    LoadFailed(ApiError),
    AuthorInput(String),
    TextInput(String),
    ReplyTo(Option<i64>),
    Submit,
    Submitted(Comment),
    SubmitFailed(ApiError),
    Report(i64),
    Reported(i64),
    ReportFailed(i64, ApiError),
}

#[derive(Properties, PartialEq)]
pub struct DocumentDetailProps {
    pub document_id: i64,
    pub on_back: Callback<()>,
}

pub struct DocumentDetailPage {
    document: Option<Document>,
    comments: Vec<Comment>,
    loading: bool,
    author_name: String,
    comment_text: String,
    replying_to: Option<i64>,
    submitting: bool,
    reporting: HashSet<i64>,
    reported: HashSet<i64>,
}

/// Top-level comments paired with their replies, in backend order.
fn build_thread(comments: &[Comment]) -> Vec<(&Comment, Vec<&Comment>)> {
    comments
        .iter()
        .filter(|comment| comment.parent_comment_id.is_none())
        .map(|parent| {
            let replies = comments
                .iter()
                .filter(|reply| reply.parent_comment_id == Some(parent.id))
                .collect();
            (parent, replies)
        })
        .collect()
}

impl Component for DocumentDetailPage {
    type Message = Msg;
    type Properties = DocumentDetailProps;

    fn create(_ctx: &Context<Self>) -> Self {
        DocumentDetailPage {
            document: None,
            comments: Vec::new(),
            loading: true,
            author_name: String::new(),
            comment_text: String::new(),
            replying_to: None,
            submitting: false,
            reporting: HashSet::new(),
            reported: HashSet::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::DocumentLoaded(document) => {
                self.document = Some(document);
                self.loading = false;
                true
            }
            Msg::CommentsLoaded(comments) => {
                self.comments = comments;
                true
            }
            Msg::LoadFailed(err) => {
                self.loading = false;
                notify::error(&format!("Could not load the document: {err}"));
                true
            }
            Msg::AuthorInput(value) => {
                self.author_name = value;
                true
            }
            Msg::TextInput(value) => {
                self.comment_text = value;
                true
            }
            Msg::ReplyTo(parent) => {
                self.replying_to = parent;
                true
            }
            Msg::Submit => {
                if self.submitting {
                    return false;
                }
                let text = self.comment_text.trim().to_string();
                if text.is_empty() {
                    notify::error("Write a comment first.");
                    return false;
                }
                self.submitting = true;
                let author = self.author_name.trim();
                let request = CreateCommentRequest {
                    document_id: ctx.props().document_id,
                    parent_comment_id: self.replying_to,
                    author_name: (!author.is_empty()).then(|| author.to_string()),
                    comment_text: text,
                };
                let link = ctx.link().clone();
                spawn_local(async move {
                    match PublicApi::submit_comment(&request).await {
                        Ok(comment) => link.send_message(Msg::Submitted(comment)),
                        Err(err) => link.send_message(Msg::SubmitFailed(err)),
                    }
                });
                true
            }
            Msg::Submitted(_) => {
                self.submitting = false;
                self.comment_text.clear();
                self.replying_to = None;
                notify::info("Comment submitted; it will appear once a moderator approves it.");
                true
            }
            Msg::SubmitFailed(err) => {
                self.submitting = false;
                notify::error(&format!("Could not submit the comment: {err}"));
                true
            }
            Msg::Report(id) => {
                if self.reported.contains(&id) || !self.reporting.insert(id) {
                    return false;
                }
                let link = ctx.link().clone();
                spawn_local(async move {
                    match PublicApi::report_comment(id).await {
                        Ok(()) => link.send_message(Msg::Reported(id)),
                        Err(err) => link.send_message(Msg::ReportFailed(id, err)),
                    }
                });
                true
            }
            Msg::Reported(id) => {
                self.reporting.remove(&id);
                self.reported.insert(id);
                notify::info("Thanks for the report; a moderator will take a look.");
                true
            }
            Msg::ReportFailed(id, err) => {
                self.reporting.remove(&id);
                notify::error(&format!("Could not report the comment: {err}"));
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let on_back = ctx.props().on_back.clone();
        html! {
            <div class="document-detail-page">
                <button class="back-btn" onclick={Callback::from(move |_| on_back.emit(()))}>
                    { "\u{2190} Back to search" }
                </button>
                {
                    if self.loading {
                        html! { <p class="loading">{ "Loading document…" }</p> }
                    } else {
                        match &self.document {
                            Some(document) => self.build_document(document),
                            None => html! { <p class="empty">{ "Document not found." }</p> },
                        }
                    }
                }
                { self.build_comments(link) }
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }
        let id = ctx.props().document_id;
        let link = ctx.link().clone();
        spawn_local(async move {
            match PublicApi::document(id).await {
                Ok(document) => link.send_message(Msg::DocumentLoaded(document)),
                Err(err) => {
                    link.send_message(Msg::LoadFailed(err));
                    return;
                }
            }
            match PublicApi::thread(id).await {
                Ok(comments) => link.send_message(Msg::CommentsLoaded(comments)),
                Err(err) => link.send_message(Msg::LoadFailed(err)),
            }
        });
    }
}

impl DocumentDetailPage {
    fn build_document(&self, document: &Document) -> Html {
        let place = [
            document.country.as_str(),
            document.state_province.as_str(),
            document.admin_level.as_str(),
        ]
        .iter()
        .filter(|part| !part.is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join(" · ");
        html! {
            <article class="document">
                <h2>{ &document.title }</h2>
                <p class="place">{ place }</p>
                <p class="description">{ &document.description }</p>
                <div class="tags">
                    {
                        document.generated_tags.iter().map(|tag| {
                            html! { <span class="tag-chip" key={tag.clone()}>{ tag }</span> }
                        }).collect::<Html>()
                    }
                </div>
                {
                    match &document.pdf_url {
                        Some(url) => html! {
                            <a class="download" href={url.clone()} target="_blank">
                                { "Download the original document" }
                            </a>
                        },
                        None => html! {},
                    }
                }
                {
                    match &document.ocr_text {
                        Some(text) if !text.is_empty() => {
                            let excerpt: String = text.chars().take(OCR_EXCERPT_CHARS).collect();
                            let truncated = text.chars().count() > OCR_EXCERPT_CHARS;
                            html! {
                                <blockquote class="ocr-excerpt">
                                    { excerpt }{ if truncated { "…" } else { "" } }
                                </blockquote>
                            }
                        }
                        _ => html! {},
                    }
                }
            </article>
        }
    }

    fn build_comments(&self, link: &yew::html::Scope<Self>) -> Html {
        let thread = build_thread(&self.comments);
        html! {
            <section class="comments">
                <h3>{ format!("Comments ({})", self.comments.len()) }</h3>
                {
                    thread.into_iter().map(|(parent, replies)| {
                        html! {
                            <div class="thread" key={parent.id.to_string()}>
                                { self.build_comment(parent, link, true) }
                                <div class="replies">
                                    { replies.into_iter().map(|reply| self.build_comment(reply, link, false)).collect::<Html>() }
                                </div>
                            </div>
                        }
                    }).collect::<Html>()
                }
                { self.build_form(link) }
            </section>
        }
    }

    fn build_comment(
        &self,
        comment: &Comment,
        link: &yew::html::Scope<Self>,
        allow_reply: bool,
    ) -> Html {
        let id = comment.id;
        let reported = self.reported.contains(&id);
        let reporting = self.reporting.contains(&id);
        html! {
            <div class="comment" key={id.to_string()}>
                <span class="author">
                    { comment.author_name.clone().unwrap_or_else(|| "Anonymous".into()) }
                </span>
                <span class="date">{ comment.created_at.format("%Y-%m-%d").to_string() }</span>
                <p>{ &comment.comment_text }</p>
                {
                    if allow_reply {
                        html! {
                            <button class="link-btn" onclick={link.callback(move |_| Msg::ReplyTo(Some(id)))}>
                                { "Reply" }
                            </button>
                        }
                    } else {
                        html! {}
                    }
                }
                <button
                    class="link-btn"
                    disabled={reported || reporting}
                    onclick={link.callback(move |_| Msg::Report(id))}
                >
                    { if reported { "Reported" } else { "Report" } }
                </button>
            </div>
        }
    }

    fn build_form(&self, link: &yew::html::Scope<Self>) -> Html {
        html! {
            <div class="comment-form">
                {
                    match self.replying_to {
                        Some(parent) => html! {
                            <p class="replying-note">
                                { format!("Replying to comment #{parent} ") }
                                <button class="link-btn" onclick={link.callback(|_| Msg::ReplyTo(None))}>
                                    { "cancel" }
                                </button>
                            </p>
                        },
                        None => html! {},
                    }
                }
                <input
                    placeholder="Name (optional)"
                    value={self.author_name.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::AuthorInput(e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                />
                <textarea
                    placeholder="Add a comment"
                    rows={3}
                    value={self.comment_text.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::TextInput(e.target_unchecked_into::<HtmlTextAreaElement>().value())
                    })}
                />
                <button disabled={self.submitting} onclick={link.callback(|_| Msg::Submit)}>
                    { if self.submitting { "Submitting…" } else { "Submit comment" } }
                </button>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::comment::CommentStatus;

    fn comment(id: i64, parent: Option<i64>) -> Comment {
        Comment {
            id,
            document_id: 42,
            document_title: None,
            parent_comment_id: parent,
            author_name: None,
            comment_text: format!("comment {id}"),
            status: CommentStatus::Approved,
            flag_count: 0,
            reply_count: 0,
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_thread_pairs_replies_with_parents() {
        let comments = vec![
            comment(1, None),
            comment(2, Some(1)),
            comment(3, None),
            comment(4, Some(1)),
        ];
        let thread = build_thread(&comments);
        assert_eq!(thread.len(), 2);
        assert_eq!(thread[0].0.id, 1);
        assert_eq!(
            thread[0].1.iter().map(|reply| reply.id).collect::<Vec<_>>(),
            vec![2, 4]
        );
        assert!(thread[1].1.is_empty());
    }

    #[test]
    fn test_orphan_reply_is_not_promoted() {
        // A reply whose parent was deleted just stays out of the thread.
        let comments = vec![comment(1, None), comment(2, Some(99))];
        let thread = build_thread(&comments);
        assert_eq!(thread.len(), 1);
        assert!(thread[0].1.is_empty());
    }
}
