use gloo_net::http::Request;

use common::model::banned_word::BannedWord;
use common::model::comment::{Comment, CommentStatus};
use common::requests::{CreateBannedWordRequest, SetCommentStatusRequest};

use super::{decode, send_authed, send_authed_json, ApiError};
use crate::session::Session;

/// Comment moderation plus the banned-word list, which share an API area.
pub struct CommentApi {
    session: Session,
}

impl CommentApi {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    pub async fn list_all(&self) -> Result<Vec<Comment>, ApiError> {
        let response = send_authed(Request::get("/api/comments/admin/all"), &self.session).await?;
        decode(response).await
    }

    pub async fn list_pending(&self) -> Result<Vec<Comment>, ApiError> {
        let response =
            send_authed(Request::get("/api/comments/admin/pending"), &self.session).await?;
        decode(response).await
    }

    pub async fn set_status(&self, id: i64, status: CommentStatus) -> Result<Comment, ApiError> {
        let response = send_authed_json(
            Request::put(&format!("/api/comments/admin/{id}/status")),
            &self.session,
            &SetCommentStatusRequest { status },
        )
        .await?;
        decode(response).await
    }

    /// Permanent removal. There is no soft-delete or undo on the backend.
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        send_authed(
            Request::delete(&format!("/api/comments/admin/{id}")),
            &self.session,
        )
        .await?;
        Ok(())
    }

    pub async fn list_banned_words(&self) -> Result<Vec<BannedWord>, ApiError> {
        let response = send_authed(
            Request::get("/api/comments/admin/banned-words"),
            &self.session,
        )
        .await?;
        decode(response).await
    }

    pub async fn add_banned_word(
        &self,
        request: &CreateBannedWordRequest,
    ) -> Result<BannedWord, ApiError> {
        let response = send_authed_json(
            Request::post("/api/comments/admin/banned-words"),
            &self.session,
            request,
        )
        .await?;
        decode(response).await
    }

    pub async fn delete_banned_word(&self, id: i64) -> Result<(), ApiError> {
        send_authed(
            Request::delete(&format!("/api/comments/admin/banned-words/{id}")),
            &self.session,
        )
        .await?;
        Ok(())
    }
}
