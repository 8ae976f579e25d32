use gloo_net::http::Request;

use common::model::document::{Document, DocumentStatus};
use common::requests::{ProcessDocumentRequest, UpdateDocumentRequest};

use super::{decode, send_authed, send_authed_json, ApiError};
use crate::session::Session;

/// CRUD and status-transition calls against the document-processing API.
pub struct DocumentApi {
    session: Session,
}

impl DocumentApi {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    pub async fn list_by_status(&self, status: DocumentStatus) -> Result<Vec<Document>, ApiError> {
        let response = send_authed(
            Request::get("/api/document-processing/documents")
                .query([("status", status.as_str())]),
            &self.session,
        )
        .await?;
        decode(response).await
    }

    pub async fn fetch(&self, id: i64) -> Result<Document, ApiError> {
        let response = send_authed(
            Request::get(&format!("/api/document-processing/documents/{id}")),
            &self.session,
        )
        .await?;
        decode(response).await
    }

    /// Partial update of metadata and/or status. Returns the updated row.
    pub async fn update(
        &self,
        id: i64,
        update: &UpdateDocumentRequest,
    ) -> Result<Document, ApiError> {
        let response = send_authed_json(
            Request::put(&format!("/api/document-processing/documents/{id}")),
            &self.session,
            update,
        )
        .await?;
        decode(response).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        send_authed(
            Request::delete(&format!("/api/document-processing/delete-document/{id}")),
            &self.session,
        )
        .await?;
        Ok(())
    }

    /// Kicks off OCR/tagging for an approved document. Fire-and-forget from
    /// the UI's perspective; the backend answers as soon as the job is queued.
    pub async fn process(&self, request: &ProcessDocumentRequest) -> Result<(), ApiError> {
        send_authed_json(
            Request::post("/api/document-processing/process-document"),
            &self.session,
            request,
        )
        .await?;
        Ok(())
    }
}
