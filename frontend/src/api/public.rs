use gloo_net::http::Request;

use common::model::comment::Comment;
use common::model::document::Document;
use common::model::stats::DocumentStats;
use common::requests::CreateCommentRequest;

use super::{decode, send, send_json, ApiError};

/// Unauthenticated endpoints behind the public pages. Only approved content
/// comes back from these; filtering is the backend's concern.
pub struct PublicApi;

impl PublicApi {
    pub async fn search(query: &str, country: &str) -> Result<Vec<Document>, ApiError> {
        let mut params: Vec<(&str, &str)> = vec![("q", query)];
        if !country.is_empty() {
            params.push(("country", country));
        }
        let response = send(Request::get("/api/documents/search").query(params)).await?;
        decode(response).await
    }

    pub async fn stats() -> Result<DocumentStats, ApiError> {
        let response = send(Request::get("/api/documents/stats")).await?;
        decode(response).await
    }

    pub async fn document(id: i64) -> Result<Document, ApiError> {
        let response = send(Request::get(&format!("/api/documents/{id}"))).await?;
        decode(response).await
    }

    pub async fn thread(document_id: i64) -> Result<Vec<Comment>, ApiError> {
        let response =
            send(Request::get(&format!("/api/comments/document/{document_id}"))).await?;
        decode(response).await
    }

    pub async fn submit_comment(request: &CreateCommentRequest) -> Result<Comment, ApiError> {
        let response = send_json(Request::post("/api/comments"), request).await?;
        decode(response).await
    }

    pub async fn report_comment(id: i64) -> Result<(), ApiError> {
        send(Request::post(&format!("/api/comments/{id}/report"))).await?;
        Ok(())
    }
}
