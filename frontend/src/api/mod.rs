//! Thin HTTP repositories over the platform backend.
//!
//! Every repository wraps one API area with typed methods returning
//! `Result<T, ApiError>`. Requests carry the session bearer token; a 401 or
//! 403 response expires the session and redirects to the login route before
//! the error even reaches the caller. Response normalization (for example
//! the `generated_tags` shapes) happens at this boundary so components only
//! ever see canonical types.

use gloo_net::http::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::session::{self, Session};

pub mod admin;
pub mod comments;
pub mod documents;
pub mod public;
pub mod translations;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or expired credentials. The session has already been cleared
    /// and the browser pointed at the login route when this is returned.
    #[error("session expired; sign in again")]
    Unauthorized,
    #[error("request failed ({status}): {message}")]
    Http { status: u16, message: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

pub(crate) async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
    expect_ok(builder.send().await).await
}

pub(crate) async fn send_json<B: Serialize>(
    builder: RequestBuilder,
    body: &B,
) -> Result<Response, ApiError> {
    let request = builder
        .json(body)
        .map_err(|err| ApiError::Network(err.to_string()))?;
    expect_ok(request.send().await).await
}

pub(crate) async fn send_authed(
    builder: RequestBuilder,
    session: &Session,
) -> Result<Response, ApiError> {
    send(builder.header("Authorization", &session.bearer())).await
}

pub(crate) async fn send_authed_json<B: Serialize>(
    builder: RequestBuilder,
    session: &Session,
    body: &B,
) -> Result<Response, ApiError> {
    send_json(builder.header("Authorization", &session.bearer()), body).await
}

pub(crate) async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

async fn expect_ok(result: Result<Response, gloo_net::Error>) -> Result<Response, ApiError> {
    match result {
        Ok(response) if response.ok() => Ok(response),
        Ok(response) => Err(error_from_response(response).await),
        Err(err) => Err(ApiError::Network(err.to_string())),
    }
}

async fn error_from_response(response: Response) -> ApiError {
    let status = response.status();
    if status == 401 || status == 403 {
        gloo_console::warn!("authentication rejected; clearing the session");
        session::expire_to_login();
        return ApiError::Unauthorized;
    }
    let message = response.text().await.unwrap_or_default();
    gloo_console::warn!(format!("request failed with {status}: {message}"));
    ApiError::Http { status, message }
}
