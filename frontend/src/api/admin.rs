use gloo_net::http::Request;

use common::model::admin::AdminAccount;
use common::model::api_key::ApiKey;
use common::requests::{
    CreateAdminRequest, CreateApiKeyRequest, CreateApiKeyResponse, UpdateAdminRequest,
    UpdateApiKeyRequest,
};

use super::{decode, send_authed, send_authed_json, ApiError};
use crate::session::Session;

pub struct AdminApi {
    session: Session,
}

impl AdminApi {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    pub async fn list_admins(&self) -> Result<Vec<AdminAccount>, ApiError> {
        let response = send_authed(
            Request::get("/api/admin-management/admins"),
            &self.session,
        )
        .await?;
        decode(response).await
    }

    pub async fn create_admin(
        &self,
        request: &CreateAdminRequest,
    ) -> Result<AdminAccount, ApiError> {
        let response = send_authed_json(
            Request::post("/api/admin-management/admins"),
            &self.session,
            request,
        )
        .await?;
        decode(response).await
    }

    pub async fn update_admin(
        &self,
        id: i64,
        request: &UpdateAdminRequest,
    ) -> Result<AdminAccount, ApiError> {
        let response = send_authed_json(
            Request::put(&format!("/api/admin-management/admins/{id}")),
            &self.session,
            request,
        )
        .await?;
        decode(response).await
    }

    pub async fn delete_admin(&self, id: i64) -> Result<(), ApiError> {
        send_authed(
            Request::delete(&format!("/api/admin-management/admins/{id}")),
            &self.session,
        )
        .await?;
        Ok(())
    }

    pub async fn list_api_keys(&self) -> Result<Vec<ApiKey>, ApiError> {
        let response = send_authed(
            Request::get("/api/admin-management/api-keys"),
            &self.session,
        )
        .await?;
        decode(response).await
    }

    /// The response is the only time the plaintext secret crosses the wire.
    pub async fn create_api_key(
        &self,
        request: &CreateApiKeyRequest,
    ) -> Result<CreateApiKeyResponse, ApiError> {
        let response = send_authed_json(
            Request::post("/api/admin-management/api-keys"),
            &self.session,
            request,
        )
        .await?;
        decode(response).await
    }

    pub async fn update_api_key(
        &self,
        id: i64,
        request: &UpdateApiKeyRequest,
    ) -> Result<ApiKey, ApiError> {
        let response = send_authed_json(
            Request::put(&format!("/api/admin-management/api-keys/{id}")),
            &self.session,
            request,
        )
        .await?;
        decode(response).await
    }

    pub async fn delete_api_key(&self, id: i64) -> Result<(), ApiError> {
        send_authed(
            Request::delete(&format!("/api/admin-management/api-keys/{id}")),
            &self.session,
        )
        .await?;
        Ok(())
    }
}
