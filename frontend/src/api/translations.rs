use gloo_net::http::Request;

use common::model::translation::TranslationEntry;
use common::requests::BulkTranslationUpdate;

use super::{decode, send_authed, send_authed_json, ApiError};
use crate::session::Session;

pub struct TranslationApi {
    session: Session,
}

impl TranslationApi {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    pub async fn list(
        &self,
        language: &str,
        section: &str,
    ) -> Result<Vec<TranslationEntry>, ApiError> {
        let response = send_authed(
            Request::get(&format!("/api/translations/admin/{language}/{section}")),
            &self.session,
        )
        .await?;
        decode(response).await
    }

    /// One call per `(language, section)` pair, carrying only changed keys.
    pub async fn bulk_update(
        &self,
        language: &str,
        section: &str,
        update: &BulkTranslationUpdate,
    ) -> Result<(), ApiError> {
        send_authed_json(
            Request::put(&format!(
                "/api/translations/admin/bulk-update/{language}/{section}"
            )),
            &self.session,
            update,
        )
        .await?;
        Ok(())
    }
}
