use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiKeyScope {
    Upload,
    Download,
}

impl ApiKeyScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiKeyScope::Upload => "upload",
            ApiKeyScope::Download => "download",
        }
    }
}

/// A provisioned API key as it appears in every list and detail response.
///
/// Deliberately does **not** carry the secret: the plaintext key exists only
/// in the creation response (`requests::CreateApiKeyResponse`) and can never
/// be retrieved again. Only the displayable prefix survives here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiKey {
    pub id: i64,
    pub name: String,
    pub key_prefix: String,
    pub scopes: Vec<ApiKeyScope>,
    pub is_active: bool,
    #[serde(default)]
    pub usage_count: u64,
    pub created_at: DateTime<Utc>,
}
