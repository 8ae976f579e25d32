use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::api_key::{ApiKey, ApiKeyScope};
use crate::model::comment::CommentStatus;
use crate::model::document::DocumentStatus;

/// Partial update of a document row. Only the populated fields are sent, so
/// the same payload serves the metadata save and the status transition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateDocumentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_province: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DocumentStatus>,
}

impl UpdateDocumentRequest {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.country.is_none()
            && self.state_province.is_none()
            && self.admin_level.is_none()
            && self.generated_tags.is_none()
            && self.status.is_none()
    }
}

/// Fire-and-forget trigger for the backend OCR/tagging pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessDocumentRequest {
    pub document_id: i64,
    pub pdf_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCommentRequest {
    pub document_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_comment_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    pub comment_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetCommentStatusRequest {
    pub status: CommentStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBannedWordRequest {
    pub word: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAdminRequest {
    pub email: String,
    pub name: String,
    pub is_super_admin: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateAdminRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_super_admin: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateApiKeyRequest {
    pub name: String,
    pub scopes: Vec<ApiKeyScope>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateApiKeyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Creation response: the only place the plaintext secret ever appears.
/// Subsequent list responses carry the bare `ApiKey` with its prefix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateApiKeyResponse {
    pub api_key: ApiKey,
    pub plaintext_key: String,
}

/// Bulk persistence of changed keys for one `(language, section)` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkTranslationUpdate {
    pub translations: BTreeMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_document_serializes_only_populated_fields() {
        let req = UpdateDocumentRequest {
            title: Some("Budget Leak 2024".into()),
            ..Default::default()
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json, serde_json::json!({ "title": "Budget Leak 2024" }));

        let status_only = UpdateDocumentRequest {
            status: Some(DocumentStatus::Approved),
            ..Default::default()
        };
        let json = serde_json::to_value(&status_only).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "approved" }));
    }

    #[test]
    fn test_empty_update_detected() {
        assert!(UpdateDocumentRequest::default().is_empty());
        let req = UpdateDocumentRequest {
            country: Some("Kenya".into()),
            ..Default::default()
        };
        assert!(!req.is_empty());
    }

    #[test]
    fn test_process_document_payload_shape() {
        let req = ProcessDocumentRequest {
            document_id: 42,
            pdf_url: "https://files.example/42.pdf".into(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "document_id": 42,
                "pdf_url": "https://files.example/42.pdf"
            })
        );
    }

    #[test]
    fn test_plaintext_key_exists_only_in_the_create_response() {
        let created: CreateApiKeyResponse = serde_json::from_str(
            r#"{
                "api_key": {
                    "id": 1,
                    "name": "ci-uploader",
                    "key_prefix": "dk_live_ab",
                    "scopes": ["upload"],
                    "is_active": true,
                    "usage_count": 0,
                    "created_at": "2024-03-01T10:00:00Z"
                },
                "plaintext_key": "dk_live_abcdef1234567890"
            }"#,
        )
        .unwrap();
        assert_eq!(created.plaintext_key, "dk_live_abcdef1234567890");

        // The list/detail shape carries the prefix and nothing more; the
        // secret cannot round-trip because the type has no field for it.
        let listed = serde_json::to_string(&created.api_key).unwrap();
        assert!(!listed.contains("dk_live_abcdef1234567890"));
        assert!(listed.contains("dk_live_ab"));
    }

    #[test]
    fn test_bulk_translation_payload_shape() {
        let mut translations = BTreeMap::new();
        translations.insert("greeting".to_string(), "Hallo".to_string());
        let req = BulkTranslationUpdate { translations };
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"translations":{"greeting":"Hallo"}}"#);
    }
}
