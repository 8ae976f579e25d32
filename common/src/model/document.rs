use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Moderation status of a disclosed document.
///
/// The backend is authoritative for this field: the client only ever
/// *requests* a transition and learns the outcome from a refetch. The wire
/// representation is the lowercase string stored by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    Pending,
    Approved,
    Rejected,
}

impl DocumentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentStatus::Pending => "pending",
            DocumentStatus::Approved => "approved",
            DocumentStatus::Rejected => "rejected",
        }
    }

    /// Uppercase label used by status badges.
    pub fn label(&self) -> &'static str {
        match self {
            DocumentStatus::Pending => "PENDING",
            DocumentStatus::Approved => "APPROVED",
            DocumentStatus::Rejected => "REJECTED",
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, DocumentStatus::Pending)
    }
}

/// A disclosed document as returned by the document-processing API.
///
/// The record is owned by the backend; the client keeps a transient editable
/// copy of the metadata fields which is merged back through an update request
/// on save/approve/reject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub state_province: String,
    #[serde(default)]
    pub admin_level: String,
    /// Location of the uploaded PDF. Present once the upload pipeline has
    /// stored the file; approval triggers processing only when this is set.
    #[serde(default)]
    pub pdf_url: Option<String>,
    pub status: DocumentStatus,
    /// Tags produced by the backend tagging pipeline.
    ///
    /// Historically this column has been written as a real JSON array, as a
    /// JSON-encoded string, or left null. The deserializer normalizes all
    /// three shapes into a plain list so no consumer ever type-sniffs again.
    #[serde(default, deserialize_with = "tags_from_any")]
    pub generated_tags: Vec<String>,
    /// Read-only OCR extract; never sent back on updates.
    #[serde(default)]
    pub ocr_text: Option<String>,
    #[serde(default)]
    pub approved_by: Option<String>,
    #[serde(default)]
    pub approved_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Accepts `["a", "b"]`, `"[\"a\", \"b\"]"`, `null`, or garbage. Anything
/// that cannot be read as a list of strings logs a warning and comes back
/// empty rather than failing the whole document.
fn tags_from_any<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    Ok(normalize_tags(raw))
}

fn normalize_tags(raw: serde_json::Value) -> Vec<String> {
    match raw {
        serde_json::Value::Null => Vec::new(),
        serde_json::Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                serde_json::Value::String(tag) => Some(tag),
                other => {
                    log::warn!("dropping non-string generated_tags entry: {other}");
                    None
                }
            })
            .collect(),
        serde_json::Value::String(encoded) => match serde_json::from_str(&encoded) {
            Ok(tags) => tags,
            Err(err) => {
                log::warn!("unparseable generated_tags string ({err}); defaulting to empty");
                Vec::new()
            }
        },
        other => {
            log::warn!("unexpected generated_tags shape {other}; defaulting to empty");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_json(tags: &str) -> String {
        format!(
            r#"{{
                "id": 42,
                "title": "Budget Leak 2024",
                "status": "pending",
                "generated_tags": {tags},
                "created_at": "2024-03-01T10:00:00Z",
                "updated_at": "2024-03-02T10:00:00Z"
            }}"#
        )
    }

    #[test]
    fn test_tags_from_array() {
        let doc: Document = serde_json::from_str(&doc_json(r#"["budget", "fiscal"]"#)).unwrap();
        assert_eq!(doc.generated_tags, vec!["budget", "fiscal"]);
    }

    #[test]
    fn test_tags_from_encoded_string() {
        let doc: Document =
            serde_json::from_str(&doc_json(r#""[\"budget\", \"fiscal\"]""#)).unwrap();
        assert_eq!(doc.generated_tags, vec!["budget", "fiscal"]);
    }

    #[test]
    fn test_tags_from_null_and_missing() {
        let doc: Document = serde_json::from_str(&doc_json("null")).unwrap();
        assert!(doc.generated_tags.is_empty());

        let without = doc_json("null").replace(r#""generated_tags": null,"#, "");
        let doc: Document = serde_json::from_str(&without).unwrap();
        assert!(doc.generated_tags.is_empty());
    }

    #[test]
    fn test_tags_from_garbage_defaults_to_empty() {
        let doc: Document = serde_json::from_str(&doc_json(r#""not json at all""#)).unwrap();
        assert!(doc.generated_tags.is_empty());

        let doc: Document = serde_json::from_str(&doc_json("17")).unwrap();
        assert!(doc.generated_tags.is_empty());
    }

    #[test]
    fn test_non_string_array_entries_are_dropped() {
        let doc: Document = serde_json::from_str(&doc_json(r#"["budget", 3, "fiscal"]"#)).unwrap();
        assert_eq!(doc.generated_tags, vec!["budget", "fiscal"]);
    }

    #[test]
    fn test_status_round_trip() {
        assert_eq!(
            serde_json::to_string(&DocumentStatus::Approved).unwrap(),
            r#""approved""#
        );
        let status: DocumentStatus = serde_json::from_str(r#""rejected""#).unwrap();
        assert_eq!(status, DocumentStatus::Rejected);
        assert_eq!(status.label(), "REJECTED");
    }
}
