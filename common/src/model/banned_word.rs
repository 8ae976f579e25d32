use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An entry in the banned-word list used by the backend comment filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BannedWord {
    pub id: i64,
    pub word: String,
    #[serde(default)]
    pub reason: Option<String>,
    pub banned_by: String,
    pub created_at: DateTime<Utc>,
}
