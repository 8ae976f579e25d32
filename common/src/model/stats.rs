use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryCount {
    pub country: String,
    pub count: u64,
}

/// Aggregate counts shown on the public search page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentStats {
    pub total_documents: u64,
    #[serde(default)]
    pub by_country: Vec<CountryCount>,
}
