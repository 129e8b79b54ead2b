use serde::{Deserialize, Serialize};

/// One item as returned by the search index, keyed by column name.
pub type RawRecord = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub value: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub cross_references: Vec<serde_json::Value>,
    pub fields: Vec<Field>,
}

/// Static description of the published release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseMetadata {
    pub name: String,
    pub release: String,
    /// `DD-MM-YYYY`
    pub release_date: String,
}

impl Default for ReleaseMetadata {
    fn default() -> Self {
        Self {
            name: "CancerModels.Org".to_string(),
            release: "v6.4".to_string(),
            release_date: "18-07-2024".to_string(),
        }
    }
}

/// The EBI Search dump. Field order here is the key order on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDocument {
    pub entry_count: usize,
    pub name: String,
    pub release: String,
    pub release_date: String,
    pub entries: Vec<Entry>,
}

#[derive(Debug, Clone)]
pub struct ExtractResult {
    pub entries: Vec<Entry>,
    pub total_count: usize,
    pub pages_fetched: usize,
}

/// Files produced by the serializer.
#[derive(Debug, Clone)]
pub struct ExportArtifacts {
    pub json_path: std::path::PathBuf,
    pub gzip_path: std::path::PathBuf,
    pub entry_count: usize,
}

#[derive(Debug, Clone)]
pub struct ExportSummary {
    pub entry_count: usize,
    pub json_path: std::path::PathBuf,
    pub gzip_path: std::path::PathBuf,
    pub remote_path: String,
}
