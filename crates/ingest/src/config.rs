use std::{
    fs,
    path::{Path, PathBuf},
};

use eyre::{Context as _, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct IngestConfig {
    pub data_files: Vec<DataFile>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DataFile {
    pub path: PathBuf,
    #[serde(default)]
    pub columns_to_drop: Vec<String>,
}

impl IngestConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read ingestion config {}", path.display()))?;
        serde_json::from_str(&data)
            .with_context(|| format!("Failed to parse ingestion config {}", path.display()))
    }
}

impl DataFile {
    /// Base file name up to its first `.`, spaces replaced by `_`:
    /// `data/201904 sales reciepts.csv` -> `201904_sales_reciepts`.
    pub fn collection_name(&self) -> Option<String> {
        let name = self.path.file_name()?.to_str()?;
        let stem = name.split('.').next().unwrap_or(name);
        if stem.is_empty() {
            return None;
        }
        Some(stem.replace(' ', "_"))
    }
}
