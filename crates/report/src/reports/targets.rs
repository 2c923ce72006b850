use std::path::Path;

use eyre::{Context as _, Result};
use model::goal::SalesGoal;

/// Reads the sales targets sheet.
pub fn load(path: &Path) -> Result<Vec<SalesGoal>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open sales targets {}", path.display()))?;
    reader
        .deserialize()
        .collect::<Result<Vec<SalesGoal>, _>>()
        .with_context(|| format!("Failed to read sales targets {}", path.display()))
}
