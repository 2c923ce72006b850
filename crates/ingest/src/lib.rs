pub mod config;
pub mod table;

use std::{fmt, path::PathBuf};

use config::{DataFile, IngestConfig};
use eyre::{eyre, Result};
use log::{error, info, warn};
use storage::source::DocumentSink;
use table::Table;

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Stored { collection: String, documents: usize },
    Missing,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub outcome: Outcome,
}

impl fmt::Display for FileOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Outcome::Stored {
                collection,
                documents,
            } => write!(
                f,
                "{}: {} documents stored into {}",
                self.path.display(),
                documents,
                collection
            ),
            Outcome::Missing => write!(f, "{}: does not exist, skipped", self.path.display()),
            Outcome::Failed(err) => write!(f, "{}: failed: {}", self.path.display(), err),
        }
    }
}

pub async fn ingest(sink: &dyn DocumentSink, config: &IngestConfig) -> Vec<FileOutcome> {
    let mut outcomes = Vec::with_capacity(config.data_files.len());
    for file in &config.data_files {
        let outcome = if !file.path.exists() {
            warn!("File {} does not exist and was skipped", file.path.display());
            Outcome::Missing
        } else {
            match store_file(sink, file).await {
                Ok((collection, documents)) => {
                    info!(
                        "Data from {} has been stored into {} ({} documents)",
                        file.path.display(),
                        collection,
                        documents
                    );
                    Outcome::Stored {
                        collection,
                        documents,
                    }
                }
                Err(err) => {
                    error!("Failed to store {}: {:#}", file.path.display(), err);
                    Outcome::Failed(format!("{:#}", err))
                }
            }
        };
        outcomes.push(FileOutcome {
            path: file.path.clone(),
            outcome,
        });
    }
    outcomes
}

async fn store_file(sink: &dyn DocumentSink, file: &DataFile) -> Result<(String, usize)> {
    let collection = file
        .collection_name()
        .ok_or_else(|| eyre!("No collection name for {}", file.path.display()))?;
    let mut table = Table::read(&file.path)?;
    table.drop_columns(&file.columns_to_drop);
    let documents = table.into_documents();
    let stored = sink.insert_documents(&collection, documents).await?;
    Ok((collection, stored))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use storage::memory::MemoryStore;

    fn data_file(path: PathBuf, drop: &[&str]) -> DataFile {
        DataFile {
            path,
            columns_to_drop: drop.iter().map(|c| c.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn test_dropped_columns_are_not_stored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sales outlet.csv");
        fs::write(&path, "A,B,C\n1,x,2.5\n2,y,3\n").unwrap();

        let store = MemoryStore::default();
        let config = IngestConfig {
            data_files: vec![data_file(path, &["B"])],
        };
        let outcomes = ingest(&store, &config).await;
        assert_eq!(
            outcomes[0].outcome,
            Outcome::Stored {
                collection: "sales_outlet".to_string(),
                documents: 2
            }
        );

        let documents = store.documents("sales_outlet");
        assert_eq!(documents.len(), 2);
        for document in &documents {
            let keys: Vec<&String> = document.keys().collect();
            assert_eq!(keys, vec!["A", "C"]);
        }
        assert_eq!(documents[1].get_f64("C").unwrap(), 3.0);
    }

    #[tokio::test]
    async fn test_missing_and_broken_files_do_not_stop_the_batch() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("broken.csv");
        fs::write(&broken, "A,B\n1,2\n3\n").unwrap();
        let good = dir.path().join("customer.csv");
        fs::write(&good, "customer_id,generation\n1,Gen Z\n").unwrap();
        let empty = dir.path().join("empty.csv");
        fs::write(&empty, "customer_id\n").unwrap();

        let store = MemoryStore::default();
        let config = IngestConfig {
            data_files: vec![
                data_file(dir.path().join("absent.csv"), &[]),
                data_file(broken, &[]),
                data_file(good, &[]),
                data_file(empty, &[]),
            ],
        };
        let outcomes = ingest(&store, &config).await;
        assert_eq!(outcomes.len(), 4);
        assert_eq!(outcomes[0].outcome, Outcome::Missing);
        assert!(matches!(outcomes[1].outcome, Outcome::Failed(_)));
        assert_eq!(
            outcomes[2].outcome,
            Outcome::Stored {
                collection: "customer".to_string(),
                documents: 1
            }
        );
        assert_eq!(
            outcomes[3].outcome,
            Outcome::Stored {
                collection: "empty".to_string(),
                documents: 0
            }
        );
        assert!(store.documents("broken").is_empty());
        assert!(store.documents("empty").is_empty());
        assert!(outcomes[0].to_string().contains("skipped"));
    }
}
