use bson::Document;
use eyre::Error;
use log::info;

use crate::session::Db;

/// Untyped writes into collections named at run time.
#[derive(Clone)]
pub struct ImportStore {
    db: Db,
}

impl ImportStore {
    pub(crate) fn new(db: &Db) -> Self {
        ImportStore { db: db.clone() }
    }

    pub async fn insert_many(
        &self,
        collection: &str,
        documents: Vec<Document>,
    ) -> Result<usize, Error> {
        if documents.is_empty() {
            return Ok(0);
        }
        let result = self
            .db
            .collection::<Document>(collection)
            .insert_many(documents)
            .await?;
        info!(
            "Inserted {} documents into {}",
            result.inserted_ids.len(),
            collection
        );
        Ok(result.inserted_ids.len())
    }
}
