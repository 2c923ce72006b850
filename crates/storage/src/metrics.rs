use std::sync::Arc;

use bson::oid::ObjectId;
use eyre::{eyre, Error};
use model::metrics::SalesMetrics;
use mongodb::Collection;

pub const SALES_METRICS: &str = "sales_metrics";

#[derive(Clone)]
pub struct MetricsStore {
    store: Arc<Collection<SalesMetrics>>,
}

impl MetricsStore {
    pub(crate) fn new(db: &mongodb::Database) -> Self {
        MetricsStore {
            store: Arc::new(db.collection(SALES_METRICS)),
        }
    }

    pub async fn insert(&self, metrics: &SalesMetrics) -> Result<ObjectId, Error> {
        let result = self.store.insert_one(metrics).await?;
        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| eyre!("Unexpected inserted id: {}", result.inserted_id))
    }
}
