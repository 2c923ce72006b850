use async_trait::async_trait;
use bson::{oid::ObjectId, Document};
use eyre::Error;
use model::{
    catalog::{Customer, PastryInventory, Product, SalesOutlet},
    metrics::SalesMetrics,
    sales::SalesRecord,
};

/// Read side used by the reports and the metrics extract.
#[async_trait]
pub trait SalesSource: Send + Sync {
    /// Line items of one outlet, or of every outlet when `outlet` is `None`.
    async fn sales(&self, outlet: Option<i64>) -> Result<Vec<SalesRecord>, Error>;
    async fn customers(&self) -> Result<Vec<Customer>, Error>;
    async fn outlets(&self) -> Result<Vec<SalesOutlet>, Error>;
    async fn products(&self) -> Result<Vec<Product>, Error>;
    async fn pastry_inventory(&self) -> Result<Vec<PastryInventory>, Error>;
}

/// Bulk writes of raw imported rows.
#[async_trait]
pub trait DocumentSink: Send + Sync {
    async fn insert_documents(
        &self,
        collection: &str,
        documents: Vec<Document>,
    ) -> Result<usize, Error>;
}

#[async_trait]
pub trait MetricsSink: Send + Sync {
    async fn insert_metrics(&self, metrics: &SalesMetrics) -> Result<ObjectId, Error>;
}
