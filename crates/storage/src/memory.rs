use std::collections::HashMap;

use async_trait::async_trait;
use bson::{oid::ObjectId, Document};
use eyre::{bail, Context as _, Result};
use model::{
    catalog::{Customer, PastryInventory, Product, SalesOutlet},
    metrics::SalesMetrics,
    sales::SalesRecord,
};
use parking_lot::RwLock;
use serde::de::DeserializeOwned;

use crate::{
    catalog::{CUSTOMER, PASTRY_INVENTORY, PRODUCT, SALES_OUTLET},
    fetch::decode_each,
    metrics::SALES_METRICS,
    source::{DocumentSink, MetricsSink, SalesSource},
    DEFAULT_SALES_COLLECTION,
};

pub struct MemoryStore {
    sales_collection: String,
    collections: RwLock<HashMap<String, Vec<Document>>>,
    unavailable: bool,
}

impl Default for MemoryStore {
    fn default() -> Self {
        MemoryStore::new(DEFAULT_SALES_COLLECTION)
    }
}

impl MemoryStore {
    pub fn new(sales_collection: &str) -> Self {
        MemoryStore {
            sales_collection: sales_collection.to_string(),
            collections: RwLock::new(HashMap::new()),
            unavailable: false,
        }
    }

    /// Every read fails, as with a lost connection.
    pub fn unavailable(mut self) -> Self {
        self.unavailable = true;
        self
    }

    pub fn with<I>(self, collection: &str, documents: I) -> Self
    where
        I: IntoIterator<Item = Document>,
    {
        self.insert(collection, documents);
        self
    }

    pub fn with_sales<I>(self, documents: I) -> Self
    where
        I: IntoIterator<Item = Document>,
    {
        let name = self.sales_collection.clone();
        self.with(&name, documents)
    }

    pub fn insert<I>(&self, collection: &str, documents: I) -> usize
    where
        I: IntoIterator<Item = Document>,
    {
        let mut collections = self.collections.write();
        let entry = collections.entry(collection.to_string()).or_default();
        let before = entry.len();
        entry.extend(documents);
        entry.len() - before
    }

    pub fn documents(&self, collection: &str) -> Vec<Document> {
        self.collections
            .read()
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    fn decode<T: DeserializeOwned>(&self, collection: &str) -> Result<Vec<T>> {
        if self.unavailable {
            bail!("Collection {} is unavailable", collection);
        }
        Ok(decode_each(collection, self.documents(collection)))
    }
}

#[async_trait]
impl SalesSource for MemoryStore {
    async fn sales(&self, outlet: Option<i64>) -> Result<Vec<SalesRecord>> {
        let records = self.decode::<SalesRecord>(&self.sales_collection)?;
        Ok(match outlet {
            Some(id) => records
                .into_iter()
                .filter(|record| record.sales_outlet_id == id)
                .collect(),
            None => records,
        })
    }

    async fn customers(&self) -> Result<Vec<Customer>> {
        self.decode(CUSTOMER)
    }

    async fn outlets(&self) -> Result<Vec<SalesOutlet>> {
        self.decode(SALES_OUTLET)
    }

    async fn products(&self) -> Result<Vec<Product>> {
        self.decode(PRODUCT)
    }

    async fn pastry_inventory(&self) -> Result<Vec<PastryInventory>> {
        self.decode(PASTRY_INVENTORY)
    }
}

#[async_trait]
impl DocumentSink for MemoryStore {
    async fn insert_documents(&self, collection: &str, documents: Vec<Document>) -> Result<usize> {
        Ok(self.insert(collection, documents))
    }
}

#[async_trait]
impl MetricsSink for MemoryStore {
    async fn insert_metrics(&self, metrics: &SalesMetrics) -> Result<ObjectId> {
        let mut document = bson::to_document(metrics).context("Failed to encode metrics")?;
        let id = ObjectId::new();
        document.insert("_id", id);
        self.insert(SALES_METRICS, [document]);
        Ok(id)
    }
}
