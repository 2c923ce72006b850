pub mod catalog;
pub mod fetch;
pub mod import;
pub mod memory;
pub mod metrics;
pub mod sales;
pub mod session;
pub mod source;

use async_trait::async_trait;
use bson::{oid::ObjectId, Document};
use catalog::ReferenceStore;
use eyre::{Context as _, Result};
use fetch::FetchAll as _;
use import::ImportStore;
use log::error;
use metrics::MetricsStore;
use model::{
    catalog::{Customer, PastryInventory, Product, SalesOutlet},
    metrics::SalesMetrics,
    sales::SalesRecord,
};
use sales::SalesStore;
use session::Db;
use source::{DocumentSink, MetricsSink, SalesSource};

pub const DEFAULT_SALES_COLLECTION: &str = "sales";

#[derive(Clone)]
pub struct Storage {
    pub db: Db,
    pub sales: SalesStore,
    pub customers: ReferenceStore<Customer>,
    pub outlets: ReferenceStore<SalesOutlet>,
    pub products: ReferenceStore<Product>,
    pub pastry_inventory: ReferenceStore<PastryInventory>,
    pub metrics: MetricsStore,
    pub import: ImportStore,
}

impl Storage {
    pub async fn new(uri: &str, db_name: &str, sales_collection: &str) -> Result<Self> {
        let db = Db::connect(uri, db_name).await?;
        let sales = SalesStore::new(&db, sales_collection).await?;
        let customers = ReferenceStore::new(&db, catalog::CUSTOMER);
        let outlets = ReferenceStore::new(&db, catalog::SALES_OUTLET);
        let products = ReferenceStore::new(&db, catalog::PRODUCT);
        let pastry_inventory = ReferenceStore::new(&db, catalog::PASTRY_INVENTORY);
        let metrics = MetricsStore::new(&db);
        let import = ImportStore::new(&db);

        Ok(Storage {
            db,
            sales,
            customers,
            outlets,
            products,
            pastry_inventory,
            metrics,
            import,
        })
    }

    /// Connection for one batch run. Failures are logged and yield `None`.
    pub async fn connect(uri: &str, db_name: &str, sales_collection: &str) -> Option<Self> {
        match Storage::new(uri, db_name, sales_collection).await {
            Ok(storage) => Some(storage),
            Err(err) => {
                error!("Error connecting to MongoDB: {:#}", err);
                None
            }
        }
    }

    pub async fn close(self) {
        self.db.close().await;
    }
}

#[async_trait]
impl SalesSource for Storage {
    async fn sales(&self, outlet: Option<i64>) -> Result<Vec<SalesRecord>> {
        self.sales.find(outlet).await.context("Failed to load sales")
    }

    async fn customers(&self) -> Result<Vec<Customer>> {
        self.customers
            .fetch_all()
            .await
            .context("Failed to load customers")
    }

    async fn outlets(&self) -> Result<Vec<SalesOutlet>> {
        self.outlets
            .fetch_all()
            .await
            .context("Failed to load sales outlets")
    }

    async fn products(&self) -> Result<Vec<Product>> {
        self.products
            .fetch_all()
            .await
            .context("Failed to load products")
    }

    async fn pastry_inventory(&self) -> Result<Vec<PastryInventory>> {
        self.pastry_inventory
            .fetch_all()
            .await
            .context("Failed to load pastry inventory")
    }
}

#[async_trait]
impl DocumentSink for Storage {
    async fn insert_documents(&self, collection: &str, documents: Vec<Document>) -> Result<usize> {
        self.import.insert_many(collection, documents).await
    }
}

#[async_trait]
impl MetricsSink for Storage {
    async fn insert_metrics(&self, metrics: &SalesMetrics) -> Result<ObjectId> {
        self.metrics.insert(metrics).await
    }
}
