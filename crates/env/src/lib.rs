use std::{env::var, sync::Arc};

use dotenv::dotenv;
use eyre::{Context, Error};
use log::info;

const DEFAULT_COLLECTION: &str = "sales";
const DEFAULT_APP_ADDR: &str = "127.0.0.1:5000";
const DEFAULT_TARGETS_PATH: &str = "data/sales targets.csv";
const DEFAULT_METRICS_PATH: &str = "metrics.json";
const DEFAULT_DATA_FILES_CONFIG: &str = "data_files_config.json";

#[derive(Clone)]
pub struct Env(Arc<EnvInner>);

#[derive(Clone)]
pub struct EnvInner {
    mongo_url: String,
    db_name: String,
    collection_name: String,
    app_addr: String,
    sales_targets_path: String,
    metrics_path: String,
    data_files_config: String,
}

impl Env {
    pub fn mongo_url(&self) -> &str {
        &self.0.mongo_url
    }

    pub fn db_name(&self) -> &str {
        &self.0.db_name
    }

    pub fn collection_name(&self) -> &str {
        &self.0.collection_name
    }

    pub fn app_addr(&self) -> &str {
        &self.0.app_addr
    }

    pub fn sales_targets_path(&self) -> &str {
        &self.0.sales_targets_path
    }

    pub fn metrics_path(&self) -> &str {
        &self.0.metrics_path
    }

    pub fn data_files_config(&self) -> &str {
        &self.0.data_files_config
    }

    pub fn load() -> Result<Env, Error> {
        if let Err(err) = dotenv() {
            info!("Failed to load .env file: {}", err);
        }

        Ok(Env(Arc::new(EnvInner {
            mongo_url: var("MONGODB_CONNECTION_STRING")
                .context("MONGODB_CONNECTION_STRING is not set")?,
            db_name: var("DB_NAME").context("DB_NAME is not set")?,
            collection_name: or_default("COLLECTION_NAME", DEFAULT_COLLECTION),
            app_addr: or_default("APP_ADDR", DEFAULT_APP_ADDR),
            sales_targets_path: or_default("SALES_TARGETS_PATH", DEFAULT_TARGETS_PATH),
            metrics_path: or_default("METRICS_PATH", DEFAULT_METRICS_PATH),
            data_files_config: or_default("DATA_FILES_CONFIG", DEFAULT_DATA_FILES_CONFIG),
        })))
    }
}

fn or_default(key: &str, default: &str) -> String {
    var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    })
}
