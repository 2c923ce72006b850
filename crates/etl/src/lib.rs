pub mod extract;
pub mod load;
pub mod transform;

use std::path::Path;

use chrono::NaiveDate;
use log::{error, info, warn};
use model::metrics::MetricsSnapshot;
use storage::source::{MetricsSink, SalesSource};

pub use transform::{parse_date, EtlError, Granularity};

pub struct EtlJob<'a> {
    pub source: &'a dyn SalesSource,
    pub sink: &'a dyn MetricsSink,
    pub metrics_path: &'a Path,
}

impl EtlJob<'_> {
    /// Runs the whole flow. `None` when nothing was loaded.
    pub async fn run(&self, granularity: &str, first: NaiveDate, second: NaiveDate) -> Option<MetricsSnapshot> {
        info!("Starting metrics flow: {} comparison of {} and {}", granularity, first, second);
        let records = extract::extract(self.source).await;
        let metrics = match transform::transform(&records, granularity, first, second) {
            Ok(Some(metrics)) => metrics,
            Ok(None) => {
                warn!("No sales data, metrics are not loaded");
                return None;
            }
            Err(err) => {
                error!("An error occurred during transformation: {}", err);
                return None;
            }
        };
        let snapshot = load::load(self.sink, metrics, self.metrics_path).await;
        info!("Metrics flow finished");
        Some(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;
    use storage::{memory::MemoryStore, metrics::SALES_METRICS};

    fn line(transaction_id: i32, date: &str, amount: f64) -> bson::Document {
        doc! {
            "transaction_id": transaction_id,
            "transaction_date": date,
            "sales_outlet_id": 3,
            "product_id": 1,
            "quantity": 1,
            "unit_price": amount,
            "line_item_amount": amount,
            "line_item_id": 1,
        }
    }

    fn date(value: &str) -> NaiveDate {
        parse_date(value).unwrap()
    }

    #[tokio::test]
    async fn test_flow() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("metrics.json");
        let store = MemoryStore::default().with_sales([
            line(1, "2019-04-01", 6.0),
            line(2, "2019-04-08", 10.0),
        ]);
        let job = EtlJob {
            source: &store,
            sink: &store,
            metrics_path: &path,
        };

        let snapshot = job
            .run("weekly", date("2019-04-01"), date("2019-04-08"))
            .await
            .unwrap();
        assert_eq!(snapshot.metrics.spending_per_receipt, 8.0);
        assert_eq!(snapshot.metrics.items_per_receipt, 1.0);
        assert_eq!(snapshot.metrics.sales_comparison.sales_difference, 4.0);
        assert_eq!(store.documents(SALES_METRICS).len(), 1);
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_invalid_granularity_skips_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("metrics.json");
        let store = MemoryStore::default().with_sales([line(1, "2019-04-01", 6.0)]);
        let job = EtlJob {
            source: &store,
            sink: &store,
            metrics_path: &path,
        };
        assert!(job.run("hourly", date("2019-04-01"), date("2019-04-08")).await.is_none());
        assert!(store.documents(SALES_METRICS).is_empty());
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_empty_dataset_skips_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("metrics.json");
        let store = MemoryStore::default();
        let job = EtlJob {
            source: &store,
            sink: &store,
            metrics_path: &path,
        };
        assert!(job.run("daily", date("2019-04-01"), date("2019-04-02")).await.is_none());
        assert!(!path.exists());
    }
}
