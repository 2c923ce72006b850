mod catalog;
mod outlets;
mod overview;
pub mod targets;

use std::{path::PathBuf, sync::Arc};

use log::debug;
use model::{errors::ReportError, sales::SalesRecord};
use storage::source::SalesSource;

#[derive(Clone)]
pub struct Reports {
    source: Arc<dyn SalesSource>,
    targets_path: PathBuf,
}

impl Reports {
    pub fn new(source: Arc<dyn SalesSource>, targets_path: impl Into<PathBuf>) -> Self {
        Reports {
            source,
            targets_path: targets_path.into(),
        }
    }

    async fn sales(&self, outlet: Option<i64>, missing: &str) -> Result<Vec<SalesRecord>, ReportError> {
        let records = self.source.sales(outlet).await?;
        debug!("loaded {} sales records for outlet {:?}", records.len(), outlet);
        non_empty(records, missing)
    }
}

pub(crate) fn non_empty<T>(rows: Vec<T>, missing: &str) -> Result<Vec<T>, ReportError> {
    if rows.is_empty() {
        Err(ReportError::not_found(missing))
    } else {
        Ok(rows)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Arc;

    use bson::{doc, Document};
    use storage::memory::MemoryStore;

    use super::Reports;

    pub fn line(
        transaction_id: i64,
        outlet: i64,
        date: &str,
        time: &str,
        product: i64,
        amount: f64,
    ) -> Document {
        doc! {
            "transaction_id": transaction_id,
            "transaction_date": date,
            "transaction_time": time,
            "sales_outlet_id": outlet,
            "product_id": product,
            "quantity": 1,
            "unit_price": amount,
            "line_item_amount": amount,
            "line_item_id": 1,
            "instore_yn": "Y",
            "Guest": "N",
        }
    }

    pub fn reports(store: MemoryStore) -> Reports {
        Reports::new(Arc::new(store), "missing targets.csv")
    }
}
