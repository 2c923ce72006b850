use log::{error, info};
use model::sales::SalesRecord;
use storage::source::SalesSource;

/// Every line item of the sales collection. A failed read is logged and
/// yields an empty dataset.
pub async fn extract(source: &dyn SalesSource) -> Vec<SalesRecord> {
    match source.sales(None).await {
        Ok(records) => {
            info!("Extracted {} sales records", records.len());
            records
        }
        Err(err) => {
            error!("An error occurred during extraction: {:#}", err);
            Vec::new()
        }
    }
}
