use async_trait::async_trait;
use bson::{doc, Document};
use eyre::Error;
use futures_util::TryStreamExt as _;
use log::warn;
use serde::de::DeserializeOwned;

#[async_trait]
pub trait FetchAll<Item> {
    async fn fetch_all(&self) -> Result<Vec<Item>, Error>;
}

pub trait Collection<Item>
where
    Item: DeserializeOwned + Send + Sync + Unpin + 'static,
{
    fn collection(&self) -> &mongodb::Collection<Item>;
}

#[async_trait]
impl<Item, C> FetchAll<Item> for C
where
    Item: DeserializeOwned + Send + Sync + Unpin + 'static,
    C: Collection<Item> + Send + Sync,
{
    async fn fetch_all(&self) -> Result<Vec<Item>, Error> {
        let collection = self.collection();
        let cursor = collection.clone_with_type::<Document>().find(doc! {}).await?;
        Ok(decode_each(collection.name(), cursor.try_collect().await?))
    }
}

/// Decodes documents one by one. Rows that do not decode are skipped and counted.
pub fn decode_each<Item: DeserializeOwned>(collection: &str, documents: Vec<Document>) -> Vec<Item> {
    let total = documents.len();
    let mut first_error = None;
    let items: Vec<Item> = documents
        .into_iter()
        .filter_map(|document| match bson::from_document(document) {
            Ok(item) => Some(item),
            Err(err) => {
                first_error.get_or_insert(err);
                None
            }
        })
        .collect();
    if let Some(err) = first_error {
        warn!(
            "Skipped {} of {} documents of {}: {}",
            total - items.len(),
            total,
            collection,
            err
        );
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::catalog::SalesOutlet;

    #[test]
    fn test_decode_each_skips_bad_rows() {
        let documents = vec![
            doc! { "sales_outlet_id": 3, "store_city": "Astoria" },
            doc! { "sales_outlet_id": bson::Bson::Null, "store_city": "Nowhere" },
            doc! { "sales_outlet_id": "5", "store_city": "Long Island City" },
        ];
        let outlets: Vec<SalesOutlet> = decode_each("sales_outlet", documents);
        assert_eq!(outlets.len(), 2);
        assert_eq!(outlets[1].sales_outlet_id, 5);
        assert!(decode_each::<SalesOutlet>("sales_outlet", Vec::new()).is_empty());
    }
}
