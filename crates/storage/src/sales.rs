use std::sync::Arc;

use bson::{doc, Document};
use eyre::Error;
use futures_util::TryStreamExt as _;
use model::sales::SalesRecord;
use mongodb::{Collection, IndexModel};

use crate::fetch::decode_each;

#[derive(Clone)]
pub struct SalesStore {
    store: Arc<Collection<SalesRecord>>,
}

impl SalesStore {
    pub(crate) async fn new(db: &mongodb::Database, name: &str) -> Result<Self, Error> {
        let store = db.collection(name);
        store
            .create_index(
                IndexModel::builder()
                    .keys(doc! { "sales_outlet_id": 1 })
                    .build(),
            )
            .await?;
        Ok(SalesStore {
            store: Arc::new(store),
        })
    }

    pub async fn find(&self, outlet: Option<i64>) -> Result<Vec<SalesRecord>, Error> {
        let cursor = self
            .store
            .clone_with_type::<Document>()
            .find(outlet_filter(outlet))
            .await?;
        Ok(decode_each(self.store.name(), cursor.try_collect().await?))
    }
}

/// Ids may have been imported as numbers or as text.
pub(crate) fn outlet_filter(outlet: Option<i64>) -> Document {
    match outlet {
        Some(id) => doc! { "sales_outlet_id": { "$in": [id, id.to_string()] } },
        None => doc! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outlet_filter() {
        assert_eq!(outlet_filter(None), doc! {});
        assert_eq!(
            outlet_filter(Some(3)),
            doc! { "sales_outlet_id": { "$in": [3_i64, "3"] } }
        );
    }
}
