use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::fetch::Collection;

pub const CUSTOMER: &str = "customer";
pub const SALES_OUTLET: &str = "sales_outlet";
pub const PRODUCT: &str = "product";
pub const PASTRY_INVENTORY: &str = "pastry_inventory";

/// Static reference data, read as a whole.
pub struct ReferenceStore<T: Send + Sync> {
    store: Arc<mongodb::Collection<T>>,
}

impl<T: Send + Sync> Clone for ReferenceStore<T> {
    fn clone(&self) -> Self {
        ReferenceStore {
            store: self.store.clone(),
        }
    }
}

impl<T: Send + Sync> ReferenceStore<T> {
    pub(crate) fn new(db: &mongodb::Database, name: &str) -> Self {
        ReferenceStore {
            store: Arc::new(db.collection(name)),
        }
    }
}

impl<T> Collection<T> for ReferenceStore<T>
where
    T: DeserializeOwned + Send + Sync + Unpin + 'static,
{
    fn collection(&self) -> &mongodb::Collection<T> {
        &self.store
    }
}
