use std::ops::Deref;

use bson::doc;
use eyre::{Context as _, Error};
use log::debug;
use mongodb::{options::ClientOptions, Client, Database};

const APP_NAME: &str = "sales-analytics";

/// Handle on the analytics database. Batch runs open one and close it when done.
#[derive(Clone)]
pub struct Db {
    client: Client,
    db: Database,
}

impl Db {
    pub(crate) async fn connect(uri: &str, db_name: &str) -> Result<Self, Error> {
        let mut options = ClientOptions::parse(uri)
            .await
            .context("Invalid MongoDB connection string")?;
        options.app_name = Some(APP_NAME.to_string());
        let client = Client::with_options(options).context("Failed to connect to MongoDB")?;
        let db = client.database(db_name);
        db.run_command(doc! { "ping": 1 })
            .await
            .with_context(|| format!("Failed to ping database {}", db_name))?;
        debug!("connected to database {}", db_name);
        Ok(Db { client, db })
    }

    /// Waits for open cursors and sessions, then drops the connection pool.
    pub async fn close(self) {
        debug!("closing connection to database {}", self.db.name());
        self.client.shutdown().await;
    }
}

impl Deref for Db {
    type Target = Database;

    fn deref(&self) -> &Self::Target {
        &self.db
    }
}
