use std::{sync::Arc, time::Duration};

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use tracing::info;

use crate::domain::common::DatabaseConfig;

use super::schema::create_schema;

#[derive(Debug, Clone)]
pub struct RosterDatabase {
    db: Arc<DatabaseConnection>,
}

impl RosterDatabase {
    pub async fn new(config: &DatabaseConfig) -> Result<Self, anyhow::Error> {
        let mut options = ConnectOptions::new(config.url.clone());
        options
            .max_connections(config.max_connections)
            .connect_timeout(Duration::from_secs(8))
            .sqlx_logging(config.sqlx_logging);

        // Each pooled connection to `sqlite::memory:` would see its own database.
        if config.is_sqlite() && config.url.contains(":memory:") {
            options.max_connections(1).min_connections(1);
        }

        let db = Database::connect(options).await?;
        info!(backend = ?db.get_database_backend(), "database connection established");

        Ok(Self { db: Arc::new(db) })
    }

    pub fn get_db(&self) -> Arc<DatabaseConnection> {
        Arc::clone(&self.db)
    }

    /// Creates the `teams` and `members` tables when they are missing.
    pub async fn ensure_schema(&self) -> Result<(), anyhow::Error> {
        create_schema(self.db.as_ref()).await?;
        Ok(())
    }
}
