//! Server state

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::core::{Config, Result};
use crate::db;

/// Shared application state.
///
/// The composition root wires the config and the storage handle here;
/// handlers build services on top of it per request. Cloning is cheap — the
/// database handle is reference-counted internally.
#[derive(Clone, Debug)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Embedded database (SurrealDB)
    pub db: Surreal<Db>,
}

impl ServerState {
    pub fn new(config: Config, db: Surreal<Db>) -> Self {
        Self { config, db }
    }

    /// Connect the embedded store and build the state
    pub async fn initialize(config: &Config) -> Result<Self> {
        let db = db::connect().await?;
        Ok(Self::new(config.clone(), db))
    }
}
