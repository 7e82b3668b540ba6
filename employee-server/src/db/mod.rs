//! Database Module
//!
//! Owns the embedded SurrealDB connection and the employee schema.

pub mod convert;
pub mod models;
pub mod repository;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem};

/// Open the embedded in-memory engine and define the employee schema
pub async fn connect() -> Result<Surreal<Db>, surrealdb::Error> {
    let db: Surreal<Db> = Surreal::new::<Mem>(()).await?;
    db.use_ns("employees").use_db("employees").await?;
    define_schema(&db).await?;
    tracing::info!("Database connection established (embedded, in-memory)");
    Ok(db)
}

/// Employee table schema.
///
/// There is deliberately no unique index on `email`: uniqueness is a service
/// invariant checked before insert, and the update path is allowed to bypass
/// it.
async fn define_schema(db: &Surreal<Db>) -> Result<(), surrealdb::Error> {
    db.query("DEFINE TABLE IF NOT EXISTS employee SCHEMAFULL")
        .await?;
    db.query("DEFINE FIELD IF NOT EXISTS email ON employee TYPE string")
        .await?;
    db.query("DEFINE FIELD IF NOT EXISTS first_name ON employee TYPE string")
        .await?;
    db.query("DEFINE FIELD IF NOT EXISTS last_name ON employee TYPE string")
        .await?;
    Ok(())
}
