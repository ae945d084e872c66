//! Shared test utilities.
//!
//! This module provides helpers for setting up in-memory databases, creating
//! items with sensible defaults, and deterministic code generators.

use crate::{
    config::database::create_tables,
    core::{
        code::{CodeGenerator, CodeOutcome},
        inventory::{self, NewItem},
    },
    entities,
    errors::Result,
};
use sea_orm::DatabaseConnection;
use std::path::Path;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    create_tables(&db).await?;
    Ok(db)
}

/// Creates a file-backed `SQLite` database inside `dir` with all tables initialized.
/// Use this when several connections must share one database, e.g. concurrency tests.
pub async fn setup_file_db(dir: &Path) -> Result<DatabaseConnection> {
    let url = format!(
        "sqlite://{}?mode=rwc",
        dir.join("inventory.sqlite").display()
    );
    let db = sea_orm::Database::connect(&url).await?;
    create_tables(&db).await?;
    Ok(db)
}

/// Creates an item straight through the store with price 5.0 and a `code:<name>` code.
pub async fn create_test_item(
    db: &DatabaseConnection,
    name: &str,
    quantity: i64,
) -> Result<entities::inventory_item::Model> {
    inventory::create_item(
        db,
        NewItem {
            name: name.to_string(),
            quantity,
            price: 5.0,
            code: Some(format!("code:{name}")),
        },
    )
    .await
}

/// Generator that echoes its input as `code:<text>`.
pub struct LabelCodes;

impl CodeGenerator for LabelCodes {
    fn generate(&self, text: &str) -> CodeOutcome {
        CodeOutcome::Generated(format!("code:{text}"))
    }
}

/// Generator that never produces a code.
pub struct UnavailableCodes;

impl CodeGenerator for UnavailableCodes {
    fn generate(&self, _text: &str) -> CodeOutcome {
        CodeOutcome::Unavailable
    }
}
