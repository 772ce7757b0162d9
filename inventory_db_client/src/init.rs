use anyhow::{Context, Result};
use sqlx::SqlitePool;

/// Creates the products table if it does not exist yet.
///
/// There is no migration tooling; the schema is fixed and this runs once at
/// startup.
pub async fn init_db(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS products (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            price REAL NOT NULL,
            company TEXT NOT NULL,
            category TEXT NOT NULL,
            "use" TEXT NOT NULL,
            stock INTEGER NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await
    .context("unable to create products table")?;

    Ok(())
}
