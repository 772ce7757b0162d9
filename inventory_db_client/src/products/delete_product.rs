use anyhow::{Context, Result};
use sqlx::SqlitePool;

/// Hard-deletes one product. Returns `false` when the id is unknown, leaving
/// the store unchanged.
pub async fn delete_product(pool: &SqlitePool, id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM products WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await
        .context("unable to delete product")?;

    Ok(result.rows_affected() > 0)
}
