use anyhow::{Context, Result};
use model::summary::InventorySummary;
use sqlx::SqlitePool;

/// Computes the four dashboard aggregates in one statement so they come from
/// a single snapshot of the table.
pub async fn get_summary(pool: &SqlitePool) -> Result<InventorySummary> {
    let summary = sqlx::query_as::<_, InventorySummary>(
        r#"
        SELECT
            COUNT(*) AS total_products,
            COALESCE(SUM(stock), 0) AS total_stock,
            COALESCE(SUM(CASE WHEN stock > 0 AND stock <= 5 THEN 1 ELSE 0 END), 0) AS low_stock,
            COALESCE(SUM(CASE WHEN stock = 0 THEN 1 ELSE 0 END), 0) AS out_of_stock
        FROM products
        "#,
    )
    .fetch_one(pool)
    .await
    .context("failed to compute inventory summary")?;

    Ok(summary)
}
