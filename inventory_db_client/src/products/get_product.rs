use anyhow::{Context, Result};
use model::product::Product;
use sqlx::SqlitePool;

/// Fetches one product by id; `None` when the id is unknown.
pub async fn get_product(pool: &SqlitePool, id: i64) -> Result<Option<Product>> {
    let product = sqlx::query_as::<_, Product>(
        r#"
        SELECT id, name, price, company, category, "use", stock
        FROM products
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
    .context("failed to get product")?;

    Ok(product)
}
