use anyhow::{Context, Result};
use model::product::{NewProduct, Product};
use sqlx::SqlitePool;

/// Overwrites all six writable fields of a product. The id is immutable.
/// Returns `None` when the id is unknown; no row is touched in that case.
pub async fn update_product(
    pool: &SqlitePool,
    id: i64,
    fields: NewProduct,
) -> Result<Option<Product>> {
    let product = sqlx::query_as::<_, Product>(
        r#"
        UPDATE products
        SET name = ?, price = ?, company = ?, category = ?, "use" = ?, stock = ?
        WHERE id = ?
        RETURNING id, name, price, company, category, "use", stock
        "#,
    )
    .bind(&fields.name)
    .bind(fields.price)
    .bind(&fields.company)
    .bind(&fields.category)
    .bind(&fields.intended_use)
    .bind(fields.stock)
    .bind(id)
    .fetch_optional(pool)
    .await
    .context("unable to update product")?;

    Ok(product)
}
