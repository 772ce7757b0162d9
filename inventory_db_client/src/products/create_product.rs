use anyhow::{Context, Result};
use model::product::{NewProduct, Product};
use sqlx::SqlitePool;

/// Inserts a product and returns the stored row with its assigned id.
pub async fn create_product(pool: &SqlitePool, new_product: NewProduct) -> Result<Product> {
    let product = sqlx::query_as::<_, Product>(
        r#"
        INSERT INTO products (name, price, company, category, "use", stock)
        VALUES (?, ?, ?, ?, ?, ?)
        RETURNING id, name, price, company, category, "use", stock
        "#,
    )
    .bind(&new_product.name)
    .bind(new_product.price)
    .bind(&new_product.company)
    .bind(&new_product.category)
    .bind(&new_product.intended_use)
    .bind(new_product.stock)
    .fetch_one(pool)
    .await
    .context("unable to create product")?;

    Ok(product)
}
