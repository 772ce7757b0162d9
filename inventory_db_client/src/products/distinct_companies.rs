use anyhow::{Context, Result};
use sqlx::SqlitePool;

/// The unique set of company values across all rows, for the filter dropdown.
/// Recomputed per request, never cached.
pub async fn distinct_companies(pool: &SqlitePool) -> Result<Vec<String>> {
    let companies =
        sqlx::query_scalar::<_, String>("SELECT DISTINCT company FROM products ORDER BY company")
            .fetch_all(pool)
            .await
            .context("failed to list companies")?;

    Ok(companies)
}
