use anyhow::{Context, Result};
use model::product::{Product, ProductFilter};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

/// Lists products matching the filter, in insertion (id) order.
///
/// Conditions compose conjunctively; the filter's accessor methods have
/// already dropped blank and sentinel values.
pub async fn list_products(pool: &SqlitePool, filter: &ProductFilter) -> Result<Vec<Product>> {
    let mut query_builder: QueryBuilder<Sqlite> = QueryBuilder::new(
        r#"SELECT id, name, price, company, category, "use", stock FROM products"#,
    );

    let mut first_condition = true;
    let mut push_condition = |builder: &mut QueryBuilder<Sqlite>| {
        if first_condition {
            builder.push(" WHERE ");
            first_condition = false;
        } else {
            builder.push(" AND ");
        }
    };

    if let Some(q) = filter.search_text() {
        push_condition(&mut query_builder);
        query_builder
            .push("LOWER(name) LIKE ")
            .push_bind(format!("%{}%", escape_like(&q.to_lowercase())))
            .push(" ESCAPE '\\'");
    }

    if let Some(category) = filter.category() {
        push_condition(&mut query_builder);
        query_builder
            .push("category = ")
            .push_bind(category.to_owned());
    }

    if let Some(company) = filter.company() {
        push_condition(&mut query_builder);
        query_builder
            .push("company = ")
            .push_bind(company.to_owned());
    }

    query_builder.push(" ORDER BY id");

    let products = query_builder
        .build_query_as::<Product>()
        .fetch_all(pool)
        .await
        .context("failed to list products")?;

    Ok(products)
}

/// Escapes LIKE wildcards so search text is matched literally.
fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::escape_like;

    #[test]
    fn escapes_like_wildcards() {
        assert_eq!(escape_like("100%_pure\\"), "100\\%\\_pure\\\\");
        assert_eq!(escape_like("lipstick"), "lipstick");
    }
}
