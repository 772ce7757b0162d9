pub mod create_product;
pub mod delete_product;
pub mod distinct_companies;
pub mod get_product;
pub mod get_summary;
pub mod list_products;
pub mod update_product;

pub use create_product::create_product;
pub use delete_product::delete_product;
pub use distinct_companies::distinct_companies;
pub use get_product::get_product;
pub use get_summary::get_summary;
pub use list_products::list_products;
pub use update_product::update_product;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::init::init_db;
    use anyhow::Result;
    use model::product::{NewProduct, Product, ProductFilter, ALL_CATEGORIES, ALL_COMPANIES};
    use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};

    // A single connection keeps every query on the same in-memory database.
    async fn test_pool() -> Result<SqlitePool> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;
        init_db(&pool).await?;
        Ok(pool)
    }

    fn lipstick() -> NewProduct {
        NewProduct {
            name: "Lipstick".to_string(),
            price: 1500.0,
            company: "L'Oréal".to_string(),
            category: "Makeup".to_string(),
            intended_use: "Lips".to_string(),
            stock: 10,
        }
    }

    fn new_product(name: &str, company: &str, category: &str, stock: i64) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            price: 100.0,
            company: company.to_string(),
            category: category.to_string(),
            intended_use: "General".to_string(),
            stock,
        }
    }

    fn filter(q: Option<&str>, category: Option<&str>, company: Option<&str>) -> ProductFilter {
        ProductFilter {
            q: q.map(String::from),
            category: category.map(String::from),
            company: company.map(String::from),
        }
    }

    fn names(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    #[tokio::test]
    async fn create_assigns_id_and_persists_all_fields() -> Result<()> {
        let pool = test_pool().await?;

        let created = create_product(&pool, lipstick()).await?;
        assert!(created.id > 0);
        assert_eq!(created.name, "Lipstick");
        assert_eq!(created.price, 1500.0);
        assert_eq!(created.stock, 10);

        let fetched = get_product(&pool, created.id).await?.expect("row exists");
        assert_eq!(fetched, created);
        Ok(())
    }

    #[tokio::test]
    async fn get_unknown_id_is_none() -> Result<()> {
        let pool = test_pool().await?;
        assert!(get_product(&pool, 999).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn update_overwrites_every_field_and_keeps_id() -> Result<()> {
        let pool = test_pool().await?;
        let created = create_product(&pool, lipstick()).await?;

        let replacement = NewProduct {
            name: "Matte Lipstick".to_string(),
            price: 1800.0,
            company: "Maybelline".to_string(),
            category: "Cosmetics".to_string(),
            intended_use: "Lips, matte finish".to_string(),
            stock: 3,
        };
        let updated = update_product(&pool, created.id, replacement.clone())
            .await?
            .expect("row exists");

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, replacement.name);
        assert_eq!(updated.price, replacement.price);
        assert_eq!(updated.company, replacement.company);
        assert_eq!(updated.category, replacement.category);
        assert_eq!(updated.intended_use, replacement.intended_use);
        assert_eq!(updated.stock, replacement.stock);
        Ok(())
    }

    #[tokio::test]
    async fn update_unknown_id_is_none_and_touches_nothing() -> Result<()> {
        let pool = test_pool().await?;
        let created = create_product(&pool, lipstick()).await?;

        let result = update_product(&pool, created.id + 1, new_product("X", "Y", "Z", 0)).await?;
        assert!(result.is_none());

        let untouched = get_product(&pool, created.id).await?.expect("row exists");
        assert_eq!(untouched.name, "Lipstick");
        Ok(())
    }

    #[tokio::test]
    async fn delete_removes_the_row() -> Result<()> {
        let pool = test_pool().await?;
        let created = create_product(&pool, lipstick()).await?;

        assert!(delete_product(&pool, created.id).await?);
        assert!(get_product(&pool, created.id).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn delete_unknown_id_leaves_store_unchanged() -> Result<()> {
        let pool = test_pool().await?;
        create_product(&pool, lipstick()).await?;

        assert!(!delete_product(&pool, 999).await?);
        assert_eq!(get_summary(&pool).await?.total_products, 1);
        Ok(())
    }

    #[tokio::test]
    async fn search_is_case_insensitive_substring() -> Result<()> {
        let pool = test_pool().await?;
        create_product(&pool, new_product("Lipstick", "L'Oréal", "Makeup", 10)).await?;
        create_product(&pool, new_product("LIP GLOSS", "Maybelline", "Makeup", 4)).await?;
        create_product(&pool, new_product("Eyeliner", "L'Oréal", "Makeup", 0)).await?;

        let matched = list_products(&pool, &filter(Some("lip"), None, None)).await?;
        assert_eq!(names(&matched), vec!["Lipstick", "LIP GLOSS"]);
        Ok(())
    }

    #[tokio::test]
    async fn like_wildcards_in_search_text_match_literally() -> Result<()> {
        let pool = test_pool().await?;
        create_product(&pool, new_product("100% Pure Serum", "Pure Co", "Skincare", 7)).await?;
        create_product(&pool, new_product("100x Pure Serum", "Pure Co", "Skincare", 7)).await?;

        let matched = list_products(&pool, &filter(Some("100%"), None, None)).await?;
        assert_eq!(names(&matched), vec!["100% Pure Serum"]);
        Ok(())
    }

    #[tokio::test]
    async fn facet_filters_compose_conjunctively() -> Result<()> {
        let pool = test_pool().await?;
        create_product(&pool, new_product("Lipstick", "L'Oréal", "Makeup", 10)).await?;
        create_product(&pool, new_product("Lip Balm", "Nivea", "Skincare", 8)).await?;
        create_product(&pool, new_product("Face Cream", "Nivea", "Skincare", 2)).await?;

        let matched =
            list_products(&pool, &filter(Some("lip"), Some("Skincare"), Some("Nivea"))).await?;
        assert_eq!(names(&matched), vec!["Lip Balm"]);
        Ok(())
    }

    #[tokio::test]
    async fn sentinel_filters_return_everything_in_id_order() -> Result<()> {
        let pool = test_pool().await?;
        create_product(&pool, new_product("B", "Nivea", "Skincare", 1)).await?;
        create_product(&pool, new_product("A", "L'Oréal", "Makeup", 2)).await?;

        let all = list_products(
            &pool,
            &filter(Some("  "), Some(ALL_CATEGORIES), Some(ALL_COMPANIES)),
        )
        .await?;
        assert_eq!(names(&all), vec!["B", "A"]);
        Ok(())
    }

    #[tokio::test]
    async fn distinct_companies_is_a_unique_set() -> Result<()> {
        let pool = test_pool().await?;
        create_product(&pool, new_product("Lipstick", "L'Oréal", "Makeup", 10)).await?;
        create_product(&pool, new_product("Mascara", "L'Oréal", "Makeup", 5)).await?;
        create_product(&pool, new_product("Lip Balm", "Nivea", "Skincare", 8)).await?;

        let companies = distinct_companies(&pool).await?;
        assert_eq!(companies, vec!["L'Oréal", "Nivea"]);
        Ok(())
    }

    #[tokio::test]
    async fn summary_of_empty_store_is_all_zeroes() -> Result<()> {
        let pool = test_pool().await?;

        let summary = get_summary(&pool).await?;
        assert_eq!(summary.total_products, 0);
        assert_eq!(summary.total_stock, 0);
        assert_eq!(summary.low_stock, 0);
        assert_eq!(summary.out_of_stock, 0);
        Ok(())
    }

    #[tokio::test]
    async fn summary_counts_partition_by_stock_band() -> Result<()> {
        let pool = test_pool().await?;
        // out of stock, low stock (boundary 1 and 5), healthy (boundary 6)
        create_product(&pool, new_product("A", "C1", "Makeup", 0)).await?;
        create_product(&pool, new_product("B", "C1", "Makeup", 1)).await?;
        create_product(&pool, new_product("C", "C2", "Makeup", 5)).await?;
        create_product(&pool, new_product("D", "C2", "Makeup", 6)).await?;
        create_product(&pool, new_product("E", "C3", "Makeup", 20)).await?;

        let summary = get_summary(&pool).await?;
        assert_eq!(summary.total_products, 5);
        assert_eq!(summary.total_stock, 32);
        assert_eq!(summary.low_stock, 2);
        assert_eq!(summary.out_of_stock, 1);
        assert!(summary.out_of_stock + summary.low_stock <= summary.total_products);
        Ok(())
    }
}
