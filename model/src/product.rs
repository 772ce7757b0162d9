use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Sentinel dropdown value meaning "no category restriction".
pub const ALL_CATEGORIES: &str = "All Categories";
/// Sentinel dropdown value meaning "no company restriction".
pub const ALL_COMPANIES: &str = "All Companies";

/// A single catalog row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub company: String,
    pub category: String,
    /// Free-text description of intended use
    #[serde(rename = "use")]
    #[sqlx(rename = "use")]
    pub intended_use: String,
    pub stock: i64,
}

/// The six writable fields of a product, already coerced to their stored
/// types. Used for both create and full-overwrite edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub company: String,
    pub category: String,
    #[serde(rename = "use")]
    pub intended_use: String,
    pub stock: i64,
}

/// Optional list filters as they arrive on the query string.
///
/// Filters compose conjunctively; an absent, blank, or sentinel value imposes
/// no restriction. Use the accessor methods rather than the raw fields — they
/// apply the trimming and sentinel rules.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductFilter {
    /// Case-insensitive substring match on the product name
    pub q: Option<String>,
    /// Exact category match, or "All Categories"
    pub category: Option<String>,
    /// Exact company match, or "All Companies"
    pub company: Option<String>,
}

impl ProductFilter {
    /// Search text with surrounding whitespace removed; `None` when blank.
    pub fn search_text(&self) -> Option<&str> {
        self.q
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
    }

    pub fn category(&self) -> Option<&str> {
        self.category
            .as_deref()
            .filter(|c| !c.is_empty() && *c != ALL_CATEGORIES)
    }

    pub fn company(&self) -> Option<&str> {
        self.company
            .as_deref()
            .filter(|c| !c.is_empty() && *c != ALL_COMPANIES)
    }

    pub fn is_unrestricted(&self) -> bool {
        self.search_text().is_none() && self.category().is_none() && self.company().is_none()
    }
}
