use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The dashboard aggregate, computed from a single snapshot of the table.
///
/// `low_stock` counts rows with `0 < stock <= 5`; `out_of_stock` counts rows
/// with `stock == 0`. `total_stock` is 0 for an empty store, never null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct InventorySummary {
    pub total_products: i64,
    pub total_stock: i64,
    pub low_stock: i64,
    pub out_of_stock: i64,
}
