use axum::{
    extract::{Extension, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use inventory_db_client::products::{distinct_companies, list_products};
use model::{
    principal::Principal,
    product::{Product, ProductFilter},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::api::context::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GetProductsResponse {
    pub products: Vec<Product>,
    /// Distinct company values for the filter dropdown
    pub companies: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ListProductsError {
    #[error(transparent)]
    Db(#[from] anyhow::Error),
}

impl IntoResponse for ListProductsError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            ListProductsError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        tracing::error!(error=?self, "unable to list products");
        (status, "unable to list products".to_string()).into_response()
    }
}

#[utoipa::path(
        get,
        tag = "products",
        path = "/products",
        operation_id = "list_products",
        params(ProductFilter),
        responses(
            (status = 200, body = GetProductsResponse),
            (status = 303, description = "no session, redirected to login"),
            (status = 500, body = String),
        )
    )]
#[tracing::instrument(skip_all, fields(user = %principal.username))]
pub async fn list_products_handler(
    State(ctx): State<AppState>,
    Extension(principal): Extension<Principal>,
    Query(filter): Query<ProductFilter>,
) -> Result<Json<GetProductsResponse>, ListProductsError> {
    let products = list_products(&ctx.db, &filter).await?;

    // Dropdown values come from the full table, not the filtered rows.
    let companies = distinct_companies(&ctx.db).await?;

    Ok(Json(GetProductsResponse {
        products,
        companies,
    }))
}
