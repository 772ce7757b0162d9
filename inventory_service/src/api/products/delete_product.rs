use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
};
use inventory_db_client::products::delete_product;
use model::principal::Principal;

use crate::api::context::AppState;

/// Hard-deletes a product. Takes the DELETE verb, not a navigational GET.
#[utoipa::path(
        delete,
        tag = "products",
        path = "/delete/{id}",
        operation_id = "delete_product",
        params(
            ("id" = i64, Path, description = "id of the product"),
        ),
        responses(
            (status = 204, description = "deleted"),
            (status = 303, description = "no session, redirected to login"),
            (status = 404, body = String),
            (status = 500, body = String),
        )
    )]
#[tracing::instrument(skip_all, fields(user = %principal.username, id))]
pub async fn delete_product_handler(
    State(ctx): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i64>,
) -> Result<StatusCode, (StatusCode, String)> {
    let deleted = delete_product(&ctx.db, id).await.map_err(|e| {
        tracing::error!(error=?e, "unable to delete product");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "unable to delete product".to_string(),
        )
    })?;

    if !deleted {
        return Err((StatusCode::NOT_FOUND, "product not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
