use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    response::Redirect,
    Form, Json,
};
use inventory_db_client::products::{get_product, update_product};
use model::principal::Principal;

use super::form::ProductForm;
use crate::api::context::AppState;

/// The edit form, pre-filled from the stored row.
#[utoipa::path(
        get,
        tag = "products",
        path = "/edit/{id}",
        operation_id = "edit_product_form",
        params(
            ("id" = i64, Path, description = "id of the product"),
        ),
        responses(
            (status = 200, body = ProductForm),
            (status = 303, description = "no session, redirected to login"),
            (status = 404, body = String),
            (status = 500, body = String),
        )
    )]
#[tracing::instrument(skip_all, fields(user = %principal.username, id))]
pub async fn edit_form_handler(
    State(ctx): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i64>,
) -> Result<Json<ProductForm>, (StatusCode, String)> {
    let product = get_product(&ctx.db, id)
        .await
        .map_err(|e| {
            tracing::error!(error=?e, "unable to get product");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "unable to get product".to_string(),
            )
        })?
        .ok_or((StatusCode::NOT_FOUND, "product not found".to_string()))?;

    Ok(Json(ProductForm::from(product)))
}

/// Overwrites all six writable fields; the id is immutable.
#[utoipa::path(
        post,
        tag = "products",
        path = "/edit/{id}",
        operation_id = "edit_product",
        params(
            ("id" = i64, Path, description = "id of the product"),
        ),
        request_body(content = ProductForm, content_type = "application/x-www-form-urlencoded"),
        responses(
            (status = 303, description = "updated, redirected to the product list"),
            (status = 400, body = String),
            (status = 404, body = String),
            (status = 500, body = String),
        )
    )]
#[tracing::instrument(skip_all, fields(user = %principal.username, id))]
pub async fn update_product_handler(
    State(ctx): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i64>,
    Form(form): Form<ProductForm>,
) -> Result<Redirect, (StatusCode, String)> {
    let fields = form
        .into_new_product()
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    let updated = update_product(&ctx.db, id, fields).await.map_err(|e| {
        tracing::error!(error=?e, "unable to update product");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "unable to update product".to_string(),
        )
    })?;

    if updated.is_none() {
        return Err((StatusCode::NOT_FOUND, "product not found".to_string()));
    }

    Ok(Redirect::to("/products"))
}
