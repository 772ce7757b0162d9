use axum::{
    extract::{Extension, State},
    http::StatusCode,
    response::Redirect,
    Form, Json,
};
use inventory_db_client::products::create_product;
use model::principal::Principal;

use super::form::ProductForm;
use crate::api::context::AppState;

/// The empty add-product form.
#[utoipa::path(
        get,
        tag = "products",
        path = "/add",
        operation_id = "add_product_form",
        responses(
            (status = 200, body = ProductForm),
            (status = 303, description = "no session, redirected to login"),
        )
    )]
pub async fn add_form_handler(Extension(_principal): Extension<Principal>) -> Json<ProductForm> {
    Json(ProductForm::default())
}

#[utoipa::path(
        post,
        tag = "products",
        path = "/add",
        operation_id = "add_product",
        request_body(content = ProductForm, content_type = "application/x-www-form-urlencoded"),
        responses(
            (status = 303, description = "created, redirected to the product list"),
            (status = 400, body = String),
            (status = 500, body = String),
        )
    )]
#[tracing::instrument(skip_all, fields(user = %principal.username, name = %form.name))]
pub async fn create_product_handler(
    State(ctx): State<AppState>,
    Extension(principal): Extension<Principal>,
    Form(form): Form<ProductForm>,
) -> Result<Redirect, (StatusCode, String)> {
    let new_product = form
        .into_new_product()
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    create_product(&ctx.db, new_product).await.map_err(|e| {
        tracing::error!(error=?e, "unable to create product");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "unable to create product".to_string(),
        )
    })?;

    Ok(Redirect::to("/products"))
}
