use axum::{extract::Extension, Json};
use model::principal::Principal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Landing payload pointing at the main views.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HomeResponse {
    pub service: String,
    pub username: String,
    pub products_url: String,
    pub summary_url: String,
}

#[utoipa::path(
        get,
        tag = "home",
        path = "/",
        operation_id = "home",
        responses(
            (status = 200, body = HomeResponse),
            (status = 303, description = "no session, redirected to login"),
        )
    )]
#[tracing::instrument(skip_all, fields(user = %principal.username))]
pub async fn home_handler(Extension(principal): Extension<Principal>) -> Json<HomeResponse> {
    Json(HomeResponse {
        service: "inventory".to_string(),
        username: principal.username,
        products_url: "/products".to_string(),
        summary_url: "/get_summary".to_string(),
    })
}
