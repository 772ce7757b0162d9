use axum::{
    extract::{Extension, State},
    http::StatusCode,
    Json,
};
use inventory_db_client::products::get_summary;
use model::{principal::Principal, summary::InventorySummary};

use crate::api::context::AppState;

/// The dashboard aggregate: row count, stock total, low/out-of-stock counts.
#[utoipa::path(
        get,
        tag = "summary",
        path = "/get_summary",
        operation_id = "get_summary",
        responses(
            (status = 200, body = InventorySummary),
            (status = 303, description = "no session, redirected to login"),
            (status = 500, body = String),
        )
    )]
#[tracing::instrument(skip_all, fields(user = %principal.username))]
pub async fn get_summary_handler(
    State(ctx): State<AppState>,
    Extension(principal): Extension<Principal>,
) -> Result<Json<InventorySummary>, (StatusCode, String)> {
    let summary = get_summary(&ctx.db).await.map_err(|e| {
        tracing::error!(error=?e, "unable to compute summary");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "unable to compute summary".to_string(),
        )
    })?;

    Ok(Json(summary))
}
