use axum::{extract::State, http::StatusCode, response::Redirect, Form, Json};
use model::response::GenericErrorResponse;
use serde::{Deserialize, Serialize};
use tower_cookies::Cookies;
use utoipa::ToSchema;

use super::session::create_session_cookie;
use crate::api::context::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// The empty login form, for clients that fetch it before posting.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct LoginFormResponse {
    pub username: String,
    pub password: String,
}

#[utoipa::path(
        get,
        tag = "auth",
        path = "/login",
        operation_id = "login_form",
        responses(
            (status = 200, body = LoginFormResponse),
        )
    )]
pub async fn login_form_handler() -> Json<LoginFormResponse> {
    Json(LoginFormResponse::default())
}

/// Validates the posted credentials and opens a session.
///
/// Failure reports an inline error and leaves session state untouched.
#[utoipa::path(
        post,
        tag = "auth",
        path = "/login",
        operation_id = "login",
        request_body(content = LoginRequest, content_type = "application/x-www-form-urlencoded"),
        responses(
            (status = 303, description = "logged in, redirected home"),
            (status = 401, body = GenericErrorResponse),
        )
    )]
#[tracing::instrument(skip_all, fields(username = %req.username))]
pub async fn login_handler(
    State(ctx): State<AppState>,
    cookies: Cookies,
    Form(req): Form<LoginRequest>,
) -> Result<Redirect, (StatusCode, Json<GenericErrorResponse>)> {
    if !ctx.credentials.verify(&req.username, &req.password) {
        tracing::info!("rejected login attempt");
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(GenericErrorResponse::new("Invalid username or password")),
        ));
    }

    let token = ctx.sessions.create(&req.username);
    cookies.add(create_session_cookie(&token));

    Ok(Redirect::to("/"))
}
