use axum::{extract::State, response::Redirect};
use tower_cookies::Cookies;

use super::session::{removal_session_cookie, SESSION_COOKIE};
use crate::api::context::AppState;

/// Clears any live session unconditionally and sends the caller back to the
/// login entry point.
#[utoipa::path(
        get,
        tag = "auth",
        path = "/logout",
        operation_id = "logout",
        responses(
            (status = 303, description = "session cleared, redirected to login"),
        )
    )]
#[tracing::instrument(skip_all)]
pub async fn logout_handler(State(ctx): State<AppState>, cookies: Cookies) -> Redirect {
    if let Some(cookie) = cookies.get(SESSION_COOKIE) {
        ctx.sessions.revoke(cookie.value());
    }
    cookies.remove(removal_session_cookie());

    Redirect::to("/login")
}
