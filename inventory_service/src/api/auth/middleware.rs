use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use model::principal::Principal;
use tower_cookies::Cookies;

use super::session::SESSION_COOKIE;
use crate::api::context::AppState;

/// Gate in front of every data route.
///
/// Resolves the session cookie and injects the authenticated [`Principal`] as
/// a request extension, or redirects to the login entry point before any
/// handler side effects can occur.
pub async fn require_session(
    State(state): State<AppState>,
    cookies: Cookies,
    mut req: Request,
    next: Next,
) -> Response {
    let username = cookies
        .get(SESSION_COOKIE)
        .and_then(|cookie| state.sessions.resolve(cookie.value()));

    let Some(username) = username else {
        return Redirect::to("/login").into_response();
    };

    req.extensions_mut().insert(Principal { username });
    next.run(req).await
}
