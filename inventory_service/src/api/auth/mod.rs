use axum::{routing::get, Router};

use crate::api::context::AppState;

pub mod login;
pub mod logout;
pub mod middleware;
pub mod session;
pub mod verifier;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/login",
            get(login::login_form_handler).post(login::login_handler),
        )
        .route("/logout", get(logout::logout_handler))
}
