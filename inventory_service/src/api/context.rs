use std::sync::Arc;

use axum_macros::FromRef;
use sqlx::SqlitePool;

use super::auth::session::SessionStore;
use super::auth::verifier::CredentialVerifier;

#[derive(Clone, FromRef)]
pub struct AppState {
    pub db: SqlitePool,
    pub sessions: SessionStore,
    pub credentials: Arc<dyn CredentialVerifier>,
}
