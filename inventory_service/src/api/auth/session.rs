use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use rand::Rng;
use tower_cookies::cookie::SameSite;
use tower_cookies::Cookie;

pub const SESSION_COOKIE: &str = "inventory_session";

/// In-memory session registry mapping opaque tokens to usernames.
///
/// Sessions carry no expiry and there is no rate limiting or lockout; the
/// login model is a single static credential pair.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, String>>>,
}

impl SessionStore {
    /// Registers a new session for the user and returns its token.
    pub fn create(&self, username: &str) -> String {
        let token = generate_session_token();
        self.sessions
            .write()
            .expect("session lock poisoned")
            .insert(token.clone(), username.to_string());
        token
    }

    /// The username behind a token, if the session is live.
    pub fn resolve(&self, token: &str) -> Option<String> {
        self.sessions
            .read()
            .expect("session lock poisoned")
            .get(token)
            .cloned()
    }

    pub fn revoke(&self, token: &str) {
        self.sessions
            .write()
            .expect("session lock poisoned")
            .remove(token);
    }
}

/// Generates a random 25 character session token
fn generate_session_token() -> String {
    const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

    let mut rng = rand::rng();
    (0..25)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}

pub fn create_session_cookie(token: &str) -> Cookie<'static> {
    let mut cookie = Cookie::new(SESSION_COOKIE, token.to_owned());
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    cookie.set_path("/");
    cookie
}

/// A cookie matching the session cookie's name and path, for removal.
pub fn removal_session_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::new(SESSION_COOKIE, "");
    cookie.set_path("/");
    cookie
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_sessions_resolve_until_revoked() {
        let store = SessionStore::default();

        let token = store.create("admin");
        assert_eq!(store.resolve(&token), Some("admin".to_string()));

        store.revoke(&token);
        assert_eq!(store.resolve(&token), None);
    }

    #[test]
    fn unknown_tokens_do_not_resolve() {
        let store = SessionStore::default();
        assert_eq!(store.resolve("not-a-token"), None);
    }

    #[test]
    fn tokens_are_distinct_and_well_formed() {
        let store = SessionStore::default();

        let a = store.create("admin");
        let b = store.create("admin");
        assert_ne!(a, b);
        assert_eq!(a.len(), 25);
        assert!(a.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}
