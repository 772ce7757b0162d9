/// Decides whether a username/password pair may open a session.
///
/// The seam exists so the secret pair is not baked into route control flow;
/// the static check below is the only implementation.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// The shop's single credential pair. Exact, case-sensitive match.
pub struct StaticCredentials {
    username: &'static str,
    password: &'static str,
}

impl Default for StaticCredentials {
    fn default() -> Self {
        Self {
            username: "admin",
            password: "1234",
        }
    }
}

impl CredentialVerifier for StaticCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password
    }
}
