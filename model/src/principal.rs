use serde::{Deserialize, Serialize};

/// The authenticated caller for one request.
///
/// Inserted as a request extension by the session middleware; handlers read
/// it instead of any ambient session state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub username: String,
}
