use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GenericErrorResponse {
    /// Indicates if an error occurred
    pub error: bool,
    /// Message to explain failure
    pub message: String,
}

impl GenericErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: true,
            message: message.into(),
        }
    }
}
