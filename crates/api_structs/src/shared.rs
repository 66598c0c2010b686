use serde::{Deserialize, Serialize};

/// Body of every unsuccessful response, including logical failures
/// such as a company that does not exist
#[derive(Debug, Deserialize, Serialize)]
pub struct FailureResponse {
    pub success: bool,
    pub message: String,
}

impl FailureResponse {
    pub fn new<T: Into<String>>(message: T) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
