use serde::{Deserialize, Serialize};

/// Body of every error response.
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct FailureResponse {
    pub status: bool,
    pub message: String,
}

impl FailureResponse {
    pub fn new() -> Self {
        FailureResponse {
            status: false,
            message: String::new(),
        }
    }
}
