use serde::{Deserialize, Serialize};

pub const HEALTH_STATUS_OK: &str = "OK";
pub const HEALTH_MESSAGE: &str = "Promptify API is running";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        HealthResponse {
            status: HEALTH_STATUS_OK.to_string(),
            message: HEALTH_MESSAGE.to_string(),
        }
    }
}
