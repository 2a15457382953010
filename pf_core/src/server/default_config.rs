pub const DEFAULT_SERVER_BACKEND_HOST: &str = "0.0.0.0";
pub const DEFAULT_SERVER_BACKEND_PORT: &str = "8000";
pub const DEFAULT_SERVER_BACKEND_PROTOCOL: &str = "http";

/// Address of the companion web frontend, the only origin allowed by CORS.
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

pub const DEFAULT_CLI_BACKEND_URL: &str = "http://localhost:8000";

/// Upper bound for a multipart upload, image included.
pub const MAX_REQUEST_BODY_BYTES: usize = 10 * 1024 * 1024;
