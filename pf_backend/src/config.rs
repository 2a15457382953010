use pf_core::server::default_config::{
    DEFAULT_CORS_ORIGIN, DEFAULT_OPENAI_BASE_URL, DEFAULT_OPENAI_MODEL,
    DEFAULT_SERVER_BACKEND_HOST, DEFAULT_SERVER_BACKEND_PORT, DEFAULT_SERVER_BACKEND_PROTOCOL,
};
use std::env;

/// Process-wide configuration, read once at startup and never mutated.
#[derive(Clone, Debug)]
pub struct Settings {
    pub host: String,
    pub port: String,
    pub protocol: String,
    pub cors_origin: String,
    pub llm: LlmSettings,
}

#[derive(Clone)]
pub struct LlmSettings {
    /// Checked on every caption request rather than at startup, so the
    /// health check keeps answering without credentials.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
}

impl std::fmt::Debug for LlmSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmSettings")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Settings::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str, default: &str| lookup(key).unwrap_or(String::from(default));
        Settings {
            host: var("SERVER_BACKEND_HOST", DEFAULT_SERVER_BACKEND_HOST),
            port: var("SERVER_BACKEND_PORT", DEFAULT_SERVER_BACKEND_PORT),
            protocol: var("SERVER_BACKEND_PROTOCOL", DEFAULT_SERVER_BACKEND_PROTOCOL),
            cors_origin: var("PROMPTIFY_CORS_ORIGIN", DEFAULT_CORS_ORIGIN),
            llm: LlmSettings {
                api_key: lookup("OPENAI_API_KEY").filter(|key| !key.trim().is_empty()),
                model: var("OPENAI_MODEL", DEFAULT_OPENAI_MODEL),
                base_url: var("OPENAI_BASE_URL", DEFAULT_OPENAI_BASE_URL)
                    .trim_end_matches('/')
                    .to_string(),
            },
        }
    }
}
