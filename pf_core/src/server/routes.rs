use tracing::info;

/// Prefix under which the caption API is nested.
pub const API_PREFIX: &str = "/api";

pub enum ApiPath {
    Static(&'static str),
    Dynamic(String),
}

impl ApiPath {
    pub fn as_str(&self) -> &str {
        match self {
            ApiPath::Static(s) => s,
            ApiPath::Dynamic(s) => s.as_str(),
        }
    }
}

/// Routes served at the root, outside of [`API_PREFIX`].
#[derive(Debug, Clone)]
pub enum BackendApiHealth {
    Check,
}

impl BackendApiHealth {
    pub fn path(&self) -> ApiPath {
        match self {
            BackendApiHealth::Check => ApiPath::Static("/health"),
        }
    }
}

#[derive(Debug, Clone)]
pub enum BackendApiCaption {
    Improve,
}

impl BackendApiCaption {
    pub fn path(&self) -> ApiPath {
        match self {
            BackendApiCaption::Improve => ApiPath::Static("/improve_caption"),
        }
    }

    /// Path including the `/api` prefix, as seen by clients.
    pub fn full_path(&self) -> ApiPath {
        ApiPath::Dynamic(format!("{}{}", API_PREFIX, self.path().as_str()))
    }
}

pub fn print_all_backend_api_paths() {
    for health in [BackendApiHealth::Check].iter() {
        info!("GET  {}", health.path().as_str());
    }

    for caption in [BackendApiCaption::Improve].iter() {
        info!("POST {}", caption.full_path().as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caption_full_path() {
        assert_eq!(
            BackendApiCaption::Improve.full_path().as_str(),
            "/api/improve_caption"
        );
    }

    #[test]
    fn test_health_is_not_prefixed() {
        assert_eq!(BackendApiHealth::Check.path().as_str(), "/health");
    }
}
