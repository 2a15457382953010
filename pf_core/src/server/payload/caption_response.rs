use serde::{Deserialize, Serialize};

/// Body of a successful `POST /api/improve_caption`.
///
/// `image_description` is always serialized, as `null` when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CaptionResponse {
    pub captions: Vec<String>,
    pub hashtags: Vec<String>,
    #[serde(default)]
    pub image_description: Option<String>,
}
