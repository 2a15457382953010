use serde::{Deserialize, Serialize};

use crate::types::message::Message;

/// Body sent to `POST {base_url}/chat/completions`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub max_tokens: u32,
    pub temperature: f32,
    pub seed: u64,
}
