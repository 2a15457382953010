use pf_core::server::payload::caption_response::CaptionResponse;
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Length cap, in characters, of the caption built from unparseable output.
pub const RAW_FALLBACK_MAX_CHARS: usize = 400;

/// How the model output was interpreted. Tried in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    /// The whole text is a JSON object.
    Strict(Map<String, Value>),
    /// A `{ ... }` block inside surrounding prose is a JSON object.
    Extracted(Map<String, Value>),
    /// Nothing parseable, the text itself becomes the caption.
    RawFallback(String),
}

impl ParseOutcome {
    pub fn parse(raw: &str) -> Self {
        if let Some(map) = parse_object(raw) {
            return ParseOutcome::Strict(map);
        }
        if let Some(map) = brace_block(raw).and_then(parse_object) {
            return ParseOutcome::Extracted(map);
        }
        ParseOutcome::RawFallback(raw.trim().chars().take(RAW_FALLBACK_MAX_CHARS).collect())
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ParseOutcome::Strict(_) => "strict",
            ParseOutcome::Extracted(_) => "extracted",
            ParseOutcome::RawFallback(_) => "raw_fallback",
        }
    }

    /// `image_description` fills in when the model did not provide one.
    pub fn into_response(self, image_description: Option<&str>) -> CaptionResponse {
        match self {
            ParseOutcome::Strict(map) | ParseOutcome::Extracted(map) => CaptionResponse {
                captions: string_list(map.get("captions")),
                hashtags: string_list(map.get("hashtags")),
                image_description: match map.get("image_description") {
                    None => image_description.map(str::to_string),
                    Some(Value::Null) => None,
                    Some(Value::String(s)) => Some(s.clone()),
                    Some(_) => image_description.map(str::to_string),
                },
            },
            ParseOutcome::RawFallback(text) => CaptionResponse {
                captions: vec![text],
                hashtags: Vec::new(),
                image_description: image_description.map(str::to_string),
            },
        }
    }
}

/// Turns raw model output into a response. Never fails.
pub fn normalize(raw: &str, image_description: Option<&str>) -> CaptionResponse {
    let outcome = ParseOutcome::parse(raw);
    match &outcome {
        ParseOutcome::RawFallback(_) => {
            warn!("LLM output is not JSON, returning it as a single caption")
        }
        other => debug!("LLM output parsed ({})", other.kind()),
    }
    outcome.into_response(image_description)
}

fn parse_object(text: &str) -> Option<Map<String, Value>> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}

/// First `{` through last `}`, newlines included.
fn brace_block(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        Some(Value::String(s)) => vec![s.clone()],
        _ => Vec::new(),
    }
}
