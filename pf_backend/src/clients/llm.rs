use crate::config::LlmSettings;
use crate::error::{ErrorBackend, Result};
use pf_core::server::payload::openai::chat_completion_request::ChatCompletionRequest;
use pf_core::server::payload::openai::chat_completion_response::ChatCompletionResponse;
use pf_core::types::message::Message;
use rand::Rng;
use reqwest::{Client, Response};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tracing::debug;

pub const MAX_OUTPUT_TOKENS: u32 = 200;
pub const LLM_TIMEOUT: Duration = Duration::from_secs(30);
pub const TEMPERATURE_MIN: f32 = 0.8;
pub const TEMPERATURE_MAX: f32 = 1.2;
const SEED_MODULUS: u128 = 10_000;

/// Longest provider error body kept in [`ErrorBackend::UpstreamStatus`].
const ERROR_BODY_MAX_CHARS: usize = 500;

/// Per-call sampling parameters. Drawn fresh for every request so that
/// identical prompts do not produce cached or repeated completions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingParams {
    pub temperature: f32,
    pub seed: u64,
}

impl SamplingParams {
    pub fn draw() -> Self {
        SamplingParams::draw_with(&mut rand::rng(), SystemTime::now())
    }

    pub fn draw_with<R: Rng + ?Sized>(rng: &mut R, now: SystemTime) -> Self {
        let seed = now
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| (elapsed.as_millis() % SEED_MODULUS) as u64)
            .unwrap_or_default();
        SamplingParams {
            temperature: rng.random_range(TEMPERATURE_MIN..=TEMPERATURE_MAX),
            seed,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LlmClient {
    client: Client,
    settings: LlmSettings,
    timeout: Duration,
}

impl LlmClient {
    pub fn new(settings: LlmSettings) -> Result<Self> {
        LlmClient::with_timeout(settings, LLM_TIMEOUT)
    }

    pub fn with_timeout(settings: LlmSettings, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(LlmClient {
            client,
            settings,
            timeout,
        })
    }

    pub fn model(&self) -> &str {
        &self.settings.model
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.settings.base_url)
    }

    pub fn build_request(
        &self,
        system_instruction: &str,
        user_instruction: &str,
        params: SamplingParams,
    ) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.settings.model.clone(),
            messages: vec![
                Message::system(system_instruction),
                Message::user(user_instruction),
            ],
            max_tokens: MAX_OUTPUT_TOKENS,
            temperature: params.temperature,
            seed: params.seed,
        }
    }

    /// Sends one chat-completion request and returns the first choice's text.
    ///
    /// Fails with [`ErrorBackend::MissingApiKey`] before any network I/O when no
    /// credential is configured. Nothing is retried.
    pub async fn complete(&self, system_instruction: &str, user_instruction: &str) -> Result<String> {
        let api_key = self
            .settings
            .api_key
            .as_deref()
            .ok_or(ErrorBackend::MissingApiKey)?;

        let params = SamplingParams::draw();
        debug!(
            model = %self.settings.model,
            temperature = params.temperature,
            seed = params.seed,
            "Calling chat completion"
        );
        let body = self.build_request(system_instruction, user_instruction, params);

        let result = self
            .client
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await;
        let text = self.handle_response(result).await?;
        let completion = serde_json::from_str::<ChatCompletionResponse>(&text)?;
        completion
            .first_content()
            .ok_or(ErrorBackend::EmptyCompletion)
    }

    async fn handle_response(
        &self,
        res: std::result::Result<Response, reqwest::Error>,
    ) -> Result<String> {
        let res = res.map_err(|e| self.transport_error(e))?;
        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(ErrorBackend::UpstreamStatus {
                status: status.as_u16(),
                body: body.chars().take(ERROR_BODY_MAX_CHARS).collect(),
            });
        }
        res.text().await.map_err(|e| self.transport_error(e))
    }

    fn transport_error(&self, err: reqwest::Error) -> ErrorBackend {
        if err.is_timeout() {
            ErrorBackend::UpstreamTimeout(self.timeout)
        } else {
            ErrorBackend::Upstream(err)
        }
    }
}
