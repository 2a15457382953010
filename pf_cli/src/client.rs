use crate::error::{ErrorCli, Result};
use pf_core::server::payload::caption_response::CaptionResponse;
use pf_core::server::payload::health_response::HealthResponse;
use pf_core::server::routes::{BackendApiCaption, BackendApiHealth};
use reqwest::multipart::Form;
use reqwest::{Client, Response};
use serde_json::Value;

pub struct CliClient {
    client: Client,
    base_url: String,
}

impl CliClient {
    pub fn new(base_url: &str) -> Self {
        let client = Client::new();
        CliClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn handle_response(
        &self,
        res: std::result::Result<Response, reqwest::Error>,
    ) -> Result<String> {
        let res = match res {
            Ok(res) => res,
            Err(e) if e.is_connect() => return Err(ErrorCli::ConnectionRefused(self.base_url.clone())),
            Err(e) => return Err(ErrorCli::Http(e)),
        };
        let status = res.status();
        let text = res.text().await?;
        if status.is_success() {
            Ok(text)
        } else {
            Err(ErrorCli::Api {
                status: status.as_u16(),
                message: api_error_message(&text),
            })
        }
    }

    pub async fn health(&self) -> Result<HealthResponse> {
        let url = format!("{}{}", self.base_url, BackendApiHealth::Check.path().as_str());
        let result = self.client.get(&url).send().await;
        let text = self.handle_response(result).await?;
        let health = serde_json::from_str::<HealthResponse>(&text)
            .map_err(pf_core::error::ErrorCore::from)?;
        Ok(health)
    }

    pub async fn improve_caption(&self, form: Form) -> Result<CaptionResponse> {
        let url = format!(
            "{}{}",
            self.base_url,
            BackendApiCaption::Improve.full_path().as_str()
        );
        let result = self.client.post(&url).multipart(form).send().await;
        let text = self.handle_response(result).await?;
        let response = serde_json::from_str::<CaptionResponse>(&text)
            .map_err(pf_core::error::ErrorCore::from)?;
        Ok(response)
    }
}

/// The backend reports failures as `{"error": "..."}`; anything else is shown as is.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}
