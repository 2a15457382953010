use crate::clients::llm::LlmClient;
use crate::domain::caption::entity::{CaptionRequest, UploadedFile};
use crate::domain::caption::normalizer::normalize;
use crate::domain::caption::prompt::{PromptInput, compose};
use crate::error::Result;
use pf_core::server::payload::caption_response::CaptionResponse;
use pf_core::types::platform::{is_known_platform, is_known_tone};
use tracing::{debug, info};

#[derive(Clone, Debug)]
pub struct CaptionService {
    llm: LlmClient,
}

impl CaptionService {
    pub fn new(llm: LlmClient) -> CaptionService {
        CaptionService { llm }
    }

    /// Image probe, prompt composition, one LLM call, then normalization.
    ///
    /// Configuration and transport errors from the LLM call are returned as is;
    /// a badly shaped completion never is.
    pub async fn improve_caption(&self, req: CaptionRequest) -> Result<CaptionResponse> {
        let image_description = req.image.as_ref().map(UploadedFile::describe);
        if !is_known_platform(&req.platform) {
            debug!("Unknown platform {:?}, passing it through", req.platform);
        }
        if !is_known_tone(&req.tone) {
            debug!("Unknown tone {:?}, passing it through", req.tone);
        }

        let prompt = compose(PromptInput {
            content_text: &req.content_text,
            platform: &req.platform,
            tone: &req.tone,
            image_description: image_description.as_deref(),
        });

        info!(
            model = self.llm.model(),
            platform = %req.platform,
            tone = %req.tone,
            with_image = req.image.is_some(),
            "Generating captions"
        );
        let raw = self
            .llm
            .complete(&prompt.system_instruction, &prompt.user_instruction)
            .await?;

        let mut response = normalize(&raw, image_description.as_deref());
        // Without an upload there is nothing to describe, whatever the model says.
        if req.image.is_none() {
            response.image_description = None;
        }
        Ok(response)
    }
}
