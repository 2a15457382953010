use crate::client::CliClient;
use crate::error::{ErrorCli, Result};
use pf_core::server::payload::caption_response::CaptionResponse;
use reqwest::multipart::{Form, Part};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct CaptionForm {
    pub sentence: String,
    pub platform: String,
    pub tone: String,
    pub file: Option<PathBuf>,
}

impl CaptionForm {
    async fn into_multipart(self) -> Result<Form> {
        let form = Form::new()
            .text("sentence", self.sentence)
            .text("platform", self.platform)
            .text("tone", self.tone);

        let Some(path) = self.file else {
            return Ok(form);
        };
        let data = tokio::fs::read(&path)
            .await
            .map_err(|source| ErrorCli::FileRead {
                path: path.clone(),
                source,
            })?;
        let mut part = Part::bytes(data);
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            part = part.file_name(name.to_string());
        }
        Ok(form.part("file", part))
    }
}

pub async fn handle(cli_client: &CliClient, form: &CaptionForm, json: bool) -> Result<()> {
    let multipart = form.clone().into_multipart().await?;
    let response = cli_client.improve_caption(multipart).await?;
    if json {
        let text = serde_json::to_string_pretty(&response).map_err(pf_core::error::ErrorCore::from)?;
        println!("{text}");
    } else {
        print!("{}", render(&response));
    }
    Ok(())
}

fn render(response: &CaptionResponse) -> String {
    let mut out = String::new();
    out.push_str("captions\n========\n");
    match response.captions.len() {
        0 => out.push_str("(none)\n"),
        _ => {
            for (i, caption) in response.captions.iter().enumerate() {
                out.push_str(&format!("{}. {}\n", i + 1, caption));
            }
        }
    }
    if !response.hashtags.is_empty() {
        out.push_str("\nhashtags\n========\n");
        out.push_str(&response.hashtags.join(" "));
        out.push('\n');
    }
    if let Some(description) = &response.image_description {
        out.push_str(&format!("\nimage: {description}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_full_response() {
        let response = CaptionResponse {
            captions: vec!["First".into(), "Second".into()],
            hashtags: vec!["#one".into(), "#two".into()],
            image_description: Some("cat.png (640×480) — photo".into()),
        };
        assert_eq!(
            render(&response),
            "captions\n========\n1. First\n2. Second\n\nhashtags\n========\n#one #two\n\nimage: cat.png (640×480) — photo\n"
        );
    }

    #[test]
    fn test_render_degraded_response() {
        let response = CaptionResponse {
            captions: vec!["raw model text".into()],
            hashtags: vec![],
            image_description: None,
        };
        assert_eq!(render(&response), "captions\n========\n1. raw model text\n");
    }

    #[tokio::test]
    async fn test_missing_file_is_reported() {
        let form = CaptionForm {
            sentence: "hello".into(),
            platform: "instagram".into(),
            tone: "default".into(),
            file: Some(PathBuf::from("/definitely/not/here.png")),
        };
        let err = form.into_multipart().await.unwrap_err();
        assert!(matches!(err, ErrorCli::FileRead { .. }));
    }
}
