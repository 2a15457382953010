use bytes::Bytes;
use std::io::Cursor;

use crate::domain::image::probe::describe_image;

/// A file attached to a caption request, fully buffered.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: Option<String>,
    pub content_type: Option<String>,
    pub data: Bytes,
}

impl UploadedFile {
    /// Browsers send an empty part for an untouched file input.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty() && self.filename.as_deref().is_none_or(|name| name.trim().is_empty())
    }

    pub fn describe(&self) -> String {
        let mut reader = Cursor::new(self.data.as_ref());
        describe_image(self.filename.as_deref(), &mut reader)
    }
}

#[derive(Debug, Clone)]
pub struct CaptionRequest {
    pub content_text: String,
    pub platform: String,
    pub tone: String,
    pub image: Option<UploadedFile>,
}
