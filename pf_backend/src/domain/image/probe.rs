use image::ImageReader;
use std::io::{BufRead, Seek, SeekFrom};
use tracing::debug;

pub const UPLOADED_MEDIA_FALLBACK: &str = "uploaded media";

/// Describes an uploaded file as `"<filename> (<w>×<h>) — photo"`.
///
/// Only the image header is read. Anything that goes wrong degrades to the
/// filename, or to [`UPLOADED_MEDIA_FALLBACK`] when there is none. The reader
/// is rewound first since the upload may already have been consumed.
pub fn describe_image<R: BufRead + Seek>(filename: Option<&str>, reader: &mut R) -> String {
    let filename = filename.map(str::trim).filter(|name| !name.is_empty());

    match (filename, read_dimensions(reader)) {
        (Some(name), Ok((width, height))) => format!("{name} ({width}×{height}) — photo"),
        (name, result) => {
            if let Err(err) = result {
                debug!("Could not read image dimensions: {err}");
            }
            name.unwrap_or(UPLOADED_MEDIA_FALLBACK).to_string()
        }
    }
}

fn read_dimensions<R: BufRead + Seek>(reader: &mut R) -> Result<(u32, u32), String> {
    reader
        .seek(SeekFrom::Start(0))
        .map_err(|e| format!("seek failed: {e}"))?;
    ImageReader::new(reader)
        .with_guessed_format()
        .map_err(|e| format!("format detection failed: {e}"))?
        .into_dimensions()
        .map_err(|e| e.to_string())
}
