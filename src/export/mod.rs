//! Saving generated images and naming the downloaded files.

use std::fs;
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{DateTime, Local};
use tracing::debug;

use crate::error::Result;
use crate::history::HistoryEntry;
use crate::types::ImageGeneration;

const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";
const JPEG_MAGIC: &[u8] = b"\xff\xd8\xff";

/// Best-effort MIME type from magic bytes; unknown data is treated as PNG.
pub fn sniff_mime(data: &[u8]) -> &'static str {
    if data.starts_with(PNG_MAGIC) {
        "image/png"
    } else if data.starts_with(JPEG_MAGIC) {
        "image/jpeg"
    } else if data.len() >= 12 && &data[..4] == b"RIFF" && &data[8..12] == b"WEBP" {
        "image/webp"
    } else {
        "image/png"
    }
}

/// File extension for a MIME type produced by [`sniff_mime`].
pub fn extension_for(mime_type: &str) -> &'static str {
    match mime_type {
        "image/jpeg" => "jpg",
        "image/webp" => "webp",
        _ => "png",
    }
}

pub fn data_uri(mime_type: &str, data: &[u8]) -> String {
    format!("data:{mime_type};base64,{}", STANDARD.encode(data))
}

/// Name for the `index`-th (1-based) artwork of a fresh batch.
pub fn artwork_file_name(style: &str, index: usize, extension: &str) -> String {
    format!("{}_{index}.{extension}", style.replace(' ', "_"))
}

/// Name for the `index`-th (1-based) image of a history entry.
///
/// Colons and spaces in the timestamp are replaced so the name is valid on
/// every platform.
pub fn history_file_name(timestamp: DateTime<Local>, index: usize, extension: &str) -> String {
    let stamp = timestamp.format("%Y-%m-%d_%H-%M-%S");
    format!("hist_{stamp}_{index}.{extension}")
}

/// Write `files` into `dir`, creating it if needed. Returns the written paths.
pub fn save_images<'a, I>(dir: &Path, files: I) -> Result<Vec<PathBuf>>
where
    I: IntoIterator<Item = (String, &'a [u8])>,
{
    fs::create_dir_all(dir)?;
    let mut written = Vec::new();
    for (name, data) in files {
        let path = dir.join(name);
        fs::write(&path, data)?;
        debug!(path = %path.display(), bytes = data.len(), "saved image");
        written.push(path);
    }
    Ok(written)
}

/// Save a freshly generated batch using artwork file names.
pub fn save_generation(dir: &Path, generation: &ImageGeneration) -> Result<Vec<PathBuf>> {
    save_images(
        dir,
        generation.images.iter().enumerate().map(|(i, image)| {
            (
                artwork_file_name(&generation.style, i + 1, extension_for(&image.mime_type)),
                image.data.as_slice(),
            )
        }),
    )
}

/// Save a history entry using history file names.
pub fn save_history_entry(dir: &Path, entry: &HistoryEntry<ImageGeneration>) -> Result<Vec<PathBuf>> {
    let timestamp = entry.timestamp();
    save_images(
        dir,
        entry.payload().images.iter().enumerate().map(|(i, image)| {
            (
                history_file_name(timestamp, i + 1, extension_for(&image.mime_type)),
                image.data.as_slice(),
            )
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn sniffs_common_formats() {
        assert_eq!(sniff_mime(b"\x89PNG\r\n\x1a\nrest"), "image/png");
        assert_eq!(sniff_mime(b"\xff\xd8\xff\xe0"), "image/jpeg");
        assert_eq!(sniff_mime(b"RIFF\0\0\0\0WEBPVP8 "), "image/webp");
        assert_eq!(sniff_mime(b"??"), "image/png");
    }

    #[test]
    fn artwork_names_replace_spaces() {
        assert_eq!(
            artwork_file_name("Neon Vintage Anime", 2, "png"),
            "Neon_Vintage_Anime_2.png"
        );
    }

    #[test]
    fn history_names_are_filesystem_safe() {
        let ts = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        assert_eq!(
            history_file_name(ts, 1, "png"),
            "hist_2024-03-09_14-05-07_1.png"
        );
    }

    #[test]
    fn data_uri_encodes_payload() {
        assert_eq!(data_uri("image/png", b"hi"), "data:image/png;base64,aGk=");
    }
}
