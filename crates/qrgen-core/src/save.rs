use std::fs;
use std::path::{Path, PathBuf};

use image::{GrayImage, ImageFormat};
use tracing::info;

use crate::error::Result;

/// Characters that would otherwise be read as path separators.
const SEPARATORS: [char; 3] = ['/', '\\', ':'];

/// Longest file stem, in characters, before the extension is appended.
pub const MAX_STEM_CHARS: usize = 50;

/// Derive the output file name for `text`.
///
/// Separators become underscores and the stem is cut to
/// [`MAX_STEM_CHARS`] characters before `.png` is appended.
pub fn derive_filename(text: &str) -> String {
    let mut name: String = text
        .chars()
        .map(|c| if SEPARATORS.contains(&c) { '_' } else { c })
        .take(MAX_STEM_CHARS)
        .collect();
    name.push_str(".png");
    name
}

/// Write `image` as PNG to `dir/filename`, creating `dir` if needed.
pub fn save_png(image: &GrayImage, dir: &Path, filename: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(filename);
    image.save_with_format(&path, ImageFormat::Png)?;
    info!("QR code saved as {}", path.display());
    Ok(path)
}
