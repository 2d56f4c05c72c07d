use crate::models::analysis_types::AnalysisMode;
use std::path::Path;

const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "bmp", "webp", "tiff", "tif",
];

const VIDEO_EXTENSIONS: &[&str] = &[
    "mp4", "mov", "avi", "mkv", "webm", "m4v", "wmv",
];

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| extensions.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

pub fn is_image_file(path: &Path) -> bool {
    has_extension(path, IMAGE_EXTENSIONS)
}

pub fn is_video_file(path: &Path) -> bool {
    has_extension(path, VIDEO_EXTENSIONS)
}

/// Accepted file kinds per analysis mode, the selection-time equivalent
/// of the file picker's accept filter.
pub fn accepts(mode: AnalysisMode, path: &Path) -> bool {
    match mode {
        AnalysisMode::Image => is_image_file(path),
        AnalysisMode::Video => is_video_file(path),
    }
}

pub fn mime_for_path(path: &str) -> &'static str {
    let ext = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        "webp" => "image/webp",
        "tiff" | "tif" => "image/tiff",
        "mp4" | "m4v" => "video/mp4",
        "mov" => "video/quicktime",
        "avi" => "video/x-msvideo",
        "mkv" => "video/x-matroska",
        "webm" => "video/webm",
        "wmv" => "video/x-ms-wmv",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_acceptance_follows_extension() {
        assert!(accepts(AnalysisMode::Image, Path::new("holiday.JPG")));
        assert!(accepts(AnalysisMode::Video, Path::new("clip.mp4")));
        assert!(!accepts(AnalysisMode::Image, Path::new("clip.mp4")));
        assert!(!accepts(AnalysisMode::Video, Path::new("holiday.jpg")));
        assert!(!accepts(AnalysisMode::Image, Path::new("notes")));
    }

    #[test]
    fn mime_lookup() {
        assert_eq!(mime_for_path("uploads/f1.jpg"), "image/jpeg");
        assert_eq!(mime_for_path("uploads/clip.webm"), "video/webm");
        assert_eq!(mime_for_path("uploads/raw.bin"), "application/octet-stream");
    }
}
