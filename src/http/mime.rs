//! Content-Type lookup by file extension.

use std::path::Path;

/// Extension of the file name in `path`, without the dot.
///
/// Names without a dot, and dotfiles such as `.profile`, have none.
///
/// # Examples
/// ```
/// use std::path::Path;
/// use lantern::http::mime::extension_of;
/// assert_eq!(extension_of(Path::new("www/index.html")), Some("html"));
/// assert_eq!(extension_of(Path::new("archive.tar.gz")), Some("gz"));
/// assert_eq!(extension_of(Path::new(".profile")), None);
/// assert_eq!(extension_of(Path::new("README")), None);
/// ```
pub fn extension_of(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}

/// Content-Type for a file path, `application/octet-stream` when unknown.
pub fn content_type_for(path: &Path) -> &'static str {
    content_type(extension_of(path))
}

/// Get MIME Content-Type based on file extension
pub fn content_type(extension: Option<&str>) -> &'static str {
    match extension {
        // Text
        Some("html" | "htm") => "text/html",
        Some("css") => "text/css",
        Some("txt" | "md") => "text/plain",
        Some("csv") => "text/csv",
        Some("xml") => "application/xml",

        // Scripts and data
        Some("js" | "mjs") => "application/javascript",
        Some("json") => "application/json",
        Some("wasm") => "application/wasm",

        // Images
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("bmp") => "image/bmp",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("webp") => "image/webp",

        // Audio and video
        Some("mp3") => "audio/mpeg",
        Some("wav") => "audio/wav",
        Some("ogg") => "audio/ogg",
        Some("mp4") => "video/mp4",
        Some("webm") => "video/webm",

        // Fonts
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",

        // Archives and documents
        Some("pdf") => "application/pdf",
        Some("zip") => "application/zip",
        Some("gz") => "application/gzip",
        Some("tar") => "application/x-tar",

        _ => "application/octet-stream",
    }
}
