//! Utility functions

use anyhow::{Context, Result, bail};
use tracing::debug;

// ============================================================================
// Image Formats
// ============================================================================

/// Image formats the cover loader accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
    Webp,
    Bmp,
}

/// Detect image format from magic bytes
///
/// Returns `None` for anything that is not a known image, such as an HTML
/// error page served in place of a thumbnail.
pub fn detect_image_format(bytes: &[u8]) -> Option<ImageFormat> {
    // PNG: 89 50 4E 47 0D 0A 1A 0A
    if bytes.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]) {
        return Some(ImageFormat::Png);
    }

    // JPEG: FF D8 FF
    if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        return Some(ImageFormat::Jpeg);
    }

    // GIF: 47 49 46 38
    if bytes.starts_with(&[0x47, 0x49, 0x46, 0x38]) {
        return Some(ImageFormat::Gif);
    }

    // WebP: 52 49 46 46 ... 57 45 42 50
    if bytes.len() >= 12 && bytes.starts_with(&[0x52, 0x49, 0x46, 0x46]) && &bytes[8..12] == b"WEBP"
    {
        return Some(ImageFormat::Webp);
    }

    // BMP: 42 4D
    if bytes.len() >= 14 && bytes.starts_with(&[0x42, 0x4D]) {
        return Some(ImageFormat::Bmp);
    }

    None
}

// ============================================================================
// External Links
// ============================================================================

/// Whether `url` is an http(s) link safe to hand to the system opener
pub fn is_web_url(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}

/// Open `url` in the user's default browser
pub fn open_url(url: &str) -> Result<()> {
    if !is_web_url(url) {
        bail!("refusing to open non-web URL: {}", url);
    }

    opener::open(url).with_context(|| format!("failed to open {}", url))?;
    debug!("Opened {}", url);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_image_format() {
        assert_eq!(
            detect_image_format(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0]),
            Some(ImageFormat::Png)
        );
        assert_eq!(
            detect_image_format(&[0xFF, 0xD8, 0xFF, 0xE0]),
            Some(ImageFormat::Jpeg)
        );
        assert_eq!(
            detect_image_format(b"RIFF\x00\x00\x00\x00WEBPVP8 "),
            Some(ImageFormat::Webp)
        );
        assert_eq!(detect_image_format(b"<!DOCTYPE html>"), None);
        assert_eq!(detect_image_format(&[]), None);
    }

    #[test]
    fn test_open_url_rejects_non_web_schemes() {
        for url in [
            "file:///etc/passwd",
            "javascript:alert(1)",
            "calc.exe & https://books.google.com",
            "",
        ] {
            let err = open_url(url).unwrap_err();
            assert!(err.to_string().contains("non-web"), "{url}: {err}");
        }
    }

    #[test]
    fn test_is_web_url_accepts_google_books_links() {
        // Info links carry several '&'-separated query parameters
        assert!(is_web_url(
            "https://books.google.com/books?id=x&dq=dune&hl=&source=gbs_api"
        ));
        assert!(is_web_url("http://books.google.com/books?id=x"));
        assert!(!is_web_url("HTTPS-ish://books.google.com"));
    }
}
