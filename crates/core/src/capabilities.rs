//! Environment capabilities the core depends on but does not implement.
//!
//! Decoding images, writing to a clipboard and walking a DOM are
//! environment-specific. The core only describes them; the shell (or any
//! other host) supplies the implementations.

use crate::error::ConvertError;
use crate::transform::image::DecodedImage;

/// Turns encoded image bytes (PNG, JPEG, ...) into RGBA pixels.
pub trait ImageDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<DecodedImage, ConvertError>;
}

/// Destination for "copy to clipboard" actions.
pub trait ClipboardWriter {
    fn write_text(&mut self, text: &str) -> Result<(), ConvertError>;
}

/// Extracts readable text from an HTML document or fragment.
///
/// See [`crate::transform::html::ScraperTextExtractor`] for the bundled
/// implementation.
pub trait HtmlTextExtractor {
    fn extract_text(&self, html: &str) -> String;
}
