//! Classification of files from their metadata alone.

use std::path::Path;

use super::DetectedType;

const JAVASCRIPT_EXTENSIONS: &[&str] = &["js", "mjs", "cjs", "jsx", "ts", "tsx"];

/// Metadata a caller knows about a file before reading it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FileInfo {
    /// MIME type, possibly with parameters (`text/html; charset=utf-8`).
    pub mime_type: String,
    pub name: String,
}

impl FileInfo {
    pub fn new(mime_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            name: name.into(),
        }
    }

    fn essence(&self) -> String {
        self.mime_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase()
    }

    fn extension(&self) -> Option<String> {
        Path::new(&self.name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
    }
}

fn from_mime(essence: &str) -> Option<DetectedType> {
    match essence {
        mime if mime.starts_with("image/") => Some(DetectedType::Image),
        "application/json" => Some(DetectedType::Json),
        "text/html" => Some(DetectedType::Html),
        "text/css" => Some(DetectedType::Css),
        "text/javascript" | "application/javascript" => Some(DetectedType::Javascript),
        _ => None,
    }
}

fn from_extension(extension: &str) -> Option<DetectedType> {
    match extension {
        "json" => Some(DetectedType::Json),
        "html" | "htm" => Some(DetectedType::Html),
        "css" => Some(DetectedType::Css),
        ext if JAVASCRIPT_EXTENSIONS.contains(&ext) => Some(DetectedType::Javascript),
        _ => None,
    }
}

/// Classify a file by MIME type, then by extension, falling back to `text`.
///
/// The contents are never inspected.
pub fn detect_file_type(file: &FileInfo) -> DetectedType {
    from_mime(&file.essence())
        .or_else(|| file.extension().as_deref().and_then(from_extension))
        .unwrap_or(DetectedType::Text)
}
