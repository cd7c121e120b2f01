//! Per-type transformation families.
//!
//! Each submodule turns raw text of one [`DetectedType`] into a bundle of
//! derived representations. [`transform`] dispatches on the detected type.

pub mod code;
pub mod color;
pub mod encoding;
pub mod html;
pub mod image;
pub mod json;
pub mod jwt;
pub mod lorem;
pub mod number;
pub mod text;
pub mod timestamp;
pub mod uuid;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::detect::DetectedType;
use crate::error::ConvertError;

/// Output of [`transform`], one variant per detected type that can be
/// derived from text alone.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Formats {
    Json(json::JsonFormats),
    Html(html::HtmlFormats),
    Color(color::ColorFormats),
    Timestamp(timestamp::TimestampFormats),
    Css(code::CssFormats),
    Javascript(code::JsFormats),
    Text(text::TextFormats),
    Base64(encoding::Base64Formats),
    Url(encoding::UrlFormats),
    Jwt(jwt::JwtPayload),
    Number(number::NumberFormats),
    Uuid(uuid::UuidFormats),
}

impl Formats {
    pub fn kind(&self) -> DetectedType {
        match self {
            Formats::Json(_) => DetectedType::Json,
            Formats::Html(_) => DetectedType::Html,
            Formats::Color(_) => DetectedType::Color,
            Formats::Timestamp(_) => DetectedType::Timestamp,
            Formats::Css(_) => DetectedType::Css,
            Formats::Javascript(_) => DetectedType::Javascript,
            Formats::Text(_) => DetectedType::Text,
            Formats::Base64(_) => DetectedType::Base64,
            Formats::Url(_) => DetectedType::Url,
            Formats::Jwt(_) => DetectedType::Jwt,
            Formats::Number(_) => DetectedType::Number,
            Formats::Uuid(_) => DetectedType::Uuid,
        }
    }

    /// The representation a user most likely wants copied.
    pub fn primary(&self) -> String {
        match self {
            Formats::Json(f) => f.pretty.clone(),
            Formats::Html(f) => f.markdown.clone(),
            Formats::Color(f) => f.hex.clone(),
            Formats::Timestamp(f) => f.iso8601.clone(),
            Formats::Css(f) => f.beautified.clone(),
            Formats::Javascript(f) => f.beautified.clone(),
            Formats::Text(f) => f.cases.snake.clone(),
            Formats::Base64(f) => f.decoded.clone(),
            Formats::Url(f) => f.decoded.clone(),
            Formats::Jwt(f) => serde_json::to_string_pretty(&f.payload).unwrap_or_default(),
            Formats::Number(f) => f.decimal.clone(),
            Formats::Uuid(f) => f.canonical.clone(),
        }
    }
}

/// Derive the formats bundle for `raw` interpreted as `kind`.
///
/// Input that does not actually parse as `kind` is reported as an error
/// rather than a degraded bundle.
pub fn try_transform(kind: DetectedType, raw: &str, now: DateTime<Utc>) -> Result<Formats, ConvertError> {
    let trimmed = raw.trim();
    let invalid = || ConvertError::UnsupportedType(format!("input is not valid {kind}"));

    let formats = match kind {
        DetectedType::Json => Formats::Json(json::json_to_formats(trimmed).ok_or_else(invalid)?),
        DetectedType::Html => Formats::Html(html::html_to_formats(raw)),
        DetectedType::Color => Formats::Color(color::color_to_formats(trimmed).ok_or_else(invalid)?),
        DetectedType::Timestamp => {
            Formats::Timestamp(timestamp::timestamp_to_formats(trimmed, now).ok_or_else(invalid)?)
        }
        DetectedType::Css => Formats::Css(code::css_to_formats(raw)),
        DetectedType::Javascript => Formats::Javascript(code::js_to_formats(raw)),
        DetectedType::Text => Formats::Text(text::text_to_formats(raw)),
        DetectedType::Base64 => Formats::Base64(encoding::base64_to_formats(trimmed)),
        DetectedType::Url => Formats::Url(encoding::url_to_formats(trimmed)),
        DetectedType::Jwt => Formats::Jwt(jwt::try_parse_jwt(trimmed, now)?),
        DetectedType::Number => {
            let value = number::parse_number(trimmed).ok_or_else(invalid)?;
            Formats::Number(number::number_to_all_bases(value))
        }
        DetectedType::Uuid => Formats::Uuid(uuid::uuid_to_formats(trimmed).ok_or_else(invalid)?),
        DetectedType::Image => {
            return Err(ConvertError::UnsupportedType(
                "image input needs decoded pixels".to_string(),
            ))
        }
    };

    Ok(formats)
}

/// Total form of [`try_transform`]; `image` and unparseable input yield `None`.
pub fn transform(kind: DetectedType, raw: &str, now: DateTime<Utc>) -> Option<Formats> {
    try_transform(kind, raw, now).ok()
}
