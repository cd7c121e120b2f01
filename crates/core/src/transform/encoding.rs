//! Base64 and percent-encoding transformations.
//!
//! Both directions are UTF-8 safe: text is encoded from its UTF-8 bytes and
//! decoded bytes must form valid UTF-8 to be returned as text.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD, URL_SAFE_NO_PAD};
use base64::engine::DecodePaddingMode;
use base64::Engine as _;
use serde::Serialize;

use crate::error::ConvertError;

/// Placeholder returned by [`decode_base64`] when the input cannot be decoded.
pub const INVALID_BASE64: &str = "[Invalid Base64]";

/// Standard alphabet that tolerates missing padding and stray trailing bits.
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Base64Formats {
    pub decoded: String,
    pub byte_length: usize,
    pub url_safe: String,
    pub is_url_safe_input: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlFormats {
    pub decoded: String,
    pub reencoded: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub query_params: Vec<(String, String)>,
}

/// Encode text as standard, padded Base64 of its UTF-8 bytes.
pub fn encode_base64(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Encode text as URL-safe Base64 without padding.
pub fn encode_base64_url(text: &str) -> String {
    URL_SAFE_NO_PAD.encode(text.as_bytes())
}

/// Decode Base64 in either alphabet into raw bytes.
///
/// Whitespace is ignored and `-`/`_` are mapped onto `+`/`/` before decoding,
/// so standard and URL-safe input are both accepted, padded or not.
pub fn decode_base64_bytes(input: &str) -> Result<Vec<u8>, ConvertError> {
    let normalized: String = input
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();

    Ok(LENIENT.decode(normalized.as_bytes())?)
}

/// Decode Base64 into UTF-8 text.
pub fn try_decode_base64(input: &str) -> Result<String, ConvertError> {
    let bytes = decode_base64_bytes(input)?;
    Ok(String::from_utf8(bytes)?)
}

/// Decode Base64 into UTF-8 text, or [`INVALID_BASE64`] when that fails.
pub fn decode_base64(input: &str) -> String {
    try_decode_base64(input).unwrap_or_else(|_| INVALID_BASE64.to_string())
}

/// Percent-encode every byte outside the unreserved set.
pub fn encode_url(text: &str) -> String {
    urlencoding::encode(text).into_owned()
}

/// Percent-decode, failing when the result is not valid UTF-8.
pub fn try_decode_url(text: &str) -> Result<String, ConvertError> {
    urlencoding::decode(text)
        .map(|decoded| decoded.into_owned())
        .map_err(|_| ConvertError::InvalidUtf8)
}

/// Percent-decode, replacing invalid UTF-8 sequences instead of failing.
pub fn decode_url(text: &str) -> String {
    String::from_utf8_lossy(&urlencoding::decode_binary(text.as_bytes())).into_owned()
}

/// Split a query string (or a full URL with one) into decoded key/value pairs.
///
/// Pairs are split before decoding so that encoded `&` and `=` stay inside
/// their values.
pub fn parse_query_params(text: &str) -> Vec<(String, String)> {
    let query = match text.split_once('?') {
        Some((_, query)) => query,
        None if text.contains('&') || text.contains('=') => text,
        None => return Vec::new(),
    };
    let query = query.split('#').next().unwrap_or_default();

    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) => (decode_url(key), decode_url(value)),
            None => (decode_url(pair), String::new()),
        })
        .collect()
}

pub fn base64_to_formats(input: &str) -> Base64Formats {
    let trimmed = input.trim();
    let is_url_safe_input = trimmed.contains('-') || trimmed.contains('_');

    match decode_base64_bytes(trimmed) {
        Ok(bytes) => Base64Formats {
            decoded: String::from_utf8(bytes.clone()).unwrap_or_else(|_| INVALID_BASE64.to_string()),
            byte_length: bytes.len(),
            url_safe: URL_SAFE_NO_PAD.encode(&bytes),
            is_url_safe_input,
        },
        Err(_) => Base64Formats {
            decoded: INVALID_BASE64.to_string(),
            byte_length: 0,
            url_safe: String::new(),
            is_url_safe_input,
        },
    }
}

pub fn url_to_formats(input: &str) -> UrlFormats {
    let trimmed = input.trim();
    let decoded = decode_url(trimmed);

    UrlFormats {
        reencoded: encode_url(&decoded),
        query_params: parse_query_params(trimmed),
        decoded,
    }
}
