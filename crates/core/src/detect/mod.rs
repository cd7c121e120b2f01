//! Content classification.
//!
//! [`detect`] runs an ordered chain of single-purpose rules over the trimmed
//! input and returns the first match. Rules overlap on purpose (every JWT is
//! also valid Base64, every UUID is also text), so the order of
//! [`rules::RULES`] decides precedence, not the confidence score.
//!
//! [`detect_file_type`] classifies a file from its metadata only.

pub mod file;
pub mod rules;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ConvertError;
use crate::transform::color::ColorRgb;

pub use file::{detect_file_type, FileInfo};

/// Shortest string considered for Base64 detection.
pub const BASE64_MIN_LENGTH: usize = 32;
/// Minimum share of printable bytes in decoded Base64.
pub const BASE64_MIN_PRINTABLE_RATIO: f64 = 0.8;
/// Length from which a single-line CSS or JavaScript snippet looks minified.
pub const MINIFIED_MIN_LENGTH: usize = 200;
/// Latest accepted timestamp, 2100-01-01T00:00:00Z in seconds.
pub const MAX_TIMESTAMP_SECONDS: i64 = 4_102_444_800;
/// Confidence of the `text` fallback.
pub const FALLBACK_CONFIDENCE: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectedType {
    Json,
    Html,
    Color,
    Timestamp,
    Css,
    Javascript,
    Text,
    Image,
    Base64,
    Url,
    Jwt,
    Number,
    Uuid,
}

impl DetectedType {
    pub const ALL: [DetectedType; 13] = [
        DetectedType::Json,
        DetectedType::Html,
        DetectedType::Color,
        DetectedType::Timestamp,
        DetectedType::Css,
        DetectedType::Javascript,
        DetectedType::Text,
        DetectedType::Image,
        DetectedType::Base64,
        DetectedType::Url,
        DetectedType::Jwt,
        DetectedType::Number,
        DetectedType::Uuid,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DetectedType::Json => "json",
            DetectedType::Html => "html",
            DetectedType::Color => "color",
            DetectedType::Timestamp => "timestamp",
            DetectedType::Css => "css",
            DetectedType::Javascript => "javascript",
            DetectedType::Text => "text",
            DetectedType::Image => "image",
            DetectedType::Base64 => "base64",
            DetectedType::Url => "url",
            DetectedType::Jwt => "jwt",
            DetectedType::Number => "number",
            DetectedType::Uuid => "uuid",
        }
    }
}

impl fmt::Display for DetectedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DetectedType {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        DetectedType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| ConvertError::UnsupportedType(format!("unknown type '{s}'")))
    }
}

/// Side artifact computed while matching, when it comes for free.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum ParsedValue {
    Json(Value),
    Jwt { header: Value, payload: Value },
    Color(ColorRgb),
    /// Milliseconds since the Unix epoch.
    Timestamp(i64),
    Number(i64),
    Decoded(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectionResult {
    #[serde(rename = "type")]
    pub kind: DetectedType,
    /// Informational only, in `[0, 1]`.
    pub confidence: f64,
    /// The untouched input.
    pub raw: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parsed: Option<ParsedValue>,
}

impl DetectionResult {
    fn fallback(raw: &str) -> Self {
        Self {
            kind: DetectedType::Text,
            confidence: FALLBACK_CONFIDENCE,
            raw: raw.to_string(),
            parsed: None,
        }
    }
}

/// Classify `input` into exactly one [`DetectedType`].
///
/// Total and deterministic: blank input and input no rule accepts both come
/// back as `text` with confidence 0.5.
pub fn detect(input: &str) -> DetectionResult {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return DetectionResult::fallback(input);
    }

    for (name, rule) in rules::RULES {
        if let Some(found) = rule(trimmed) {
            log::trace!("rule '{name}' matched with confidence {}", found.confidence);
            return DetectionResult {
                kind: found.kind,
                confidence: found.confidence,
                raw: input.to_string(),
                parsed: found.parsed,
            };
        }
    }

    log::trace!("no rule matched, falling back to text");
    DetectionResult::fallback(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::jwt::tests::make_token;

    fn kind(input: &str) -> DetectedType {
        detect(input).kind
    }

    #[test]
    fn test_detect_empty_is_text() {
        for input in ["", "   ", "\n\t"] {
            let result = detect(input);
            assert_eq!(result.kind, DetectedType::Text);
            assert_eq!(result.confidence, 0.5);
            assert_eq!(result.raw, input);
            assert!(result.parsed.is_none());
        }
    }

    #[test]
    fn test_detect_keeps_raw_untrimmed() {
        let result = detect("  #fff \n");
        assert_eq!(result.kind, DetectedType::Color);
        assert_eq!(result.raw, "  #fff \n");
    }

    #[test]
    fn test_detect_jwt_before_base64() {
        let token = make_token(
            r#"{"alg":"HS256","typ":"JWT"}"#,
            r#"{"sub":"1234567890","name":"John Doe","iat":1516239022}"#,
        );
        let result = detect(&token);
        assert_eq!(result.kind, DetectedType::Jwt);
        assert_eq!(result.confidence, 0.95);
        let Some(ParsedValue::Jwt { header, payload }) = result.parsed else {
            panic!("expected parsed JWT claims");
        };
        assert_eq!(header["alg"], "HS256");
        assert_eq!(payload["name"], "John Doe");
    }

    #[test]
    fn test_detect_unsigned_jwt_with_empty_signature() {
        use crate::transform::encoding::encode_base64_url;

        let token = format!(
            "{}.{}.",
            encode_base64_url(r#"{"alg":"none"}"#),
            encode_base64_url(r#"{"sub":"1"}"#)
        );
        let result = detect(&token);
        assert_eq!(result.kind, DetectedType::Jwt);
        let Some(ParsedValue::Jwt { header, .. }) = result.parsed else {
            panic!("expected parsed JWT claims");
        };
        assert_eq!(header["alg"], "none");
    }

    #[test]
    fn test_detect_jwt_header_without_alg_or_typ_falls_through() {
        let token = make_token(r#"{"kid":"x"}"#, r#"{"sub":"1"}"#);
        assert_ne!(kind(&token), DetectedType::Jwt);
    }

    #[test]
    fn test_detect_uuid() {
        assert_eq!(kind("550e8400-e29b-41d4-a716-446655440000"), DetectedType::Uuid);
        assert_eq!(kind("550E8400-E29B-41D4-A716-446655440000"), DetectedType::Uuid);
    }

    #[test]
    fn test_detect_json() {
        let result = detect(r#"{"a": [1, 2, 3]}"#);
        assert_eq!(result.kind, DetectedType::Json);
        assert_eq!(result.confidence, 1.0);
        assert!(matches!(result.parsed, Some(ParsedValue::Json(_))));

        assert_eq!(kind("[1, 2"), DetectedType::Text);
        assert_ne!(kind("42"), DetectedType::Json);
    }

    #[test]
    fn test_detect_color() {
        for input in ["#FF6B35", "#fff", "#11223344", "rgb(255, 107, 53)", "rgba(0,0,0,0.5)", "hsl(120, 50%, 50%)"] {
            assert_eq!(kind(input), DetectedType::Color, "{input}");
        }
        assert_eq!(kind("rgb(999,0,0)"), DetectedType::Color);
        assert_eq!(
            detect("#ff0000").parsed,
            Some(ParsedValue::Color(ColorRgb::opaque(255, 0, 0)))
        );
    }

    #[test]
    fn test_detect_timestamp() {
        let seconds = detect("1700000000");
        assert_eq!(seconds.kind, DetectedType::Timestamp);
        assert_eq!(seconds.parsed, Some(ParsedValue::Timestamp(1_700_000_000_000)));

        let millis = detect("1700000000000");
        assert_eq!(millis.kind, DetectedType::Timestamp);
        assert_eq!(millis.parsed, Some(ParsedValue::Timestamp(1_700_000_000_000)));
    }

    #[test]
    fn test_detect_zero_padded_seconds() {
        let result = detect("0000000060");
        assert_eq!(result.kind, DetectedType::Timestamp);
        assert_eq!(result.parsed, Some(ParsedValue::Timestamp(60_000)));
    }

    #[test]
    fn test_detect_timestamp_out_of_range() {
        assert_ne!(kind("99999999999999"), DetectedType::Timestamp);
        assert_ne!(kind("9999999999"), DetectedType::Timestamp);
        assert_ne!(kind("9999999999999"), DetectedType::Timestamp);
        assert_eq!(kind("4102444800"), DetectedType::Timestamp);
    }

    #[test]
    fn test_detect_number() {
        assert_eq!(detect("0xFF").parsed, Some(ParsedValue::Number(255)));
        assert_eq!(detect("0b1010").parsed, Some(ParsedValue::Number(10)));
        assert_eq!(detect("0o17").parsed, Some(ParsedValue::Number(15)));
        assert_ne!(kind("0xZZ"), DetectedType::Number);
        assert_ne!(kind("0b102"), DetectedType::Number);
        assert_ne!(kind("12345"), DetectedType::Number);
    }

    #[test]
    fn test_detect_url_encoded() {
        let result = detect("hello%20world%21");
        assert_eq!(result.kind, DetectedType::Url);
        assert_eq!(result.parsed, Some(ParsedValue::Decoded("hello world!".to_string())));

        assert_ne!(kind("100%25"), DetectedType::Url);
    }

    #[test]
    fn test_detect_base64() {
        let encoded = crate::transform::encoding::encode_base64("The quick brown fox jumps over the lazy dog");
        let result = detect(&encoded);
        assert_eq!(result.kind, DetectedType::Base64);
        assert_eq!(
            result.parsed,
            Some(ParsedValue::Decoded("The quick brown fox jumps over the lazy dog".to_string()))
        );
    }

    #[test]
    fn test_detect_short_alphanumeric_is_not_base64() {
        assert_ne!(kind("abcdefghij0123456789"), DetectedType::Base64);
    }

    #[test]
    fn test_detect_binary_base64_is_not_base64() {
        assert_ne!(kind("AAECAwQFBgcICQoLDA0ODxAREhMUFRYXGBkaGxwdHh8="), DetectedType::Base64);
    }

    #[test]
    fn test_detect_html() {
        let page = detect("<!DOCTYPE html><html><body><div><p>Hi</p></div></body></html>");
        assert_eq!(page.kind, DetectedType::Html);
        assert_eq!(page.confidence, 1.0);

        let fragment = detect("<em>just a tag</em>");
        assert_eq!(fragment.kind, DetectedType::Html);
        assert_eq!(fragment.confidence, 0.5);

        let span = detect("Some <span>inline</span> text");
        assert_eq!(span.kind, DetectedType::Html);
        assert!((span.confidence - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_detect_css() {
        let css = detect("body {\n  color: red;\n  margin: 0;\n}");
        assert_eq!(css.kind, DetectedType::Css);
        assert_eq!(css.confidence, 0.7);

        let rule = ".btn{color:#fff;background:#000;padding:4px 8px;border-radius:4px;}";
        let minified = rule.repeat(4);
        let result = detect(&minified);
        assert_eq!(result.kind, DetectedType::Css);
        assert_eq!(result.confidence, 0.9);
    }

    #[test]
    fn test_detect_minified_javascript() {
        let line = "function a(b){return b*2};const c=[1,2,3].map(a);if(c.length>2){console.log(c)};";
        let minified = line.repeat(3);
        assert!(minified.len() >= MINIFIED_MIN_LENGTH);
        let result = detect(&minified);
        assert_eq!(result.kind, DetectedType::Javascript);
        assert_eq!(result.confidence, 0.8);
    }

    #[test]
    fn test_detect_short_javascript_is_text() {
        assert_eq!(kind("const x = 1;"), DetectedType::Text);
    }

    #[test]
    fn test_detect_plain_text() {
        let result = detect("Just a regular sentence.");
        assert_eq!(result.kind, DetectedType::Text);
        assert_eq!(result.confidence, 0.5);
    }

    #[test]
    fn test_detected_type_round_trips_through_str() {
        for kind in DetectedType::ALL {
            assert_eq!(kind.to_string().parse::<DetectedType>().unwrap(), kind);
        }
        assert_eq!("JSON".parse::<DetectedType>().unwrap(), DetectedType::Json);
        assert!("yaml".parse::<DetectedType>().is_err());
    }

    #[test]
    fn test_detection_result_serializes_type_tag() {
        let value = serde_json::to_value(detect("0x10")).unwrap();
        assert_eq!(value["type"], "number");
        assert_eq!(value["parsed"]["kind"], "number");
        assert_eq!(value["parsed"]["value"], 16);
    }
}
