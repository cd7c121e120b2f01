//! The individual detection rules, in precedence order.
//!
//! Every rule receives the trimmed, non-empty input and either rejects it
//! or reports a [`RuleMatch`]. A rule never fails: anything it cannot decode
//! is simply not its type.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use super::{
    DetectedType, ParsedValue, BASE64_MIN_LENGTH, BASE64_MIN_PRINTABLE_RATIO, MAX_TIMESTAMP_SECONDS,
    MINIFIED_MIN_LENGTH,
};
use crate::transform::color::{is_color, parse_color};
use crate::transform::encoding::{decode_base64_bytes, try_decode_url};
use crate::transform::jwt::decode_segment;
use crate::transform::number::parse_number;
use crate::transform::timestamp::parse_timestamp;

static JWT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+\.[A-Za-z0-9_-]+\.[A-Za-z0-9_-]*$").unwrap());
static UUID_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$").unwrap()
});
static TIMESTAMP_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:\d{10}|\d{13})$").unwrap());
static NUMBER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:0x[0-9a-f]+|0b[01]+|0o[0-7]+)$").unwrap());
static PERCENT_ESCAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"%[0-9A-Fa-f]{2}").unwrap());
static BASE64_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9+/]+={0,2}$").unwrap());
static BASE64_URL_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+={0,2}$").unwrap());
static HTML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"</?[a-zA-Z][^>]*>").unwrap());
static HTML_INDICATORS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)<!doctype",
        r"(?i)<html[\s>]",
        r"(?i)<body[\s>]",
        r"(?i)<div[\s>]",
        r"(?i)<p[\s>]",
        r"(?i)<span[\s>]",
        r"(?i)<h[1-6][\s>]",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});
static CSS_SELECTOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.#]?[a-zA-Z][\w-]*\s*\{").unwrap());
static CSS_DECLARATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-zA-Z-]+\s*:\s*[^;{}]+;").unwrap());
static JS_KEYWORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:function|const|let|var|class|import|export|return|async|await)\b|=>").unwrap()
});
static JS_STATEMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:if|for|while|switch)\s*\(|console\.\w+\(|document\.\w+|\w+\.\w+\(").unwrap()
});

/// What a rule reports on a match. The caller attaches the raw input.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleMatch {
    pub kind: DetectedType,
    pub confidence: f64,
    pub parsed: Option<ParsedValue>,
}

impl RuleMatch {
    fn new(kind: DetectedType, confidence: f64) -> Self {
        Self {
            kind,
            confidence,
            parsed: None,
        }
    }

    fn with(mut self, parsed: ParsedValue) -> Self {
        self.parsed = Some(parsed);
        self
    }
}

pub type Rule = fn(&str) -> Option<RuleMatch>;

/// Detection rules, most specific first. The first match wins.
pub const RULES: &[(&str, Rule)] = &[
    ("jwt", detect_jwt),
    ("uuid", detect_uuid),
    ("json", detect_json),
    ("color", detect_color),
    ("timestamp", detect_timestamp),
    ("number", detect_number),
    ("url", detect_url_encoded),
    ("base64", detect_base64),
    ("html", detect_html),
    ("css", detect_css),
    ("javascript", detect_javascript),
];

pub fn detect_jwt(input: &str) -> Option<RuleMatch> {
    if !JWT_PATTERN.is_match(input) {
        return None;
    }

    let mut segments = input.split('.');
    let header = decode_segment(segments.next()?).ok()?;
    let payload = decode_segment(segments.next()?).ok()?;

    let header_fields = header.as_object()?;
    if !header_fields.contains_key("alg") && !header_fields.contains_key("typ") {
        return None;
    }

    Some(RuleMatch::new(DetectedType::Jwt, 0.95).with(ParsedValue::Jwt { header, payload }))
}

pub fn detect_uuid(input: &str) -> Option<RuleMatch> {
    UUID_PATTERN
        .is_match(input)
        .then(|| RuleMatch::new(DetectedType::Uuid, 1.0))
}

pub fn detect_json(input: &str) -> Option<RuleMatch> {
    if !input.starts_with(['{', '[']) {
        return None;
    }

    let value: Value = serde_json::from_str(input).ok()?;
    Some(RuleMatch::new(DetectedType::Json, 1.0).with(ParsedValue::Json(value)))
}

pub fn detect_color(input: &str) -> Option<RuleMatch> {
    if !is_color(input) {
        return None;
    }

    let rgb = parse_color(input)?;
    Some(RuleMatch::new(DetectedType::Color, 0.95).with(ParsedValue::Color(rgb)))
}

/// 10 digits are seconds, 13 are milliseconds; either must land in
/// `[0, MAX_TIMESTAMP_SECONDS]`.
pub fn detect_timestamp(input: &str) -> Option<RuleMatch> {
    if !TIMESTAMP_PATTERN.is_match(input) {
        return None;
    }

    let millis = parse_timestamp(input)?;
    let seconds = millis / 1000;
    if !(0..=MAX_TIMESTAMP_SECONDS).contains(&seconds) {
        return None;
    }

    Some(RuleMatch::new(DetectedType::Timestamp, 0.8).with(ParsedValue::Timestamp(millis)))
}

/// Only prefixed literals; bare decimals are too ambiguous to claim.
pub fn detect_number(input: &str) -> Option<RuleMatch> {
    if !NUMBER_PATTERN.is_match(input) {
        return None;
    }

    let value = parse_number(input)?;
    Some(RuleMatch::new(DetectedType::Number, 0.9).with(ParsedValue::Number(value)))
}

pub fn detect_url_encoded(input: &str) -> Option<RuleMatch> {
    if PERCENT_ESCAPE.find_iter(input).take(2).count() < 2 {
        return None;
    }

    let decoded = try_decode_url(input).ok()?;
    if decoded == input {
        return None;
    }

    Some(RuleMatch::new(DetectedType::Url, 0.85).with(ParsedValue::Decoded(decoded)))
}

fn is_printable(byte: u8) -> bool {
    byte.is_ascii_graphic() || matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}

pub fn detect_base64(input: &str) -> Option<RuleMatch> {
    if input.len() < BASE64_MIN_LENGTH {
        return None;
    }
    if !BASE64_PATTERN.is_match(input) && !BASE64_URL_PATTERN.is_match(input) {
        return None;
    }

    let bytes = decode_base64_bytes(input).ok()?;
    if bytes.is_empty() {
        return None;
    }

    let printable = bytes.iter().filter(|b| is_printable(**b)).count();
    if (printable as f64) / (bytes.len() as f64) < BASE64_MIN_PRINTABLE_RATIO {
        return None;
    }

    let decoded = String::from_utf8_lossy(&bytes).into_owned();
    Some(RuleMatch::new(DetectedType::Base64, 0.7).with(ParsedValue::Decoded(decoded)))
}

pub fn detect_html(input: &str) -> Option<RuleMatch> {
    if !HTML_TAG.is_match(input) {
        return None;
    }

    let score = HTML_INDICATORS
        .iter()
        .filter(|indicator| indicator.is_match(input))
        .count();
    let wrapped = input.starts_with('<') && input.ends_with('>');
    if score == 0 && !wrapped {
        return None;
    }

    let confidence = (0.5 + 0.1 * score as f64).min(1.0);
    Some(RuleMatch::new(DetectedType::Html, confidence))
}

fn looks_minified(input: &str) -> bool {
    !input.contains('\n') && input.len() >= MINIFIED_MIN_LENGTH
}

pub fn detect_css(input: &str) -> Option<RuleMatch> {
    if !CSS_SELECTOR.is_match(input) || !CSS_DECLARATION.is_match(input) {
        return None;
    }

    let minified = looks_minified(input) && ['{', '}', ':', ';'].iter().all(|c| input.contains(*c));
    let confidence = if minified { 0.9 } else { 0.7 };

    Some(RuleMatch::new(DetectedType::Css, confidence))
}

pub fn detect_javascript(input: &str) -> Option<RuleMatch> {
    if !JS_KEYWORD.is_match(input) && !JS_STATEMENT.is_match(input) {
        return None;
    }

    let structural = input.contains(';') && (input.contains('{') || input.contains('('));
    if !(looks_minified(input) && structural) {
        return None;
    }

    Some(RuleMatch::new(DetectedType::Javascript, 0.8))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_are_in_precedence_order() {
        let names: Vec<&str> = RULES.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            [
                "jwt",
                "uuid",
                "json",
                "color",
                "timestamp",
                "number",
                "url",
                "base64",
                "html",
                "css",
                "javascript"
            ]
        );
    }

    #[test]
    fn test_every_rule_rejects_plain_prose() {
        for (name, rule) in RULES {
            assert!(rule("hello there, friend").is_none(), "{name} matched prose");
        }
    }

    #[test]
    fn test_jwt_rule_rejects_undecodable_segments() {
        assert!(detect_jwt("abc.def.ghi").is_none());
        assert!(detect_jwt("only.two").is_none());
    }

    #[test]
    fn test_number_rule_rejects_overflow() {
        assert!(detect_number("0xFFFFFFFFFFFFFFFFFF").is_none());
    }

    #[test]
    fn test_url_rule_requires_a_change() {
        assert!(detect_url_encoded("%41%42").is_some());
        assert!(detect_url_encoded("%zz%yy").is_none());
    }

    #[test]
    fn test_base64_rule_accepts_url_safe_alphabet() {
        let encoded = crate::transform::encoding::encode_base64_url("subjects?>>and objects?>> in a long line");
        assert!(encoded.contains('-') || encoded.contains('_'));
        let found = detect_base64(&encoded).unwrap();
        assert_eq!(found.kind, DetectedType::Base64);
    }

    #[test]
    fn test_css_needs_a_declaration() {
        assert!(detect_css("body { }").is_none());
        assert!(detect_css("a { color: blue; }").is_some());
    }
}
