//! Case transforms, text statistics and digests.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::transform::encoding::{encode_base64, encode_base64_url, encode_url};

static LOWER_UPPER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\p{Ll})(\p{Lu})").unwrap());
static NON_ALPHANUMERIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\p{L}\p{N}]+").unwrap());
static SENTENCE_END: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

/// Average silent reading speed used for `reading_time_minutes`.
const WORDS_PER_MINUTE: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextStats {
    pub characters: usize,
    pub characters_no_spaces: usize,
    pub words: usize,
    pub lines: usize,
    pub sentences: usize,
    pub reading_time_minutes: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseVariants {
    pub upper: String,
    pub lower: String,
    pub title: String,
    pub camel: String,
    pub pascal: String,
    pub snake: String,
    pub kebab: String,
    pub constant: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextHashes {
    pub md5: String,
    pub sha256: String,
}

/// The text encoded for transport, from its UTF-8 bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextEncodings {
    pub base64: String,
    pub base64_url: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextFormats {
    pub stats: TextStats,
    pub cases: CaseVariants,
    pub hashes: TextHashes,
    pub encodings: TextEncodings,
}

pub fn to_upper_case(text: &str) -> String {
    text.to_uppercase()
}

pub fn to_lower_case(text: &str) -> String {
    text.to_lowercase()
}

/// Lowercase everything, then capitalize the first letter of each word.
///
/// Words are runs of letters, digits and `_`; any other character starts a
/// new word, so `hello-world` becomes `Hello-World`.
pub fn to_title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;

    for c in text.chars() {
        if !(c.is_alphanumeric() || c == '_') {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            out.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }

    out
}

/// Drop separators and capitalize the letter that follows each run of them.
/// Letters inside words keep their case.
fn join_capitalized(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut capitalize_next = false;

    for c in text.chars() {
        if c.is_alphanumeric() {
            if capitalize_next && !out.is_empty() {
                out.extend(c.to_uppercase());
            } else {
                out.push(c);
            }
            capitalize_next = false;
        } else {
            capitalize_next = true;
        }
    }

    out
}

fn with_first(text: String, upper: bool) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if upper => first.to_uppercase().chain(chars).collect(),
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => text,
    }
}

pub fn to_camel_case(text: &str) -> String {
    with_first(join_capitalized(text), false)
}

pub fn to_pascal_case(text: &str) -> String {
    with_first(join_capitalized(text), true)
}

fn separated(text: &str, separator: &str) -> String {
    let split = LOWER_UPPER.replace_all(text, format!("${{1}}{separator}${{2}}").as_str());
    let joined = NON_ALPHANUMERIC.replace_all(&split, separator);
    joined
        .trim_matches(|c: char| separator.contains(c))
        .to_lowercase()
}

pub fn to_snake_case(text: &str) -> String {
    separated(text, "_")
}

pub fn to_kebab_case(text: &str) -> String {
    separated(text, "-")
}

pub fn to_constant_case(text: &str) -> String {
    to_snake_case(text).to_uppercase()
}

pub fn case_variants(text: &str) -> CaseVariants {
    CaseVariants {
        upper: to_upper_case(text),
        lower: to_lower_case(text),
        title: to_title_case(text),
        camel: to_camel_case(text),
        pascal: to_pascal_case(text),
        snake: to_snake_case(text),
        kebab: to_kebab_case(text),
        constant: to_constant_case(text),
    }
}

/// Counts for `text`.
///
/// Lines are the pieces between `\n` separators, so the empty string is one
/// empty line. Non-empty text without terminal punctuation, whitespace
/// included, is one sentence.
pub fn text_stats(text: &str) -> TextStats {
    let words = text.split_whitespace().count();

    let sentences = match SENTENCE_END.find_iter(text).count() {
        0 if !text.is_empty() => 1,
        n => n,
    };

    TextStats {
        characters: text.chars().count(),
        characters_no_spaces: text.chars().filter(|c| !c.is_whitespace()).count(),
        words,
        lines: text.split('\n').count(),
        sentences,
        reading_time_minutes: words.div_ceil(WORDS_PER_MINUTE),
    }
}

pub fn text_hashes(text: &str) -> TextHashes {
    TextHashes {
        md5: format!("{:x}", md5::compute(text.as_bytes())),
        sha256: format!("{:x}", Sha256::digest(text.as_bytes())),
    }
}

pub fn text_encodings(text: &str) -> TextEncodings {
    TextEncodings {
        base64: encode_base64(text),
        base64_url: encode_base64_url(text),
        url: encode_url(text),
    }
}

pub fn text_to_formats(text: &str) -> TextFormats {
    TextFormats {
        stats: text_stats(text),
        cases: case_variants(text),
        hashes: text_hashes(text),
        encodings: text_encodings(text),
    }
}
