//! Best-effort CSS and JavaScript formatting.
//!
//! Neither formatter tokenizes its input. The CSS formatter works on
//! punctuation only; the JavaScript formatter is a single-pass scanner that
//! tracks string literals so braces and separators inside them survive.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

const INDENT: &str = "  ";

static CSS_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static CSS_PUNCTUATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*([{}:;,>])\s*").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CssFormats {
    pub beautified: String,
    pub minified: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JsFormats {
    pub beautified: String,
}

fn normalize_css_line(line: &str, depth: usize) -> String {
    if let Some(selector) = line.strip_suffix('{') {
        let selector = WHITESPACE.replace_all(selector.trim(), " ");
        return format!("{selector} {{");
    }

    if depth > 0 {
        if let Some((property, value)) = line.split_once(':') {
            return format!("{}: {}", property.trim(), value.trim());
        }
    }

    line.to_string()
}

pub fn beautify_css(css: &str) -> String {
    let spaced = css
        .replace('{', "{\n")
        .replace('}', "\n}\n")
        .replace(';', ";\n");

    let mut depth = 0usize;
    let mut lines = Vec::new();

    for raw in spaced.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with('}') {
            depth = depth.saturating_sub(1);
        }

        let line = normalize_css_line(line, depth);
        lines.push(format!("{}{}", INDENT.repeat(depth), line));

        if line.ends_with('{') {
            depth += 1;
        }
    }

    lines.join("\n")
}

pub fn minify_css(css: &str) -> String {
    let css = CSS_COMMENT.replace_all(css, "");
    let css = WHITESPACE.replace_all(&css, " ");
    let css = CSS_PUNCTUATION.replace_all(&css, "$1");
    css.replace(";}", "}").trim().to_string()
}

fn break_line(out: &mut String, depth: usize) {
    let trimmed_len = out.trim_end_matches(' ').len();
    out.truncate(trimmed_len);
    out.push('\n');
    out.push_str(&INDENT.repeat(depth));
}

pub fn beautify_js(code: &str) -> String {
    let mut out = String::with_capacity(code.len() * 2);
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;

    let mut chars = code.chars().peekable();
    while let Some(c) = chars.next() {
        if let Some(q) = quote {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }

        match c {
            '"' | '\'' | '`' => {
                quote = Some(c);
                out.push(c);
            }
            '{' | '[' => {
                out.push(c);
                depth += 1;
                break_line(&mut out, depth);
            }
            '}' | ']' => {
                depth = depth.saturating_sub(1);
                break_line(&mut out, depth);
                out.push(c);
                if c == '}' && !matches!(chars.peek(), None | Some(';' | ',' | ')')) {
                    break_line(&mut out, depth);
                }
            }
            ';' | ',' => {
                out.push(c);
                break_line(&mut out, depth);
            }
            '\n' | '\r' => break_line(&mut out, depth),
            c if c.is_whitespace() => {
                if !out.ends_with(char::is_whitespace) && !out.is_empty() {
                    out.push(' ');
                }
            }
            _ => out.push(c),
        }
    }

    out.lines()
        .map(str::trim_end)
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn css_to_formats(css: &str) -> CssFormats {
    CssFormats {
        beautified: beautify_css(css),
        minified: minify_css(css),
    }
}

pub fn js_to_formats(code: &str) -> JsFormats {
    JsFormats {
        beautified: beautify_js(code),
    }
}
