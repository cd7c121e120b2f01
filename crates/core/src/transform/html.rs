//! HTML to Markdown and plain-text conversion.
//!
//! Markdown conversion is a fixed sequence of regex rewrites, not a parser:
//! well-formed, shallow markup converts cleanly while malformed or deeply
//! nested markup degrades to best-effort output.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Node};
use serde::Serialize;

use crate::capabilities::HtmlTextExtractor;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HtmlFormats {
    pub plain_text: String,
    pub markdown: String,
    pub escaped: String,
    pub unescaped: String,
}

static SCRIPT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<script\b[^>]*>.*?</script>").unwrap());
static STYLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<style\b[^>]*>.*?</style>").unwrap());

static HEADINGS: Lazy<Vec<(Regex, String)>> = Lazy::new(|| {
    (1..=6)
        .map(|level| {
            let pattern = format!(r"(?is)<h{level}\b[^>]*>(.*?)</h{level}>");
            let replacement = format!("\n{} $1\n", "#".repeat(level));
            (Regex::new(&pattern).unwrap(), replacement)
        })
        .collect()
});

static BOLD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<(?:strong|b)\b[^>]*>(.*?)</(?:strong|b)>").unwrap());
static ITALIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<(?:em|i)\b[^>]*>(.*?)</(?:em|i)>").unwrap());
static CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<code\b[^>]*>(.*?)</code>").unwrap());
static IMAGE_WITH_ALT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?is)<img\b[^>]*?src\s*=\s*["']([^"']*)["'][^>]*?alt\s*=\s*["']([^"']*)["'][^>]*>"#)
        .unwrap()
});
static IMAGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?is)<img\b[^>]*?src\s*=\s*["']([^"']*)["'][^>]*>"#).unwrap()
});
static LINK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?is)<a\b[^>]*?href\s*=\s*["']([^"']*)["'][^>]*>(.*?)</a>"#).unwrap()
});
static LIST_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<li\b[^>]*>(.*?)</li>").unwrap());
static LIST: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)</?(?:ul|ol)\b[^>]*>").unwrap());
static PARAGRAPH: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<p\b[^>]*>(.*?)</p>").unwrap());
static BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<br\s*/?>").unwrap());
static RULE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<hr\b[^>]*/?>").unwrap());
static ANY_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<[^>]+>").unwrap());
static EXTRA_NEWLINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

const ENTITIES: &[(&str, &str)] = &[
    ("&nbsp;", " "),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&amp;", "&"),
];

const BLOCK_ELEMENTS: &[&str] = &["p", "div", "br", "h1", "h2", "h3", "h4", "h5", "h6", "li"];

/// Remove script and style tags from HTML
pub fn clean_html(html: &str) -> String {
    let html = SCRIPT.replace_all(html, "");
    STYLE.replace_all(&html, "").into_owned()
}

pub fn html_to_markdown(html: &str) -> String {
    let mut md = clean_html(html);

    for (pattern, replacement) in HEADINGS.iter() {
        md = pattern.replace_all(&md, replacement.as_str()).into_owned();
    }

    md = BOLD.replace_all(&md, "**$1**").into_owned();
    md = ITALIC.replace_all(&md, "*$1*").into_owned();
    md = CODE.replace_all(&md, "`$1`").into_owned();

    md = IMAGE_WITH_ALT.replace_all(&md, "![$2]($1)").into_owned();
    md = IMAGE.replace_all(&md, "![]($1)").into_owned();
    md = LINK.replace_all(&md, "[$2]($1)").into_owned();

    md = LIST_ITEM.replace_all(&md, "- $1\n").into_owned();
    md = LIST.replace_all(&md, "\n").into_owned();

    md = PARAGRAPH.replace_all(&md, "$1\n\n").into_owned();
    md = BREAK.replace_all(&md, "\n").into_owned();
    md = RULE.replace_all(&md, "\n---\n").into_owned();

    md = ANY_TAG.replace_all(&md, "").into_owned();

    for (entity, text) in ENTITIES {
        md = md.replace(entity, text);
    }

    EXTRA_NEWLINES.replace_all(&md, "\n\n").trim().to_string()
}

/// Plain-text extraction by walking the parsed HTML tree.
///
/// Text nodes accumulate into the current line; entering or leaving a block
/// element (`p`, `div`, `br`, `h1`-`h6`, `li`) flushes it.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScraperTextExtractor;

struct LineBuffer {
    lines: Vec<String>,
    current: String,
}

impl LineBuffer {
    fn flush(&mut self) {
        let line = self.current.split_whitespace().collect::<Vec<_>>().join(" ");
        if !line.is_empty() {
            self.lines.push(line);
        }
        self.current.clear();
    }
}

fn walk(element: ElementRef<'_>, buffer: &mut LineBuffer) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => buffer.current.push_str(text),
            Node::Element(el) => {
                let name = el.name();
                if name == "script" || name == "style" {
                    continue;
                }

                let is_block = BLOCK_ELEMENTS.contains(&name);
                if is_block {
                    buffer.flush();
                }
                if let Some(child_element) = ElementRef::wrap(child) {
                    walk(child_element, buffer);
                }
                if is_block {
                    buffer.flush();
                }
            }
            _ => {}
        }
    }
}

impl HtmlTextExtractor for ScraperTextExtractor {
    fn extract_text(&self, html: &str) -> String {
        let fragment = Html::parse_fragment(html);
        let mut buffer = LineBuffer {
            lines: Vec::new(),
            current: String::new(),
        };

        walk(fragment.root_element(), &mut buffer);
        buffer.flush();

        buffer.lines.join("\n")
    }
}

pub fn html_to_plain_text(html: &str) -> String {
    ScraperTextExtractor.extract_text(html)
}

pub fn escape_html(text: &str) -> String {
    html_escape::encode_safe(text).into_owned()
}

pub fn unescape_html(text: &str) -> String {
    html_escape::decode_html_entities(text).into_owned()
}

pub fn html_to_formats(html: &str) -> HtmlFormats {
    HtmlFormats {
        plain_text: html_to_plain_text(html),
        markdown: html_to_markdown(html),
        escaped: escape_html(html),
        unescaped: unescape_html(html),
    }
}
