use crate::prelude::{println, *};
use colored::Colorize;
use omniconvert_core::transform::Formats;
use omniconvert_core::DetectionResult;
use serde::Serialize;
use std::io::IsTerminal;

/// Labelled rows for the human-readable view of a bundle.
pub type Fields = Vec<(&'static str, String)>;

pub fn output_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

/// Print fields as a table on a terminal, or as `label: value` lines when piped.
pub fn output_fields(title: &str, fields: &Fields) -> Result<()> {
    print!("{}", format_fields(title, fields, std::io::stdout().is_terminal()));
    Ok(())
}

pub fn format_fields(title: &str, fields: &Fields, is_tty: bool) -> String {
    if is_tty {
        let mut table = new_table();
        for (label, value) in fields {
            table.add_row(prettytable::row![label.cyan().bold(), value]);
        }
        f!("{}\n{}", title.bold().green(), table)
    } else {
        let mut result = String::new();
        for (label, value) in fields {
            if value.contains('\n') {
                result.push_str(&f!("{label}:\n{value}\n"));
            } else {
                result.push_str(&f!("{label}: {value}\n"));
            }
        }
        result
    }
}

pub fn detection_fields(result: &DetectionResult) -> Fields {
    let mut fields = vec![
        ("type", result.kind.to_string()),
        ("confidence", f!("{:.2}", result.confidence)),
    ];
    if let Some(parsed) = &result.parsed {
        let parsed = serde_json::to_value(parsed)
            .map(|value| value["value"].to_string())
            .unwrap_or_default();
        fields.push(("parsed", parsed));
    }
    fields
}

pub fn formats_fields(formats: &Formats) -> Fields {
    match formats {
        Formats::Json(f) => vec![
            ("pretty", f.pretty.clone()),
            ("minified", f.minified.clone()),
            ("typescript", f.typescript.clone()),
            ("depth", f.depth.to_string()),
            ("keys", f.keys.to_string()),
        ],
        Formats::Html(f) => vec![
            ("plain text", f.plain_text.clone()),
            ("markdown", f.markdown.clone()),
            ("escaped", f.escaped.clone()),
            ("unescaped", f.unescaped.clone()),
        ],
        Formats::Color(f) => vec![
            ("hex", f.hex.clone()),
            ("hex8", f.hex8.clone()),
            ("rgb", f.rgb.clone()),
            ("rgba", f.rgba.clone()),
            ("hsl", f.hsl.clone()),
            ("hsla", f.hsla.clone()),
            ("cmyk", f.cmyk.clone()),
            ("vector", f.rgb_vector.clone()),
            ("tailwind", f.tailwind.clone()),
            ("complementary", f.complementary.clone()),
        ],
        Formats::Timestamp(f) => vec![
            ("unix seconds", f.unix_seconds.to_string()),
            ("unix millis", f.unix_millis.to_string()),
            ("iso 8601", f.iso8601.clone()),
            ("rfc 2822", f.rfc2822.clone()),
            ("date", f.date.clone()),
            ("time", f.time.clone()),
            ("relative", f.relative.clone()),
        ],
        Formats::Css(f) => vec![
            ("beautified", f.beautified.clone()),
            ("minified", f.minified.clone()),
        ],
        Formats::Javascript(f) => vec![("beautified", f.beautified.clone())],
        Formats::Text(f) => vec![
            ("characters", f.stats.characters.to_string()),
            ("no spaces", f.stats.characters_no_spaces.to_string()),
            ("words", f.stats.words.to_string()),
            ("lines", f.stats.lines.to_string()),
            ("sentences", f.stats.sentences.to_string()),
            ("reading time", f!("{} min", f.stats.reading_time_minutes)),
            ("md5", f.hashes.md5.clone()),
            ("sha256", f.hashes.sha256.clone()),
            ("base64", f.encodings.base64.clone()),
            ("base64 url", f.encodings.base64_url.clone()),
            ("url encoded", f.encodings.url.clone()),
        ],
        Formats::Base64(f) => vec![
            ("decoded", f.decoded.clone()),
            ("bytes", f.byte_length.to_string()),
            ("url safe", f.url_safe.clone()),
        ],
        Formats::Url(f) => {
            let mut fields = vec![
                ("decoded", f.decoded.clone()),
                ("reencoded", f.reencoded.clone()),
            ];
            for (key, value) in &f.query_params {
                fields.push(("param", f!("{key} = {value}")));
            }
            fields
        }
        Formats::Jwt(f) => {
            let mut fields = vec![
                ("header", serde_json::to_string_pretty(&f.header).unwrap_or_default()),
                ("payload", serde_json::to_string_pretty(&f.payload).unwrap_or_default()),
                ("signature", f.signature.clone()),
            ];
            if let Some(issued) = f.issued_at {
                fields.push(("issued at", issued.to_rfc3339()));
            }
            if let Some(expires) = f.expires_at {
                fields.push(("expires at", expires.to_rfc3339()));
            }
            if let Some(expired) = f.is_expired {
                fields.push(("expired", expired.to_string()));
            }
            fields
        }
        Formats::Number(f) => {
            let mut fields = vec![
                ("decimal", f.decimal.clone()),
                ("hex", f.hex.clone()),
                ("binary", f.binary.clone()),
                ("octal", f.octal.clone()),
            ];
            if let Some(size) = &f.byte_size {
                fields.push(("as bytes", size.clone()));
            }
            fields
        }
        Formats::Uuid(f) => vec![
            ("canonical", f.canonical.clone()),
            ("uppercase", f.uppercase.clone()),
            ("simple", f.simple.clone()),
            ("urn", f.urn.clone()),
            ("braced", f.braced.clone()),
            ("version", f.version.to_string()),
            ("variant", f.variant.to_string()),
        ],
    }
}
