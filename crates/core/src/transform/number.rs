//! Number base conversion and byte-size formatting.

use serde::Serialize;

const BYTE_UNITS: &[&str] = &["Bytes", "KB", "MB", "GB", "TB"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumberFormats {
    pub decimal: String,
    pub hex: String,
    pub binary: String,
    pub octal: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub byte_size: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ByteSizeFormats {
    pub bytes: u64,
    pub kilobytes: f64,
    pub megabytes: f64,
    pub gigabytes: f64,
    pub human: String,
}

/// Radix of a `0x`/`0b`/`0o` literal and the digits that follow it.
fn split_prefix(literal: &str) -> (u32, &str) {
    let lower = literal.get(..2).map(str::to_ascii_lowercase);
    match lower.as_deref() {
        Some("0x") => (16, &literal[2..]),
        Some("0b") => (2, &literal[2..]),
        Some("0o") => (8, &literal[2..]),
        _ => (10, literal),
    }
}

/// Parse a decimal, `0x` hex, `0b` binary or `0o` octal literal.
///
/// A leading `-` is allowed before the prefix.
pub fn parse_number(input: &str) -> Option<i64> {
    let input = input.trim();
    let (negative, literal) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input),
    };

    let (radix, digits) = split_prefix(literal);
    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return None;
    }

    let magnitude = i64::from_str_radix(digits, radix).ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

fn with_sign(value: i64, body: String) -> String {
    if value < 0 {
        format!("-{body}")
    } else {
        body
    }
}

pub fn number_to_all_bases(value: i64) -> NumberFormats {
    let magnitude = value.unsigned_abs();

    NumberFormats {
        decimal: value.to_string(),
        hex: with_sign(value, format!("0x{magnitude:X}")),
        binary: with_sign(value, format!("0b{magnitude:b}")),
        octal: with_sign(value, format!("0o{magnitude:o}")),
        byte_size: u64::try_from(value).ok().map(format_bytes),
    }
}

/// Human-readable size with a 1024 base and at most two decimals.
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut unit = 0;
    let mut value = bytes as f64;
    while value >= 1024.0 && unit < BYTE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = (value * 100.0).round() / 100.0;
    format!("{rounded} {}", BYTE_UNITS[unit])
}

pub fn byte_size_formats(bytes: u64) -> ByteSizeFormats {
    let b = bytes as f64;
    ByteSizeFormats {
        bytes,
        kilobytes: b / 1024.0,
        megabytes: b / 1024.0 / 1024.0,
        gigabytes: b / 1024.0 / 1024.0 / 1024.0,
        human: format_bytes(bytes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_number_prefixes() {
        assert_eq!(parse_number("255"), Some(255));
        assert_eq!(parse_number("0xff"), Some(255));
        assert_eq!(parse_number("0XFF"), Some(255));
        assert_eq!(parse_number("0b11111111"), Some(255));
        assert_eq!(parse_number("0o377"), Some(255));
        assert_eq!(parse_number("-0x10"), Some(-16));
    }

    #[test]
    fn test_parse_number_rejects_bad_digits() {
        assert_eq!(parse_number("0b102"), None);
        assert_eq!(parse_number("0o8"), None);
        assert_eq!(parse_number("0x"), None);
        assert_eq!(parse_number("0x-1"), None);
        assert_eq!(parse_number("abc"), None);
    }

    #[test]
    fn test_number_to_all_bases() {
        let formats = number_to_all_bases(255);
        assert_eq!(formats.decimal, "255");
        assert_eq!(formats.hex, "0xFF");
        assert_eq!(formats.binary, "0b11111111");
        assert_eq!(formats.octal, "0o377");
        assert_eq!(formats.byte_size.as_deref(), Some("255 Bytes"));
    }

    #[test]
    fn test_number_to_all_bases_negative() {
        let formats = number_to_all_bases(-26);
        assert_eq!(formats.hex, "-0x1A");
        assert_eq!(formats.byte_size, None);
        assert_eq!(parse_number(&formats.hex), Some(-26));
    }

    #[test]
    fn test_all_bases_roundtrip_255() {
        let formats = number_to_all_bases(255);
        assert_eq!(parse_number(&formats.hex), Some(255));
        assert_eq!(parse_number(&formats.binary), Some(255));
        assert_eq!(parse_number(&formats.octal), Some(255));
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(0), "0 Bytes");
        assert_eq!(format_bytes(1023), "1023 Bytes");
        assert_eq!(format_bytes(1024), "1 KB");
        assert_eq!(format_bytes(1536), "1.5 KB");
        assert_eq!(format_bytes(5 * 1024 * 1024), "5 MB");
        assert_eq!(format_bytes(1_234_567_890), "1.15 GB");
    }

    #[test]
    fn test_byte_size_formats() {
        let formats = byte_size_formats(2048);
        assert_eq!(formats.kilobytes, 2.0);
        assert_eq!(formats.human, "2 KB");
    }

    proptest! {
        #[test]
        fn bases_roundtrip(value in (i64::MIN + 1)..=i64::MAX) {
            let formats = number_to_all_bases(value);
            prop_assert_eq!(parse_number(&formats.hex), Some(value));
            prop_assert_eq!(parse_number(&formats.binary), Some(value));
            prop_assert_eq!(parse_number(&formats.octal), Some(value));
            prop_assert_eq!(parse_number(&formats.decimal), Some(value));
        }
    }
}
