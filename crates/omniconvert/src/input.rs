use crate::prelude::*;
use chrono::{DateTime, Utc};
use std::io::Read;

/// Resolve a positional INPUT argument. Absent or `-` reads all of stdin.
pub fn read_input(arg: Option<&str>) -> Result<String> {
    match arg {
        Some(text) if text != "-" => {
            log::debug!("reading input from argument ({} bytes)", text.len());
            Ok(text.to_string())
        }
        _ => {
            log::debug!("reading input from stdin");
            read_from(std::io::stdin().lock())
        }
    }
}

fn read_from(mut reader: impl Read) -> Result<String> {
    let mut buffer = String::new();
    reader
        .read_to_string(&mut buffer)
        .map_err(|e| Error::Input(e.to_string()))?;
    Ok(buffer)
}

/// The `--now` override, or the system clock.
pub fn resolve_now(global: &crate::Global) -> Result<DateTime<Utc>> {
    match global.now.as_deref() {
        Some(value) => parse_now(value),
        None => Ok(Utc::now()),
    }
}

fn parse_now(value: &str) -> Result<DateTime<Utc>> {
    let parsed = DateTime::parse_from_rfc3339(value.trim())
        .map_err(|_| Error::InvalidNow(value.to_string()))?;
    Ok(parsed.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_read_input_from_argument() {
        assert_eq!(read_input(Some("#fff")).unwrap(), "#fff");
    }

    #[test]
    fn test_read_from_reader() {
        let text = read_from("line one\nline two\n".as_bytes()).unwrap();
        assert_eq!(text, "line one\nline two\n");
    }

    #[test]
    fn test_parse_now() {
        let now = parse_now("2024-01-01T12:00:00+02:00").unwrap();
        assert_eq!(now, Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_now_rejects_garbage() {
        let err = parse_now("yesterday").unwrap_err();
        assert!(err.to_string().contains("Invalid --now value"));
    }
}
