use thiserror::Error;

/// Failures surfaced by the fallible `try_*` primitives of the core.
///
/// The total entry points fold these into `None`, a sentinel string, or a
/// best-effort value so the caller can always render something.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Invalid Base64 input: {0}")]
    InvalidBase64(String),

    #[error("Decoded bytes are not valid UTF-8")]
    InvalidUtf8,

    #[error("Malformed JWT: {0}")]
    MalformedJwt(String),

    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Image decode failed: {0}")]
    ImageDecode(String),

    #[error("Clipboard write failed: {0}")]
    Clipboard(String),

    #[error("Unsupported conversion: {0}")]
    UnsupportedType(String),
}

impl From<base64::DecodeError> for ConvertError {
    fn from(err: base64::DecodeError) -> Self {
        ConvertError::InvalidBase64(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for ConvertError {
    fn from(_: std::string::FromUtf8Error) -> Self {
        ConvertError::InvalidUtf8
    }
}
