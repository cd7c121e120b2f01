#[derive(thiserror::Error, Debug, serde::Deserialize, serde::Serialize)]
pub enum Error {
    #[error("Could not read input: {0}")]
    Input(String),

    #[error("Invalid --now value '{0}': expected RFC 3339, e.g. 2024-01-01T00:00:00Z")]
    InvalidNow(String),

    #[error("Cannot convert as {kind}: {reason}")]
    Conversion { kind: String, reason: String },

    #[error("Clipboard error: {0}")]
    Clipboard(String),
}
