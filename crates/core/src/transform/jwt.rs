use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::error::ConvertError;
use crate::transform::encoding::decode_base64_bytes;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JwtPayload {
    pub header: Value,
    pub payload: Value,
    pub signature: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_at: Option<DateTime<Utc>>,
    /// Only known when the token carries an `exp` claim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_expired: Option<bool>,
}

/// Decode one base64url JWT segment into JSON.
pub fn decode_segment(segment: &str) -> Result<Value, ConvertError> {
    let bytes = decode_base64_bytes(segment)?;
    Ok(serde_json::from_slice(&bytes)?)
}

fn claim_seconds(payload: &Value, claim: &str) -> Option<i64> {
    let value = payload.get(claim)?;
    value
        .as_i64()
        .or_else(|| value.as_f64().map(|seconds| seconds as i64))
}

pub fn try_parse_jwt(token: &str, now: DateTime<Utc>) -> Result<JwtPayload, ConvertError> {
    let parts: Vec<&str> = token.trim().split('.').collect();
    if parts.len() != 3 {
        return Err(ConvertError::MalformedJwt(format!(
            "expected 3 segments, found {}",
            parts.len()
        )));
    }

    let header = decode_segment(parts[0])?;
    let payload = decode_segment(parts[1])?;

    let exp = claim_seconds(&payload, "exp");
    let iat = claim_seconds(&payload, "iat");

    Ok(JwtPayload {
        expires_at: exp.and_then(|seconds| DateTime::<Utc>::from_timestamp(seconds, 0)),
        issued_at: iat.and_then(|seconds| DateTime::<Utc>::from_timestamp(seconds, 0)),
        is_expired: exp.map(|seconds| now.timestamp_millis() > seconds.saturating_mul(1000)),
        signature: parts[2].to_string(),
        header,
        payload,
    })
}

/// Parse a JWT without verifying its signature. Any decoding failure yields
/// `None`; there is no partial result.
pub fn parse_jwt(token: &str, now: DateTime<Utc>) -> Option<JwtPayload> {
    try_parse_jwt(token, now).ok()
}
