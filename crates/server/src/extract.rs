//! Request decoding helpers shared by the book handlers.

use axum::extract::rejection::PathRejection;
use axum::extract::Path;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::ApiError;

/// Lenient integer parsing of a path id, same rules as JavaScript `parseInt`
/// without a radix: leading whitespace and an optional sign are accepted,
/// a `0x`/`0X` prefix switches to hexadecimal, then the longest run of digits
/// is taken and anything after it is ignored. `"12abc"` is 12, `"0x10"` is 16,
/// `"abc"` and `"0x"` are rejected.
///
/// Values outside `i64` saturate, so they simply match no book.
pub fn parse_id(raw: &str) -> Result<i64, ApiError> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    // 十六进制前缀
    let (radix, rest) = match rest.get(..2) {
        Some("0x") | Some("0X") => (16, &rest[2..]),
        _ => (10, rest),
    };
    let end = rest.find(|c: char| !c.is_digit(radix)).unwrap_or(rest.len());
    if end == 0 {
        return Err(ApiError::InvalidInput("Invalid ID".into()));
    }
    let magnitude = i64::from_str_radix(&rest[..end], radix).unwrap_or(i64::MAX);
    Ok(if negative { -magnitude } else { magnitude })
}

/// Decode a fully buffered body regardless of its declared content type.
///
/// Only a JSON object carries fields. Any other JSON value (array, string,
/// number, boolean) decodes to a request with every field absent, so the
/// presence check rejects it; `null` has nothing to read fields from and is
/// reported as a malformed body.
pub fn decode_body<T: DeserializeOwned + Default>(body: &[u8]) -> Result<T, ApiError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| ApiError::MalformedBody(e.to_string()))?;
    match value {
        Value::Object(_) => {
            serde_json::from_value(value).map_err(|e| ApiError::MalformedBody(e.to_string()))
        }
        Value::Null => Err(ApiError::MalformedBody("expected a JSON object, found null".into())),
        _ => Ok(T::default()),
    }
}

/// Unwrap a percent-decoded path segment, turning router rejections into JSON errors.
pub fn path_segment(path: Result<Path<String>, PathRejection>) -> Result<String, ApiError> {
    path.map(|Path(seg)| seg).map_err(|e| ApiError::InvalidInput(e.body_text()))
}
