//! Hotel identifier extraction from request headers and paths.

use crate::AppError;
use axum::http::HeaderMap;
use serde_json::json;

/// Header carrying the target hotel for update and delete requests.
pub const HOTEL_ID_HEADER: &str = "hotelid";

/// Reads the hotel ID from the `hotelid` header.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if:
/// - The header is missing
/// - The value is not valid UTF-8 or not an integer
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert("hotelid", "42".parse().unwrap());
///
/// assert_eq!(hotel_id_from_headers(&headers).unwrap(), 42);
/// ```
pub fn hotel_id_from_headers(headers: &HeaderMap) -> Result<i64, AppError> {
    let raw = headers
        .get(HOTEL_ID_HEADER)
        .ok_or_else(|| AppError::bad_request("Missing hotelid header", json!({})))?
        .to_str()
        .map_err(|_| AppError::bad_request("Invalid hotelid header", json!({})))?;

    raw.trim().parse().map_err(|_| {
        AppError::bad_request("Invalid hotelid header", json!({ "hotelid": raw }))
    })
}

/// Parses a path identifier, returning `None` when it cannot name any hotel.
pub fn parse_hotel_id(raw: &str) -> Option<i64> {
    raw.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_hotel_id_present() {
        let mut headers = HeaderMap::new();
        headers.insert(HOTEL_ID_HEADER, HeaderValue::from_static("42"));

        assert_eq!(hotel_id_from_headers(&headers).unwrap(), 42);
    }

    #[test]
    fn test_hotel_id_with_whitespace() {
        let mut headers = HeaderMap::new();
        headers.insert(HOTEL_ID_HEADER, HeaderValue::from_static(" 7 "));

        assert_eq!(hotel_id_from_headers(&headers).unwrap(), 7);
    }

    #[test]
    fn test_hotel_id_missing() {
        let headers = HeaderMap::new();

        let result = hotel_id_from_headers(&headers);

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[test]
    fn test_hotel_id_not_numeric() {
        let mut headers = HeaderMap::new();
        headers.insert(HOTEL_ID_HEADER, HeaderValue::from_static("65f1c0ffee"));

        let result = hotel_id_from_headers(&headers);

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[test]
    fn test_parse_hotel_id() {
        assert_eq!(parse_hotel_id("15"), Some(15));
        assert_eq!(parse_hotel_id("abc"), None);
        assert_eq!(parse_hotel_id(""), None);
    }
}
