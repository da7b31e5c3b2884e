//! Success envelopes shared by all hotel endpoints.

use serde::Serialize;

const SUCCESS: &str = "Success";

/// Success envelope carrying a payload.
///
/// ```json
/// { "status": "Success", "message": "Hotels added successfully", "data": [...] }
/// ```
///
/// `data` is always serialized, so `Option` payloads render as `null`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: SUCCESS,
            message: None,
            data,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Success envelope without a payload.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub status: &'static str,
    pub message: String,
}

impl MessageResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: SUCCESS,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_payload_is_serialized() {
        let body = serde_json::to_value(ApiResponse::<Option<i64>>::success(None)).unwrap();

        assert_eq!(body, json!({ "status": "Success", "data": null }));
    }

    #[test]
    fn test_message_is_included_when_set() {
        let body =
            serde_json::to_value(ApiResponse::success(3).with_message("Counted")).unwrap();

        assert_eq!(body["message"], "Counted");
        assert_eq!(body["data"], 3);
    }

    #[test]
    fn test_message_response() {
        let body = serde_json::to_value(MessageResponse::success("Hotel deleted successfully!"))
            .unwrap();

        assert_eq!(
            body,
            json!({ "status": "Success", "message": "Hotel deleted successfully!" })
        );
    }
}
