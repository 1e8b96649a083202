//! Common helpers shared across Netdata tools.
//!
//! Every tool formats its response through these so the outer protocol
//! always receives the same shape: pretty-printed JSON or raw text on
//! success, an error-flagged message naming the tool on failure.

use rmcp::model::{CallToolResult, Content};
use tracing::warn;

use crate::domains::netdata::{ClientError, Payload};

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Create a success result with raw text content.
pub fn text_result(content: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content)])
}

/// Create a success result with pretty-printed JSON content.
pub fn json_result(value: &serde_json::Value) -> CallToolResult {
    let text = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
    text_result(text)
}

/// Format an agent payload: JSON pretty-printed, text verbatim.
pub fn payload_result(payload: Payload) -> CallToolResult {
    match payload {
        Payload::Json(value) => json_result(&value),
        Payload::Text(text) => text_result(text),
    }
}

/// Convert a client failure into an error result naming the tool.
///
/// The `ClientError` display already carries the failing endpoint and the
/// upstream status/body when available.
pub fn client_error_result(tool: &str, err: &ClientError) -> CallToolResult {
    error_result(&format!("{tool}: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    fn content_text(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            _ => panic!("expected text content"),
        }
    }

    #[test]
    fn test_json_result_pretty_prints() {
        let result = json_result(&serde_json::json!({"version": "v1.44.0"}));
        assert_eq!(result.is_error, Some(false));
        assert!(content_text(&result).contains("\"version\": \"v1.44.0\""));
    }

    #[test]
    fn test_payload_text_passes_through() {
        let csv = "time,user\n1,2\n".to_string();
        let result = payload_result(Payload::Text(csv.clone()));
        assert_eq!(content_text(&result), csv);
    }

    #[test]
    fn test_client_error_result_names_tool_and_status() {
        let err = ClientError::api(
            reqwest::StatusCode::NOT_FOUND,
            "http://localhost:19999/api/v1/chart",
            "no such chart",
        );
        let result = client_error_result("netdata_get_chart", &err);
        assert_eq!(result.is_error, Some(true));
        let text = content_text(&result);
        assert!(text.contains("netdata_get_chart"));
        assert!(text.contains("404"));
        assert!(text.contains("/api/v1/chart"));
    }
}
