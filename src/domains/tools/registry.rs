//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - Name-keyed dispatch for tool calls over a fixed, compile-time mapping
//! - Tool metadata for listing
//!
//! The mapping table is closed: every `NAME` constant appears exactly once,
//! and the router in `router.rs` must register the same set (tested).

use std::sync::Arc;

use rmcp::model::Tool;
use tracing::warn;

use crate::domains::netdata::NetdataClient;

use super::definitions::{
    ExecuteFunctionTool, GetAlertLogTool, GetAlertVariablesTool, GetAlertsTool, GetAllMetricsTool,
    GetChartTool, GetChartsTool, GetContextsTool, GetDataTool, GetFunctionsTool, GetInfoTool,
    GetNodesTool, ManageHealthTool, SearchContextsTool,
};
use super::error::ToolError;

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
///
/// Holds the shared Netdata client and dispatches calls to the tool whose
/// `NAME` matches. Each invocation is independent; the client is the only
/// shared state and tolerates concurrent use.
pub struct ToolRegistry {
    client: Arc<NetdataClient>,
}

impl ToolRegistry {
    /// Create a new tool registry around the shared client.
    pub fn new(client: Arc<NetdataClient>) -> Self {
        Self { client }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            GetInfoTool::NAME,
            GetNodesTool::NAME,
            GetContextsTool::NAME,
            SearchContextsTool::NAME,
            GetChartsTool::NAME,
            GetChartTool::NAME,
            GetDataTool::NAME,
            GetAllMetricsTool::NAME,
            GetAlertsTool::NAME,
            GetAlertLogTool::NAME,
            GetAlertVariablesTool::NAME,
            ManageHealthTool::NAME,
            GetFunctionsTool::NAME,
            ExecuteFunctionTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for all available tools.
    /// Both HTTP and STDIO/TCP transports use this to get tool metadata.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            GetInfoTool::to_tool(),
            GetNodesTool::to_tool(),
            GetContextsTool::to_tool(),
            SearchContextsTool::to_tool(),
            GetChartsTool::to_tool(),
            GetChartTool::to_tool(),
            GetDataTool::to_tool(),
            GetAllMetricsTool::to_tool(),
            GetAlertsTool::to_tool(),
            GetAlertLogTool::to_tool(),
            GetAlertVariablesTool::to_tool(),
            ManageHealthTool::to_tool(),
            GetFunctionsTool::to_tool(),
            ExecuteFunctionTool::to_tool(),
        ]
    }

    /// Dispatch a tool call to the appropriate handler.
    ///
    /// Unknown names and schema mismatches fail typed; everything the tool
    /// itself reports (including upstream failures) comes back as an
    /// error-flagged response value, never an Err.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        let client = self.client.clone();
        match name {
            GetInfoTool::NAME => GetInfoTool::http_handler(arguments, client).await,
            GetNodesTool::NAME => GetNodesTool::http_handler(arguments, client).await,
            GetContextsTool::NAME => GetContextsTool::http_handler(arguments, client).await,
            SearchContextsTool::NAME => SearchContextsTool::http_handler(arguments, client).await,
            GetChartsTool::NAME => GetChartsTool::http_handler(arguments, client).await,
            GetChartTool::NAME => GetChartTool::http_handler(arguments, client).await,
            GetDataTool::NAME => GetDataTool::http_handler(arguments, client).await,
            GetAllMetricsTool::NAME => GetAllMetricsTool::http_handler(arguments, client).await,
            GetAlertsTool::NAME => GetAlertsTool::http_handler(arguments, client).await,
            GetAlertLogTool::NAME => GetAlertLogTool::http_handler(arguments, client).await,
            GetAlertVariablesTool::NAME => {
                GetAlertVariablesTool::http_handler(arguments, client).await
            }
            ManageHealthTool::NAME => ManageHealthTool::http_handler(arguments, client).await,
            GetFunctionsTool::NAME => GetFunctionsTool::http_handler(arguments, client).await,
            ExecuteFunctionTool::NAME => ExecuteFunctionTool::http_handler(arguments, client).await,
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::NetdataConfig;
    use crate::domains::netdata::mock::MockAgent;
    use serde_json::json;

    fn registry_for(base_url: &str) -> ToolRegistry {
        let client = NetdataClient::new(&NetdataConfig {
            base_url: base_url.to_string(),
            api_key: None,
            timeout_secs: 5,
        })
        .unwrap();
        ToolRegistry::new(Arc::new(client))
    }

    #[test]
    fn test_registry_tool_names_unique_and_complete() {
        let registry = registry_for("http://test:19999");
        let names = registry.tool_names();
        assert_eq!(names.len(), 14);

        let mut deduped = names.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), names.len());

        for expected in [
            "netdata_get_info",
            "netdata_get_nodes",
            "netdata_get_contexts",
            "netdata_search_contexts",
            "netdata_get_charts",
            "netdata_get_chart",
            "netdata_get_data",
            "netdata_get_all_metrics",
            "netdata_get_alerts",
            "netdata_get_alert_log",
            "netdata_get_alert_variables",
            "netdata_manage_health",
            "netdata_get_functions",
            "netdata_execute_function",
        ] {
            assert!(names.contains(&expected), "missing tool {expected}");
        }
    }

    #[test]
    fn test_all_tools_have_schemas() {
        let tools = ToolRegistry::get_all_tools();
        assert_eq!(tools.len(), 14);
        for tool in tools {
            assert!(tool.description.is_some(), "{} lacks description", tool.name);
            assert!(!tool.input_schema.is_empty(), "{} lacks schema", tool.name);
        }
    }

    #[tokio::test]
    async fn test_call_unknown_tool() {
        let registry = registry_for("http://test:19999");
        let err = registry.call_tool("netdata_reboot", json!({})).await.unwrap_err();
        assert!(matches!(err, ToolError::NotFound(name) if name == "netdata_reboot"));
    }

    #[tokio::test]
    async fn test_call_tool_missing_required_argument() {
        // Must fail before any network call: the agent URL is unroutable.
        let registry = registry_for("http://127.0.0.1:1");
        let err = registry
            .call_tool("netdata_get_alert_variables", json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }

    #[tokio::test]
    async fn test_call_get_data_returns_mock_payload() {
        let mock_body = r#"{"labels":["time","user","system"],"data":[[1234567890,50.5,10.1]]}"#;
        let agent = MockAgent::serve(200, "application/json", mock_body).await;
        let registry = registry_for(&agent.base_url);

        let response = registry
            .call_tool(
                "netdata_get_data",
                json!({"context": "system.cpu", "after": -600, "format": "json"}),
            )
            .await
            .unwrap();

        assert_eq!(response["isError"], false);
        let text = response["content"][0]["text"].as_str().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(text).unwrap();
        assert_eq!(parsed, serde_json::from_str::<serde_json::Value>(mock_body).unwrap());

        let request = agent.request().await;
        assert!(request.contains("after=-600"));
        assert!(request.contains("context=system.cpu"));
    }

    #[tokio::test]
    async fn test_call_get_alerts_active_passthrough() {
        let mock_body = r#"{"hostname":"test-host","alarms":{"test_alarm":{"status":"WARNING","value":75.0}}}"#;
        let agent = MockAgent::serve(200, "application/json", mock_body).await;
        let registry = registry_for(&agent.base_url);

        let response = registry
            .call_tool("netdata_get_alerts", json!({"active": true}))
            .await
            .unwrap();

        assert_eq!(response["isError"], false);
        let text = response["content"][0]["text"].as_str().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(text).unwrap();
        assert_eq!(parsed["alarms"]["test_alarm"]["status"], "WARNING");

        let request = agent.request().await;
        assert!(request.starts_with("GET /api/v1/alarms?active=true"));
    }

    #[tokio::test]
    async fn test_call_tool_upstream_500_is_error_flagged() {
        let agent = MockAgent::serve(500, "text/plain", "agent exploded").await;
        let registry = registry_for(&agent.base_url);

        let response = registry
            .call_tool("netdata_get_info", json!({}))
            .await
            .unwrap();

        assert_eq!(response["isError"], true);
        let text = response["content"][0]["text"].as_str().unwrap();
        assert!(text.contains("netdata_get_info"));
        assert!(text.contains("500"));
    }

    #[tokio::test]
    async fn test_call_tool_upstream_404_is_error_flagged() {
        let agent = MockAgent::serve(404, "text/plain", "not here").await;
        let registry = registry_for(&agent.base_url);

        let response = registry
            .call_tool("netdata_get_chart", json!({"chart": "missing.chart"}))
            .await
            .unwrap();

        assert_eq!(response["isError"], true);
        let text = response["content"][0]["text"].as_str().unwrap();
        assert!(text.contains("404"));
    }
}
