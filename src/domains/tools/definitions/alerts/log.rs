//! Alarm log tool.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use crate::domains::netdata::NetdataClient;
use crate::domains::tools::definitions::common::{client_error_result, json_result};

/// Parameters for the alarm log tool.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct GetAlertLogParams {
    /// Only return events after this UNIQUEID cursor.
    #[schemars(description = "Return events after this UNIQUEID")]
    pub after: Option<i64>,
}

/// Alarm log tool implementation.
#[derive(Debug, Clone)]
pub struct GetAlertLogTool;

impl GetAlertLogTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "netdata_get_alert_log";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Get alarm log entries with historical information on raised and cleared alarms";

    /// Execute the tool logic.
    pub async fn execute(params: &GetAlertLogParams, client: &NetdataClient) -> CallToolResult {
        info!("Fetching alarm log (after: {:?})", params.after);
        match client.alert_log(params.after).await {
            Ok(value) => json_result(&value),
            Err(e) => client_error_result(Self::NAME, &e),
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    pub async fn http_handler(
        arguments: serde_json::Value,
        client: Arc<NetdataClient>,
    ) -> Result<serde_json::Value, crate::domains::tools::ToolError> {
        let params: GetAlertLogParams = serde_json::from_value(arguments)
            .map_err(|e| crate::domains::tools::ToolError::invalid_arguments(e.to_string()))?;
        let result = Self::execute(&params, &client).await;
        Ok(serde_json::json!({
            "content": result.content,
            "isError": result.is_error.unwrap_or(false)
        }))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetAlertLogParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>(client: Arc<NetdataClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let client = client.clone();
            async move {
                let params: GetAlertLogParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &client).await)
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_after_optional() {
        let params: GetAlertLogParams = serde_json::from_str("{}").unwrap();
        assert!(params.after.is_none());

        let params: GetAlertLogParams = serde_json::from_str(r#"{"after": 12345}"#).unwrap();
        assert_eq!(params.after, Some(12345));
    }
}
