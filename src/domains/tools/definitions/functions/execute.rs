//! Collector function execution tool.
//!
//! Runs an on-demand collector function (e.g. "list top processes") via
//! `POST /api/v1/function`. Not idempotent; never retried.

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

/// Parameters for the function execution tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ExecuteFunctionParams {
    /// Name of the function to execute. Required.
    #[schemars(description = "Name of the function to execute")]
    pub function: String,

    /// Timeout in seconds the agent allows the collector.
    #[serde(default = "default_timeout")]
    #[schemars(description = "Timeout in seconds (default: 10)")]
    pub timeout: u32,
}

fn default_timeout() -> u32 {
    10
}

/// Collector function execution tool implementation.
#[derive(Debug, Clone)]
pub struct ExecuteFunctionTool;

impl ExecuteFunctionTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "netdata_execute_function";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Execute a collector function on demand";

    /// Execute the tool logic.
    pub async fn execute(params: &ExecuteFunctionParams, client: &NetdataClient) -> CallToolResult {
        info!("Executing function: {} (timeout: {}s)", params.function, params.timeout);
        match client.execute_function(&params.function, params.timeout).await {
            Ok(value) => json_result(&value),
            Err(e) => client_error_result(Self::NAME, &e),
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    pub async fn http_handler(
        arguments: serde_json::Value,
        client: Arc<NetdataClient>,
    ) -> Result<serde_json::Value, crate::domains::tools::ToolError> {
        let params: ExecuteFunctionParams = serde_json::from_value(arguments)
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
            input_schema: cached_schema_for_type::<ExecuteFunctionParams>(),
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
                let params: ExecuteFunctionParams =
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
    fn test_params_default_timeout() {
        let params: ExecuteFunctionParams =
            serde_json::from_str(r#"{"function": "processes"}"#).unwrap();
        assert_eq!(params.function, "processes");
        assert_eq!(params.timeout, 10);
    }

    #[test]
    fn test_params_require_function() {
        assert!(serde_json::from_str::<ExecuteFunctionParams>(r#"{"timeout": 5}"#).is_err());
    }
}
