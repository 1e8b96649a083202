//! Health management tool.
//!
//! The only mutating tool besides function execution: disables, silences,
//! or resets health checks at runtime via `POST /api/v1/manage/health`.
//! Not idempotent, so failures are reported without retry.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use tracing::info;

use crate::domains::netdata::{NetdataClient, query::HealthRequest};
use crate::domains::tools::definitions::common::{client_error_result, json_result};

/// Health management tool implementation.
#[derive(Debug, Clone)]
pub struct ManageHealthTool;

impl ManageHealthTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "netdata_manage_health";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Manage health checks and notifications at runtime (disable, silence, reset)";

    /// Execute the tool logic.
    pub async fn execute(params: &HealthRequest, client: &NetdataClient) -> CallToolResult {
        info!("Managing health (cmd: {:?})", params.cmd);
        match client.manage_health(params).await {
            Ok(value) => json_result(&value),
            Err(e) => client_error_result(Self::NAME, &e),
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    pub async fn http_handler(
        arguments: serde_json::Value,
        client: Arc<NetdataClient>,
    ) -> Result<serde_json::Value, crate::domains::tools::ToolError> {
        let params: HealthRequest = serde_json::from_value(arguments)
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
            input_schema: cached_schema_for_type::<HealthRequest>(),
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
                let params: HealthRequest =
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
    use crate::domains::netdata::query::HealthCommand;

    #[test]
    fn test_params_all_optional() {
        let params: HealthRequest = serde_json::from_str("{}").unwrap();
        assert!(params.cmd.is_none());
        assert!(params.alarm.is_none());
    }

    #[test]
    fn test_params_with_command() {
        let params: HealthRequest =
            serde_json::from_str(r#"{"cmd": "SILENCE", "alarm": "cpu_usage"}"#).unwrap();
        assert_eq!(params.cmd, Some(HealthCommand::Silence));
        assert_eq!(params.alarm.as_deref(), Some("cpu_usage"));
    }

    #[test]
    fn test_params_reject_unknown_command() {
        assert!(serde_json::from_str::<HealthRequest>(r#"{"cmd": "EXPLODE"}"#).is_err());
    }
}
