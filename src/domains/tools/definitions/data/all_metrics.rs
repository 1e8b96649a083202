//! All-metrics snapshot tool.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use tracing::info;

use crate::domains::netdata::{NetdataClient, query::AllMetricsQuery};
use crate::domains::tools::definitions::common::{client_error_result, payload_result};

/// All-metrics snapshot tool implementation.
#[derive(Debug, Clone)]
pub struct GetAllMetricsTool;

impl GetAllMetricsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "netdata_get_all_metrics";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Get latest values for all metrics across all charts";

    /// Execute the tool logic.
    pub async fn execute(params: &AllMetricsQuery, client: &NetdataClient) -> CallToolResult {
        info!("Fetching all metrics ({:?})", params.format);
        match client.all_metrics(params).await {
            Ok(payload) => payload_result(payload),
            Err(e) => client_error_result(Self::NAME, &e),
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    pub async fn http_handler(
        arguments: serde_json::Value,
        client: Arc<NetdataClient>,
    ) -> Result<serde_json::Value, crate::domains::tools::ToolError> {
        let params: AllMetricsQuery = serde_json::from_value(arguments)
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
            input_schema: cached_schema_for_type::<AllMetricsQuery>(),
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
                let params: AllMetricsQuery =
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
    use crate::domains::netdata::query::AllMetricsFormat;

    #[test]
    fn test_params_defaults() {
        let params: AllMetricsQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(params.format, AllMetricsFormat::Json);
        assert!(params.filter.is_none());
        assert!(params.names);
        assert!(params.timestamps);
    }

    #[test]
    fn test_params_prometheus() {
        let params: AllMetricsQuery =
            serde_json::from_str(r#"{"format": "prometheus", "filter": "system.*"}"#).unwrap();
        assert_eq!(params.format, AllMetricsFormat::Prometheus);
        assert_eq!(params.filter.as_deref(), Some("system.*"));
    }
}
