//! Metric data query tool.
//!
//! The heart of the tool surface: time-series queries over charts and
//! contexts with time range, point count, aggregation, and format
//! selection. The parameter struct is the client-level [`DataQuery`] so
//! the schema and the wire parameters can never drift apart.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use tracing::info;

use crate::domains::netdata::{NetdataClient, query::DataQuery};
use crate::domains::tools::definitions::common::{client_error_result, payload_result};

/// Metric data query tool implementation.
#[derive(Debug, Clone)]
pub struct GetDataTool;

impl GetDataTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "netdata_get_data";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Query metric data for a chart or context with time-series data for all dimensions";

    /// Execute the tool logic.
    pub async fn execute(params: &DataQuery, client: &NetdataClient) -> CallToolResult {
        info!(
            "Querying data (chart: {:?}, context: {:?}, after: {}, format: {:?})",
            params.chart, params.context, params.after, params.format
        );
        match client.data(params).await {
            Ok(payload) => payload_result(payload),
            Err(e) => client_error_result(Self::NAME, &e),
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    pub async fn http_handler(
        arguments: serde_json::Value,
        client: Arc<NetdataClient>,
    ) -> Result<serde_json::Value, crate::domains::tools::ToolError> {
        let params: DataQuery = serde_json::from_value(arguments)
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
            input_schema: cached_schema_for_type::<DataQuery>(),
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
                let params: DataQuery = serde_json::from_value(serde_json::Value::Object(args))
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
    use crate::domains::netdata::query::{ApiVersion, DataFormat};

    #[test]
    fn test_params_negative_after_preserved() {
        let params: DataQuery =
            serde_json::from_str(r#"{"context": "system.cpu", "after": -600}"#).unwrap();
        assert_eq!(params.after, -600);
    }

    #[test]
    fn test_params_full() {
        let params: DataQuery = serde_json::from_str(
            r#"{
                "chart": "system.cpu",
                "after": -3600,
                "before": -60,
                "points": 60,
                "format": "csv",
                "group": "max",
                "options": ["jsonwrap"],
                "api_version": "v2"
            }"#,
        )
        .unwrap();
        assert_eq!(params.chart.as_deref(), Some("system.cpu"));
        assert_eq!(params.points, 60);
        assert_eq!(params.format, DataFormat::Csv);
        assert_eq!(params.api_version, ApiVersion::V2);
    }

    #[test]
    fn test_tool_schema_not_empty() {
        let tool = GetDataTool::to_tool();
        assert!(!tool.input_schema.is_empty());
    }
}
