//! Node listing tool.

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

use crate::domains::netdata::{NetdataClient, query::ApiVersion};
use crate::domains::tools::definitions::common::{client_error_result, json_result};

/// Parameters for the node listing tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetNodesParams {
    /// API version to use. The nodes endpoint exists under v2 and v3 only.
    #[serde(default = "default_api_version")]
    #[schemars(description = "API version to use (v2 or v3)")]
    pub api_version: ApiVersion,
}

fn default_api_version() -> ApiVersion {
    ApiVersion::V2
}

impl Default for GetNodesParams {
    fn default() -> Self {
        Self {
            api_version: default_api_version(),
        }
    }
}

/// Node listing tool implementation.
#[derive(Debug, Clone)]
pub struct GetNodesTool;

impl GetNodesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "netdata_get_nodes";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Get list of all nodes hosted by this Netdata Agent with their status and information";

    /// Execute the tool logic.
    pub async fn execute(params: &GetNodesParams, client: &NetdataClient) -> CallToolResult {
        info!("Listing nodes via {}", params.api_version);
        match client.nodes(params.api_version).await {
            Ok(value) => json_result(&value),
            Err(e) => client_error_result(Self::NAME, &e),
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    pub async fn http_handler(
        arguments: serde_json::Value,
        client: Arc<NetdataClient>,
    ) -> Result<serde_json::Value, crate::domains::tools::ToolError> {
        let params: GetNodesParams = serde_json::from_value(arguments)
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
            input_schema: cached_schema_for_type::<GetNodesParams>(),
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
                let params: GetNodesParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &client).await)
            }
            .boxed()
        })
    }
}
