//! Context listing tool.

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

use crate::domains::netdata::{
    NetdataClient,
    query::{ApiVersion, default_scope},
};
use crate::domains::tools::definitions::common::{client_error_result, json_result};

/// Parameters for the context listing tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetContextsParams {
    /// API version to use.
    #[serde(default = "default_api_version")]
    #[schemars(description = "API version to use (v2 or v3)")]
    pub api_version: ApiVersion,

    /// Simple pattern to filter nodes.
    #[serde(default = "default_scope")]
    #[schemars(description = "Simple pattern to filter nodes")]
    pub scope_nodes: String,

    /// Simple pattern to filter contexts.
    #[serde(default = "default_scope")]
    #[schemars(description = "Simple pattern to filter contexts")]
    pub scope_contexts: String,
}

fn default_api_version() -> ApiVersion {
    ApiVersion::V2
}

/// Context listing tool implementation.
#[derive(Debug, Clone)]
pub struct GetContextsTool;

impl GetContextsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "netdata_get_contexts";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Get list of all metric contexts across all nodes with their metadata";

    /// Execute the tool logic.
    pub async fn execute(params: &GetContextsParams, client: &NetdataClient) -> CallToolResult {
        info!(
            "Listing contexts (nodes: {}, contexts: {})",
            params.scope_nodes, params.scope_contexts
        );
        match client
            .contexts(params.api_version, &params.scope_nodes, &params.scope_contexts)
            .await
        {
            Ok(value) => json_result(&value),
            Err(e) => client_error_result(Self::NAME, &e),
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    pub async fn http_handler(
        arguments: serde_json::Value,
        client: Arc<NetdataClient>,
    ) -> Result<serde_json::Value, crate::domains::tools::ToolError> {
        let params: GetContextsParams = serde_json::from_value(arguments)
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
            input_schema: cached_schema_for_type::<GetContextsParams>(),
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
                let params: GetContextsParams =
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
    fn test_params_defaults() {
        let params: GetContextsParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.api_version, ApiVersion::V2);
        assert_eq!(params.scope_nodes, "*");
        assert_eq!(params.scope_contexts, "*");
    }

    #[test]
    fn test_params_custom_scopes() {
        let params: GetContextsParams =
            serde_json::from_str(r#"{"scope_contexts": "system.*"}"#).unwrap();
        assert_eq!(params.scope_contexts, "system.*");
    }
}
