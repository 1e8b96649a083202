//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! This module builds the ToolRouter for STDIO/TCP transport by delegating
//! to the tool definitions themselves. Each tool knows how to create its own
//! route; the shared Netdata client is injected here, once, at startup.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::domains::netdata::NetdataClient;

use super::definitions::{
    ExecuteFunctionTool, GetAlertLogTool, GetAlertVariablesTool, GetAlertsTool, GetAllMetricsTool,
    GetChartTool, GetChartsTool, GetContextsTool, GetDataTool, GetFunctionsTool, GetInfoTool,
    GetNodesTool, ManageHealthTool, SearchContextsTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(client: Arc<NetdataClient>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(GetInfoTool::create_route(client.clone()))
        .with_route(GetNodesTool::create_route(client.clone()))
        .with_route(GetContextsTool::create_route(client.clone()))
        .with_route(SearchContextsTool::create_route(client.clone()))
        .with_route(GetChartsTool::create_route(client.clone()))
        .with_route(GetChartTool::create_route(client.clone()))
        .with_route(GetDataTool::create_route(client.clone()))
        .with_route(GetAllMetricsTool::create_route(client.clone()))
        .with_route(GetAlertsTool::create_route(client.clone()))
        .with_route(GetAlertLogTool::create_route(client.clone()))
        .with_route(GetAlertVariablesTool::create_route(client.clone()))
        .with_route(ManageHealthTool::create_route(client.clone()))
        .with_route(GetFunctionsTool::create_route(client.clone()))
        .with_route(ExecuteFunctionTool::create_route(client))
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;
    use crate::core::config::NetdataConfig;

    struct TestServer {}

    fn test_client() -> Arc<NetdataClient> {
        Arc::new(NetdataClient::new(&NetdataConfig::default()).unwrap())
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_client());
        let tools = router.list_all();
        assert_eq!(tools.len(), 14);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"netdata_get_info"));
        assert!(names.contains(&"netdata_get_data"));
        assert!(names.contains(&"netdata_get_alerts"));
        assert!(names.contains(&"netdata_manage_health"));
        assert!(names.contains(&"netdata_execute_function"));
    }

    #[test]
    fn test_registry_matches_router() {
        // Ensure registry and router have the same tools
        let client = test_client();
        let registry = ToolRegistry::new(client.clone());
        let registry_names = registry.tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(client);
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }

    #[test]
    fn test_router_schemas_not_empty() {
        let router: ToolRouter<TestServer> = build_tool_router(test_client());
        for tool in router.list_all() {
            assert!(!tool.input_schema.is_empty(), "{} lacks schema", tool.name);
        }
    }
}
