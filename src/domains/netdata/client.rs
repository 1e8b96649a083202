//! Asynchronous client for the Netdata HTTP API.
//!
//! One long-lived reqwest client (connection pool) per process, constructed
//! from [`NetdataConfig`] and shared via `Arc` across concurrent tool calls.
//! Each method issues exactly one HTTP request; failures surface typed, no
//! retries.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::core::config::NetdataConfig;

use super::error::{ClientError, ClientResult};
use super::query::{
    AllMetricsQuery, ApiVersion, BadgeQuery, DataQuery, HealthRequest, QueryPairs, WeightsQuery,
};

/// A response body from the agent: parsed JSON for JSON formats, raw text
/// for csv/prometheus/shell/jsonp.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(Value),
    Text(String),
}

/// Client for one Netdata agent.
pub struct NetdataClient {
    base_url: String,
    api_key: Option<String>,
    http: reqwest::Client,
    closed: AtomicBool,
}

impl NetdataClient {
    /// Build a client from connection configuration.
    ///
    /// The underlying connection pool lives as long as the client; requests
    /// inherit the configured per-request timeout.
    pub fn new(config: &NetdataConfig) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(ClientError::Build)?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            http,
            closed: AtomicBool::new(false),
        })
    }

    /// The normalized base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Mark the client closed. Idempotent: returns `true` only for the call
    /// that performed the close. Requests issued afterwards fail with
    /// [`ClientError::Closed`]; the connection pool itself is released on
    /// drop.
    pub fn close(&self) -> bool {
        !self.closed.swap(true, Ordering::SeqCst)
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    // ========================================================================
    // Agent & nodes
    // ========================================================================

    /// Basic information about the agent (version, OS, collectors, alarms).
    pub async fn info(&self, version: ApiVersion) -> ClientResult<Value> {
        self.get_json(version, "info", QueryPairs::new()).await
    }

    /// All nodes hosted by this agent (v2/v3).
    pub async fn nodes(&self, version: ApiVersion) -> ClientResult<Value> {
        self.get_json(version, "nodes", QueryPairs::new()).await
    }

    // ========================================================================
    // Contexts
    // ========================================================================

    /// All contexts across all nodes (v2/v3).
    pub async fn contexts(
        &self,
        version: ApiVersion,
        scope_nodes: &str,
        scope_contexts: &str,
    ) -> ClientResult<Value> {
        let mut q = QueryPairs::new();
        q.push("scope_nodes", scope_nodes);
        q.push("scope_contexts", scope_contexts);
        self.get_json(version, "contexts", q).await
    }

    /// Full-text search over contexts (v2/v3 `q` endpoint).
    pub async fn search(
        &self,
        query: &str,
        version: ApiVersion,
        scope_nodes: &str,
    ) -> ClientResult<Value> {
        let mut q = QueryPairs::new();
        q.push("q", query);
        q.push("scope_nodes", scope_nodes);
        self.get_json(version, "q", q).await
    }

    /// Score contexts by relevance over a time window (v2/v3).
    pub async fn weights(&self, version: ApiVersion, query: &WeightsQuery) -> ClientResult<Value> {
        self.get_json(version, "weights", Self::weights_pairs(query))
            .await
    }

    // ========================================================================
    // Charts (v1 legacy)
    // ========================================================================

    /// Summary of all charts.
    pub async fn charts(&self) -> ClientResult<Value> {
        self.get_json(ApiVersion::V1, "charts", QueryPairs::new())
            .await
    }

    /// Detailed information about one chart.
    pub async fn chart(&self, chart: &str) -> ClientResult<Value> {
        let mut q = QueryPairs::new();
        q.push("chart", chart);
        self.get_json(ApiVersion::V1, "chart", q).await
    }

    // ========================================================================
    // Data queries
    // ========================================================================

    /// Query metric data for a chart or context.
    ///
    /// JSON formats come back parsed; csv/datatable/jsonp come back as raw
    /// text, exactly as the agent emitted them.
    pub async fn data(&self, query: &DataQuery) -> ClientResult<Payload> {
        let pairs = Self::data_pairs(query);
        if query.format.is_json() {
            Ok(Payload::Json(
                self.get_json(query.api_version, "data", pairs).await?,
            ))
        } else {
            Ok(Payload::Text(
                self.get_text(query.api_version, "data", pairs).await?,
            ))
        }
    }

    /// Latest values for all metrics across all charts.
    pub async fn all_metrics(&self, query: &AllMetricsQuery) -> ClientResult<Payload> {
        let pairs = Self::all_metrics_pairs(query);
        if query.format.is_json() {
            Ok(Payload::Json(
                self.get_json(ApiVersion::V1, "allmetrics", pairs).await?,
            ))
        } else {
            Ok(Payload::Text(
                self.get_text(ApiVersion::V1, "allmetrics", pairs).await?,
            ))
        }
    }

    // ========================================================================
    // Alerts
    // ========================================================================

    /// Active or raised alarms.
    pub async fn alerts(&self, all: bool, active: bool) -> ClientResult<Value> {
        let mut q = QueryPairs::new();
        q.push_flag("all", all);
        q.push_flag("active", active);
        self.get_json(ApiVersion::V1, "alarms", q).await
    }

    /// Alarm log entries, optionally after a given UNIQUEID.
    pub async fn alert_log(&self, after: Option<i64>) -> ClientResult<Value> {
        let mut q = QueryPairs::new();
        q.push_opt("after", after);
        self.get_json(ApiVersion::V1, "alarm_log", q).await
    }

    /// Variables available for configuring alarms on a chart.
    pub async fn alert_variables(&self, chart: &str) -> ClientResult<Value> {
        let mut q = QueryPairs::new();
        q.push("chart", chart);
        self.get_json(ApiVersion::V1, "alarm_variables", q).await
    }

    /// Enable, silence, or reset health checks at runtime.
    pub async fn manage_health(&self, request: &HealthRequest) -> ClientResult<Value> {
        self.post_json(ApiVersion::V1, "manage/health", request)
            .await
    }

    // ========================================================================
    // Collector functions
    // ========================================================================

    /// All registered collector functions.
    pub async fn functions(&self) -> ClientResult<Value> {
        self.get_json(ApiVersion::V1, "functions", QueryPairs::new())
            .await
    }

    /// Execute a collector function on demand.
    pub async fn execute_function(&self, function: &str, timeout: u32) -> ClientResult<Value> {
        let body = serde_json::json!({
            "function": function,
            "timeout": timeout,
        });
        self.post_json(ApiVersion::V1, "function", &body).await
    }

    // ========================================================================
    // Badges
    // ========================================================================

    /// Render an SVG badge for a chart or dimension. Returns raw SVG bytes.
    pub async fn badge(&self, query: &BadgeQuery) -> ClientResult<Vec<u8>> {
        let url = format!("{}/api/v1/badge.svg", self.base_url);
        let response = self.send_get(&url, &Self::badge_pairs(query)).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ClientError::connection(&url, e))?;
        Ok(bytes.to_vec())
    }

    // ========================================================================
    // Query-pair construction (pure, unit-tested)
    // ========================================================================

    fn data_pairs(query: &DataQuery) -> QueryPairs {
        let mut q = QueryPairs::new();
        q.push("after", query.after);
        q.push("before", query.before);
        q.push("points", query.points);
        q.push("format", query.format.as_str());
        q.push("group", query.group.as_str());

        // v1 selects by chart or context; v2/v3 scope by context pattern.
        match query.api_version {
            ApiVersion::V1 => {
                if let Some(chart) = &query.chart {
                    q.push("chart", chart);
                } else if let Some(context) = &query.context {
                    q.push("context", context);
                }
            }
            ApiVersion::V2 | ApiVersion::V3 => {
                q.push_opt("scope_contexts", query.context.as_deref());
            }
        }

        if !query.options.is_empty() {
            q.push("options", query.options.join(","));
        }
        q
    }

    fn all_metrics_pairs(query: &AllMetricsQuery) -> QueryPairs {
        let mut q = QueryPairs::new();
        q.push("format", query.format.as_str());
        q.push("names", if query.names { "yes" } else { "no" });
        q.push("timestamps", if query.timestamps { "yes" } else { "no" });
        q.push_opt("filter", query.filter.as_deref());
        q
    }

    fn weights_pairs(query: &WeightsQuery) -> QueryPairs {
        let mut q = QueryPairs::new();
        q.push("scope_nodes", &query.scope_nodes);
        q.push("scope_contexts", &query.scope_contexts);
        q.push("after", query.after);
        q.push("before", query.before);
        q
    }

    fn badge_pairs(query: &BadgeQuery) -> QueryPairs {
        let mut q = QueryPairs::new();
        q.push("chart", &query.chart);
        q.push("after", query.after);
        q.push("before", query.before);
        q.push_opt("dimension", query.dimension.as_deref());
        q.push_opt("label", query.label.as_deref());
        q.push_opt("units", query.units.as_deref());
        q.push_opt("label_color", query.label_color.as_deref());
        q.push_opt("value_color", query.value_color.as_deref());
        q
    }

    // ========================================================================
    // Request plumbing
    // ========================================================================

    fn ensure_open(&self) -> ClientResult<()> {
        if self.is_closed() {
            return Err(ClientError::Closed);
        }
        Ok(())
    }

    fn endpoint_url(&self, version: ApiVersion, endpoint: &str) -> String {
        format!("{}/api/{}/{}", self.base_url, version, endpoint)
    }

    async fn send_get(&self, url: &str, pairs: &QueryPairs) -> ClientResult<reqwest::Response> {
        self.ensure_open()?;
        debug!("GET {}?{}", url, pairs.encode());

        let mut request = self.http.get(url);
        if !pairs.is_empty() {
            request = request.query(pairs.as_slice());
        }
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ClientError::connection(url, e))?;
        Self::check_status(url, response).await
    }

    async fn check_status(
        url: &str,
        response: reqwest::Response,
    ) -> ClientResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ClientError::api(status, url, body))
        }
    }

    async fn get_json(
        &self,
        version: ApiVersion,
        endpoint: &str,
        pairs: QueryPairs,
    ) -> ClientResult<Value> {
        let url = self.endpoint_url(version, endpoint);
        let response = self.send_get(&url, &pairs).await?;
        let text = response
            .text()
            .await
            .map_err(|e| ClientError::connection(&url, e))?;
        serde_json::from_str(&text).map_err(|e| ClientError::decode(&url, e))
    }

    async fn get_text(
        &self,
        version: ApiVersion,
        endpoint: &str,
        pairs: QueryPairs,
    ) -> ClientResult<String> {
        let url = self.endpoint_url(version, endpoint);
        let response = self.send_get(&url, &pairs).await?;
        response
            .text()
            .await
            .map_err(|e| ClientError::connection(&url, e))
    }

    async fn post_json<B: Serialize + ?Sized>(
        &self,
        version: ApiVersion,
        endpoint: &str,
        body: &B,
    ) -> ClientResult<Value> {
        self.ensure_open()?;
        let url = self.endpoint_url(version, endpoint);
        debug!("POST {}", url);

        let mut request = self.http.post(&url).json(body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ClientError::connection(&url, e))?;
        let response = Self::check_status(&url, response).await?;
        let text = response
            .text()
            .await
            .map_err(|e| ClientError::connection(&url, e))?;
        serde_json::from_str(&text).map_err(|e| ClientError::decode(&url, e))
    }
}

impl std::fmt::Debug for NetdataClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NetdataClient")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("closed", &self.is_closed())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::super::mock;
    use super::*;
    use crate::domains::netdata::query::{DataFormat, TimeGroup};

    fn test_client(base_url: &str) -> NetdataClient {
        NetdataClient::new(&NetdataConfig {
            base_url: base_url.to_string(),
            api_key: None,
            timeout_secs: 5,
        })
        .unwrap()
    }

    #[test]
    fn test_base_url_normalized() {
        let client = test_client("http://test:19999/");
        assert_eq!(client.base_url(), "http://test:19999");
    }

    #[test]
    fn test_data_pairs_v1_preserves_relative_after() {
        let query = DataQuery {
            context: Some("system.cpu".to_string()),
            ..Default::default()
        };
        let pairs = NetdataClient::data_pairs(&query);

        assert_eq!(pairs.get("after"), Some("-600"));
        assert_eq!(pairs.get("before"), Some("0"));
        assert_eq!(pairs.get("points"), Some("0"));
        assert_eq!(pairs.get("format"), Some("json"));
        assert_eq!(pairs.get("group"), Some("average"));
        assert_eq!(pairs.get("context"), Some("system.cpu"));
        assert_eq!(pairs.get("scope_contexts"), None);
    }

    #[test]
    fn test_data_pairs_v1_chart_wins_over_context() {
        let query = DataQuery {
            chart: Some("system.cpu".to_string()),
            context: Some("system.cpu".to_string()),
            ..Default::default()
        };
        let pairs = NetdataClient::data_pairs(&query);
        assert_eq!(pairs.get("chart"), Some("system.cpu"));
        assert_eq!(pairs.get("context"), None);
    }

    #[test]
    fn test_data_pairs_v2_scopes_context() {
        let query = DataQuery {
            context: Some("disk.io".to_string()),
            api_version: ApiVersion::V2,
            group: TimeGroup::Max,
            options: vec!["jsonwrap".to_string(), "raw".to_string()],
            ..Default::default()
        };
        let pairs = NetdataClient::data_pairs(&query);
        assert_eq!(pairs.get("scope_contexts"), Some("disk.io"));
        assert_eq!(pairs.get("context"), None);
        assert_eq!(pairs.get("group"), Some("max"));
        assert_eq!(pairs.get("options"), Some("jsonwrap,raw"));
    }

    #[test]
    fn test_all_metrics_pairs() {
        let pairs = NetdataClient::all_metrics_pairs(&AllMetricsQuery {
            filter: Some("system.*".to_string()),
            ..Default::default()
        });
        assert_eq!(pairs.get("format"), Some("json"));
        assert_eq!(pairs.get("names"), Some("yes"));
        assert_eq!(pairs.get("timestamps"), Some("yes"));
        assert_eq!(pairs.get("filter"), Some("system.*"));
    }

    #[test]
    fn test_badge_pairs_skip_unset() {
        let pairs = NetdataClient::badge_pairs(&BadgeQuery::new("system.cpu"));
        assert_eq!(pairs.get("chart"), Some("system.cpu"));
        assert_eq!(pairs.get("after"), Some("-600"));
        assert_eq!(pairs.get("dimension"), None);
        assert_eq!(pairs.get("label_color"), None);
    }

    #[test]
    fn test_close_is_idempotent() {
        let client = test_client("http://test:19999");
        assert!(!client.is_closed());
        assert!(client.close());
        assert!(!client.close());
        assert!(client.is_closed());
    }

    #[tokio::test]
    async fn test_request_after_close_fails() {
        let client = test_client("http://127.0.0.1:1");
        client.close();
        let err = client.info(ApiVersion::V1).await.unwrap_err();
        assert!(matches!(err, ClientError::Closed));
    }

    #[tokio::test]
    async fn test_info_parses_json() {
        let agent = mock::MockAgent::serve(200, "application/json", r#"{"version":"v1.44.0"}"#)
            .await;
        let client = test_client(&agent.base_url);

        let info = client.info(ApiVersion::V1).await.unwrap();
        assert_eq!(info["version"], "v1.44.0");

        let request = agent.request().await;
        assert!(request.starts_with("GET /api/v1/info"));
    }

    #[tokio::test]
    async fn test_bearer_header_sent_when_key_configured() {
        let agent = mock::MockAgent::serve(200, "application/json", "{}").await;
        let client = NetdataClient::new(&NetdataConfig {
            base_url: agent.base_url.clone(),
            api_key: Some("secret-token".to_string()),
            timeout_secs: 5,
        })
        .unwrap();

        client.charts().await.unwrap();
        let request = agent.request().await;
        assert!(request.contains("authorization: Bearer secret-token"));
    }

    #[tokio::test]
    async fn test_non_2xx_becomes_api_error() {
        let agent = mock::MockAgent::serve(404, "text/plain", "no such chart").await;
        let client = test_client(&agent.base_url);

        let err = client.chart("nope.chart").await.unwrap_err();
        match err {
            ClientError::Api { status, body, .. } => {
                assert_eq!(status.as_u16(), 404);
                assert_eq!(body, "no such chart");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unreachable_agent_is_connection_error() {
        // Bind then drop to get a port with nothing listening.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = test_client(&format!("http://{addr}"));
        let err = client.info(ApiVersion::V1).await.unwrap_err();
        assert!(matches!(err, ClientError::Connection { .. }));
    }

    #[tokio::test]
    async fn test_malformed_json_is_decode_error() {
        let agent = mock::MockAgent::serve(200, "application/json", "<html>oops</html>").await;
        let client = test_client(&agent.base_url);

        let err = client.functions().await.unwrap_err();
        assert!(matches!(err, ClientError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_csv_data_returned_as_raw_text() {
        let body = "time,user,system\n1234567890,50.5,10.1\n";
        let agent = mock::MockAgent::serve(200, "text/plain", body).await;
        let client = test_client(&agent.base_url);

        let query = DataQuery {
            context: Some("system.cpu".to_string()),
            format: DataFormat::Csv,
            ..Default::default()
        };
        match client.data(&query).await.unwrap() {
            Payload::Text(text) => assert_eq!(text, body),
            Payload::Json(_) => panic!("csv must not be JSON-parsed"),
        }

        let request = agent.request().await;
        assert!(request.contains("format=csv"));
    }

    #[tokio::test]
    async fn test_data_query_string_round_trips_after() {
        let agent =
            mock::MockAgent::serve(200, "application/json", r#"{"labels":[],"data":[]}"#).await;
        let client = test_client(&agent.base_url);

        let query = DataQuery {
            context: Some("system.cpu".to_string()),
            ..Default::default()
        };
        client.data(&query).await.unwrap();

        let request = agent.request().await;
        assert!(request.contains("after=-600"));
        assert!(request.contains("context=system.cpu"));
    }

    #[tokio::test]
    async fn test_search_uses_q_endpoint() {
        let agent = mock::MockAgent::serve(200, "application/json", r#"{"contexts":{}}"#).await;
        let client = test_client(&agent.base_url);

        client.search("disk", ApiVersion::V2, "*").await.unwrap();
        let request = agent.request().await;
        assert!(request.starts_with("GET /api/v2/q?q=disk"));
    }

    #[tokio::test]
    async fn test_contexts_scopes_forwarded() {
        let agent = mock::MockAgent::serve(200, "application/json", r#"{"contexts":{}}"#).await;
        let client = test_client(&agent.base_url);

        client
            .contexts(ApiVersion::V3, "node1", "system.*")
            .await
            .unwrap();
        let request = agent.request().await;
        assert!(request.starts_with("GET /api/v3/contexts?"));
        assert!(request.contains("scope_nodes=node1"));
    }

    #[tokio::test]
    async fn test_nodes_default_v2_path() {
        let agent = mock::MockAgent::serve(200, "application/json", r#"{"nodes":[]}"#).await;
        let client = test_client(&agent.base_url);

        client.nodes(ApiVersion::V2).await.unwrap();
        let request = agent.request().await;
        assert!(request.starts_with("GET /api/v2/nodes"));
    }

    #[tokio::test]
    async fn test_weights_window_forwarded() {
        let agent = mock::MockAgent::serve(200, "application/json", r#"{"contexts":{}}"#).await;
        let client = test_client(&agent.base_url);

        client
            .weights(ApiVersion::V2, &WeightsQuery::default())
            .await
            .unwrap();
        let request = agent.request().await;
        assert!(request.starts_with("GET /api/v2/weights?"));
        assert!(request.contains("after=-600"));
    }

    #[tokio::test]
    async fn test_alert_log_after_cursor() {
        let agent = mock::MockAgent::serve(200, "application/json", "[]").await;
        let client = test_client(&agent.base_url);

        client.alert_log(Some(12345)).await.unwrap();
        let request = agent.request().await;
        assert!(request.starts_with("GET /api/v1/alarm_log?after=12345"));
    }

    #[tokio::test]
    async fn test_alerts_active_flag() {
        let agent = mock::MockAgent::serve(200, "application/json", r#"{"alarms":{}}"#).await;
        let client = test_client(&agent.base_url);

        client.alerts(false, true).await.unwrap();
        let request = agent.request().await;
        assert!(request.starts_with("GET /api/v1/alarms?active=true"));
        assert!(!request.contains("all="));
    }

    #[tokio::test]
    async fn test_alert_variables_chart_forwarded() {
        let agent = mock::MockAgent::serve(200, "application/json", r#"{"chart":"system.load"}"#)
            .await;
        let client = test_client(&agent.base_url);

        client.alert_variables("system.load").await.unwrap();
        let request = agent.request().await;
        assert!(request.starts_with("GET /api/v1/alarm_variables?chart=system.load"));
    }

    #[tokio::test]
    async fn test_all_metrics_prometheus_is_raw_text() {
        let body = "netdata_system_cpu_percentage_average{dimension=\"user\"} 50.5\n";
        let agent = mock::MockAgent::serve(200, "text/plain", body).await;
        let client = test_client(&agent.base_url);

        let query = AllMetricsQuery {
            format: crate::domains::netdata::query::AllMetricsFormat::Prometheus,
            ..Default::default()
        };
        match client.all_metrics(&query).await.unwrap() {
            Payload::Text(text) => assert_eq!(text, body),
            Payload::Json(_) => panic!("prometheus must not be JSON-parsed"),
        }

        let request = agent.request().await;
        assert!(request.starts_with("GET /api/v1/allmetrics?format=prometheus"));
    }

    #[tokio::test]
    async fn test_manage_health_posts_json_body() {
        let agent = mock::MockAgent::serve(200, "application/json", r#"{"status":"ok"}"#).await;
        let client = test_client(&agent.base_url);

        let request = HealthRequest {
            cmd: Some(crate::domains::netdata::query::HealthCommand::SilenceAll),
            ..Default::default()
        };
        client.manage_health(&request).await.unwrap();

        let head = agent.request().await;
        assert!(head.starts_with("POST /api/v1/manage/health"));
        assert!(head.contains("\"cmd\":\"SILENCE ALL\""));
    }

    #[tokio::test]
    async fn test_execute_function_posts_body() {
        let agent = mock::MockAgent::serve(200, "application/json", r#"{"rows":[]}"#).await;
        let client = test_client(&agent.base_url);

        client.execute_function("processes", 10).await.unwrap();
        let head = agent.request().await;
        assert!(head.starts_with("POST /api/v1/function"));
        assert!(head.contains("\"function\":\"processes\""));
        assert!(head.contains("\"timeout\":10"));
    }

    #[tokio::test]
    async fn test_badge_returns_raw_bytes() {
        let svg = "<svg xmlns=\"http://www.w3.org/2000/svg\"></svg>";
        let agent = mock::MockAgent::serve(200, "image/svg+xml", svg).await;
        let client = test_client(&agent.base_url);

        let bytes = client.badge(&BadgeQuery::new("system.cpu")).await.unwrap();
        assert_eq!(bytes, svg.as_bytes());

        let request = agent.request().await;
        assert!(request.starts_with("GET /api/v1/badge.svg?chart=system.cpu"));
    }

    // Integration tests (require a live agent, run with: cargo test -- --ignored)
    #[ignore]
    #[tokio::test]
    async fn test_live_agent_info() {
        let client = test_client("http://localhost:19999");
        let info = client.info(ApiVersion::V1).await.unwrap();
        assert!(info.get("version").is_some());
    }

    #[ignore]
    #[tokio::test]
    async fn test_live_agent_data() {
        let client = test_client("http://localhost:19999");
        let query = DataQuery {
            context: Some("system.cpu".to_string()),
            ..Default::default()
        };
        match client.data(&query).await.unwrap() {
            Payload::Json(value) => assert!(value.get("data").is_some()),
            Payload::Text(_) => panic!("expected JSON payload"),
        }
    }
}
