//! Typed query vocabulary for the Netdata API.
//!
//! Every enumerated parameter the API accepts is modeled as a closed enum,
//! and multi-parameter endpoints get a dedicated query struct with serde
//! defaults matching the agent's own defaults. The same structs double as
//! tool input schemas via schemars.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Netdata API version selecting the URL path prefix.
///
/// The same logical operation can exist under v1, v2, and v3 with different
/// path and parameter conventions. Legacy chart/data endpoints default to
/// v1; nodes, contexts, search, and weights live under v2/v3.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ApiVersion {
    #[default]
    V1,
    V2,
    V3,
}

impl ApiVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::V1 => "v1",
            Self::V2 => "v2",
            Self::V3 => "v3",
        }
    }
}

impl std::fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Time aggregation function applied when the requested range holds more
/// samples than returned points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TimeGroup {
    Min,
    Max,
    Avg,
    #[default]
    Average,
    Median,
    Sum,
    Stddev,
}

impl TimeGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Min => "min",
            Self::Max => "max",
            Self::Avg => "avg",
            Self::Average => "average",
            Self::Median => "median",
            Self::Sum => "sum",
            Self::Stddev => "stddev",
        }
    }
}

/// Response format for `/api/{v}/data` queries.
///
/// `json` and `json2` are parsed; the remaining formats are returned as raw
/// text because the agent emits them verbatim (csv rows, jsonp wrappers).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum DataFormat {
    #[default]
    Json,
    Json2,
    Csv,
    Datatable,
    Jsonp,
}

impl DataFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Json2 => "json2",
            Self::Csv => "csv",
            Self::Datatable => "datatable",
            Self::Jsonp => "jsonp",
        }
    }

    /// Whether the agent's response body is JSON for this format.
    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json | Self::Json2)
    }
}

/// Response format for `/api/v1/allmetrics`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum AllMetricsFormat {
    Shell,
    Prometheus,
    #[default]
    Json,
}

impl AllMetricsFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Shell => "shell",
            Self::Prometheus => "prometheus",
            Self::Json => "json",
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }
}

/// Health management command accepted by `POST /api/v1/manage/health`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum HealthCommand {
    #[serde(rename = "DISABLE ALL")]
    DisableAll,
    #[serde(rename = "SILENCE ALL")]
    SilenceAll,
    #[serde(rename = "DISABLE")]
    Disable,
    #[serde(rename = "SILENCE")]
    Silence,
    #[serde(rename = "RESET")]
    Reset,
    #[serde(rename = "LIST")]
    List,
}

/// Parameters for `/api/{v}/data`.
///
/// `after`/`before` are signed: negative means seconds relative to now,
/// positive is a unix timestamp. `points` of 0 returns all available
/// samples.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DataQuery {
    /// Chart ID to query (v1 API only).
    #[schemars(description = "Chart ID to query (v1 API only)")]
    pub chart: Option<String>,

    /// Context to query, e.g. `system.cpu` or `disk.io`.
    #[schemars(description = "Context to query (e.g., 'system.cpu', 'disk.io')")]
    pub context: Option<String>,

    /// Start time (negative for relative to now, positive for unix timestamp).
    #[serde(default = "default_after")]
    #[schemars(
        description = "Start time in seconds (negative for relative to now, positive for unix timestamp)"
    )]
    pub after: i64,

    /// End time (0 for now).
    #[serde(default)]
    #[schemars(
        description = "End time in seconds (0 for now, negative for relative, positive for unix timestamp)"
    )]
    pub before: i64,

    /// Number of points to return (0 for all available).
    #[serde(default)]
    #[schemars(description = "Number of points to return (0 for all available)")]
    pub points: u32,

    /// Response format.
    #[serde(default)]
    #[schemars(description = "Response format")]
    pub format: DataFormat,

    /// Time aggregation function.
    #[serde(default)]
    #[schemars(description = "Time aggregation function")]
    pub group: TimeGroup,

    /// Additional options (jsonwrap, raw, minify, ...), comma-joined on the wire.
    #[serde(default)]
    #[schemars(description = "Additional options (jsonwrap, raw, minify, etc.)")]
    pub options: Vec<String>,

    /// API version to use.
    #[serde(default)]
    #[schemars(description = "API version to use (v1, v2, or v3)")]
    pub api_version: ApiVersion,
}

impl Default for DataQuery {
    fn default() -> Self {
        Self {
            chart: None,
            context: None,
            after: default_after(),
            before: 0,
            points: 0,
            format: DataFormat::default(),
            group: TimeGroup::default(),
            options: Vec::new(),
            api_version: ApiVersion::default(),
        }
    }
}

pub(crate) fn default_after() -> i64 {
    -600
}

/// Parameters for `/api/v1/allmetrics`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AllMetricsQuery {
    /// Response format.
    #[serde(default)]
    #[schemars(description = "Response format")]
    pub format: AllMetricsFormat,

    /// Filter pattern to apply to charts.
    #[schemars(description = "Filter pattern to apply to charts")]
    pub filter: Option<String>,

    /// Include dimension names in the output.
    #[serde(default = "default_true")]
    #[schemars(description = "Include dimension names (default: true)")]
    pub names: bool,

    /// Include timestamps in prometheus output.
    #[serde(default = "default_true")]
    #[schemars(description = "Include timestamps in prometheus output (default: true)")]
    pub timestamps: bool,
}

impl Default for AllMetricsQuery {
    fn default() -> Self {
        Self {
            format: AllMetricsFormat::default(),
            filter: None,
            names: true,
            timestamps: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// JSON body for `POST /api/v1/manage/health`.
///
/// `None` fields are omitted so the agent applies its own pattern defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct HealthRequest {
    /// Command to execute.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Command to execute")]
    pub cmd: Option<HealthCommand>,

    /// Alarm name pattern.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Alarm name pattern")]
    pub alarm: Option<String>,

    /// Chart ID pattern.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Chart ID pattern")]
    pub chart: Option<String>,

    /// Context pattern.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Context pattern")]
    pub context: Option<String>,
}

/// Parameters for `/api/{v2,v3}/weights`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct WeightsQuery {
    /// Simple pattern to filter nodes.
    #[serde(default = "default_scope")]
    #[schemars(description = "Simple pattern to filter nodes")]
    pub scope_nodes: String,

    /// Simple pattern to filter contexts.
    #[serde(default = "default_scope")]
    #[schemars(description = "Simple pattern to filter contexts")]
    pub scope_contexts: String,

    /// Start of the scored window.
    #[serde(default = "default_after")]
    pub after: i64,

    /// End of the scored window (0 for now).
    #[serde(default)]
    pub before: i64,
}

impl Default for WeightsQuery {
    fn default() -> Self {
        Self {
            scope_nodes: default_scope(),
            scope_contexts: default_scope(),
            after: default_after(),
            before: 0,
        }
    }
}

pub(crate) fn default_scope() -> String {
    "*".to_string()
}

/// Parameters for `/api/v1/badge.svg`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct BadgeQuery {
    /// Chart ID to render.
    pub chart: String,

    /// Dimension to render (all dimensions when unset).
    pub dimension: Option<String>,

    /// Start time of the aggregated window.
    #[serde(default = "default_after")]
    pub after: i64,

    /// End time of the aggregated window (0 for now).
    #[serde(default)]
    pub before: i64,

    /// Left-side label text.
    pub label: Option<String>,

    /// Units text overriding the chart's own.
    pub units: Option<String>,

    /// Label background color.
    pub label_color: Option<String>,

    /// Value background color.
    pub value_color: Option<String>,
}

impl BadgeQuery {
    pub fn new(chart: impl Into<String>) -> Self {
        Self {
            chart: chart.into(),
            dimension: None,
            after: default_after(),
            before: 0,
            label: None,
            units: None,
            label_color: None,
            value_color: None,
        }
    }
}

/// Ordered query-string pairs for one outgoing request.
///
/// Order is preserved so the encoded string is deterministic and testable.
#[derive(Debug, Clone, Default)]
pub struct QueryPairs {
    pairs: Vec<(&'static str, String)>,
}

impl QueryPairs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter.
    pub fn push(&mut self, name: &'static str, value: impl ToString) {
        self.pairs.push((name, value.to_string()));
    }

    /// Append a parameter only when a value is present.
    pub fn push_opt(&mut self, name: &'static str, value: Option<impl ToString>) {
        if let Some(value) = value {
            self.push(name, value);
        }
    }

    /// Append a boolean flag as `true` only when set, mirroring the agent's
    /// presence-style flags (`alarms?active=true`).
    pub fn push_flag(&mut self, name: &'static str, value: bool) {
        if value {
            self.push(name, "true");
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn as_slice(&self) -> &[(&'static str, String)] {
        &self.pairs
    }

    /// Look up a parameter value, last occurrence wins.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .rev()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Encode as an `application/x-www-form-urlencoded` query string.
    pub fn encode(&self) -> String {
        serde_urlencoded::to_string(self.as_slice()).unwrap_or_default()
    }
}
