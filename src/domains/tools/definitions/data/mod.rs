//! Metric data tools: time-series queries and the all-metrics snapshot.

mod all_metrics;
mod query;

pub use all_metrics::GetAllMetricsTool;
pub use query::GetDataTool;
