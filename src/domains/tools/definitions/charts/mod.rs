//! Legacy v1 chart tools.

mod list;
mod show;

pub use list::{GetChartsParams, GetChartsTool};
pub use show::{GetChartParams, GetChartTool};
