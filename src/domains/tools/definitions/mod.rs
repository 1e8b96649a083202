//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod agent;
pub mod alerts;
pub mod charts;
pub mod common;
pub mod contexts;
pub mod data;
pub mod functions;
pub mod health;

pub use agent::{GetInfoTool, GetNodesTool};
pub use alerts::{GetAlertLogTool, GetAlertVariablesTool, GetAlertsTool};
pub use charts::{GetChartTool, GetChartsTool};
pub use contexts::{GetContextsTool, SearchContextsTool};
pub use data::{GetAllMetricsTool, GetDataTool};
pub use functions::{ExecuteFunctionTool, GetFunctionsTool};
pub use health::ManageHealthTool;
