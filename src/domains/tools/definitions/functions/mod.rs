//! Collector function tools: discovery and on-demand execution.

mod execute;
mod list;

pub use execute::{ExecuteFunctionParams, ExecuteFunctionTool};
pub use list::{GetFunctionsParams, GetFunctionsTool};
