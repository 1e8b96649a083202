//! Netdata MCP Server Library
//!
//! This crate exposes a subset of the Netdata monitoring HTTP API as tools
//! under the Model Context Protocol (MCP), so that an LLM-driven client can
//! query metrics, alerts, and node information.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling, and the main server
//! - **domains**: Business logic organized by bounded contexts
//!   - **netdata**: typed asynchronous client for the agent's HTTP API
//!   - **tools**: MCP tools dispatching onto that client
//!
//! # Example
//!
//! ```rust,no_run
//! use netdata_mcp_server::{core::McpServer, core::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
pub use domains::netdata::{NetdataClient, Payload};
