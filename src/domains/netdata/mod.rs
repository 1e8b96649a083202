//! Netdata API domain.
//!
//! Wraps the agent's REST API behind a typed asynchronous client. The tool
//! dispatcher is the only consumer; it receives the client once at startup
//! and shares it across concurrent calls.

mod client;
mod error;
pub mod query;

pub use client::{NetdataClient, Payload};
pub use error::{ClientError, ClientResult};
