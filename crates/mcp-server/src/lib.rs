//! MCP server for the Profiler relay.
//!
//! Thin façade over `profiler-upstream`: four lookup tools, a liveness
//! route, and the streamable HTTP transport binding.

pub mod config;
pub mod error;
pub mod server;
pub mod tools;
