//! Startup configuration.
//!
//! All settings are resolved here, once, at process start. The upstream key
//! is required: clap rejects startup outright when neither the flag nor the
//! environment variable is present.

use clap::{Parser, ValueEnum};
use profiler_upstream::config::{DEFAULT_API_USER, UpstreamConfig};
use std::net::SocketAddr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "profiler-mcp-server",
    version,
    about = "Relay LinkedIn bulk-data lookups as MCP tools"
)]
pub struct Args {
    /// Address to serve MCP + health endpoints on.
    #[arg(long, default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// Default tracing filter (overridden by RUST_LOG when set).
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Log output format.
    #[arg(long, value_enum, default_value = "text")]
    pub log_format: LogFormat,

    /// RapidAPI key for the upstream LinkedIn data API. Secret; never logged.
    #[arg(long, env = "LINKEDIN_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// RapidAPI user identifier sent with each upstream request.
    #[arg(long, env = "LINKEDIN_API_USER", default_value = DEFAULT_API_USER)]
    pub api_user: String,
}

impl Args {
    #[must_use]
    pub fn upstream_config(&self) -> UpstreamConfig {
        UpstreamConfig::new(self.api_key.clone(), self.api_user.clone())
    }
}
