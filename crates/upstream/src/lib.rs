//! Retrying upstream HTTP client for the Profiler MCP relay.
//!
//! This crate owns the one non-trivial piece of the relay: issuing a request
//! to the upstream LinkedIn data API with bounded retries and normalizing
//! whatever comes back into a uniform [`envelope::Envelope`].
//!
//! It intentionally contains **no** MCP surface and **no** transport binding;
//! those live in `profiler-mcp-server`.

pub mod config;
pub mod envelope;
pub mod executor;
pub mod redact;
