//! The uniform success/failure envelope returned for every upstream call.
//!
//! This is the sole contract surfaced to callers. Exactly one of `data`
//! (success) or `message` + optional `details` (failure) is populated; the
//! constructors are the only way to build one, so the invariant holds by
//! construction.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    success: bool,
    status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

impl Envelope {
    #[must_use]
    pub fn success(status: u16, data: Value) -> Self {
        Self {
            success: true,
            status,
            data: Some(data),
            message: None,
            details: None,
        }
    }

    #[must_use]
    pub fn failure(status: u16, message: impl Into<String>) -> Self {
        Self {
            success: false,
            status,
            data: None,
            message: Some(message.into()),
            details: None,
        }
    }

    #[must_use]
    pub fn failure_with_details(status: u16, message: impl Into<String>, details: Value) -> Self {
        Self {
            success: false,
            status,
            data: None,
            message: Some(message.into()),
            details: Some(details),
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.success
    }

    #[must_use]
    pub fn status(&self) -> u16 {
        self.status
    }

    #[must_use]
    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[must_use]
    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }
}
