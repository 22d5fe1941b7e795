use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::record::RawRecord;

/// Inbound event-stream message, discriminated by `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StreamMessage {
    /// Status text, display only
    Log { message: String },

    /// Full result set of one search; replaces whatever was shown before
    Result {
        #[serde(default)]
        data: Option<Vec<RawRecord>>,
    },

    /// End of a search
    Complete,

    /// Search failed
    Error {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
}

impl StreamMessage {
    pub fn parse(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Search parameters sent to the backend. Dates are `DD/MM/YYYY`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub start_date: String,
    pub end_date: String,
    pub terms: Vec<String>,
}

/// Outbound message, discriminated by `action`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "payload", rename_all = "snake_case")]
pub enum ClientRequest {
    StartSearch(SearchRequest),
}

impl ClientRequest {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
