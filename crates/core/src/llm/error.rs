use crate::llm::Provider;
use serde_json::Value;
use std::fmt;

/// The producer could not be reached or refused the request.
///
/// Kept distinct from [`crate::advisor::error::ParseError`] so callers can tell "couldn't
/// reach the producer" from "producer replied with garbage".
#[derive(Debug, Clone)]
pub struct TransportError {
    pub provider: Provider,
    pub stage: &'static str,
    pub detail: String,
    pub raw_output: Option<String>,
    pub raw_response_json: Option<Value>,
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "producer transport error (provider={:?}, stage={}): {}",
            self.provider, self.stage, self.detail
        )
    }
}

impl std::error::Error for TransportError {}
