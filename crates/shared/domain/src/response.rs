//! Result envelope and the handler response wrapped around it.

use crate::constants::{
    CONTENT_TYPE_JSON, HEADER_ALLOW_ORIGIN, HEADER_CONTENT_TYPE, UNEXPECTED_ERROR,
};
use crate::query::QueryEcho;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Matched items: a word list, or substring counts keyed by substring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResultItems {
    Words(Vec<String>),
    Counts(BTreeMap<String, u64>),
}

impl ResultItems {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Words(words) => words.len(),
            Self::Counts(counts) => counts.len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResult {
    pub items: ResultItems,
    /// Always `items.len()`.
    pub total: usize,
}

/// `{result: {items, total}, query}` returned for every successful lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultEnvelope {
    pub result: LookupResult,
    pub query: QueryEcho,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Envelope(Box<ResultEnvelope>),
    Message(String),
}

/// What one handler invocation returns: `{statusCode, body, headers}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandlerResponse {
    pub status_code: u16,
    pub body: ResponseBody,
    pub headers: BTreeMap<String, String>,
}

impl HandlerResponse {
    fn new(status_code: u16, body: ResponseBody) -> Self {
        let headers = BTreeMap::from([
            (HEADER_ALLOW_ORIGIN.to_owned(), "*".to_owned()),
            (HEADER_CONTENT_TYPE.to_owned(), CONTENT_TYPE_JSON.to_owned()),
        ]);
        Self { status_code, body, headers }
    }

    #[must_use]
    pub fn ok(envelope: ResultEnvelope) -> Self {
        Self::new(200, ResponseBody::Envelope(Box::new(envelope)))
    }

    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(400, ResponseBody::Message(message.into()))
    }

    /// The generic 500 response; details stay in the logs.
    #[must_use]
    pub fn unexpected() -> Self {
        Self::new(500, ResponseBody::Message(UNEXPECTED_ERROR.to_owned()))
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status_code == 200
    }
}
