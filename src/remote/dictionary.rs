//! Free Dictionary API lookup
//!
//! A word counts as real when the service returns at least one entry with
//! meanings. A 404 answer means the dictionary does not know the word.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use super::{WordLookup, http_client};
use crate::config::ApiConfig;
use crate::core::WordLength;
use crate::error::{RemoteError, RemoteResult};

#[derive(Debug, Deserialize)]
struct Entry {
    #[serde(default)]
    meanings: Vec<serde_json::Value>,
}

/// Definition lookup against `{base}/{word}`
#[derive(Debug, Clone)]
pub struct DictionaryLookup {
    base_url: String,
    http: reqwest::Client,
}

impl DictionaryLookup {
    #[must_use]
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: http_client(timeout),
        }
    }

    #[must_use]
    pub fn from_config(api: &ApiConfig) -> Self {
        Self::new(&api.dictionary_url, Duration::from_millis(api.timeout_ms))
    }
}

#[async_trait]
impl WordLookup for DictionaryLookup {
    fn name(&self) -> &'static str {
        "dictionary"
    }

    async fn lookup(&self, word: &str, _length: WordLength) -> RemoteResult<bool> {
        let url = format!("{}/{}", self.base_url, word.to_lowercase());
        tracing::debug!(%url, "querying dictionary");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(false);
        }
        if !status.is_success() {
            return Err(RemoteError::Status(status));
        }

        let entries: Vec<Entry> = response.json().await?;
        Ok(has_meanings(&entries))
    }
}

fn has_meanings(entries: &[Entry]) -> bool {
    entries.iter().any(|entry| !entry.meanings.is_empty())
}
