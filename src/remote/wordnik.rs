//! Wordnik random-word source
//!
//! Requires an API key; without one every fetch reports
//! [`RemoteError::Disabled`] so the picker moves on to the next source.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use super::{WordSource, filter_candidates, http_client};
use crate::config::ApiConfig;
use crate::core::WordLength;
use crate::error::{RemoteError, RemoteResult};

const LIMIT: usize = 50;

#[derive(Debug, Deserialize)]
struct RandomWord {
    word: String,
}

#[derive(Debug, Clone)]
pub struct WordnikSource {
    base_url: String,
    api_key: Option<String>,
    http: reqwest::Client,
}

impl WordnikSource {
    #[must_use]
    pub fn new(base_url: &str, api_key: Option<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            http: http_client(timeout),
        }
    }

    #[must_use]
    pub fn from_config(api: &ApiConfig) -> Self {
        Self::new(
            &api.wordnik_url,
            api.wordnik_api_key.clone(),
            Duration::from_millis(api.timeout_ms),
        )
    }

    /// Whether an API key is configured
    #[must_use]
    pub const fn has_key(&self) -> bool {
        self.api_key.is_some()
    }
}

#[async_trait]
impl WordSource for WordnikSource {
    fn name(&self) -> &'static str {
        "wordnik"
    }

    async fn fetch_candidates(&self, length: WordLength) -> RemoteResult<Vec<String>> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(RemoteError::Disabled("wordnik api key not configured"));
        };

        let url = format!("{}/words.json/randomWords", self.base_url);
        let letters = length.letters().to_string();
        let limit = LIMIT.to_string();
        tracing::debug!(%url, %length, "querying wordnik");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("hasDictionaryDef", "true"),
                ("minLength", letters.as_str()),
                ("maxLength", letters.as_str()),
                ("limit", limit.as_str()),
                ("api_key", api_key),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::Status(status));
        }

        let words: Vec<RandomWord> = response.json().await?;
        Ok(filter_candidates(words.into_iter().map(|w| w.word), length))
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::CannedServer;
    use super::*;

    #[test]
    fn blank_key_counts_as_missing() {
        let source = WordnikSource::new("https://api.wordnik.com/v4", Some("  ".into()), Duration::from_secs(1));
        assert!(!source.has_key());
    }

    #[tokio::test]
    async fn missing_key_is_disabled() {
        let source = WordnikSource::from_config(&ApiConfig::default());
        let result = source.fetch_candidates(WordLength::Five).await;
        assert!(matches!(result, Err(RemoteError::Disabled(_))));
    }

    #[tokio::test]
    async fn keyed_fetch_filters_random_words() {
        let server = CannedServer::start(
            200,
            r#"[{"id":1,"word":"planet"},{"id":2,"word":"x-rays"},{"id":3,"word":"Garden"}]"#,
        )
        .await;
        let source = WordnikSource::new(&server.base_url, Some("secret".into()), Duration::from_secs(2));

        let pool = source.fetch_candidates(WordLength::Six).await.unwrap();
        assert_eq!(pool, vec!["PLANET", "GARDEN"]);

        let requests = server.requests();
        let request = &requests[0];
        assert!(request.starts_with("GET /words.json/randomWords?"));
        assert!(request.contains("minLength=6"));
        assert!(request.contains("maxLength=6"));
        assert!(request.contains("api_key=secret"));
    }

    #[tokio::test]
    async fn rejected_key_is_a_status_error() {
        let server = CannedServer::start(401, r#"{"message":"unauthorized"}"#).await;
        let source = WordnikSource::new(&server.base_url, Some("bad".into()), Duration::from_secs(2));
        let result = source.fetch_candidates(WordLength::Five).await;
        assert!(matches!(result, Err(RemoteError::Status(s)) if s.as_u16() == 401));
    }
}
