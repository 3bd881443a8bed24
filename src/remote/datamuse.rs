//! Datamuse word-finding API
//!
//! One endpoint serves both jobs: a spelling query (`sp=crane`) confirms a
//! word, and a wildcard query (`sp=?????`) returns a pool of candidates.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use super::{WordLookup, WordSource, filter_candidates, http_client};
use crate::config::ApiConfig;
use crate::core::WordLength;
use crate::error::{RemoteError, RemoteResult};
use crate::validation::is_nonsense;

/// Matches requested when confirming a spelling
const LOOKUP_MAX: usize = 5;

/// Candidates requested for a target pool
const POOL_MAX: usize = 1000;

#[derive(Debug, Deserialize)]
struct Entry {
    word: String,
}

/// Shared request plumbing for the lookup and the source
#[derive(Debug, Clone)]
struct DatamuseClient {
    base_url: String,
    http: reqwest::Client,
}

impl DatamuseClient {
    fn new(base_url: &str, timeout: Duration) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: http_client(timeout),
        }
    }

    async fn words(&self, pattern: &str, max: usize) -> RemoteResult<Vec<String>> {
        let url = format!("{}/words", self.base_url);
        let max = max.to_string();
        tracing::debug!(%url, pattern, %max, "querying datamuse");

        let response = self
            .http
            .get(&url)
            .query(&[("sp", pattern), ("max", max.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::Status(status));
        }

        let entries: Vec<Entry> = response.json().await?;
        Ok(entries.into_iter().map(|e| e.word).collect())
    }
}

/// Spelling confirmation through Datamuse
#[derive(Debug, Clone)]
pub struct DatamuseLookup {
    client: DatamuseClient,
}

impl DatamuseLookup {
    #[must_use]
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        Self {
            client: DatamuseClient::new(base_url, timeout),
        }
    }

    #[must_use]
    pub fn from_config(api: &ApiConfig) -> Self {
        Self::new(&api.datamuse_url, Duration::from_millis(api.timeout_ms))
    }
}

#[async_trait]
impl WordLookup for DatamuseLookup {
    fn name(&self) -> &'static str {
        "datamuse"
    }

    async fn lookup(&self, word: &str, length: WordLength) -> RemoteResult<bool> {
        let matches = self
            .client
            .words(&word.to_lowercase(), LOOKUP_MAX)
            .await?;
        Ok(confirms(&matches, word, length))
    }
}

/// True when a returned spelling is exactly `word` and itself plausible
fn confirms(matches: &[String], word: &str, length: WordLength) -> bool {
    filter_candidates(matches, length)
        .iter()
        .any(|candidate| candidate == word && !is_nonsense(candidate))
}

/// Random target pool through Datamuse wildcard spelling
#[derive(Debug, Clone)]
pub struct DatamuseSource {
    client: DatamuseClient,
}

impl DatamuseSource {
    #[must_use]
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        Self {
            client: DatamuseClient::new(base_url, timeout),
        }
    }

    #[must_use]
    pub fn from_config(api: &ApiConfig) -> Self {
        Self::new(&api.datamuse_url, Duration::from_millis(api.timeout_ms))
    }
}

#[async_trait]
impl WordSource for DatamuseSource {
    fn name(&self) -> &'static str {
        "datamuse"
    }

    async fn fetch_candidates(&self, length: WordLength) -> RemoteResult<Vec<String>> {
        let pattern = "?".repeat(length.letters());
        let raw = self.client.words(&pattern, POOL_MAX).await?;
        let pool = filter_candidates(raw, length);
        tracing::debug!(pool = pool.len(), %length, "datamuse candidates");
        Ok(pool)
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::CannedServer;
    use super::*;

    fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn exact_match_confirms() {
        let matches = strings(&["crane", "cranes", "crone"]);
        assert!(confirms(&matches, "CRANE", WordLength::Five));
    }

    #[test]
    fn near_matches_do_not_confirm() {
        let matches = strings(&["crone", "crank"]);
        assert!(!confirms(&matches, "CRANE", WordLength::Five));
        assert!(!confirms(&[], "CRANE", WordLength::Five));
    }

    #[test]
    fn nonsense_match_does_not_confirm() {
        let matches = strings(&["qwert"]);
        assert!(!confirms(&matches, "QWERT", WordLength::Five));
    }

    #[test]
    fn base_url_trailing_slash_trimmed() {
        let lookup = DatamuseLookup::new("https://api.datamuse.com/", Duration::from_secs(1));
        assert_eq!(lookup.client.base_url, "https://api.datamuse.com");
    }

    #[tokio::test]
    async fn lookup_confirms_exact_spelling() {
        let server = CannedServer::start(200, r#"[{"word":"crane","score":1001},{"word":"crone","score":95}]"#).await;
        let lookup = DatamuseLookup::new(&server.base_url, Duration::from_secs(2));

        assert!(lookup.lookup("CRANE", WordLength::Five).await.unwrap());
        let requests = server.requests();
        let request = &requests[0];
        assert!(request.starts_with("GET /words?"));
        assert!(request.contains("sp=crane"));
        assert!(request.contains("max=5"));
    }

    #[tokio::test]
    async fn lookup_rejects_near_matches() {
        let server = CannedServer::start(200, r#"[{"word":"crone"},{"word":"cranes"}]"#).await;
        let lookup = DatamuseLookup::new(&server.base_url, Duration::from_secs(2));
        assert!(!lookup.lookup("CRANE", WordLength::Five).await.unwrap());
    }

    #[tokio::test]
    async fn error_status_is_reported() {
        let server = CannedServer::start(500, "").await;
        let lookup = DatamuseLookup::new(&server.base_url, Duration::from_secs(2));
        let result = lookup.lookup("CRANE", WordLength::Five).await;
        assert!(matches!(result, Err(RemoteError::Status(s)) if s.as_u16() == 500));
    }

    #[tokio::test]
    async fn malformed_body_is_an_error() {
        let server = CannedServer::start(200, r#"{"words":"crane"}"#).await;
        let lookup = DatamuseLookup::new(&server.base_url, Duration::from_secs(2));
        assert!(matches!(lookup.lookup("CRANE", WordLength::Five).await, Err(RemoteError::Http(_))));
    }

    #[tokio::test]
    async fn source_queries_wildcards_and_filters() {
        let server = CannedServer::start(
            200,
            r#"[{"word":"plumb"},{"word":"ice-c"},{"word":"don't"},{"word":"slate"},{"word":"cranes"}]"#,
        )
        .await;
        let source = DatamuseSource::new(&server.base_url, Duration::from_secs(2));

        let pool = source.fetch_candidates(WordLength::Five).await.unwrap();
        assert_eq!(pool, vec!["PLUMB", "SLATE"]);
        let requests = server.requests();
        let request = &requests[0];
        assert!(request.contains("sp=%3F%3F%3F%3F%3F"));
        assert!(request.contains("max=1000"));
    }
}
