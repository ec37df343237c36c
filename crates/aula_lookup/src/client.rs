//! HTTP client for both catalogues.

use crate::error::{ClientError, LookupError, LookupErrorKind, Subject};
use crate::models::{Character, CharacterPage, Creature};
use async_trait::async_trait;
use derive_getters::Getters;
use derive_setters::Setters;
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Public character API.
pub const DEFAULT_CHARACTER_BASE: &str = "https://rickandmortyapi.com/api";
/// Public creature API.
pub const DEFAULT_CREATURE_BASE: &str = "https://pokeapi.co/api/v2";

/// Where the catalogues live and how long to wait for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, Setters)]
#[setters(into, prefix = "with_")]
pub struct Endpoints {
    /// Base URL of the character API.
    #[serde(default = "default_character_base")]
    character_base: String,
    /// Base URL of the creature API.
    #[serde(default = "default_creature_base")]
    creature_base: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    timeout_secs: u64,
}

fn default_character_base() -> String {
    DEFAULT_CHARACTER_BASE.to_string()
}

fn default_creature_base() -> String {
    DEFAULT_CREATURE_BASE.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            character_base: default_character_base(),
            creature_base: default_creature_base(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Trims and lower-cases a query; `None` if nothing is left.
pub fn normalize_query(query: &str) -> Option<String> {
    let q = query.trim().to_lowercase();
    (!q.is_empty()).then_some(q)
}

/// Anything that can answer character and creature queries.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// First character whose name matches `query`.
    async fn character(&self, query: &str) -> Result<Character, LookupError>;

    /// Creature by name or national number.
    async fn creature(&self, query: &str) -> Result<Creature, LookupError>;
}

/// reqwest-backed [`Catalog`].
#[derive(Debug, Clone)]
pub struct LookupClient {
    http: reqwest::Client,
    endpoints: Endpoints,
}

impl LookupClient {
    /// Creates a client for `endpoints`.
    ///
    /// # Errors
    ///
    /// Fails if the underlying HTTP client cannot be built.
    #[instrument(skip(endpoints), fields(timeout = endpoints.timeout_secs))]
    pub fn new(endpoints: Endpoints) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(endpoints.timeout_secs))
            .build()
            .map_err(|e| ClientError::new(e.to_string()))?;
        Ok(Self { http, endpoints })
    }

    /// Endpoints in use.
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    fn url(subject: Subject, base: &str, segments: &[&str]) -> Result<Url, LookupError> {
        let mut url = Url::parse(base)
            .map_err(|e| LookupError::new(subject, LookupErrorKind::Url(e.to_string())))?;
        url.path_segments_mut()
            .map_err(|_| {
                LookupError::new(subject, LookupErrorKind::Url(format!("{base} cannot be a base")))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn fetch<T: DeserializeOwned>(&self, subject: Subject, url: Url) -> Result<T, LookupError> {
        debug!(%url, "Sending request");
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| LookupError::new(subject, LookupErrorKind::Transport(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::new(subject, LookupErrorKind::Status(status.as_u16())));
        }

        let body = response
            .text()
            .await
            .map_err(|e| LookupError::new(subject, LookupErrorKind::Transport(e.to_string())))?;
        serde_json::from_str(&body)
            .map_err(|e| LookupError::new(subject, LookupErrorKind::Decode(e.to_string())))
    }
}

#[async_trait]
impl Catalog for LookupClient {
    #[instrument(skip(self))]
    async fn character(&self, query: &str) -> Result<Character, LookupError> {
        let name = normalize_query(query)
            .ok_or_else(|| LookupError::new(Subject::Character, LookupErrorKind::EmptyQuery))?;

        // Trailing empty segment keeps the `/character/` form the API documents.
        let mut url = Self::url(
            Subject::Character,
            &self.endpoints.character_base,
            &["character", ""],
        )?;
        url.query_pairs_mut().append_pair("name", &name);

        let page: CharacterPage = self.fetch(Subject::Character, url).await?;
        let character = page
            .results
            .into_iter()
            .next()
            .ok_or_else(|| LookupError::new(Subject::Character, LookupErrorKind::NoResults))?;

        info!(id = character.id, name = %character.name, matches = page.info.count, "Character found");
        Ok(character)
    }

    #[instrument(skip(self))]
    async fn creature(&self, query: &str) -> Result<Creature, LookupError> {
        let name = normalize_query(query)
            .ok_or_else(|| LookupError::new(Subject::Creature, LookupErrorKind::EmptyQuery))?;

        let url = Self::url(
            Subject::Creature,
            &self.endpoints.creature_base,
            &["pokemon", &name],
        )?;
        let creature: Creature = self.fetch(Subject::Creature, url).await?;

        info!(id = creature.id, name = %creature.name, "Creature found");
        Ok(creature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_query() {
        assert_eq!(normalize_query("  Pikachu "), Some("pikachu".to_string()));
        assert_eq!(normalize_query("   "), None);
        assert_eq!(normalize_query(""), None);
    }

    #[test]
    fn test_character_url_shape() {
        let mut url = LookupClient::url(
            Subject::Character,
            DEFAULT_CHARACTER_BASE,
            &["character", ""],
        )
        .unwrap();
        url.query_pairs_mut().append_pair("name", "rick sanchez");
        assert_eq!(
            url.as_str(),
            "https://rickandmortyapi.com/api/character/?name=rick+sanchez"
        );
    }

    #[test]
    fn test_creature_url_shape() {
        let url = LookupClient::url(Subject::Creature, "https://pokeapi.co/api/v2/", &["pokemon", "25"])
            .unwrap();
        assert_eq!(url.as_str(), "https://pokeapi.co/api/v2/pokemon/25");
    }

    #[test]
    fn test_endpoints_setters() {
        let endpoints = Endpoints::default()
            .with_creature_base("http://localhost:1/api/v2")
            .with_timeout_secs(3u64);
        assert_eq!(endpoints.creature_base(), "http://localhost:1/api/v2");
        assert_eq!(*endpoints.timeout_secs(), 3);
        assert_eq!(endpoints.character_base(), DEFAULT_CHARACTER_BASE);
    }

    #[tokio::test]
    async fn test_empty_query_sends_nothing() {
        let endpoints = Endpoints::default().with_character_base("http://127.0.0.1:9");
        let client = LookupClient::new(endpoints).unwrap();
        let err = client.character("  ").await.unwrap_err();
        assert_eq!(err.kind, LookupErrorKind::EmptyQuery);
    }
}
