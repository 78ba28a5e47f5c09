//! HTTP client for TheAudioDB API.
//!
//! The client issues GET requests to two endpoints (artist search and
//! artist discography), parses the JSON envelopes, and retries transient
//! failures with bounded exponential backoff. Exhausted retries degrade
//! to an empty result: callers never see a network error, only "no data".
//!
//! The HTTP transport sits behind the [`HttpBackend`] trait so tests can
//! inject a counting/failing double without touching the network.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, warn};

use crate::core::config::AudioDbConfig;

use super::error::AudioDbError;
use super::model::{Album, Artist, ArtistSearchResponse, DiscographyResponse};

/// Retries after the initial attempt.
const MAX_RETRIES: u32 = 3;

/// First backoff delay.
const BASE_BACKOFF: Duration = Duration::from_secs(1);

/// Backoff ceiling.
const MAX_BACKOFF: Duration = Duration::from_secs(5);

/// Per-request timeout for the upstream API.
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Minimal blocking HTTP transport used by [`AudioDbClient`].
///
/// Implementations return the response body on a 2xx status and an
/// [`AudioDbError`] otherwise.
pub trait HttpBackend: Send + Sync {
    /// Issue a GET request and return the response body.
    fn get(&self, url: &str) -> Result<String, AudioDbError>;
}

/// Production backend over `reqwest::blocking`.
///
/// The blocking client is built per request; the server is stateless and
/// each tool invocation already runs on its own thread.
#[derive(Debug, Clone, Default)]
pub struct ReqwestBackend;

impl HttpBackend for ReqwestBackend {
    fn get(&self, url: &str) -> Result<String, AudioDbError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| AudioDbError::request(format!("failed to create HTTP client: {e}")))?;

        let response = client.get(url).send().map_err(|e| {
            if e.is_timeout() {
                AudioDbError::request("request timed out")
            } else if e.is_connect() {
                AudioDbError::request("connection failed")
            } else {
                AudioDbError::request(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AudioDbError::Status(status.as_u16()));
        }

        response
            .text()
            .map_err(|e| AudioDbError::decode(e.to_string()))
    }
}

/// Client for TheAudioDB's artist search and discography endpoints.
#[derive(Clone)]
pub struct AudioDbClient {
    backend: Arc<dyn HttpBackend>,
    base_url: String,
    api_key: String,
    backoff_base: Duration,
    backoff_cap: Duration,
}

impl AudioDbClient {
    /// Create a client from configuration, using the reqwest backend.
    pub fn new(config: &AudioDbConfig) -> Self {
        Self::with_backend(Arc::new(ReqwestBackend), &config.base_url, &config.api_key)
    }

    /// Create a client with a custom HTTP backend.
    pub fn with_backend(
        backend: Arc<dyn HttpBackend>,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            backend,
            base_url: base_url.into(),
            api_key: api_key.into(),
            backoff_base: BASE_BACKOFF,
            backoff_cap: MAX_BACKOFF,
        }
    }

    /// Override the backoff schedule. Retry count and the
    /// empty-on-exhaustion contract are fixed.
    pub fn with_backoff(mut self, base: Duration, cap: Duration) -> Self {
        self.backoff_base = base;
        self.backoff_cap = cap;
        self
    }

    /// Search for artists by name.
    ///
    /// A blank or whitespace-only name short-circuits to an empty result
    /// without a network call. Upstream or parse failures also yield an
    /// empty result after retries are exhausted.
    pub fn search_artists(&self, artist_name: &str) -> Vec<Artist> {
        debug!("Searching for artist: {}", artist_name);

        let Some(name) = non_blank(artist_name) else {
            warn!("Artist name is null or empty");
            return Vec::new();
        };

        match self.fetch_json::<ArtistSearchResponse>("search.php", name) {
            Ok(response) => {
                let artists = response.into_artists();
                debug!("Received response with {} artists", artists.len());
                artists
            }
            Err(e) => {
                error!("Error in artist search, returning empty result: {}", e);
                Vec::new()
            }
        }
    }

    /// Get an artist's discography (albums) by artist name.
    ///
    /// Same blank-name guard and empty-on-failure policy as
    /// [`search_artists`](Self::search_artists).
    pub fn get_discography(&self, artist_name: &str) -> Vec<Album> {
        debug!("Getting discography for artist: {}", artist_name);

        let Some(name) = non_blank(artist_name) else {
            warn!("Artist name is null or empty");
            return Vec::new();
        };

        match self.fetch_json::<DiscographyResponse>("discography.php", name) {
            Ok(response) => {
                let albums = response.into_albums();
                debug!("Received discography with {} albums", albums.len());
                albums
            }
            Err(e) => {
                error!("Error in discography search, returning empty result: {}", e);
                Vec::new()
            }
        }
    }

    /// Find the first artist matching the name, if any.
    pub fn find_artist(&self, artist_name: &str) -> Option<Artist> {
        let artist = self.search_artists(artist_name).into_iter().next();
        if let Some(ref a) = artist {
            debug!("Found artist: {:?}", a.name);
        }
        artist
    }

    /// Get all albums for an artist as a fully materialized list.
    pub fn get_artist_albums(&self, artist_name: &str) -> Vec<Album> {
        let albums = self.get_discography(artist_name);
        debug!("Collected {} albums for artist: {}", albums.len(), artist_name);
        albums
    }

    /// Fetch an endpoint with retry and parse the JSON envelope.
    fn fetch_json<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        name: &str,
    ) -> Result<T, AudioDbError> {
        let url = self.request_url(endpoint, name)?;
        let body = self.fetch_with_retry(&url)?;
        serde_json::from_str(&body).map_err(|e| AudioDbError::decode(e.to_string()))
    }

    /// Build the request URL with the name URL-encoded as the `s` query value.
    fn request_url(&self, endpoint: &str, name: &str) -> Result<String, AudioDbError> {
        let query = serde_urlencoded::to_string([("s", name)])
            .map_err(|e| AudioDbError::request(format!("query encoding failed: {e}")))?;
        Ok(format!(
            "{}/{}/{}?{}",
            self.base_url.trim_end_matches('/'),
            self.api_key,
            endpoint,
            query
        ))
    }

    /// GET the URL, retrying transient failures with exponential backoff.
    fn fetch_with_retry(&self, url: &str) -> Result<String, AudioDbError> {
        let mut last_error = AudioDbError::request("no attempt made");

        for attempt in 0..=MAX_RETRIES {
            if attempt > 0 {
                let delay = self
                    .backoff_base
                    .saturating_mul(1 << (attempt - 1))
                    .min(self.backoff_cap);
                debug!(
                    "Retrying (attempt {}/{}) after {:?}",
                    attempt + 1,
                    MAX_RETRIES + 1,
                    delay
                );
                std::thread::sleep(delay);
            }

            match self.backend.get(url) {
                Ok(body) => return Ok(body),
                Err(e) => {
                    warn!("Request attempt {} failed: {}", attempt + 1, e);
                    last_error = e;
                }
            }
        }

        Err(last_error)
    }
}

/// Trim the input, returning `None` when nothing remains.
fn non_blank(input: &str) -> Option<&str> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const ARTIST_JSON: &str = r#"{
        "artists": [{
            "idArtist": "111239",
            "strArtist": "Coldplay",
            "strGenre": "Alternative Rock",
            "intFormedYear": "1996"
        }]
    }"#;

    const DISCOGRAPHY_JSON: &str = r#"{
        "album": [
            {"idAlbum": "1", "strAlbum": "Parachutes", "intYearReleased": "2000"},
            {"idAlbum": "2", "strAlbum": "A Rush of Blood to the Head", "intYearReleased": "2002"}
        ]
    }"#;

    /// Backend double returning a scripted sequence of responses and
    /// counting how often it was hit.
    struct ScriptedBackend {
        responses: Mutex<Vec<Result<String, AudioDbError>>>,
        calls: AtomicUsize,
    }

    impl ScriptedBackend {
        fn new(responses: Vec<Result<String, AudioDbError>>) -> Self {
            Self {
                responses: Mutex::new(responses),
                calls: AtomicUsize::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl HttpBackend for ScriptedBackend {
        fn get(&self, _url: &str) -> Result<String, AudioDbError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let mut responses = self.responses.lock().unwrap();
            if responses.is_empty() {
                Err(AudioDbError::request("script exhausted"))
            } else {
                responses.remove(0)
            }
        }
    }

    fn fast_client(backend: Arc<ScriptedBackend>) -> AudioDbClient {
        AudioDbClient::with_backend(backend, "https://www.theaudiodb.com/api/v1/json", "2")
            .with_backoff(Duration::from_millis(1), Duration::from_millis(5))
    }

    #[test]
    fn test_blank_name_makes_no_network_call() {
        let backend = Arc::new(ScriptedBackend::new(vec![]));
        let client = fast_client(backend.clone());

        assert!(client.search_artists("").is_empty());
        assert!(client.search_artists("   ").is_empty());
        assert!(client.get_discography("\t\n").is_empty());
        assert_eq!(backend.call_count(), 0);
    }

    #[test]
    fn test_search_artists_parses_response() {
        let backend = Arc::new(ScriptedBackend::new(vec![Ok(ARTIST_JSON.to_string())]));
        let client = fast_client(backend.clone());

        let artists = client.search_artists("Coldplay");
        assert_eq!(artists.len(), 1);
        assert_eq!(artists[0].name.as_deref(), Some("Coldplay"));
        assert_eq!(backend.call_count(), 1);
    }

    #[test]
    fn test_name_is_trimmed_before_request() {
        let backend = Arc::new(ScriptedBackend::new(vec![Ok(ARTIST_JSON.to_string())]));
        let client = fast_client(backend.clone());

        let artists = client.search_artists("  Coldplay  ");
        assert_eq!(artists.len(), 1);
        assert_eq!(backend.call_count(), 1);
    }

    #[test]
    fn test_missing_artists_field_is_empty() {
        let backend = Arc::new(ScriptedBackend::new(vec![Ok("{}".to_string())]));
        let client = fast_client(backend);

        assert!(client.search_artists("Unknown Band XYZ").is_empty());
    }

    #[test]
    fn test_retry_succeeds_on_third_attempt() {
        let backend = Arc::new(ScriptedBackend::new(vec![
            Err(AudioDbError::Status(503)),
            Err(AudioDbError::request("connection failed")),
            Ok(ARTIST_JSON.to_string()),
        ]));
        let client = fast_client(backend.clone());

        let artists = client.search_artists("Coldplay");
        assert_eq!(artists.len(), 1);
        assert_eq!(backend.call_count(), 3);
    }

    #[test]
    fn test_exhausted_retries_yield_empty_not_error() {
        // "Upstream down" and "no data" are deliberately observably
        // identical to the caller.
        let backend = Arc::new(ScriptedBackend::new(vec![
            Err(AudioDbError::Status(500)),
            Err(AudioDbError::Status(500)),
            Err(AudioDbError::Status(500)),
            Err(AudioDbError::Status(500)),
        ]));
        let client = fast_client(backend.clone());

        assert!(client.search_artists("Coldplay").is_empty());
        // Initial attempt plus three retries.
        assert_eq!(backend.call_count(), 4);
    }

    #[test]
    fn test_discography_retry_policy_matches_search() {
        let backend = Arc::new(ScriptedBackend::new(vec![
            Err(AudioDbError::Status(502)),
            Ok(DISCOGRAPHY_JSON.to_string()),
        ]));
        let client = fast_client(backend.clone());

        let albums = client.get_discography("Coldplay");
        assert_eq!(albums.len(), 2);
        assert_eq!(backend.call_count(), 2);
    }

    #[test]
    fn test_find_artist_returns_first_match() {
        let json = r#"{"artists": [
            {"strArtist": "Coldplay"},
            {"strArtist": "Coldplay Tribute"}
        ]}"#;
        let backend = Arc::new(ScriptedBackend::new(vec![Ok(json.to_string())]));
        let client = fast_client(backend);

        let artist = client.find_artist("Coldplay").unwrap();
        assert_eq!(artist.name.as_deref(), Some("Coldplay"));
    }

    #[test]
    fn test_find_artist_none_on_empty() {
        let backend = Arc::new(ScriptedBackend::new(vec![Ok("{}".to_string())]));
        let client = fast_client(backend);
        assert!(client.find_artist("Unknown Band XYZ").is_none());
    }

    #[test]
    fn test_malformed_body_degrades_to_empty() {
        let backend = Arc::new(ScriptedBackend::new(vec![Ok("not json".to_string())]));
        let client = fast_client(backend.clone());

        assert!(client.search_artists("Coldplay").is_empty());
        // Parse failures are not retried; the body was already received.
        assert_eq!(backend.call_count(), 1);
    }

    #[test]
    fn test_concurrent_searches_are_independent() {
        // The server is stateless: a client shared across threads must
        // give each caller its own correct result.
        const THREADS: usize = 8;
        let responses = (0..THREADS).map(|_| Ok(ARTIST_JSON.to_string())).collect();
        let backend = Arc::new(ScriptedBackend::new(responses));
        let client = fast_client(backend.clone());

        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let client = client.clone();
                std::thread::spawn(move || client.search_artists("Coldplay"))
            })
            .collect();

        for handle in handles {
            let artists = handle.join().unwrap();
            assert_eq!(artists.len(), 1);
            assert_eq!(artists[0].name.as_deref(), Some("Coldplay"));
        }
        assert_eq!(backend.call_count(), THREADS);
    }

    #[test]
    fn test_request_url_encodes_query() {
        let backend = Arc::new(ScriptedBackend::new(vec![]));
        let client = fast_client(backend);

        let url = client.request_url("search.php", "AC/DC & friends").unwrap();
        assert_eq!(
            url,
            "https://www.theaudiodb.com/api/v1/json/2/search.php?s=AC%2FDC+%26+friends"
        );
    }
}
