// SPDX-License-Identifier: MPL-2.0
//! OMDb lookup adapter.
//!
//! Resolves titles with a single `GET {endpoint}?apikey={key}&t={title}`.
//! OMDb always answers `200 OK` and reports the outcome in the body:
//!
//! - `"Response": "True"` with the movie fields → [`LookupOutcome::Found`]
//! - `"Response": "False"` with `"Error": "Movie not found!"` → [`LookupOutcome::NotFound`]
//! - `"Response": "False"` with any other error → [`LookupError::Api`]

use super::http;
use crate::application::port::{LookupError, LookupOutcome, MovieLookup, RawMovie};
use crate::domain::LookupTimeout;
use futures_util::future::{self, BoxFuture};
use futures_util::FutureExt;
use serde::Deserialize;

/// Default OMDb endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://www.omdbapi.com/";

/// Error text OMDb uses for an unknown title.
const NOT_FOUND_ERROR: &str = "Movie not found!";

/// Envelope fields shared by every OMDb answer.
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Error", default)]
    error: Option<String>,
}

/// [`MovieLookup`] implementation backed by the OMDb HTTP API.
pub struct OmdbClient {
    client: Result<reqwest::Client, LookupError>,
    api_key: Option<String>,
    endpoint: String,
}

impl std::fmt::Debug for OmdbClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The API key is a secret and stays out of debug output.
        f.debug_struct("OmdbClient")
            .field("endpoint", &self.endpoint)
            .field("has_api_key", &self.api_key.is_some())
            .finish()
    }
}

impl OmdbClient {
    /// Creates a client. A blank `api_key` counts as missing.
    #[must_use]
    pub fn new(api_key: Option<String>, endpoint: impl Into<String>, timeout: LookupTimeout) -> Self {
        let api_key = api_key
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        Self {
            client: http::build_client(timeout).map_err(LookupError::Http),
            api_key,
            endpoint: endpoint.into(),
        }
    }

    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl MovieLookup for OmdbClient {
    fn lookup(&self, title: String) -> BoxFuture<'static, LookupOutcome> {
        let Some(api_key) = self.api_key.clone() else {
            return future::ready(LookupOutcome::Failed(LookupError::MissingApiKey)).boxed();
        };
        let client = match &self.client {
            Ok(client) => client.clone(),
            Err(error) => return future::ready(LookupOutcome::Failed(error.clone())).boxed(),
        };
        let endpoint = self.endpoint.clone();

        async move {
            let response = match client
                .get(&endpoint)
                .query(&[("apikey", api_key.as_str()), ("t", title.as_str())])
                .send()
                .await
            {
                Ok(response) => response,
                Err(e) => return LookupOutcome::Failed(LookupError::Http(e.without_url().to_string())),
            };

            if !response.status().is_success() {
                return LookupOutcome::Failed(LookupError::Status(response.status().as_u16()));
            }

            match response.text().await {
                Ok(body) => parse_response(&body),
                Err(e) => LookupOutcome::Failed(LookupError::Http(e.without_url().to_string())),
            }
        }
        .boxed()
    }
}

/// Interprets an OMDb response body.
///
/// A found movie without an `imdbID` is a parse failure: the list is keyed
/// by that id.
#[must_use]
pub fn parse_response(body: &str) -> LookupOutcome {
    let envelope: Envelope = match serde_json::from_str(body) {
        Ok(envelope) => envelope,
        Err(e) => return LookupOutcome::Failed(LookupError::Parse(e.to_string())),
    };

    if envelope.response.eq_ignore_ascii_case("false") {
        return match envelope.error {
            Some(error) if error == NOT_FOUND_ERROR => LookupOutcome::NotFound,
            Some(error) => LookupOutcome::Failed(LookupError::Api(error)),
            None => LookupOutcome::NotFound,
        };
    }

    match serde_json::from_str::<RawMovie>(body) {
        Ok(raw) if raw.imdb_id.trim().is_empty() => {
            LookupOutcome::Failed(LookupError::Parse("response has no imdbID".to_string()))
        }
        Ok(raw) => LookupOutcome::Found(raw),
        Err(e) => LookupOutcome::Failed(LookupError::Parse(e.to_string())),
    }
}
