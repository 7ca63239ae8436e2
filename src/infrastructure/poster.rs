// SPDX-License-Identifier: MPL-2.0
//! HTTP poster download adapter.

use super::http;
use crate::application::port::{PosterError, PosterFetcher};
use crate::domain::LookupTimeout;
use futures_util::future::{self, BoxFuture};
use futures_util::FutureExt;

/// [`PosterFetcher`] that downloads posters with `reqwest`.
#[derive(Debug)]
pub struct HttpPosterFetcher {
    client: Result<reqwest::Client, PosterError>,
}

impl HttpPosterFetcher {
    #[must_use]
    pub fn new(timeout: LookupTimeout) -> Self {
        Self {
            client: http::build_client(timeout).map_err(PosterError::Http),
        }
    }
}

impl PosterFetcher for HttpPosterFetcher {
    fn fetch(&self, url: String) -> BoxFuture<'static, Result<Vec<u8>, PosterError>> {
        let client = match &self.client {
            Ok(client) => client.clone(),
            Err(error) => return future::ready(Err(error.clone())).boxed(),
        };

        async move {
            let response = client
                .get(&url)
                .send()
                .await
                .map_err(|e| PosterError::Http(e.to_string()))?;

            if !response.status().is_success() {
                return Err(PosterError::Status(response.status().as_u16()));
            }

            let bytes = response
                .bytes()
                .await
                .map_err(|e| PosterError::Http(e.to_string()))?;

            if bytes.is_empty() {
                return Err(PosterError::Empty);
            }

            Ok(bytes.to_vec())
        }
        .boxed()
    }
}
