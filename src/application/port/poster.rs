// SPDX-License-Identifier: MPL-2.0
//! Poster download port definition.

use futures_util::future::BoxFuture;
use std::fmt;

/// Errors that can occur while downloading a poster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PosterError {
    /// The request could not be sent or the body could not be read.
    Http(String),

    /// The server answered with a non-success HTTP status.
    Status(u16),

    /// The server answered with an empty body.
    Empty,
}

impl fmt::Display for PosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PosterError::Http(msg) => write!(f, "poster download failed: {msg}"),
            PosterError::Status(code) => write!(f, "poster HTTP status: {code}"),
            PosterError::Empty => write!(f, "poster response was empty"),
        }
    }
}

impl std::error::Error for PosterError {}

/// Downloads encoded poster images (JPEG/PNG bytes) by URL.
///
/// Decoding is left to the presentation layer, which wraps the bytes in an
/// image handle.
pub trait PosterFetcher: Send + Sync {
    fn fetch(&self, url: String) -> BoxFuture<'static, Result<Vec<u8>, PosterError>>;
}
