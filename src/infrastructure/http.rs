// SPDX-License-Identifier: MPL-2.0
//! Shared HTTP client construction for the lookup and poster adapters.

use crate::domain::LookupTimeout;

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("MovieFinder/", env!("CARGO_PKG_VERSION"));

/// Builds a [`reqwest::Client`] with the application user agent, a bounded
/// redirect policy and the given request timeout.
///
/// # Errors
///
/// Returns the builder error message if the TLS backend cannot be initialized.
pub fn build_client(timeout: LookupTimeout) -> Result<reqwest::Client, String> {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(USER_AGENT)
        .timeout(timeout.as_duration())
        .build()
        .map_err(|e| format!("failed to build HTTP client: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_agent_carries_version() {
        assert!(USER_AGENT.starts_with("MovieFinder/"));
        assert!(USER_AGENT.len() > "MovieFinder/".len());
    }

    #[test]
    fn build_client_with_default_timeout() {
        assert!(build_client(LookupTimeout::default()).is_ok());
    }
}
