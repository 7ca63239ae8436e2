// SPDX-License-Identifier: MPL-2.0
//! Message sanitization for diagnostic events.

use std::sync::LazyLock;

use regex::Regex;

/// Matches `apikey=` / `api_key=` query parameters, capturing the name.
///
/// The value runs until `&`, whitespace or a quote.
static SECRET_PARAM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\b(api_?key=)[^&\s"']+"#).expect("secret regex should compile")
});

/// Redacts API keys that appear as URL query parameters.
///
/// Values are replaced with `<redacted>`; empty values are left as they are.
///
/// # Examples
///
/// ```
/// use movie_finder::diagnostics::sanitize_message;
///
/// let msg = "GET https://www.omdbapi.com/?apikey=abc123&t=Alien failed";
/// assert_eq!(
///     sanitize_message(msg),
///     "GET https://www.omdbapi.com/?apikey=<redacted>&t=Alien failed"
/// );
/// assert_eq!(sanitize_message("timeout"), "timeout");
/// ```
#[must_use]
pub fn sanitize_message(message: &str) -> String {
    SECRET_PARAM
        .replace_all(message, "${1}<redacted>")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaves_plain_messages_untouched() {
        assert_eq!(sanitize_message("Movie not found!"), "Movie not found!");
    }

    #[test]
    fn redacts_key_at_end_of_message() {
        assert_eq!(
            sanitize_message("url: /?t=Alien&apikey=secret"),
            "url: /?t=Alien&apikey=<redacted>"
        );
    }

    #[test]
    fn redacts_every_occurrence_case_insensitively() {
        assert_eq!(
            sanitize_message("ApiKey=one then api_key=two"),
            "ApiKey=<redacted> then api_key=<redacted>"
        );
    }

    #[test]
    fn empty_value_is_left_alone() {
        assert_eq!(sanitize_message("apikey=&t=x"), "apikey=&t=x");
    }

    #[test]
    fn value_stops_at_quote() {
        assert_eq!(
            sanitize_message(r#"url="/?apikey=k3y" status=401"#),
            r#"url="/?apikey=<redacted>" status=401"#
        );
    }

    #[test]
    fn parameter_must_start_a_word() {
        assert_eq!(sanitize_message("myapikey=abc"), "myapikey=abc");
    }
}
