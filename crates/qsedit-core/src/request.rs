//! Splitting a request URL into its action URL and raw query.

use crate::error::QsError;

/// A request URL taken apart: everything before `?`, and the raw query after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestUrl {
    /// Action URL: scheme, authority and path, no query or fragment.
    pub base_url: String,
    /// Raw query without the leading `?` (may be empty).
    pub query: String,
}

/// Splits `url` into base URL and raw query. The fragment is dropped.
///
/// Absolute URLs (anything with a scheme) are parsed with [`url::Url`] and
/// come back normalized and percent-encoded; relative references such as
/// `/items?page=2` are split as-is.
pub fn split_request_url(url: &str) -> Result<RequestUrl, QsError> {
    let url = url.trim();
    if has_scheme(url) {
        let parsed = url::Url::parse(url).map_err(|source| QsError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;
        return Ok(RequestUrl {
            base_url: parsed[..url::Position::AfterPath].to_string(),
            query: parsed.query().unwrap_or("").to_string(),
        });
    }

    let without_fragment = url.split_once('#').map(|(head, _)| head).unwrap_or(url);
    let (base, query) = without_fragment
        .split_once('?')
        .unwrap_or((without_fragment, ""));

    Ok(RequestUrl {
        base_url: base.to_string(),
        query: query.to_string(),
    })
}

fn has_scheme(url: &str) -> bool {
    match url.split_once(':') {
        Some((scheme, _)) => {
            let mut chars = scheme.chars();
            matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
                && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        None => false,
    }
}
