//! Remove or merge parameters in the current request's query string.
//!
//! Every call parses the raw query afresh, edits the parsed copy and
//! returns `base_url` with the edited query appended. The caller's input is
//! never mutated and no state survives between calls.

mod assemble;

pub use assemble::assemble_url;

use crate::config::EditorConfig;
use crate::error::QsError;
use crate::query_string::QueryString;
use crate::request::split_request_url;
use crate::value::QueryValue;

/// Query-string editor with a fixed [`EditorConfig`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryStringEditor {
    config: EditorConfig,
}

impl QueryStringEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EditorConfig) -> Self {
        Self { config }
    }

    /// Removes each of `keys` (case-insensitively) from `current_query` and
    /// appends what is left to `base_url`. Absent keys are ignored.
    pub fn remove_parameters<I, K>(&self, current_query: &str, base_url: &str, keys: I) -> String
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let mut query = QueryString::parse(current_query);
        let mut removed = 0usize;
        for key in keys {
            if query.remove(key.as_ref()) {
                removed += 1;
            }
        }
        tracing::debug!(removed, remaining = query.len(), "removed query parameters");
        assemble_url(base_url, &query)
    }

    /// Merges `parameters` into `current_query`, in iteration order.
    ///
    /// A blank value removes its key. Any other value overwrites the key,
    /// lower-cased unless `lowercase_set_keys` is off. `None` sets nothing.
    pub fn set_parameters<P, K, V>(
        &self,
        current_query: &str,
        base_url: &str,
        parameters: Option<P>,
    ) -> String
    where
        P: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<QueryValue>,
    {
        let mut query = QueryString::parse(current_query);
        let (mut set, mut removed) = (0usize, 0usize);
        for (key, value) in parameters.into_iter().flatten() {
            let key = key.as_ref();
            match self.stored_value(value.into()) {
                None => {
                    if query.remove(key) {
                        removed += 1;
                    }
                }
                Some(value) => {
                    query.set(self.stored_key(key), value);
                    set += 1;
                }
            }
        }
        tracing::debug!(set, removed, total = query.len(), "set query parameters");
        assemble_url(base_url, &query)
    }

    /// [`remove_parameters`](Self::remove_parameters) on a complete request URL.
    pub fn remove_from_url<I, K>(&self, url: &str, keys: I) -> Result<String, QsError>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let request = split_request_url(url)?;
        Ok(self.remove_parameters(&request.query, &request.base_url, keys))
    }

    /// [`set_parameters`](Self::set_parameters) on a complete request URL.
    pub fn set_on_url<P, K, V>(&self, url: &str, parameters: Option<P>) -> Result<String, QsError>
    where
        P: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<QueryValue>,
    {
        let request = split_request_url(url)?;
        Ok(self.set_parameters(&request.query, &request.base_url, parameters))
    }

    fn stored_key(&self, key: &str) -> String {
        if self.config.lowercase_set_keys {
            key.to_lowercase()
        } else {
            key.to_string()
        }
    }

    /// `None` when the value is blank and the key must be removed.
    fn stored_value(&self, value: QueryValue) -> Option<String> {
        if value.is_blank() {
            return None;
        }
        let s = value.as_query_string()?;
        if self.config.trim_values {
            Some(s.trim().to_string())
        } else {
            Some(s)
        }
    }
}

/// [`QueryStringEditor::remove_parameters`] with the default configuration.
pub fn remove_parameters<I, K>(current_query: &str, base_url: &str, keys: I) -> String
where
    I: IntoIterator<Item = K>,
    K: AsRef<str>,
{
    QueryStringEditor::new().remove_parameters(current_query, base_url, keys)
}

/// [`QueryStringEditor::set_parameters`] with the default configuration.
pub fn set_parameters<P, K, V>(current_query: &str, base_url: &str, parameters: Option<P>) -> String
where
    P: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<QueryValue>,
{
    QueryStringEditor::new().set_parameters(current_query, base_url, parameters)
}
