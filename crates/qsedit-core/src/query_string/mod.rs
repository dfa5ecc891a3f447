//! Ordered, case-insensitive query-string model.
//!
//! A [`QueryString`] is parsed from the raw `application/x-www-form-urlencoded`
//! query of a request, edited in memory, and serialized back with [`Display`].
//! Keys match case-insensitively; the first spelling seen is the one kept.
//! Repeated keys collapse into one entry holding every value in order.

mod encode;
mod parse;

use std::fmt;

pub use parse::strip_query_prefix;

/// One key with all of its values, in the order they appeared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryEntry {
    pub key: String,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryString {
    entries: Vec<QueryEntry>,
}

impl QueryString {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a raw query (with or without a leading `?`). Never fails; junk
    /// input yields whatever pairs can be recovered, possibly none.
    pub fn parse(raw: &str) -> Self {
        let mut qs = Self::new();
        for (key, value) in parse::pairs(raw) {
            qs.append(key, value);
        }
        qs
    }

    /// Adds a value, keeping any values the key already has.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.position(&key) {
            Some(i) => self.entries[i].values.push(value),
            None => self.entries.push(QueryEntry {
                key,
                values: vec![value],
            }),
        }
    }

    /// Replaces every value of `key` with `value`.
    ///
    /// An existing entry keeps its position but takes the spelling of `key`.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.position(&key) {
            Some(i) => {
                let entry = &mut self.entries[i];
                entry.key = key;
                entry.values = vec![value];
            }
            None => self.entries.push(QueryEntry {
                key,
                values: vec![value],
            }),
        }
    }

    /// Removes `key` and all its values. Returns whether anything was removed.
    pub fn remove(&mut self, key: &str) -> bool {
        match self.position(key) {
            Some(i) => {
                self.entries.remove(i);
                true
            }
            None => false,
        }
    }

    /// First value of `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entry(key)
            .and_then(|e| e.values.first())
            .map(String::as_str)
    }

    pub fn get_all(&self, key: &str) -> &[String] {
        self.entry(key).map(|e| e.values.as_slice()).unwrap_or(&[])
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &QueryEntry> {
        self.entries.iter()
    }

    fn entry(&self, key: &str) -> Option<&QueryEntry> {
        self.position(key).map(|i| &self.entries[i])
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|e| keys_match(&e.key, key))
    }
}

impl fmt::Display for QueryString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode::serialize(&self.entries))
    }
}

fn keys_match(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b) || a.to_lowercase() == b.to_lowercase()
}
