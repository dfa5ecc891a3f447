//! Serialization back to `key=value&key=value`.

use url::form_urlencoded;

use super::QueryEntry;

pub(super) fn serialize(entries: &[QueryEntry]) -> String {
    let mut out = form_urlencoded::Serializer::new(String::new());
    for entry in entries {
        for value in &entry.values {
            out.append_pair(&entry.key, value);
        }
    }
    out.finish()
}
