//! Final URL assembly.

use crate::query_string::QueryString;

/// `base_url?query`, or `base_url` alone when the query is empty.
pub fn assemble_url(base_url: &str, query: &QueryString) -> String {
    if query.is_empty() {
        return base_url.to_string();
    }
    let serialized = query.to_string();
    let mut out = String::with_capacity(base_url.len() + 1 + serialized.len());
    out.push_str(base_url);
    out.push('?');
    out.push_str(&serialized);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_has_no_question_mark() {
        assert_eq!(assemble_url("/items", &QueryString::new()), "/items");
    }

    #[test]
    fn non_empty_query() {
        let qs = QueryString::parse("a=1&b=2");
        assert_eq!(assemble_url("/items", &qs), "/items?a=1&b=2");
    }
}
