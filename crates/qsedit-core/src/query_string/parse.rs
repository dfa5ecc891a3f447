//! Raw query parsing (`application/x-www-form-urlencoded`).

use url::form_urlencoded;

/// Drops a single leading `?`, if any.
pub fn strip_query_prefix(raw: &str) -> &str {
    raw.strip_prefix('?').unwrap_or(raw)
}

/// Decoded `(key, value)` pairs in input order.
///
/// `+` decodes to space, percent escapes are decoded (invalid UTF-8 lossily),
/// empty segments are skipped and a segment without `=` has an empty value.
pub(super) fn pairs(raw: &str) -> impl Iterator<Item = (String, String)> + '_ {
    form_urlencoded::parse(strip_query_prefix(raw).as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(raw: &str) -> Vec<(String, String)> {
        pairs(raw).collect()
    }

    #[test]
    fn leading_question_mark() {
        assert_eq!(strip_query_prefix("?a=1"), "a=1");
        assert_eq!(strip_query_prefix("a=1"), "a=1");
        assert_eq!(collect("?a=1"), vec![("a".into(), "1".into())]);
    }

    #[test]
    fn empty_and_junk() {
        assert!(collect("").is_empty());
        assert!(collect("?").is_empty());
        assert!(collect("&&&").is_empty());
    }

    #[test]
    fn bare_key_has_empty_value() {
        assert_eq!(collect("flag"), vec![("flag".into(), String::new())]);
    }

    #[test]
    fn decodes_plus_and_percent() {
        assert_eq!(
            collect("q=hello+world&x=%26%3D"),
            vec![
                ("q".into(), "hello world".into()),
                ("x".into(), "&=".into())
            ]
        );
    }
}
