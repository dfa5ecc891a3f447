//! `qsedit set` – add, overwrite or (with `KEY=`) remove parameters.

use anyhow::Result;
use qsedit_core::config::EditorConfig;
use qsedit_core::{QsError, QueryStringEditor, QueryValue};

/// Splits `KEY=VALUE` at the first `=`. The value may be empty.
pub fn parse_assignment(arg: &str) -> Result<(String, QueryValue), QsError> {
    match arg.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.to_string(), QueryValue::from(value)))
        }
        _ => Err(QsError::InvalidAssignment(arg.to_string())),
    }
}

pub fn run_set(editor_cfg: EditorConfig, url: &str, assignments: &[String]) -> Result<String> {
    let params = assignments
        .iter()
        .map(|a| parse_assignment(a))
        .collect::<Result<Vec<_>, _>>()?;
    tracing::info!("set {} parameter(s) on url={}", params.len(), url);
    let editor = QueryStringEditor::with_config(editor_cfg);
    Ok(editor.set_on_url(url, Some(params))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_assignment_forms() {
        let (k, v) = parse_assignment("page=3").unwrap();
        assert_eq!(k, "page");
        assert_eq!(v, QueryValue::from("3"));

        let (k, v) = parse_assignment("expr=a=b").unwrap();
        assert_eq!(k, "expr");
        assert_eq!(v, QueryValue::from("a=b"));

        let (_, v) = parse_assignment("page=").unwrap();
        assert!(v.is_blank());
    }

    #[test]
    fn parse_assignment_rejects_missing_equals_or_key() {
        assert!(matches!(
            parse_assignment("page"),
            Err(QsError::InvalidAssignment(_))
        ));
        assert!(matches!(
            parse_assignment("=3"),
            Err(QsError::InvalidAssignment(_))
        ));
    }

    #[test]
    fn sets_and_removes() {
        let out = run_set(
            EditorConfig::default(),
            "https://shop.example/items?Page=2&sort=name",
            &["Page=3".to_string(), "sort=".to_string()],
        )
        .unwrap();
        assert_eq!(out, "https://shop.example/items?page=3");
    }

    #[test]
    fn bad_assignment_fails_before_editing() {
        assert!(run_set(EditorConfig::default(), "/items", &["oops".to_string()]).is_err());
    }
}
