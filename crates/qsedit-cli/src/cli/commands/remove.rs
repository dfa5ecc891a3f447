//! `qsedit remove` – drop parameters from a URL.

use anyhow::Result;
use qsedit_core::config::QseditConfig;
use qsedit_core::QueryStringEditor;

pub fn run_remove(cfg: &QseditConfig, url: &str, keys: &[String]) -> Result<String> {
    tracing::info!("remove {} key(s) from url={}", keys.len(), url);
    let editor = QueryStringEditor::with_config(cfg.editor);
    Ok(editor.remove_from_url(url, keys)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_keys() {
        let out = run_remove(
            &QseditConfig::default(),
            "/items?page=2&sort=name",
            &["PAGE".to_string()],
        )
        .unwrap();
        assert_eq!(out, "/items?sort=name");
    }

    #[test]
    fn invalid_url_is_an_error() {
        assert!(run_remove(&QseditConfig::default(), "http://[::1", &[]).is_err());
    }
}
