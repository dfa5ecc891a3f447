//! Tests for `set` flags layered over the config file.

use crate::cli::editor_config;
use qsedit_core::config::EditorConfig;

fn file_cfg(lowercase_set_keys: bool, trim_values: bool) -> EditorConfig {
    EditorConfig {
        lowercase_set_keys,
        trim_values,
    }
}

#[test]
fn flags_override_config() {
    let cfg = editor_config(file_cfg(true, false), true, true);
    assert!(!cfg.lowercase_set_keys);
    assert!(cfg.trim_values);
}

#[test]
fn unset_flags_keep_config_values() {
    assert_eq!(editor_config(file_cfg(true, false), false, false), file_cfg(true, false));
    assert_eq!(editor_config(file_cfg(false, true), false, false), file_cfg(false, true));
}

#[test]
fn flags_agreeing_with_config_change_nothing() {
    assert_eq!(editor_config(file_cfg(false, true), true, true), file_cfg(false, true));
}
