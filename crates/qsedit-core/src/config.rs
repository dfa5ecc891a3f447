use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// How `set_parameters` treats keys and values (`[editor]` section in config.toml).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Lower-case keys being set. Keys already in the query and not touched keep their casing.
    pub lowercase_set_keys: bool,
    /// Trim surrounding whitespace from non-blank values before storing them.
    pub trim_values: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            lowercase_set_keys: true,
            trim_values: false,
        }
    }
}

/// Global configuration loaded from `~/.config/qsedit/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QseditConfig {
    #[serde(default)]
    pub editor: EditorConfig,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("qsedit")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<QseditConfig> {
    load_or_init_at(&config_path()?)
}

pub fn load_or_init_at(path: &Path) -> Result<QseditConfig> {
    if !path.exists() {
        let default_cfg = QseditConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)?;
    let cfg: QseditConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = QseditConfig::default();
        assert!(cfg.editor.lowercase_set_keys);
        assert!(!cfg.editor.trim_values);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = QseditConfig {
            editor: EditorConfig {
                lowercase_set_keys: false,
                trim_values: true,
            },
        };
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: QseditConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_missing_section_uses_defaults() {
        let cfg: QseditConfig = toml::from_str("").unwrap();
        assert_eq!(cfg, QseditConfig::default());

        let cfg: QseditConfig = toml::from_str("[editor]\ntrim_values = true\n").unwrap();
        assert!(cfg.editor.lowercase_set_keys);
        assert!(cfg.editor.trim_values);
    }

    #[test]
    fn load_or_init_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let cfg = load_or_init_at(&path).unwrap();
        assert_eq!(cfg, QseditConfig::default());
        assert!(path.exists());

        fs::write(&path, "[editor]\nlowercase_set_keys = false\n").unwrap();
        let cfg = load_or_init_at(&path).unwrap();
        assert!(!cfg.editor.lowercase_set_keys);
    }

    #[test]
    fn load_or_init_rejects_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[editor\n").unwrap();
        assert!(load_or_init_at(&path).is_err());
    }
}
