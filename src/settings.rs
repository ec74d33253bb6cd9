//! Settings infrastructure for open-props-lsp.
//!
//! This module provides support for loading and parsing `open-props.toml` files
//! to add, override, or hide variables offered by the server.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::Deserialize;

/// File name searched for when discovering workspace settings.
pub const SETTINGS_FILE: &str = "open-props.toml";

/// Root settings structure loaded from `open-props.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Built-in variable names to hide from completion and hover.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Extra or overriding variables: name -> CSS value.
    /// Names without a leading `--` get one.
    #[serde(default)]
    pub variables: BTreeMap<String, String>,
}

/// Errors raised while reading a settings file.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Read and parse a settings file.
pub fn read_settings(path: &Path) -> Result<Settings, SettingsError> {
    let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load settings from a settings file.
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(path: &Path) -> Settings {
    match read_settings(path) {
        Ok(settings) => settings,
        Err(SettingsError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
            Settings::default()
        }
        Err(e) => {
            warn!("{}", e);
            Settings::default()
        }
    }
}

/// Discover `open-props.toml` by searching up the directory tree, then direct children.
///
/// Search order:
/// 1. Walk up from `start_dir` to filesystem root
/// 2. If not found, check immediate child directories of `start_dir`
///
/// Returns `(settings, settings_dir)` where `settings_dir` is the directory
/// containing the found file. If not found, returns
/// `(Settings::default(), start_dir)`.
pub fn discover_settings(start_dir: &Path) -> (Settings, PathBuf) {
    let mut current = Some(start_dir);
    while let Some(dir) = current {
        let candidate = dir.join(SETTINGS_FILE);
        if candidate.is_file() {
            debug!("using settings from {}", candidate.display());
            return (load_settings(&candidate), dir.to_path_buf());
        }
        current = dir.parent();
    }

    if let Ok(entries) = std::fs::read_dir(start_dir) {
        for entry in entries.flatten() {
            if entry.file_type().map(|ft| ft.is_dir()).unwrap_or(false) {
                let candidate = entry.path().join(SETTINGS_FILE);
                if candidate.is_file() {
                    debug!("using settings from {}", candidate.display());
                    return (load_settings(&candidate), entry.path());
                }
            }
        }
    }

    (Settings::default(), start_dir.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_variables_and_exclude() {
        let settings: Settings = toml::from_str(
            r##"
exclude = ["--layer-important"]

[variables]
"--brand" = "#ff3e00"
accent = "var(--blue-6)"
"##,
        )
        .unwrap();

        assert_eq!(settings.exclude, vec!["--layer-important"]);
        assert_eq!(settings.variables.get("--brand").unwrap(), "#ff3e00");
        assert_eq!(settings.variables.get("accent").unwrap(), "var(--blue-6)");
    }

    #[test]
    fn empty_file_is_default() {
        let settings: Settings = toml::from_str("").unwrap();
        assert!(settings.exclude.is_empty());
        assert!(settings.variables.is_empty());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result: Result<Settings, _> = toml::from_str("colour = true\n");
        assert!(result.is_err());
    }

    #[test]
    fn read_settings_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        std::fs::write(&path, "[variables\n").unwrap();

        let err = read_settings(&path).unwrap_err();
        assert!(matches!(err, SettingsError::Parse { .. }));
        assert!(err.to_string().contains(SETTINGS_FILE));
    }

    #[test]
    fn load_settings_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();

        let missing = load_settings(&dir.path().join(SETTINGS_FILE));
        assert!(missing.variables.is_empty());

        let path = dir.path().join(SETTINGS_FILE);
        std::fs::write(&path, "variables = 3\n").unwrap();
        let broken = load_settings(&path);
        assert!(broken.variables.is_empty());
    }

    #[test]
    fn discover_settings_in_current_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(SETTINGS_FILE),
            "[variables]\n\"--x\" = \"1px\"\n",
        )
        .unwrap();

        let (settings, settings_dir) = discover_settings(dir.path());
        assert_eq!(settings_dir, dir.path());
        assert_eq!(settings.variables.get("--x").unwrap(), "1px");
    }

    #[test]
    fn discover_settings_in_parent_dir() {
        let parent = tempfile::tempdir().unwrap();
        let child = parent.path().join("styles");
        std::fs::create_dir_all(&child).unwrap();
        std::fs::write(
            parent.path().join(SETTINGS_FILE),
            "exclude = [\"--gray-0\"]\n",
        )
        .unwrap();

        let (settings, settings_dir) = discover_settings(&child);
        assert_eq!(settings_dir, parent.path());
        assert_eq!(settings.exclude, vec!["--gray-0"]);
    }

    #[test]
    fn discover_settings_in_child_dir() {
        let parent = tempfile::tempdir().unwrap();
        let child = parent.path().join("config");
        std::fs::create_dir_all(&child).unwrap();
        std::fs::write(child.join(SETTINGS_FILE), "exclude = [\"--red-0\"]\n").unwrap();

        let (settings, settings_dir) = discover_settings(parent.path());
        assert_eq!(settings_dir, child);
        assert_eq!(settings.exclude, vec!["--red-0"]);
    }

    #[test]
    fn discover_settings_parent_preferred_over_child() {
        let parent = tempfile::tempdir().unwrap();
        let child = parent.path().join("nested");
        std::fs::create_dir_all(&child).unwrap();
        std::fs::write(parent.path().join(SETTINGS_FILE), "exclude = [\"parent\"]\n").unwrap();
        std::fs::write(child.join(SETTINGS_FILE), "exclude = [\"child\"]\n").unwrap();

        let (settings, settings_dir) = discover_settings(parent.path());
        assert_eq!(settings_dir, parent.path());
        assert_eq!(settings.exclude, vec!["parent"]);
    }
}
