//! Configuration module
//!
//! Handles loading and saving of the flat `key: value` neoclock.conf file
//! and resolving its platform-specific location. The first-run wizard lives
//! in the `wizard` submodule.

mod types;
pub mod wizard;

pub use types::Config;

use crate::error::Result;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// Resolve the default config file location:
/// `<platform config dir>/neoclock/neoclock.conf`.
///
/// Falls back to the working directory when no home directory can be
/// determined (e.g. stripped-down containers).
pub fn default_path() -> PathBuf {
    match ProjectDirs::from("", "", "neoclock") {
        Some(dirs) => dirs.config_dir().join("neoclock.conf"),
        None => PathBuf::from("neoclock.conf"),
    }
}

/// Load configuration from a flat `key: value` file.
///
/// Returns `Ok(None)` when the file does not exist (first run). Known keys
/// override the defaults, unknown keys are retained, and lines without a
/// colon are silently skipped. File content never causes an error, only IO
/// failures do.
pub fn load(path: &Path) -> Result<Option<Config>> {
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)?;
    let mut config = Config::default();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let (key, value) = (key.trim(), value.trim());

        match key {
            types::KEY_FONT => config.font = value.to_string(),
            types::KEY_COLOR1 => config.color1 = value.to_string(),
            types::KEY_COLOR2 => config.color2 = value.to_string(),
            _ => {
                config.extra.insert(key.to_string(), value.to_string());
            }
        }
    }

    Ok(Some(config))
}

/// Save configuration as one `key: value` line per field
///
/// Creates parent directories as needed and overwrites any existing file.
/// Known keys come first, preserved unknown keys follow.
pub fn save(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut out = String::new();
    out.push_str(&format!("{}: {}\n", types::KEY_FONT, config.font));
    out.push_str(&format!("{}: {}\n", types::KEY_COLOR1, config.color1));
    out.push_str(&format!("{}: {}\n", types::KEY_COLOR2, config.color2));
    for (key, value) in &config.extra {
        out.push_str(&format!("{}: {}\n", key, value));
    }

    fs::write(path, out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_is_none() {
        let result = load(Path::new("/nonexistent/neoclock.conf")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_load_merges_defaults_for_absent_keys() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("neoclock.conf");

        fs::write(&path, "neoclock_font: slant\n").unwrap();

        let config = load(&path).unwrap().unwrap();
        assert_eq!(config.font, "slant");
        assert_eq!(config.color1, "yellow");
        assert_eq!(config.color2, "orange");
    }

    #[test]
    fn test_load_retains_unknown_keys() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("neoclock.conf");

        fs::write(&path, "color1: red\nfuture_option: 42\n").unwrap();

        let config = load(&path).unwrap().unwrap();
        assert_eq!(config.color1, "red");
        assert_eq!(config.extra.get("future_option").unwrap(), "42");
    }

    #[test]
    fn test_load_skips_malformed_lines() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("neoclock.conf");

        fs::write(&path, "this line has no separator\n\ncolor2: cyan\n").unwrap();

        let config = load(&path).unwrap().unwrap();
        assert_eq!(config.color2, "cyan");
        assert!(config.extra.is_empty());
    }

    #[test]
    fn test_load_splits_on_first_colon_and_trims() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("neoclock.conf");

        fs::write(&path, "  note :  a: b: c  \n").unwrap();

        let config = load(&path).unwrap().unwrap();
        assert_eq!(config.extra.get("note").unwrap(), "a: b: c");
    }

    #[test]
    fn test_save_creates_directories() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested/dir/neoclock.conf");

        save(&Config::default(), &path).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_roundtrip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("neoclock.conf");

        let config = Config {
            font: "slant".to_string(),
            color1: "red".to_string(),
            color2: "blue".to_string(),
            extra: Default::default(),
        };

        save(&config, &path).unwrap();
        let loaded = load(&path).unwrap().unwrap();

        assert_eq!(loaded.font, "slant");
        assert_eq!(loaded.color1, "red");
        assert_eq!(loaded.color2, "blue");
    }

    #[test]
    fn test_roundtrip_preserves_unknown_keys() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("neoclock.conf");

        fs::write(&path, "color1: red\nlegacy_key: kept\n").unwrap();

        let config = load(&path).unwrap().unwrap();
        save(&config, &path).unwrap();
        let reloaded = load(&path).unwrap().unwrap();

        assert_eq!(reloaded.extra.get("legacy_key").unwrap(), "kept");
    }

    #[test]
    fn test_default_path_filename() {
        let path = default_path();
        assert_eq!(path.file_name().unwrap(), "neoclock.conf");
    }
}
