//! Configuration loading from `hymns.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::domain::config::{self, AppConfig};

/// Environment variable naming an explicit configuration file.
pub const CONFIG_PATH_ENV: &str = "HYMNS_CONFIG";

/// Load configuration for a run rooted at `root`.
///
/// An explicit path (argument, then `HYMNS_CONFIG`) must exist. Without one,
/// `<root>/hymns.toml` is read when present and defaults are used otherwise.
pub fn load_config(explicit: Option<&Path>, root: &Path) -> Result<AppConfig, AppError> {
    let requested = explicit.map(Path::to_path_buf).or_else(|| {
        std::env::var_os(CONFIG_PATH_ENV).filter(|v| !v.is_empty()).map(PathBuf::from)
    });

    let path = match requested {
        Some(path) => {
            if !path.is_file() {
                return Err(AppError::ConfigFileMissing(path.display().to_string()));
            }
            path
        }
        None => {
            let path = config::paths::config(root);
            if !path.is_file() {
                return Ok(AppConfig::default());
            }
            path
        }
    };

    let content = fs::read_to_string(&path)?;
    config::parse::parse_config_content(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::EnvVarGuard;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    #[serial]
    fn missing_default_file_yields_defaults() {
        let _guard = EnvVarGuard::remove(CONFIG_PATH_ENV);
        let dir = TempDir::new().unwrap();

        let config = load_config(None, dir.path()).unwrap();

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    #[serial]
    fn reads_default_file_from_root() {
        let _guard = EnvVarGuard::remove(CONFIG_PATH_ENV);
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("hymns.toml"), "[bootstrap]\npath = \"data/h.json\"\n").unwrap();

        let config = load_config(None, dir.path()).unwrap();

        assert_eq!(config.bootstrap.path, PathBuf::from("data/h.json"));
    }

    #[test]
    #[serial]
    fn explicit_missing_file_is_an_error() {
        let _guard = EnvVarGuard::remove(CONFIG_PATH_ENV);
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");

        let err = load_config(Some(&missing), dir.path()).unwrap_err();

        assert!(matches!(err, AppError::ConfigFileMissing(_)));
    }

    #[test]
    #[serial]
    fn env_var_names_the_file() {
        let dir = TempDir::new().unwrap();
        let custom = dir.path().join("custom.toml");
        fs::write(&custom, "[source]\ndataset = \"Psalms\"\n").unwrap();
        let _guard = EnvVarGuard::set(CONFIG_PATH_ENV, &custom);

        let config = load_config(None, dir.path()).unwrap();

        assert_eq!(config.source.dataset, "Psalms");
    }

    #[test]
    #[serial]
    fn explicit_argument_beats_env_var() {
        let dir = TempDir::new().unwrap();
        let from_env = dir.path().join("env.toml");
        let from_arg = dir.path().join("arg.toml");
        fs::write(&from_env, "[source]\ndataset = \"FromEnv\"\n").unwrap();
        fs::write(&from_arg, "[source]\ndataset = \"FromArg\"\n").unwrap();
        let _guard = EnvVarGuard::set(CONFIG_PATH_ENV, &from_env);

        let config = load_config(Some(&from_arg), dir.path()).unwrap();

        assert_eq!(config.source.dataset, "FromArg");
    }

    #[test]
    #[serial]
    fn invalid_file_surfaces_parse_error() {
        let _guard = EnvVarGuard::remove(CONFIG_PATH_ENV);
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("hymns.toml"), "[source\n").unwrap();

        let err = load_config(None, dir.path()).unwrap_err();

        assert!(matches!(err, AppError::TomlParseError(_)));
    }
}
