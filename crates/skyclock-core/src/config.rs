use std::{
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};

pub use skyclock_proto::config::*;

use log::{info, warn};
use shellexpand::full;

/// Environment variable that overrides `weather.geocoding_api_key`.
pub const GEOCODING_API_KEY_ENV: &str = "GEOCODING_API_KEY";

/// Failures that prevent a usable configuration from being produced.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to expand config path {path:?}: {message}")]
    Expand { path: PathBuf, message: String },
    #[error("config file does not exist: {}", .0.display())]
    NotFound(PathBuf),
    #[error("failed to create config directory {path:?}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Invalid(#[from] ConfigValidationError),
}

/// Load the configuration from `path`, or from the default location.
///
/// An explicit path must exist. The default location is optional: its parent
/// directory is created on first run and defaults are used when the file is
/// missing. Files that cannot be read or parsed fall back to defaults with a
/// warning. Environment overrides are applied before validation.
pub fn get_config(path: Option<PathBuf>) -> Result<(Config, PathBuf), ConfigError> {
    let expanded = match path {
        Some(path) => {
            info!("Config path provided {path:?}");
            let expanded = expand_path(path)?;

            if !expanded.exists() {
                return Err(ConfigError::NotFound(expanded));
            }

            expanded
        }
        None => {
            let expanded = expand_path(PathBuf::from(DEFAULT_CONFIG_FILE_PATH))?;

            if let Some(parent) = expanded.parent()
                && !parent.exists()
            {
                std::fs::create_dir_all(parent).map_err(|source| ConfigError::CreateDir {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }

            expanded
        }
    };

    let mut config = read_config(&expanded).unwrap_or_default();
    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    config.validate()?;

    Ok((config, expanded))
}

/// Apply environment overrides using `lookup` to resolve variables.
pub fn apply_env_overrides<F>(config: &mut Config, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(key) = lookup(GEOCODING_API_KEY_ENV).filter(|key| !key.is_empty()) {
        info!("Using geocoding API key from {GEOCODING_API_KEY_ENV}");
        config.weather.geocoding_api_key = Some(key);
    }
}

fn expand_path(path: PathBuf) -> Result<PathBuf, ConfigError> {
    let str_path = path.to_string_lossy();
    let expanded = full(&str_path).map_err(|e| ConfigError::Expand {
        path: path.clone(),
        message: e.to_string(),
    })?;

    Ok(PathBuf::from(expanded.to_string()))
}

fn read_config(path: &Path) -> Result<Config, Box<dyn std::error::Error + Send + Sync>> {
    let mut content = String::new();
    let read_result = File::open(path).and_then(|mut file| file.read_to_string(&mut content));

    match read_result {
        Ok(_) => {
            info!("Decoding config file {path:?}");

            match toml::from_str(&content) {
                Ok(config) => {
                    info!("Config file loaded successfully");
                    Ok(config)
                }
                Err(e) => {
                    warn!("Failed to parse config file: {e}");
                    Err(Box::new(e))
                }
            }
        }
        Err(e) => {
            warn!("Failed to read config file: {e}");
            Err(Box::new(e))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{io::Write, time::Duration};

    use tempfile::NamedTempFile;

    use super::*;

    fn config_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(content.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn explicit_path_is_loaded() {
        let file = config_file("[clock]\nrefresh_interval_ms = 2000\n");

        let (config, path) = get_config(Some(file.path().to_path_buf())).expect("config loads");

        assert_eq!(path, file.path());
        assert_eq!(config.clock.refresh_interval, Duration::from_secs(2));
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("nope.toml");

        let error = get_config(Some(missing.clone())).expect_err("missing file must fail");
        assert!(matches!(error, ConfigError::NotFound(ref path) if *path == missing));
    }

    #[test]
    fn unparsable_file_falls_back_to_defaults() {
        let file = config_file("this is = = not toml");

        let (config, _) = get_config(Some(file.path().to_path_buf())).expect("config loads");

        assert_eq!(config.clock, ClockConfig::default());
        assert_eq!(config.server, ServerConfig::default());
    }

    #[test]
    fn invalid_settings_are_reported() {
        let file = config_file("[clock]\nelement_id = \"\"\n");

        let error = get_config(Some(file.path().to_path_buf())).expect_err("blank id must fail");
        assert!(matches!(
            error,
            ConfigError::Invalid(ConfigValidationError::EmptyElementId)
        ));
    }

    #[test]
    fn env_override_replaces_api_key() {
        let mut config = Config::default();

        apply_env_overrides(&mut config, |key| {
            (key == GEOCODING_API_KEY_ENV).then(|| String::from("from-env"))
        });

        assert_eq!(config.weather.geocoding_api_key.as_deref(), Some("from-env"));
    }

    #[test]
    fn empty_env_value_is_ignored() {
        let mut config = Config::default();
        config.weather.geocoding_api_key = Some(String::from("from-file"));

        apply_env_overrides(&mut config, |_| Some(String::new()));

        assert_eq!(config.weather.geocoding_api_key.as_deref(), Some("from-file"));
    }
}
