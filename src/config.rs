//! Application settings: where the posts service lives and how long to
//! wait for it.
//!
//! Values are layered: built-in defaults, then the optional user file
//! at `<config dir>/postpad/config.yaml`, then `POSTPAD_`-prefixed
//! environment variables (`POSTPAD_SERVER__BASE_URL`). Later layers
//! win.

use std::path::PathBuf;
use std::time::Duration;

use config::{Config, Environment, File};
use serde::Deserialize;

/// Default posts service endpoint for local development.
const DEFAULT_BASE_URL: &str = "http://localhost:3000";
const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A configuration source could not be read or assembled.
    #[error("failed to read configuration: {0}")]
    Build(#[source] config::ConfigError),

    /// The merged configuration did not match the expected shape.
    #[error("invalid configuration: {0}")]
    Deserialize(#[source] config::ConfigError),
}

/// Application settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
}

/// Connection settings for the posts service.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// Service root; the `post` endpoint is resolved against it.
    pub base_url: String,
    pub timeout_milliseconds: u64,
}

impl ServerSettings {
    /// Per-request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_milliseconds)
    }
}

/// Returns the path of the optional user configuration file, if the
/// platform has a config directory at all.
pub fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("postpad").join("config.yaml"))
}

/// Loads settings from defaults, the user file, and the environment.
pub fn load() -> Result<Settings, ConfigError> {
    load_layers(config_file_path(), postpad_env())
}

fn postpad_env() -> Environment {
    Environment::with_prefix("POSTPAD")
        .prefix_separator("_")
        .separator("__")
}

fn load_layers(file: Option<PathBuf>, env: Environment) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder()
        .set_default("server.base_url", DEFAULT_BASE_URL)
        .map_err(ConfigError::Build)?
        .set_default("server.timeout_milliseconds", DEFAULT_TIMEOUT_MS)
        .map_err(ConfigError::Build)?;
    if let Some(path) = file {
        builder = builder.add_source(File::from(path).required(false));
    }
    let merged = builder
        .add_source(env)
        .build()
        .map_err(ConfigError::Build)?;
    merged.try_deserialize().map_err(ConfigError::Deserialize)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    /// Environment source that ignores the real process environment.
    fn fake_env(vars: &[(&str, &str)]) -> Environment {
        let mut map = config::Map::new();
        for (key, value) in vars {
            map.insert(key.to_string(), value.to_string());
        }
        postpad_env().source(Some(map))
    }

    #[test]
    fn defaults_apply_without_file_or_env() {
        let settings = load_layers(None, fake_env(&[])).unwrap();
        assert_eq!(settings.server.base_url, "http://localhost:3000");
        assert_eq!(settings.server.timeout_milliseconds, 10_000);
        assert_eq!(settings.server.timeout(), Duration::from_millis(10_000));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist.yaml");
        let settings = load_layers(Some(path), fake_env(&[])).unwrap();
        assert_eq!(settings.server.base_url, "http://localhost:3000");
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "server:\n  base_url: \"http://example.com:8080\"\n").unwrap();
        let settings = load_layers(Some(path), fake_env(&[])).unwrap();
        assert_eq!(settings.server.base_url, "http://example.com:8080");
        assert_eq!(settings.server.timeout_milliseconds, 10_000);
    }

    #[test]
    fn env_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "server:\n  base_url: \"http://example.com:8080\"\n").unwrap();
        let env = fake_env(&[("POSTPAD_SERVER__BASE_URL", "http://10.0.0.5:4000")]);
        let settings = load_layers(Some(path), env).unwrap();
        assert_eq!(settings.server.base_url, "http://10.0.0.5:4000");
    }

    #[test]
    fn env_overrides_timeout() {
        let env = fake_env(&[("POSTPAD_SERVER__TIMEOUT_MILLISECONDS", "250")]);
        let settings = load_layers(None, env).unwrap();
        assert_eq!(settings.server.timeout(), Duration::from_millis(250));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "server: [not, a, mapping\n").unwrap();
        let result = load_layers(Some(path), fake_env(&[]));
        assert!(matches!(result, Err(ConfigError::Build(_))));
    }

    #[test]
    fn non_numeric_timeout_is_an_error() {
        let env = fake_env(&[("POSTPAD_SERVER__TIMEOUT_MILLISECONDS", "soon")]);
        let result = load_layers(None, env);
        assert!(matches!(result, Err(ConfigError::Deserialize(_))));
    }

    #[test]
    fn config_file_path_ends_with_app_dir() {
        if let Some(path) = config_file_path() {
            assert!(path.ends_with("postpad/config.yaml"));
        }
    }
}
