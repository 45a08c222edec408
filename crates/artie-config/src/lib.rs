//! Configuration for tools built on `artie-api`.
//!
//! TOML profiles, API key resolution (env + keyring + plaintext), and
//! translation to `artie_api::ClientConfig`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use artie_api::{ClientConfig, DEFAULT_ENDPOINT, TransportConfig};

/// Environment variable checked after a profile's own `api_key_env`.
pub const API_KEY_ENV: &str = "ARTIE_API_KEY";

const KEYRING_SERVICE: &str = "artie";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("no profile named '{profile}'")]
    UnknownProfile { profile: String },

    #[error("no API key configured for profile '{profile}'")]
    NoCredentials { profile: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Profile used when none is named.
    pub default_profile: Option<String>,

    #[serde(default)]
    pub defaults: Defaults,

    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: HashMap::new(),
        }
    }
}

impl Config {
    /// Look up `name`, or the default profile when `name` is `None`.
    pub fn profile(&self, name: Option<&str>) -> Result<(&str, &Profile), ConfigError> {
        let wanted = name
            .or(self.default_profile.as_deref())
            .unwrap_or("default");
        self.profiles
            .get_key_value(wanted)
            .map(|(k, v)| (k.as_str(), v))
            .ok_or_else(|| ConfigError::UnknownProfile {
                profile: wanted.into(),
            })
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}

/// A named API profile.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Profile {
    /// API base URL. Defaults to the production endpoint.
    pub endpoint: Option<String>,

    /// API key (plaintext, prefer keyring or env var).
    pub api_key: Option<String>,

    /// Environment variable name containing the API key.
    pub api_key_env: Option<String>,

    /// Override timeout.
    pub timeout: Option<u64>,
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "artie", "artie").map_or_else(
        || {
            let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
            p.push(".config");
            p.push("artie");
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load from an explicit file. A missing file yields the defaults.
///
/// `ARTIE_` variables override the file; nested keys use a double
/// underscore (`ARTIE_DEFAULTS__TIMEOUT=60`).
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("ARTIE_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    save_config_to(cfg, &config_path())
}

pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

// ── Credential resolution ───────────────────────────────────────────

/// Resolve an API key for `profile_name`.
///
/// Order: the profile's `api_key_env`, then `ARTIE_API_KEY`, then the
/// system keyring (`artie` / `<profile>/api-key`), then plaintext.
pub fn resolve_api_key(profile: &Profile, profile_name: &str) -> Result<SecretString, ConfigError> {
    resolve_api_key_with(profile, profile_name, |name| std::env::var(name).ok())
}

fn resolve_api_key_with(
    profile: &Profile,
    profile_name: &str,
    env: impl Fn(&str) -> Option<String>,
) -> Result<SecretString, ConfigError> {
    // 1. Profile's api_key_env → env var lookup
    if let Some(val) = profile.api_key_env.as_deref().and_then(&env) {
        return Ok(SecretString::from(val));
    }

    // 2. Global env var
    if let Some(val) = env(API_KEY_ENV) {
        return Ok(SecretString::from(val));
    }

    // 3. System keyring
    if let Ok(entry) = keyring::Entry::new(KEYRING_SERVICE, &format!("{profile_name}/api-key")) {
        if let Ok(secret) = entry.get_password() {
            return Ok(SecretString::from(secret));
        }
    }

    // 4. Plaintext in config
    if let Some(ref key) = profile.api_key {
        return Ok(SecretString::from(key.clone()));
    }

    Err(ConfigError::NoCredentials {
        profile: profile_name.into(),
    })
}

/// Store an API key in the system keyring for `profile_name`.
pub fn store_api_key(profile_name: &str, api_key: &str) -> Result<(), ConfigError> {
    keyring::Entry::new(KEYRING_SERVICE, &format!("{profile_name}/api-key"))
        .and_then(|entry| entry.set_password(api_key))
        .map_err(|e| ConfigError::Validation {
            field: "keyring".into(),
            reason: e.to_string(),
        })
}

/// Build a `ClientConfig` from a profile, resolving its API key.
pub fn profile_to_client_config(
    profile: &Profile,
    profile_name: &str,
    defaults: &Defaults,
) -> Result<ClientConfig, ConfigError> {
    let api_key = resolve_api_key(profile, profile_name)?;
    build_client_config(profile, defaults, api_key)
}

/// Build a `ClientConfig` from a profile and an already resolved key.
///
/// The key's `arsk_` prefix is checked later, when the client is built.
pub fn build_client_config(
    profile: &Profile,
    defaults: &Defaults,
    api_key: SecretString,
) -> Result<ClientConfig, ConfigError> {
    let raw = profile.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT);
    let endpoint: url::Url = raw.parse().map_err(|_| ConfigError::Validation {
        field: "endpoint".into(),
        reason: format!("invalid URL: {raw}"),
    })?;

    let timeout = Duration::from_secs(profile.timeout.unwrap_or(defaults.timeout));

    Ok(ClientConfig::new(api_key)
        .with_endpoint(endpoint)
        .with_transport(TransportConfig::default().with_timeout(timeout)))
}

/// Load config and build a `ClientConfig` for `profile` (or the default).
pub fn client_config(profile: Option<&str>) -> Result<ClientConfig, ConfigError> {
    let config = load_config()?;
    let (name, profile) = config.profile(profile)?;
    profile_to_client_config(profile, name, &config.defaults)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use secrecy::ExposeSecret;

    use super::*;

    fn write_config(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("absent.toml")).unwrap();

        assert_eq!(config.default_profile.as_deref(), Some("default"));
        assert_eq!(config.defaults.timeout, 30);
        assert!(config.profiles.is_empty());
    }

    #[test]
    fn profiles_are_read_from_toml() {
        let (_dir, path) = write_config(
            r#"
            default_profile = "staging"

            [defaults]
            timeout = 10

            [profiles.staging]
            endpoint = "https://staging.artie.test"
            api_key_env = "ARTIE_TEST_STAGING_KEY"
            timeout = 5
            "#,
        );

        let config = load_config_from(&path).unwrap();
        let (name, profile) = config.profile(None).unwrap();

        assert_eq!(name, "staging");
        assert_eq!(profile.endpoint.as_deref(), Some("https://staging.artie.test"));
        assert_eq!(profile.timeout, Some(5));
        assert_eq!(config.defaults.timeout, 10);
    }

    #[test]
    fn unknown_profile_is_an_error() {
        let config = Config::default();
        let err = config.profile(Some("prod")).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownProfile { profile } if profile == "prod"));
    }

    fn fake_env(name: &str) -> Option<String> {
        match name {
            "STAGING_ARTIE_KEY" => Some("arsk_from_profile_env".into()),
            API_KEY_ENV => Some("arsk_from_global_env".into()),
            _ => None,
        }
    }

    #[test]
    fn profile_env_var_wins() {
        let profile = Profile {
            api_key: Some("arsk_plaintext".into()),
            api_key_env: Some("STAGING_ARTIE_KEY".into()),
            ..Profile::default()
        };
        let key = resolve_api_key_with(&profile, "staging", fake_env).unwrap();
        assert_eq!(key.expose_secret(), "arsk_from_profile_env");
    }

    #[test]
    fn global_env_var_is_the_fallback() {
        let profile = Profile {
            api_key: Some("arsk_plaintext".into()),
            api_key_env: Some("UNSET_ARTIE_KEY".into()),
            ..Profile::default()
        };
        let key = resolve_api_key_with(&profile, "staging", fake_env).unwrap();
        assert_eq!(key.expose_secret(), "arsk_from_global_env");
    }

    #[test]
    fn client_config_uses_profile_settings() {
        let profile = Profile {
            endpoint: Some("https://staging.artie.test/v1".into()),
            timeout: None,
            ..Profile::default()
        };
        let cfg = build_client_config(
            &profile,
            &Defaults { timeout: 12 },
            SecretString::from("arsk_client_config".to_string()),
        )
        .unwrap();

        assert_eq!(cfg.endpoint.as_str(), "https://staging.artie.test/v1");
        assert_eq!(cfg.transport.timeout, Duration::from_secs(12));
        assert_eq!(cfg.api_key.expose_secret(), "arsk_client_config");
    }

    #[test]
    fn endpoint_defaults_to_production() {
        let cfg = build_client_config(
            &Profile::default(),
            &Defaults::default(),
            SecretString::from("arsk_x".to_string()),
        )
        .unwrap();
        assert_eq!(cfg.endpoint.as_str(), "https://api.artie.com/");
    }

    #[test]
    fn bad_endpoint_is_a_validation_error() {
        let profile = Profile {
            endpoint: Some("not a url".into()),
            ..Profile::default()
        };
        let err = build_client_config(
            &profile,
            &Defaults::default(),
            SecretString::from("arsk_x".to_string()),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Validation { ref field, .. } if field == "endpoint"));
    }

    #[test]
    fn saved_config_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.profiles.insert(
            "default".into(),
            Profile {
                endpoint: Some("https://api.artie.com".into()),
                api_key_env: Some("MY_ARTIE_KEY".into()),
                ..Profile::default()
            },
        );
        save_config_to(&config, &path).unwrap();

        let loaded = load_config_from(&path).unwrap();
        let (_, profile) = loaded.profile(None).unwrap();
        assert_eq!(profile.api_key_env.as_deref(), Some("MY_ARTIE_KEY"));
    }
}
