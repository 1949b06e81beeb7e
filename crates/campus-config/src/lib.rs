//! Shared configuration for campus tools.
//!
//! TOML profiles with environment overrides, plus session-token
//! storage in the system keyring so a login survives across
//! invocations without a plaintext token on disk.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("no profile named '{profile}' in config")]
    UnknownProfile { profile: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("keyring error: {0}")]
    Keyring(#[from] keyring::Error),

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
    /// Default profile name.
    pub default_profile: Option<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named server profiles.
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

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,

    #[serde(default = "default_page_size")]
    pub page_size: usize,

    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// How long a notice stays on screen, in milliseconds.
    #[serde(default = "default_toast_ttl_ms")]
    pub toast_ttl_ms: u64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
            page_size: default_page_size(),
            timeout: default_timeout(),
            toast_ttl_ms: default_toast_ttl_ms(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}
fn default_page_size() -> usize {
    20
}
fn default_timeout() -> u64 {
    30
}
fn default_toast_ttl_ms() -> u64 {
    5000
}

/// A named server profile.
#[derive(Debug, Deserialize, Serialize)]
pub struct Profile {
    /// Backend base URL (e.g., "https://assets.school.example").
    pub server: String,

    /// Username to suggest at the login prompt.
    pub username: Option<String>,

    /// Override timeout.
    pub timeout: Option<u64>,

    /// Override page size.
    pub page_size: Option<usize>,
}

/// Connection parameters resolved from a profile plus defaults.
#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub url: Url,
    pub timeout: Duration,
    pub page_size: usize,
}

/// Resolve a profile into connection parameters.
pub fn profile_to_settings(
    config: &Config,
    profile: &Profile,
) -> Result<ServerSettings, ConfigError> {
    let url: Url = profile.server.parse().map_err(|_| ConfigError::Validation {
        field: "server".into(),
        reason: format!("invalid URL: {}", profile.server),
    })?;
    Ok(ServerSettings {
        url,
        timeout: Duration::from_secs(profile.timeout.unwrap_or(config.defaults.timeout)),
        page_size: profile.page_size.unwrap_or(config.defaults.page_size),
    })
}

impl Config {
    /// Look up a profile by name, falling back to `default_profile`.
    ///
    /// The returned name may borrow from either the argument or the
    /// config, hence the shared lifetime.
    pub fn profile<'a>(
        &'a self,
        name: Option<&'a str>,
    ) -> Result<(&'a str, &'a Profile), ConfigError> {
        let name = name
            .or(self.default_profile.as_deref())
            .unwrap_or("default");
        self.profiles
            .get(name)
            .map(|p| (name, p))
            .ok_or_else(|| ConfigError::UnknownProfile {
                profile: name.into(),
            })
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("org", "campus-tools", "campus").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("campus");
    p
}

// ── Config loading / saving ─────────────────────────────────────────

/// Load the full Config from file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load from an explicit path. Environment variables prefixed with
/// `CAMPUS_` override file values.
pub fn load_config_from(path: &std::path::Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("CAMPUS_").split("_"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if the file doesn't exist.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(&path, toml_str)?;
    Ok(())
}

// ── Session token storage ───────────────────────────────────────────

const KEYRING_SERVICE: &str = "campus";

fn token_entry(profile_name: &str) -> Result<keyring::Entry, ConfigError> {
    Ok(keyring::Entry::new(
        KEYRING_SERVICE,
        &format!("{profile_name}/token"),
    )?)
}

/// Persist a session token for a profile in the system keyring.
pub fn store_token(profile_name: &str, token: &str) -> Result<(), ConfigError> {
    token_entry(profile_name)?.set_password(token)?;
    Ok(())
}

/// Load the stored session token, if any.
pub fn load_token(profile_name: &str) -> Option<SecretString> {
    let entry = token_entry(profile_name).ok()?;
    entry.get_password().ok().map(SecretString::from)
}

/// Remove the stored session token. Missing entries are not an error.
pub fn clear_token(profile_name: &str) -> Result<(), ConfigError> {
    match token_entry(profile_name)?.delete_credential() {
        Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_are_sensible() {
        let cfg = Config::default();
        assert_eq!(cfg.default_profile.as_deref(), Some("default"));
        assert_eq!(cfg.defaults.page_size, 20);
        assert_eq!(cfg.defaults.timeout, 30);
        assert_eq!(cfg.defaults.toast_ttl_ms, 5000);
        assert_eq!(cfg.defaults.output, "table");
    }

    #[test]
    fn toml_round_trip_keeps_profiles() {
        let raw = r#"
            default_profile = "school"

            [defaults]
            page_size = 50

            [profiles.school]
            server = "https://assets.school.example"
            username = "admin"
        "#;
        let cfg: Config = toml::from_str(raw).unwrap();
        let (name, profile) = cfg.profile(None).unwrap();
        assert_eq!(name, "school");
        assert_eq!(profile.server, "https://assets.school.example");
        assert_eq!(cfg.defaults.page_size, 50);

        let settings = profile_to_settings(&cfg, profile).unwrap();
        assert_eq!(settings.page_size, 50);
        assert_eq!(settings.timeout, Duration::from_secs(30));
    }

    #[test]
    fn explicit_profile_beats_default() {
        let raw = r#"
            default_profile = "a"

            [profiles.a]
            server = "https://a.example"

            [profiles.b]
            server = "https://b.example"
            page_size = 5
        "#;
        let cfg: Config = toml::from_str(raw).unwrap();
        let (name, profile) = cfg.profile(Some("b")).unwrap();
        assert_eq!(name, "b");
        let settings = profile_to_settings(&cfg, profile).unwrap();
        assert_eq!(settings.page_size, 5);
    }

    #[test]
    fn unknown_profile_is_an_error() {
        let cfg = Config::default();
        let err = cfg.profile(Some("missing")).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownProfile { .. }));
    }

    #[test]
    fn invalid_server_url_is_rejected() {
        let cfg = Config::default();
        let profile = Profile {
            server: "not a url".into(),
            username: None,
            timeout: None,
            page_size: None,
        };
        let err = profile_to_settings(&cfg, &profile).unwrap_err();
        assert!(matches!(err, ConfigError::Validation { .. }));
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[defaults]\ntimeout = 5\n\n[profiles.default]\nserver = \"https://x.example\"\n",
        )
        .unwrap();
        let cfg = load_config_from(&path).unwrap();
        assert_eq!(cfg.defaults.timeout, 5);
        assert_eq!(cfg.defaults.page_size, 20);
    }
}
