//! Daemon settings: optional `roster.toml`, then `ROSTER_*` environment
//! variables on top.
//!
//! Each section owns its defaults, its overrides and its checks, so adding a
//! setting touches one struct.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// File read from the working directory when present.
pub const CONFIG_FILE: &str = "roster.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub frontend: FrontendConfig,
}

/// Where the HTTP listener binds.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Connection string handed to the storage adapter.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// `sqlx` URL such as `sqlite:roster.db?mode=rwc` or `sqlite::memory:`.
    pub url: String,
}

/// Log filter in `EnvFilter` directive syntax.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub filter: String,
}

/// Frontend bundle location, served under `/static`.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct FrontendConfig {
    pub static_dir: PathBuf,
}

/// Source of override values, keyed by variable name.
pub trait Lookup {
    fn get(&self, key: &str) -> Option<String>;
}

impl<F: Fn(&str) -> Option<String>> Lookup for F {
    fn get(&self, key: &str) -> Option<String> {
        self(key)
    }
}

impl Config {
    /// Read [`CONFIG_FILE`] and the process environment.
    ///
    /// # Errors
    ///
    /// See [`Config::load_from`].
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new(CONFIG_FILE), &|key: &str| std::env::var(key).ok())
    }

    /// Read `path` if it exists, apply overrides from `env`, then validate.
    ///
    /// # Errors
    ///
    /// Fails when the file exists but cannot be read or parsed, or when the
    /// merged settings are unusable.
    pub fn load_from(path: &Path, env: &impl Lookup) -> Result<Self, ConfigError> {
        let mut config = match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(err) => return Err(err.into()),
        };
        config.server.override_from(env);
        config.database.override_from(env);
        config.frontend.override_from(env);
        config.logging.override_from(env);
        config.server.validate()?;
        config.database.validate()?;
        Ok(config)
    }

    /// `host:port` to hand to the TCP listener.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database.url
    }

    #[must_use]
    pub fn static_dir(&self) -> &Path {
        &self.frontend.static_dir
    }
}

impl ServerConfig {
    /// `ROSTER_HOST` and `ROSTER_PORT` apply first, so a full `ROSTER_BIND`
    /// wins over both. An unparseable port leaves the current one in place.
    fn override_from(&mut self, env: &impl Lookup) {
        if let Some(host) = env.get("ROSTER_HOST") {
            self.host = host;
        }
        if let Some(port) = env.get("ROSTER_PORT").and_then(|raw| raw.parse().ok()) {
            self.port = port;
        }
        if let Some(bind) = env.get("ROSTER_BIND")
            && let Some((host, port)) = bind.rsplit_once(':')
        {
            self.host = host.to_string();
            if let Ok(port) = port.parse() {
                self.port = port;
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        Ok(())
    }
}

impl DatabaseConfig {
    fn override_from(&mut self, env: &impl Lookup) {
        if let Some(url) = env.get("ROSTER_DATABASE_URL") {
            self.url = url;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.url.trim().is_empty() {
            return Err(ConfigError::Validation(
                "database url must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl FrontendConfig {
    fn override_from(&mut self, env: &impl Lookup) {
        if let Some(dir) = env.get("ROSTER_STATIC_DIR") {
            self.static_dir = PathBuf::from(dir);
        }
    }
}

impl LoggingConfig {
    /// `RUST_LOG` beats `ROSTER_LOG`.
    fn override_from(&mut self, env: &impl Lookup) {
        if let Some(filter) = env.get("RUST_LOG").or_else(|| env.get("ROSTER_LOG")) {
            self.filter = filter;
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite:roster.db?mode=rwc".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "rosterd=info,roster=info,tower_http=debug".to_string(),
        }
    }
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            static_dir: PathBuf::from("static"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    fn missing_file() -> PathBuf {
        std::env::temp_dir().join("rosterd-config-that-does-not-exist.toml")
    }

    fn write_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("rosterd-{}-{name}", std::process::id()));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn should_use_defaults_when_file_missing_and_env_empty() {
        let config = Config::load_from(&missing_file(), &env(&[])).unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
        assert_eq!(config.database_url(), "sqlite:roster.db?mode=rwc");
        assert_eq!(config.static_dir(), Path::new("static"));
        assert_eq!(
            config.logging.filter,
            "rosterd=info,roster=info,tower_http=debug"
        );
    }

    #[test]
    fn should_read_every_section_from_file() {
        let path = write_file(
            "full.toml",
            "
            [server]
            host = '127.0.0.1'
            port = 9090

            [database]
            url = 'sqlite:test.db'

            [logging]
            filter = 'debug'

            [frontend]
            static_dir = 'frontend/dist'
            ",
        );
        let config = Config::load_from(&path, &env(&[])).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.bind_addr(), "127.0.0.1:9090");
        assert_eq!(config.database_url(), "sqlite:test.db");
        assert_eq!(config.logging.filter, "debug");
        assert_eq!(config.static_dir(), Path::new("frontend/dist"));
    }

    #[test]
    fn should_let_env_win_over_file() {
        let path = write_file("partial.toml", "[server]\nport = 8080\n");
        let config = Config::load_from(&path, &env(&[("ROSTER_PORT", "7070")])).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.server.port, 7070);
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn should_report_parse_error_for_invalid_file() {
        let path = write_file("broken.toml", "invalid {{{");
        let result = Config::load_from(&path, &env(&[]));
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn should_apply_every_env_override() {
        let config = Config::load_from(
            &missing_file(),
            &env(&[
                ("ROSTER_BIND", "127.0.0.1:8080"),
                ("ROSTER_DATABASE_URL", "sqlite::memory:"),
                ("ROSTER_STATIC_DIR", "/srv/roster"),
                ("ROSTER_LOG", "warn"),
            ]),
        )
        .unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.database_url(), "sqlite::memory:");
        assert_eq!(config.static_dir(), Path::new("/srv/roster"));
        assert_eq!(config.logging.filter, "warn");
    }

    #[test]
    fn should_prefer_bind_over_host_and_port() {
        let mut server = ServerConfig::default();
        server.override_from(&env(&[
            ("ROSTER_HOST", "10.0.0.1"),
            ("ROSTER_PORT", "81"),
            ("ROSTER_BIND", "127.0.0.1:8080"),
        ]));
        assert_eq!((server.host.as_str(), server.port), ("127.0.0.1", 8080));
    }

    #[test]
    fn should_prefer_rust_log_over_roster_log() {
        let mut logging = LoggingConfig::default();
        logging.override_from(&env(&[("ROSTER_LOG", "warn"), ("RUST_LOG", "trace")]));
        assert_eq!(logging.filter, "trace");
    }

    #[test]
    fn should_ignore_unparseable_port_override() {
        let mut server = ServerConfig::default();
        server.override_from(&env(&[("ROSTER_PORT", "eighty")]));
        assert_eq!(server.port, 3000);
    }

    #[test]
    fn should_reject_zero_port() {
        let result = Config::load_from(&missing_file(), &env(&[("ROSTER_PORT", "0")]));
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn should_reject_blank_database_url() {
        let result = Config::load_from(&missing_file(), &env(&[("ROSTER_DATABASE_URL", "  ")]));
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }
}
