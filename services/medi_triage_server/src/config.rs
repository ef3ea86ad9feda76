use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use axum::http::HeaderValue;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Startup configuration, read from a TOML file and overridden by CLI flags.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub cors: CorsConfig,
    pub scoring: ScoringConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct ScoringConfig {
    /// Fixes the per-request RNG so every assessment is reproducible.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            cors: CorsConfig::default(),
            scoring: ScoringConfig::default(),
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:3000".to_string(),
            ],
        }
    }
}

impl CorsConfig {
    pub fn header_values(&self) -> Result<Vec<HeaderValue>, ConfigError> {
        self.allowed_origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|_| {
                    ConfigError::Invalid(format!(
                        "CORS origin {origin:?} is not a valid header value"
                    ))
                })
            })
            .collect()
    }
}

const LEVELS: [LevelFilter; 6] = [
    LevelFilter::Off,
    LevelFilter::Error,
    LevelFilter::Warn,
    LevelFilter::Info,
    LevelFilter::Debug,
    LevelFilter::Trace,
];

impl ServerConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::Invalid("port must be non-zero".into()));
        }
        self.base_log_level()?;
        self.cors.header_values()?;
        Ok(())
    }

    fn base_log_level(&self) -> Result<LevelFilter, ConfigError> {
        self.log_level
            .parse::<LevelFilter>()
            .map_err(|_| ConfigError::Invalid(format!("unknown log level {:?}", self.log_level)))
    }

    /// Configured level raised by one step per `-v`, saturating at trace.
    pub fn log_filter(&self, verbose: u8) -> Result<LevelFilter, ConfigError> {
        let base = self.base_log_level()?;
        let idx = LEVELS.iter().position(|l| *l == base).unwrap_or(3);
        let raised = (idx + verbose as usize).min(LEVELS.len() - 1);
        Ok(LEVELS[raised])
    }
}

impl fmt::Display for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} (log level {})", self.host, self.port, self.log_level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_file_yields_defaults() {
        let cfg = ServerConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, ServerConfig::default());
        assert_eq!(cfg.port, 8000);
        assert_eq!(cfg.cors.allowed_origins.len(), 2);
        assert_eq!(cfg.scoring.seed, None);
    }

    #[test]
    fn partial_file_overrides_only_named_fields() {
        let cfg = ServerConfig::from_toml_str(
            r#"
            port = 9090

            [scoring]
            seed = 42
            "#,
        )
        .unwrap();
        assert_eq!(cfg.port, 9090);
        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.scoring.seed, Some(42));
        assert_eq!(cfg.cors, CorsConfig::default());
    }

    #[test]
    fn load_reads_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("triage.toml");
        fs::write(
            &path,
            "host = \"127.0.0.1\"\n[cors]\nallowed_origins = [\"https://triage.example\"]\n",
        )
        .unwrap();
        let cfg = ServerConfig::load(&path).unwrap();
        assert_eq!(cfg.host, "127.0.0.1");
        assert_eq!(cfg.cors.allowed_origins, vec!["https://triage.example"]);
    }

    #[test]
    fn load_reports_missing_and_malformed_files() {
        let dir = tempfile::tempdir().unwrap();
        let missing = ServerConfig::load(dir.path().join("nope.toml"));
        assert!(matches!(missing, Err(ConfigError::Io { .. })));

        let bad = dir.path().join("bad.toml");
        fs::write(&bad, "port = \"eighty\"").unwrap();
        assert!(matches!(
            ServerConfig::load(&bad),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn validate_rejects_port_zero_and_bad_origins() {
        let mut cfg = ServerConfig {
            port: 0,
            ..ServerConfig::default()
        };
        assert!(cfg.validate().is_err());

        cfg.port = 8000;
        cfg.cors.allowed_origins = vec!["http://ok.example".into(), "bad\norigin".into()];
        assert!(matches!(cfg.validate(), Err(ConfigError::Invalid(_))));

        cfg.cors.allowed_origins.pop();
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn verbosity_raises_log_level() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.log_filter(0).unwrap(), LevelFilter::Info);
        assert_eq!(cfg.log_filter(1).unwrap(), LevelFilter::Debug);
        assert_eq!(cfg.log_filter(2).unwrap(), LevelFilter::Trace);
        assert_eq!(cfg.log_filter(9).unwrap(), LevelFilter::Trace);

        let quiet = ServerConfig {
            log_level: "WARN".into(),
            ..ServerConfig::default()
        };
        assert_eq!(quiet.log_filter(0).unwrap(), LevelFilter::Warn);

        let bogus = ServerConfig {
            log_level: "loud".into(),
            ..ServerConfig::default()
        };
        assert!(bogus.log_filter(0).is_err());
    }

    #[test]
    fn shipped_example_matches_defaults() {
        let cfg = ServerConfig::from_toml_str(include_str!("../triage.example.toml")).unwrap();
        assert_eq!(cfg, ServerConfig::default());
    }

    #[test]
    fn serializes_back_to_toml() {
        let text = ServerConfig::default().to_toml().unwrap();
        let parsed = ServerConfig::from_toml_str(&text).unwrap();
        assert_eq!(parsed, ServerConfig::default());
    }
}
