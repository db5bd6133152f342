//! Server configuration

use crate::models::ApiError;
use assetgraph_view::{Severity, SeverityFilter, ViewConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// What to do with a `severity` query parameter that names no known level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InvalidSeverityPolicy {
    /// Serve the unfiltered view and log a warning
    #[default]
    Ignore,
    /// Answer 400 Bad Request
    Reject,
    /// Keep the filter active with no admissible level: no vulnerability survives
    MatchNone,
}

impl InvalidSeverityPolicy {
    /// Turn the raw query parameter into a filter; blank values mean no filter
    pub fn resolve(&self, raw: Option<&str>) -> Result<SeverityFilter, ApiError> {
        let Some(raw) = raw.filter(|value| !value.trim().is_empty()) else {
            return Ok(SeverityFilter::All);
        };

        match raw.parse::<Severity>() {
            Ok(severity) => Ok(SeverityFilter::Only(severity)),
            Err(e) => match self {
                InvalidSeverityPolicy::Ignore => {
                    warn!("Ignoring severity filter: {}", e);
                    Ok(SeverityFilter::All)
                }
                InvalidSeverityPolicy::Reject => Err(ApiError::InvalidSeverity(e.to_string())),
                InvalidSeverityPolicy::MatchNone => {
                    warn!("Severity filter matches nothing: {}", e);
                    Ok(SeverityFilter::Nothing)
                }
            },
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Turtle or N-Triples file loaded at startup
    pub data_path: PathBuf,
    pub invalid_severity: InvalidSeverityPolicy,
    pub view: ViewConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            data_path: PathBuf::from("data/model.ttl"),
            invalid_severity: InvalidSeverityPolicy::default(),
            view: ViewConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Read a TOML config file; keys it omits keep their defaults
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// `host:port` as given, resolved when binding
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assetgraph_view::{EdgeIdentity, PropertyMode};

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
        assert_eq!(config.data_path, PathBuf::from("data/model.ttl"));
        assert_eq!(config.invalid_severity, InvalidSeverityPolicy::Ignore);
    }

    #[test]
    fn test_partial_toml() {
        let config = ServerConfig::from_toml_str(
            r#"
            port = 8080
            invalid-severity = "reject"

            [view]
            property-mode = "unfiltered"
            "#,
        )
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.invalid_severity, InvalidSeverityPolicy::Reject);
        assert_eq!(config.view.property_mode, PropertyMode::Unfiltered);
        assert_eq!(config.view.edge_identity, EdgeIdentity::Endpoints);
    }

    #[test]
    fn test_unknown_policy_is_an_error() {
        assert!(ServerConfig::from_toml_str(r#"invalid-severity = "explode""#).is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = ServerConfig::from_file("/nonexistent/assetgraph.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_resolve_valid_and_blank() {
        for policy in [InvalidSeverityPolicy::Ignore, InvalidSeverityPolicy::Reject, InvalidSeverityPolicy::MatchNone] {
            assert_eq!(policy.resolve(None).unwrap(), SeverityFilter::All);
            assert_eq!(policy.resolve(Some("")).unwrap(), SeverityFilter::All);
            assert_eq!(policy.resolve(Some("high")).unwrap(), SeverityFilter::Only(Severity::High));
            assert_eq!(policy.resolve(Some(" Critical ")).unwrap(), SeverityFilter::Only(Severity::Critical));
        }
    }

    #[test]
    fn test_resolve_invalid() {
        assert_eq!(InvalidSeverityPolicy::Ignore.resolve(Some("Urgent")).unwrap(), SeverityFilter::All);
        assert_eq!(InvalidSeverityPolicy::MatchNone.resolve(Some("Urgent")).unwrap(), SeverityFilter::Nothing);
        assert!(matches!(
            InvalidSeverityPolicy::Reject.resolve(Some("Urgent")),
            Err(ApiError::InvalidSeverity(_))
        ));
        assert!(matches!(
            InvalidSeverityPolicy::Reject.resolve(Some("Unknown")),
            Err(ApiError::InvalidSeverity(_))
        ));
    }
}
