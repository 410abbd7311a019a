use serde::Deserialize;

mod file;
pub use file::ConfigPathChoice;

fn default_true() -> bool {
    true
}

const fn default_poll_interval() -> u64 {
    10
}

const fn default_fetch_timeout() -> u64 {
    10
}

#[derive(Deserialize)]
pub struct Config {
    #[serde(skip)]
    pub path: ConfigPathChoice,

    /// Last.fm user names whose listening activity is tracked.
    pub users: Vec<String>,
    pub api_key: lastfm::ApiKey,

    /// Query the secondary image-search service when the primary source has an
    /// incomplete cover set.
    #[serde(default = "default_true")]
    pub fallback_artwork: bool,

    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,

    /// Budget for a single per-user fetch. A request still pending past this
    /// is dropped like any other failed fetch, so one hung user cannot stall
    /// the whole cycle.
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_secs: u64,
}

impl Config {
    pub fn get(args: &crate::cli::Cli) -> Result<Self, ConfigRetrievalError> {
        let path = ConfigPathChoice::new(args.config_file_path.as_deref());

        let data = match std::fs::read(path.as_path()) {
            Ok(data) => data,
            Err(error) => {
                use std::io::ErrorKind;
                return Err(match error.kind() {
                    ErrorKind::NotFound => ConfigRetrievalError::NotFound(path),
                    ErrorKind::PermissionDenied => ConfigRetrievalError::PermissionDenied(path),
                    _ => ConfigRetrievalError::UnknownFs { path, inner: error },
                });
            }
        };

        let data = String::from_utf8_lossy(&data);
        let mut config: Config = match toml::from_str(&data) {
            Ok(config) => config,
            Err(inner) => return Err(ConfigRetrievalError::DeserializationFailure { path, inner }),
        };
        if let Err(inner) = config.validate() {
            return Err(ConfigRetrievalError::Invalid { path, inner });
        }
        config.path = path;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.users.is_empty() {
            return Err(ConfigValidationError::NoUsers);
        }
        if self.users.iter().any(|user| user.is_empty()) {
            return Err(ConfigValidationError::EmptyUserName);
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigRetrievalError {
    #[error("could not read {}: {inner}", .path.to_string_lossy())]
    UnknownFs { path: ConfigPathChoice, inner: std::io::Error },
    #[error("deserialization failure: {inner}")]
    DeserializationFailure { path: ConfigPathChoice, inner: toml::de::Error },
    #[error("lacking permission to read {}", .0.to_string_lossy())]
    PermissionDenied(ConfigPathChoice),
    #[error("no configuration file @ {}", .0.to_string_lossy())]
    NotFound(ConfigPathChoice),
    #[error("{inner}")]
    Invalid { path: ConfigPathChoice, inner: ConfigValidationError },
}
impl ConfigRetrievalError {
    pub fn path(&self) -> &ConfigPathChoice {
        match self {
            Self::UnknownFs { path, .. } => path,
            Self::DeserializationFailure { path, .. } => path,
            Self::PermissionDenied(path) => path,
            Self::NotFound(path) => path,
            Self::Invalid { path, .. } => path,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("no users configured")]
    NoUsers,
    #[error("user names cannot be empty")]
    EmptyUserName,
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
        users = ["alpha", "beta"]
        api_key = "d591a37a79ec4c3d4efe55379029b5b3"
    "#;

    #[test]
    fn minimal_file_gets_defaults() {
        let config: Config = toml::from_str(MINIMAL).unwrap();
        assert_eq!(config.users, ["alpha", "beta"]);
        assert!(config.fallback_artwork);
        assert_eq!(config.poll_interval_secs, 10);
        assert_eq!(config.fetch_timeout_secs, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn fallback_can_be_disabled() {
        let config: Config =
            toml::from_str(&format!("{MINIMAL}\nfallback_artwork = false")).unwrap();
        assert!(!config.fallback_artwork);
    }

    #[test]
    fn malformed_api_key_is_rejected() {
        let result: Result<Config, _> = toml::from_str(
            r#"
                users = ["alpha"]
                api_key = "not-a-key"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn empty_user_list_fails_validation() {
        let config: Config = toml::from_str(
            r#"
                users = []
                api_key = "d591a37a79ec4c3d4efe55379029b5b3"
            "#,
        )
        .unwrap();
        assert!(matches!(config.validate(), Err(ConfigValidationError::NoUsers)));
    }

    #[test]
    fn blank_user_name_fails_validation() {
        let config: Config = toml::from_str(
            r#"
                users = ["alpha", ""]
                api_key = "d591a37a79ec4c3d4efe55379029b5b3"
            "#,
        )
        .unwrap();
        assert!(matches!(config.validate(), Err(ConfigValidationError::EmptyUserName)));
    }
}
