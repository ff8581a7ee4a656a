//! Configuration loading
//!
//! The API base URL is resolved in priority order:
//! 1. `--api-url` command-line flag
//! 2. `HOW_HOT_API_URL` environment variable
//! 3. `api_url` in the TOML config file
//! 4. Compiled default (`http://localhost:8000`)

use clap::Parser;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Command line arguments
#[derive(Debug, Default, Parser)]
#[command(name = "how-hot", version, about = "Find out how spicy your dish is")]
pub struct Cli {
    /// Base URL of the prediction service
    #[arg(long, env = "HOW_HOT_API_URL")]
    pub api_url: Option<String>,

    /// TOML config file (defaults to <config dir>/how-hot/config.toml)
    #[arg(long, env = "HOW_HOT_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Contents of the optional config file
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    api_url: Option<String>,
    request_timeout_secs: Option<u64>,
}

/// Resolved runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Prediction service base URL, without a trailing slash
    pub api_url: String,
    /// Per-request timeout; None leaves requests open until the service answers
    pub request_timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout: None,
        }
    }
}

impl Config {
    /// Resolve configuration from the CLI/environment and the config file.
    ///
    /// An explicitly named config file must exist; the default location is
    /// optional.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let file = match &cli.config {
            Some(path) => read_file_config(path)?,
            None => match default_config_path().filter(|path| path.exists()) {
                Some(path) => read_file_config(&path)?,
                None => FileConfig::default(),
            },
        };

        Ok(Self::resolve(cli.api_url.as_deref(), file))
    }

    /// Configuration from the CLI/environment alone
    pub fn from_cli(cli: &Cli) -> Self {
        Self::resolve(cli.api_url.as_deref(), FileConfig::default())
    }

    fn resolve(cli_url: Option<&str>, file: FileConfig) -> Self {
        // Empty values fall through, same as an unset variable
        let api_url = cli_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(str::to_string)
            .or_else(|| file.api_url.filter(|url| !url.trim().is_empty()))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Self {
            api_url: api_url.trim().trim_end_matches('/').to_string(),
            request_timeout: file
                .request_timeout_secs
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs),
        }
    }
}

/// Default config file location for the platform
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("how-hot").join("config.toml"))
}

fn read_file_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn config_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_url() {
        let config = Config::resolve(None, FileConfig::default());
        assert_eq!(config, Config::default());
        assert_eq!(config.api_url, "http://localhost:8000");
    }

    #[test]
    fn test_cli_beats_file() {
        let file = FileConfig {
            api_url: Some("http://from-file:9000".into()),
            request_timeout_secs: None,
        };
        let config = Config::resolve(Some("https://api.howhot.example/"), file);
        assert_eq!(config.api_url, "https://api.howhot.example");
    }

    #[test]
    fn test_empty_cli_value_falls_through() {
        let file = FileConfig {
            api_url: Some("http://from-file:9000".into()),
            request_timeout_secs: None,
        };
        let config = Config::resolve(Some("  "), file);
        assert_eq!(config.api_url, "http://from-file:9000");
    }

    #[test]
    fn test_load_from_explicit_file() {
        let file = config_file("api_url = \"http://10.0.0.5:8000/\"\nrequest_timeout_secs = 30\n");
        let cli = Cli {
            api_url: None,
            config: Some(file.path().to_path_buf()),
        };

        let config = Config::load(&cli).unwrap();
        assert_eq!(config.api_url, "http://10.0.0.5:8000");
        assert_eq!(config.request_timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli {
            api_url: None,
            config: Some(dir.path().join("nope.toml")),
        };
        assert!(matches!(Config::load(&cli), Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let file = config_file("api_url = [");
        let cli = Cli {
            api_url: None,
            config: Some(file.path().to_path_buf()),
        };
        assert!(matches!(Config::load(&cli), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_cli_parses_flag() {
        let cli = Cli::try_parse_from(["how-hot", "--api-url", "http://example:1234"]).unwrap();
        assert_eq!(Config::from_cli(&cli).api_url, "http://example:1234");
    }
}
