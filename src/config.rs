//! User configuration.
//!
//! Read from `config.toml` in the platform config directory (or an explicit
//! path), then overridden by `AMAREH_*` environment variables.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use tracing::debug;

const ENV_PREFIX: &str = "AMAREH_";

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Language for messages shown to the user.
    pub language: String,
    pub log: LogSettings,
    pub display: DisplaySettings,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct LogSettings {
    /// Filter used when `RUST_LOG` is not set, e.g. `info` or `amareh=debug`.
    pub level: String,
    /// Also append logs to `amareh.log` in this directory.
    pub directory: Option<PathBuf>,
    /// Log to stderr.
    pub console: bool,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplaySettings {
    /// Group the integer part of results with thousand separators.
    pub separators: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            log: LogSettings::default(),
            display: DisplaySettings::default(),
        }
    }
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
            console: true,
        }
    }
}

impl Config {
    /// Default location: `<config dir>/amareh/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("amareh").join("config.toml"))
    }

    /// Load the configuration file.
    ///
    /// An explicit `path` must exist. Without one the default location is
    /// tried and defaults are used when nothing is there.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) if path.exists() => path,
                _ => {
                    debug!("no config file, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        Self::from_file(&path)
    }

    /// Read and parse a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        if path.extension().and_then(|ext| ext.to_str()) != Some("toml") {
            bail!("{} is not a toml file", path.display());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::parse(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse TOML text.
    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Apply `AMAREH_*` overrides from the process environment.
    pub fn apply_process_env(&mut self) {
        self.apply_env(std::env::vars());
    }

    /// Apply `AMAREH_*` overrides from `vars`. Unknown keys are ignored.
    pub fn apply_env<I, K, V>(&mut self, vars: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (key, value) in vars {
            let Some(name) = key.as_ref().strip_prefix(ENV_PREFIX) else {
                continue;
            };
            match name {
                "LANGUAGE" => self.language = value.into(),
                "LOG_LEVEL" => self.log.level = value.into(),
                "LOG_DIRECTORY" => self.log.directory = Some(PathBuf::from(value.into())),
                _ => {}
            }
        }
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Language: {}, Log level: {}, Log directory: {}, Separators: {}",
            self.language,
            self.log.level,
            self.log
                .directory
                .as_deref()
                .map_or_else(|| "-".to_string(), |dir| dir.display().to_string()),
            self.display.separators
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.language, "en");
        assert_eq!(config.log.level, "info");
        assert!(config.log.console);
        assert!(config.log.directory.is_none());
        assert!(!config.display.separators);
    }

    #[test]
    fn test_parse_partial() {
        let config = Config::parse(
            r#"
            language = "fa"

            [display]
            separators = true
            "#,
        )
        .unwrap();
        assert_eq!(config.language, "fa");
        assert!(config.display.separators);
        assert_eq!(config.log, LogSettings::default());
    }

    #[test]
    fn test_parse_log_section() {
        let config = Config::parse(
            r#"
            [log]
            level = "debug"
            directory = "/tmp/amareh"
            console = false
            "#,
        )
        .unwrap();
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.log.directory, Some(PathBuf::from("/tmp/amareh")));
        assert!(!config.log.console);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Config::parse("language = ").is_err());
        assert!(Config::parse("language = 5").is_err());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config.apply_env([
            ("AMAREH_LANGUAGE", "fa"),
            ("AMAREH_LOG_LEVEL", "warn"),
            ("AMAREH_LOG_DIRECTORY", "/var/log/amareh"),
            ("AMAREH_UNKNOWN", "ignored"),
            ("LANGUAGE", "de"),
        ]);
        assert_eq!(config.language, "fa");
        assert_eq!(config.log.level, "warn");
        assert_eq!(config.log.directory, Some(PathBuf::from("/var/log/amareh")));
    }

    #[test]
    fn test_from_file() {
        let dir = std::env::temp_dir().join(format!("amareh-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();

        let path = dir.join("config.toml");
        fs::write(&path, "language = \"fa\"\n").unwrap();
        assert_eq!(Config::load(Some(path.as_path())).unwrap().language, "fa");

        let yaml = dir.join("config.yml");
        fs::write(&yaml, "language: fa\n").unwrap();
        assert!(Config::from_file(&yaml).is_err());

        assert!(Config::load(Some(dir.join("missing.toml").as_path())).is_err());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_display() {
        let config = Config::default();
        assert_eq!(
            config.to_string(),
            "Language: en, Log level: info, Log directory: -, Separators: false"
        );
    }
}
