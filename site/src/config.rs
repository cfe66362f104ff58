//! Page configuration parsed from the URL query string.
//!
//! Recognized parameters:
//! - `background`: `particles` (default) or `illustration`
//! - `seed`: unsigned integer fixing the star-field trajectories
//! - `log`: `off`, `error`, `warn`, `info` (default), `debug`, `trace`
//!
//! Unknown parameters are ignored so the page tolerates tracking tags.

use std::str::FromStr;

use log::LevelFilter;
use thiserror::Error;

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// A query parameter with a value the page does not understand.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown background '{0}' (expected 'particles' or 'illustration')")]
    UnknownBackground(String),
    #[error("invalid seed '{0}' (expected an unsigned integer)")]
    InvalidSeed(String),
    #[error("unknown log level '{0}'")]
    InvalidLogLevel(String),
}

/// Decoration drawn behind the page content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BackgroundKind {
    /// Animated star-field canvas.
    #[default]
    Particles,
    /// Static inline SVG graphic.
    Illustration,
}

impl BackgroundKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Particles => "particles",
            Self::Illustration => "illustration",
        }
    }
}

impl FromStr for BackgroundKind {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "particles" => Ok(Self::Particles),
            "illustration" => Ok(Self::Illustration),
            _ => Err(ConfigError::UnknownBackground(raw.to_owned())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteConfig {
    pub background: BackgroundKind,
    pub seed: Option<u64>,
    pub log_level: LevelFilter,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self { background: BackgroundKind::default(), seed: None, log_level: DEFAULT_LOG_LEVEL }
    }
}

impl SiteConfig {
    /// Parse a query string (with or without the leading `?`), failing on
    /// the first bad value.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] for the first recognized parameter whose
    /// value does not parse.
    pub fn from_query(query: &str) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        for (key, value) in pairs(query) {
            config.apply(key, value)?;
        }
        Ok(config)
    }

    /// Parse a query string, keeping every valid parameter and collecting the
    /// errors for the rest. Bad values leave the default in place.
    #[must_use]
    pub fn from_query_lossy(query: &str) -> (Self, Vec<ConfigError>) {
        let mut config = Self::default();
        let errors = pairs(query)
            .filter_map(|(key, value)| config.apply(key, value).err())
            .collect();
        (config, errors)
    }

    fn apply(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "background" => self.background = value.parse()?,
            "seed" => {
                self.seed = Some(
                    value
                        .trim()
                        .parse::<u64>()
                        .map_err(|_| ConfigError::InvalidSeed(value.to_owned()))?,
                );
            }
            "log" => {
                self.log_level = value
                    .trim()
                    .parse::<LevelFilter>()
                    .map_err(|_| ConfigError::InvalidLogLevel(value.to_owned()))?;
            }
            _ => {}
        }
        Ok(())
    }
}

/// `key=value` pairs of a query string; a bare `key` has an empty value.
fn pairs(query: &str) -> impl Iterator<Item = (&str, &str)> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|part| !part.is_empty())
        .map(|part| part.split_once('=').unwrap_or((part, "")))
}
