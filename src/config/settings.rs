//! Configuration settings management
//!
//! Settings are resolved from environment variables carrying the
//! `MY_PYTHON_PROJECT_` prefix (matched case-insensitively). Variables that
//! are absent fall back to defaults and unknown prefixed variables are
//! ignored. When the environment carries several spellings of one
//! variable, the all upper-case spelling wins, then the first spelling in
//! byte order.

use crate::error::{ProjectError, Result};
use config::{Config, Environment, Map};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tracing::level_filters::LevelFilter;

/// Prefix shared by every environment variable the resolver reads
pub const ENV_PREFIX: &str = "MY_PYTHON_PROJECT";

/// Logging verbosity accepted in `MY_PYTHON_PROJECT_LOG_LEVEL`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Critical,
    ];

    /// Canonical upper-case name
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Critical => "CRITICAL",
        }
    }

    /// Tracing filter for this level. Tracing has no critical level, so
    /// CRITICAL shares ERROR's filter.
    pub fn as_level_filter(&self) -> LevelFilter {
        match self {
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warning => LevelFilter::WARN,
            LogLevel::Error | LogLevel::Critical => LevelFilter::ERROR,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = ProjectError;

    fn from_str(s: &str) -> Result<Self> {
        LogLevel::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                ProjectError::config(format!(
                    "invalid log level '{s}', expected one of DEBUG, INFO, WARNING, ERROR, CRITICAL"
                ))
            })
    }
}

/// Parse a boolean setting. Accepts `1/0`, `t/f`, `true/false`, `y/n`,
/// `yes/no` and `on/off` in any case.
pub fn parse_flag(field: &str, raw: &str) -> Result<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "t" | "true" | "y" | "yes" | "on" => Ok(true),
        "0" | "f" | "false" | "n" | "no" | "off" => Ok(false),
        _ => Err(ProjectError::config(format!(
            "invalid boolean '{raw}' for {ENV_PREFIX}_{}",
            field.to_ascii_uppercase()
        ))),
    }
}

/// Raw prefixed values as collected by the `config` environment source
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct EnvSettings {
    log_level: Option<String>,
    json_logs: Option<String>,
    include_timestamp: Option<String>,
}

impl TryFrom<EnvSettings> for Settings {
    type Error = ProjectError;

    fn try_from(raw: EnvSettings) -> Result<Self> {
        let defaults = Settings::default();

        Ok(Self {
            log_level: match raw.log_level {
                Some(value) => value.parse()?,
                None => defaults.log_level,
            },
            json_logs: match raw.json_logs {
                Some(value) => parse_flag("json_logs", &value)?,
                None => defaults.json_logs,
            },
            include_timestamp: match raw.include_timestamp {
                Some(value) => parse_flag("include_timestamp", &value)?,
                None => defaults.include_timestamp,
            },
        })
    }
}

fn is_upper_spelling(key: &str) -> bool {
    !key.bytes().any(|b| b.is_ascii_lowercase())
}

/// Whether `candidate` should replace `current` as the spelling of a name
fn prefer_spelling(candidate: &str, current: &str) -> bool {
    match (is_upper_spelling(candidate), is_upper_spelling(current)) {
        (true, false) => true,
        (false, true) => false,
        _ => candidate < current,
    }
}

/// Keep one spelling per case-insensitive name: the all upper-case one if
/// present, otherwise the smallest in byte order.
fn dedupe_spellings<I, K, V>(vars: I) -> Map<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let mut chosen: BTreeMap<String, (String, String)> = BTreeMap::new();

    for (key, value) in vars {
        let key: String = key.into();
        let name = key.to_ascii_lowercase();

        let keep_current = chosen
            .get(&name)
            .is_some_and(|(current, _)| !prefer_spelling(&key, current));
        if !keep_current {
            chosen.insert(name, (key, value.into()));
        }
    }

    chosen.into_values().collect()
}

/// Resolved settings for one process run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub log_level: LogLevel,
    pub json_logs: bool,
    pub include_timestamp: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            json_logs: false,
            include_timestamp: true,
        }
    }
}

impl Settings {
    /// Resolve settings from the process environment.
    ///
    /// Variables whose name or value is not valid unicode cannot match a
    /// setting and are skipped.
    pub fn resolve() -> Result<Self> {
        Self::resolve_from(std::env::vars_os().filter_map(|(key, value)| {
            Some((key.into_string().ok()?, value.into_string().ok()?))
        }))
    }

    /// Resolve settings from an explicit set of environment variables
    pub fn resolve_from<I, K, V>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let raw = Config::builder()
            .add_source(Environment::with_prefix(ENV_PREFIX).source(Some(dedupe_spellings(vars))))
            .build()
            .and_then(|config| config.try_deserialize::<EnvSettings>())
            .map_err(|e| ProjectError::config(e.to_string()))?;

        Settings::try_from(raw)
    }
}
