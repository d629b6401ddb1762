// Command-line configuration. `clap` does the parsing into a private args
// struct; the public `Config` is the immutable value handed to the rest of
// the crate for the lifetime of the process.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, ValueEnum};
use reqwest::Url;
use serde::Serialize;

use crate::error::{Error, Result};

/// Base url of the public cxg.de api.
pub const DEFAULT_URL: &str = "http://api.cxg.de";

/// Environment variable that can stand in for `--url`.
pub const URL_ENV_VAR: &str = "CXG_URL";

pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

pub const DEFAULT_TITLE: &str = "No Title";

/// Content format tag sent along with a paste. The service offers no call
/// to list formats, so `auto` is the only one we know of.
#[derive(ValueEnum, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Auto,
}

impl Format {
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Auto => "auto",
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    #[default]
    Error,
}

impl LogLevel {
    pub fn as_level(&self) -> tracing::Level {
        match self {
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warning => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "cxg",
    version,
    about = "A cli tool for the cxg.de nopaste service.",
    long_about = None
)]
struct ClapArgs {
    /// The base cxg.de api url
    #[arg(long, env = URL_ENV_VAR, default_value = DEFAULT_URL)]
    url: String,

    /// When to return if the server did not answer (in seconds)
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// Read the content to paste from a file instead of stdin. With --get,
    /// write the fetched paste to this file instead of stdout.
    #[arg(long)]
    file: Option<PathBuf>,

    /// Sets a title for the paste
    #[arg(long, default_value = DEFAULT_TITLE)]
    title: String,

    /// Set the format of the content
    #[arg(long, value_enum, default_value_t = Format::Auto)]
    format: Format,

    /// Set the loglevel
    #[arg(long, value_enum, default_value_t = LogLevel::Error)]
    loglevel: LogLevel,

    /// Get a paste from cxg by a given id
    #[arg(long, value_name = "CXG_ID")]
    get: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Config {
    url: String,
    timeout: Duration,
    file: Option<PathBuf>,
    title: String,
    format: Format,
    loglevel: LogLevel,
    get: Option<String>,
}

impl From<ClapArgs> for Config {
    fn from(args: ClapArgs) -> Self {
        Self {
            url: args.url,
            timeout: Duration::from_secs(args.timeout),
            file: args.file,
            title: args.title,
            format: args.format,
            loglevel: args.loglevel,
            get: args.get,
        }
    }
}

impl Config {
    /// Parses the process arguments. Usage errors print clap's message and
    /// exit with status 2.
    pub fn parse() -> Self {
        ClapArgs::parse().into()
    }

    pub fn try_parse_from<I, T>(itr: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        ClapArgs::try_parse_from(itr).map(Self::from)
    }

    /// Checks the constraints clap cannot express on its own.
    pub fn validate(&self) -> Result<()> {
        let base = Url::parse(&self.url)
            .map_err(|e| Error::Config(format!("invalid url {:?}: {e}", self.url)))?;
        if base.cannot_be_a_base() {
            return Err(Error::Config(format!(
                "url {:?} cannot be used as an api base",
                self.url
            )));
        }
        if self.timeout.is_zero() {
            return Err(Error::Config("timeout must be at least one second".into()));
        }
        if let Some(id) = &self.get {
            if matches!(id.trim(), "" | "." | "..") {
                return Err(Error::Config(format!("invalid paste id {id:?}")));
            }
        }
        Ok(())
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn format(&self) -> Format {
        self.format
    }

    pub fn loglevel(&self) -> LogLevel {
        self.loglevel
    }

    /// Paste id to fetch. When set, the client runs in fetch mode.
    pub fn get(&self) -> Option<&str> {
        self.get.as_deref()
    }
}
