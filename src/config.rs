//! Runtime configuration and logging bootstrap.
//!
//! Settings come from the environment (a `.env` file is loaded first by the
//! binary). Logging is configured by a log4rs YAML file; when the file is
//! missing a console logger on stderr is used instead.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config as LogConfig, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::{Path, PathBuf};

/// Environment variable naming the log4rs config file.
pub const LOG_CONFIG_ENV: &str = "SUBNET_VLSM_LOG_CONFIG";
/// Log4rs config file used when [`LOG_CONFIG_ENV`] is unset.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

/// Settings read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path of the log4rs YAML file.
    pub log_config: PathBuf,
}

impl Config {
    pub fn from_env() -> Config {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_config = lookup(LOG_CONFIG_ENV)
            .filter(|path| !path.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_CONFIG.to_string());
        Config {
            log_config: PathBuf::from(log_config),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_config: PathBuf::from(DEFAULT_LOG_CONFIG),
        }
    }
}

/// Initialise log4rs from the configured file, or a stderr logger at `warn`.
pub fn init_logging(config: &Config) -> Result<(), Box<dyn Error>> {
    if Path::new(&config.log_config).exists() {
        log4rs::init_file(&config.log_config, Default::default())
            .map_err(|e| format!("Error initializing log4rs from {:?}: {e}", config.log_config))?;
        log::debug!("log4rs initialized from {:?}", config.log_config);
    } else {
        let stderr = ConsoleAppender::builder()
            .target(Target::Stderr)
            .encoder(Box::new(PatternEncoder::new(
                "{d(%Y-%m-%d %H:%M:%S)} {h({l})} {t} - {m}{n}",
            )))
            .build();
        let log_config = LogConfig::builder()
            .appender(Appender::builder().build("stderr", Box::new(stderr)))
            .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
        log4rs::init_config(log_config)?;
        log::debug!("log4rs config {:?} not found, using stderr", config.log_config);
    }
    Ok(())
}
