#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::model::Credentials;
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use crate::utils::validation::{self, Validate};
use std::time::Duration;
use toml_config::TomlConfig;

/// Values given on the command line; they win over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub verbose: bool,
}

/// Effective client settings.
#[derive(Debug, Clone)]
pub struct Settings {
    pub base_url: String,
    pub timeout: Option<Duration>,
    pub credentials: Option<Credentials>,
    pub log_format: LogFormat,
    pub verbose: bool,
}

impl Settings {
    /// Merges the command line over the file, then validates the effective values.
    pub fn resolve(file: Option<TomlConfig>, overrides: Overrides) -> Result<Self> {
        let file = file.unwrap_or_default();

        // File-only fields have no command-line counterpart
        if let Some(timeout) = file.server.timeout_seconds {
            validation::validate_positive_number("server.timeout_seconds", timeout, 1)?;
        }
        let log_format = file.log_format()?;

        let from_file = file.credentials();
        let username = overrides
            .username
            .or_else(|| from_file.as_ref().map(|c| c.username.clone()));
        let password = overrides
            .password
            .or_else(|| from_file.as_ref().map(|c| c.password.clone()));

        let settings = Self {
            base_url: overrides
                .base_url
                .unwrap_or_else(|| file.server.base_url.clone()),
            timeout: file.timeout(),
            credentials: match (username, password) {
                (Some(username), Some(password)) => Some(Credentials::new(username, password)),
                _ => None,
            },
            log_format,
            verbose: overrides.verbose,
        };
        settings.validate()?;
        Ok(settings)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_url("base_url", &self.base_url)?;
        if let Some(credentials) = &self.credentials {
            validation::validate_non_empty_string("username", &credentials.username)?;
            validation::validate_non_empty_string("password", &credentials.password)?;
        }
        Ok(())
    }
}
