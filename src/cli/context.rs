//! Command execution context
//!
//! Loads configuration, settles how the API key is obtained, and opens the
//! Dashboard session for commands that need one.

use crate::cli::{GlobalOptions, KeySource, OutputFormat};
use crate::client::DashboardClient;
use crate::config::Config;
use crate::error::{ConfigError, Result};
use crate::prompt::Console;
use crate::session::{self, Credentials, DashboardSession};

/// Context for command execution containing config and runtime options.
pub struct CommandContext {
    /// Loaded and validated configuration, with CLI overrides applied
    pub config: Config,
    /// Output format preference
    pub format: OutputFormat,
    /// API key source for this invocation
    pub credentials: Credentials,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// In `env` key mode the key is read here, so a missing variable fails
    /// before anything is prompted.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_at(opts.config_ref())?.with_base_url(opts.base_url_ref());
        config.validate()?;

        let credentials = match opts.key_source {
            KeySource::Prompt => Credentials::Prompt,
            KeySource::Env => {
                let key = std::env::var(&config.api_key_env)
                    .map_err(|_| ConfigError::MissingApiKey(config.api_key_env.clone()))?;
                Credentials::Provided(key)
            }
        };

        Ok(Self {
            config,
            format: opts.format,
            credentials,
        })
    }

    /// Open an authenticated Dashboard session.
    pub async fn open_session(
        &self,
        console: &mut dyn Console,
    ) -> Result<DashboardSession<DashboardClient>> {
        session::open(console, self.credentials.clone(), |key| {
            DashboardClient::new(key, &self.config)
        })
        .await
    }
}
