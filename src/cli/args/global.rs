//! Global CLI options shared across all commands

use crate::cli::{Cli, KeySource, OutputFormat};

/// Global CLI options passed to all command handlers.
///
/// Precedence is: CLI flag > environment variable > config file > default.
/// This struct captures the CLI/env layer; config file values are merged in
/// `CommandContext`.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Output format (table, json)
    pub format: OutputFormat,

    /// Custom config file path (defaults to ~/.merakiop/config.yaml)
    pub config: Option<String>,

    /// How the API key is obtained
    pub key_source: KeySource,

    /// Dashboard API base URL override
    pub base_url: Option<String>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            key_source: cli.key_source,
            base_url: cli.base_url.clone(),
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// Get base URL override as `Option<&str>`.
    pub fn base_url_ref(&self) -> Option<&str> {
        self.base_url.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_options_accessors() {
        let opts = GlobalOptions {
            format: OutputFormat::Json,
            config: Some("/custom/path".to_string()),
            key_source: KeySource::Env,
            base_url: Some("http://localhost:8080".to_string()),
        };

        assert_eq!(opts.config_ref(), Some("/custom/path"));
        assert_eq!(opts.base_url_ref(), Some("http://localhost:8080"));
    }

    #[test]
    fn test_global_options_none_accessors() {
        let opts = GlobalOptions {
            format: OutputFormat::Table,
            config: None,
            key_source: KeySource::Prompt,
            base_url: None,
        };

        assert_eq!(opts.config_ref(), None);
        assert_eq!(opts.base_url_ref(), None);
    }
}
