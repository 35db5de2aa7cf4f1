//! Common CLI types shared across commands

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Table format - one row per entry
    #[default]
    Table,
    /// JSON format - structured for scripts
    Json,
}

/// Where the Dashboard API key comes from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum KeySource {
    /// Prompt for the key without echo, asking again if it is rejected
    #[default]
    Prompt,
    /// Read the key from the configured environment variable
    Env,
}
