#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::utils::error::{QuestError, Result};
#[cfg(feature = "cli")]
use crate::utils::validation::Validate;
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "stat-quest")]
#[command(about = "Materialize game statistics API payloads into typed objects")]
pub struct CliConfig {
    /// Type to materialize a local payload into (e.g. ChampionMastery)
    #[arg(long = "type")]
    pub type_name: Option<String>,

    /// JSON payload file, or '-' for stdin
    #[arg(short, long)]
    pub input: Option<String>,

    /// API endpoint to call, as group.method (e.g. summoner.name)
    #[arg(short, long)]
    pub endpoint: Option<String>,

    /// Path parameter for the endpoint, as name=value (repeatable)
    #[arg(short, long = "param")]
    pub params: Vec<String>,

    /// Region or region alias (e.g. euw, north-america)
    #[arg(short, long)]
    pub region: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// API key sent with every request
    #[arg(long, env = "STAT_QUEST_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Override the API base URL ({platform} is replaced by the region)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// List the known types and endpoints, then exit
    #[arg(long)]
    pub list_types: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if self.list_types {
            return Ok(());
        }

        match (&self.input, &self.endpoint) {
            (Some(_), Some(_)) => Err(QuestError::ConfigValidationError {
                field: "input".to_string(),
                message: "--input and --endpoint cannot be used together".to_string(),
            }),
            (None, None) => Err(QuestError::MissingConfigError {
                field: "--input or --endpoint".to_string(),
            }),
            (Some(_), None) if self.type_name.is_none() => Err(QuestError::MissingConfigError {
                field: "--type (required with --input)".to_string(),
            }),
            _ => Ok(()),
        }
    }
}
