use crate::config::catalog_config::CatalogConfig;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "villa-tracker")]
#[command(about = "Track which family members stay at which villa, and when")]
pub struct CliConfig {
    /// Villa catalog TOML file (built-in Estate 2025 villas when omitted)
    #[arg(short, long)]
    pub catalog: Option<String>,

    /// Stay plan TOML file with [[stays]] entries to add
    #[arg(short, long)]
    pub plan: Option<String>,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn load_catalog_config(&self) -> Result<CatalogConfig> {
        match &self.catalog {
            Some(path) => {
                tracing::info!("📁 Loading villa catalog from: {}", path);
                CatalogConfig::from_file(path)
            }
            None => {
                tracing::debug!("Using built-in villa catalog");
                Ok(CatalogConfig::default())
            }
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.catalog {
            validate_non_empty_string("--catalog", path)?;
        }
        if let Some(path) = &self.plan {
            validate_non_empty_string("--plan", path)?;
        }
        Ok(())
    }
}
