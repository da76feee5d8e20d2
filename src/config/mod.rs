pub mod catalog_config;
#[cfg(feature = "cli")]
pub mod cli;

pub use catalog_config::{CatalogConfig, StayPlan};
#[cfg(feature = "cli")]
pub use cli::CliConfig;
