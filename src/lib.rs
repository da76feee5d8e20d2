pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{CatalogConfig, StayPlan};

pub use crate::core::{
    catalog::VillaCatalog,
    ledger::{LedgerPolicy, StayLedger, VillaOption},
};
pub use crate::domain::model::{EntryId, StayDraft, StayEntry, Villa};
pub use crate::utils::error::{Result, TrackerError, ValidationError};
