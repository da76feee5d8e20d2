use anyhow::Result;
use std::path::PathBuf;
use tempfile::TempDir;
use villa_tracker::core::summary::{render_text, summarize};
use villa_tracker::utils::validation::Validate;
use villa_tracker::{CatalogConfig, StayLedger, StayPlan, TrackerError, VillaCatalog};

fn demo(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("demos")
        .join(file)
}

#[test]
fn test_demo_catalog_matches_built_in_villas() -> Result<()> {
    let config = CatalogConfig::from_file(demo("villas.toml"))?;
    config.validate()?;
    assert!(config.policy().enforce_date_window);
    assert_eq!(config.into_catalog()?, VillaCatalog::estate_2025());
    Ok(())
}

#[test]
fn test_demo_plan_applies_with_one_rejection() -> Result<()> {
    let config = CatalogConfig::from_file(demo("villas.toml"))?;
    let policy = config.policy();
    let mut ledger = StayLedger::new(config.into_catalog()?).with_policy(policy);

    let plan = StayPlan::from_file(demo("stays.toml"))?;
    let rejected = plan
        .stays
        .into_iter()
        .filter(|draft| ledger.add_entry(draft.clone()).is_err())
        .count();
    assert_eq!(rejected, 1);
    assert_eq!(ledger.len(), 3);

    let summaries = summarize(&ledger);
    assert_eq!(summaries[0].occupancy, 12);
    assert_eq!(summaries[0].remaining, 0);
    assert_eq!(summaries[1].occupancy, 5);

    let text = render_text(&summaries);
    assert!(text.contains("Dates Available: June 29 – July 11, 2025"));
    assert!(text.contains("Notes: Arriving by train from Naples"));
    Ok(())
}

#[test]
fn test_duplicate_villa_names_are_rejected() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("villas.toml");
    let single = r#"
[[villas]]
name = "Villa Carina"
location = "Island of Ischia, Campania"
available_from = "2025-06-29"
available_until = "2025-07-11"
max_guests = 12
url = "https://emmavillas.com/en/Campania/villa-carina-12"
details = ""
"#;
    std::fs::write(&path, format!("{}{}", single, single))?;

    let config = CatalogConfig::from_file(&path)?;
    let err = config.validate().unwrap_err();
    assert!(matches!(
        err,
        TrackerError::InvalidConfigValueError { ref field, .. } if field == "villas.name"
    ));
    assert!(config.into_catalog().is_err());
    Ok(())
}

#[test]
fn test_missing_file_is_io_error() {
    let err = CatalogConfig::from_file("/nonexistent/villas.toml").unwrap_err();
    assert!(matches!(err, TrackerError::IoError(_)));
    assert_eq!(err.exit_code(), 1);
}
