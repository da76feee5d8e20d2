use clap::Parser;
use villa_tracker::core::summary::{render_text, summarize};
use villa_tracker::utils::{logger, validation::Validate};
use villa_tracker::{CliConfig, StayLedger, StayPlan, TrackerError};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting villa-tracker");
    tracing::debug!("CLI config: {:?}", config);

    match run(&config) {
        Ok(rejected) if rejected > 0 => {
            eprintln!("⚠️  {} stay(s) were rejected, see messages above", rejected);
            std::process::exit(2);
        }
        Ok(_) => {}
        Err(e) => {
            tracing::error!("❌ {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}

/// Returns how many plan entries were rejected.
fn run(config: &CliConfig) -> Result<usize, TrackerError> {
    config.validate()?;

    let catalog_config = config.load_catalog_config()?;
    catalog_config.validate()?;
    let policy = catalog_config.policy();
    let mut ledger = StayLedger::new(catalog_config.into_catalog()?).with_policy(policy);

    let plan = match &config.plan {
        Some(path) => {
            tracing::info!("📁 Loading stay plan from: {}", path);
            StayPlan::from_file(path)?
        }
        None => StayPlan::default(),
    };

    let mut rejected = 0;
    for draft in plan.stays {
        let name = draft.name.clone();
        if let Err(e) = ledger.add_entry(draft) {
            rejected += 1;
            eprintln!("❌ {}: {}", display_name(&name), e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
        }
    }
    tracing::info!(
        "✅ {} stays recorded, {} rejected",
        ledger.len(),
        rejected
    );

    let summaries = summarize(&ledger);
    if config.json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
    } else {
        print!("{}", render_text(&summaries));
    }

    Ok(rejected)
}

fn display_name(name: &str) -> &str {
    if name.trim().is_empty() {
        "(unnamed)"
    } else {
        name
    }
}
