#![forbid(unsafe_code)]

use std::env;
use std::path::PathBuf;

use anyhow::{Result, bail};
use csb_sim::{CampaignConfig, load_campaign_config, run_campaign};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> Result<()> {
    init_tracing();

    let config = match env::var_os("CSB_SIM_CONFIG") {
        Some(path) => load_campaign_config(&PathBuf::from(path))?,
        None => CampaignConfig::default(),
    };

    let report = run_campaign(&config)?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    if !report.all_passed() {
        bail!(
            "{} of {} seeds failed (first: {:?})",
            report.failures.len(),
            report.seeds_run,
            report.first_failure
        );
    }
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("CSB_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if env::var("DEBUG").is_ok() {
            "csb_core=debug,csb_sim=debug,info"
        } else {
            "csb_sim=info,warn"
        })
    });

    let format = env::var("CSB_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry.with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr)).init();
        }
        _ => {
            registry.with(fmt::layer().compact().with_writer(std::io::stderr)).init();
        }
    }
}
