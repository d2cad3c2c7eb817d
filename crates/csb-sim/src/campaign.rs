//! Campaign runner for deterministic balancing campaigns.
//!
//! Executes many seeds, collecting pass/fail results and identifying the first
//! failing seed for replay.

use std::ops::Range;
use std::path::Path;

use anyhow::{Context, Result, bail};
use csb_core::{BalanceConfig, BalanceError, BalanceReport, Balancer, RangeCounting};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::oracle::{BalanceOracle, OracleResult};
use crate::roster::{Roster, RosterShape, generate_roster};

/// Campaign-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CampaignConfig {
    /// Range of seeds to execute, e.g., `0..1000`.
    pub seed_range: Range<u64>,
    /// Counting rule the balancer under test runs with.
    pub counting: RangeCounting,
    #[serde(flatten)]
    pub shape: RosterShape,
}

impl Default for CampaignConfig {
    fn default() -> Self {
        Self {
            seed_range: 0..1_000,
            counting: RangeCounting::Reference,
            shape: RosterShape::default(),
        }
    }
}

impl CampaignConfig {
    /// Parse a TOML document. Missing keys fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if `content` is not valid TOML.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse campaign config")
    }

    /// Validate configuration before running.
    ///
    /// # Errors
    ///
    /// Returns an error if any parameter is out of valid range.
    pub fn validate(&self) -> Result<()> {
        if self.seed_range.is_empty() {
            bail!("seed_range must not be empty");
        }
        if self.shape.overfull_percent > 100 {
            bail!("overfull_percent must be <= 100");
        }
        Ok(())
    }
}

/// Load a campaign config from `path`, or defaults when it does not exist.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_campaign_config(path: &Path) -> Result<CampaignConfig> {
    if !path.exists() {
        return Ok(CampaignConfig::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    toml::from_str::<CampaignConfig>(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

/// Failure details for a single seed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedFailure {
    pub seed: u64,
    pub violations: Vec<String>,
}

/// Aggregate report produced by a campaign run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignReport {
    pub seeds_run: usize,
    pub seeds_passed: usize,
    /// First seed that failed (for prioritized replay).
    pub first_failure: Option<u64>,
    pub failures: Vec<SeedFailure>,
    /// Seeds whose roster was rejected for too many away agents.
    pub rejected_rosters: usize,
    /// Seeds that produced a unique winner.
    pub winners: usize,
}

impl CampaignReport {
    /// True if every seed passed.
    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Everything about one seed, for debugging.
#[derive(Debug, Clone)]
pub struct DetailedTrace {
    pub roster: Roster,
    pub result: Result<BalanceReport, BalanceError>,
    pub oracle: OracleResult,
}

/// Run a full campaign across all seeds in the config.
///
/// # Errors
///
/// Returns an error if config validation fails.
pub fn run_campaign(config: &CampaignConfig) -> Result<CampaignReport> {
    config.validate()?;
    info!(
        seeds = ?config.seed_range,
        counting = ?config.counting,
        "starting campaign"
    );

    let mut report = CampaignReport {
        seeds_run: 0,
        seeds_passed: 0,
        first_failure: None,
        failures: Vec::new(),
        rejected_rosters: 0,
        winners: 0,
    };

    for seed in config.seed_range.clone() {
        let trace = trace_seed(seed, config);
        report.seeds_run += 1;

        match &trace.result {
            Ok(balance) if balance.outcome.is_winner() => report.winners += 1,
            Ok(_) => {}
            Err(_) => report.rejected_rosters += 1,
        }

        if trace.oracle.passed {
            report.seeds_passed += 1;
            continue;
        }

        warn!(seed, violations = trace.oracle.violations.len(), "seed failed");
        report.first_failure.get_or_insert(seed);
        report.failures.push(SeedFailure {
            seed,
            violations: trace
                .oracle
                .violations
                .iter()
                .map(ToString::to_string)
                .collect(),
        });
    }

    info!(
        seeds_run = report.seeds_run,
        seeds_passed = report.seeds_passed,
        "campaign finished"
    );
    Ok(report)
}

/// Run a single seed; `Ok(())` on pass, the oracle result on failure.
///
/// # Errors
///
/// Returns the failing [`OracleResult`] when any invariant is violated.
pub fn run_single_seed(seed: u64, config: &CampaignConfig) -> Result<(), OracleResult> {
    let trace = trace_seed(seed, config);
    if trace.oracle.passed {
        Ok(())
    } else {
        Err(trace.oracle)
    }
}

/// Replay a single seed with full details for debugging.
///
/// # Errors
///
/// Returns an error when config validation fails.
pub fn replay_seed(seed: u64, config: &CampaignConfig) -> Result<DetailedTrace> {
    config.validate()?;
    Ok(trace_seed(seed, config))
}

fn trace_seed(seed: u64, config: &CampaignConfig) -> DetailedTrace {
    let roster = generate_roster(seed, &config.shape);
    let balancer = Balancer::new(BalanceConfig {
        counting: config.counting,
    });
    let result = balancer.run(&roster.agents, &roster.customers, &roster.away);
    let oracle = BalanceOracle::check_all(&roster, config.counting);
    debug!(seed, passed = oracle.passed, "seed checked");

    DetailedTrace {
        roster,
        result,
        oracle,
    }
}
