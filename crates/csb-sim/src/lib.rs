#![forbid(unsafe_code)]
//! csb-sim library.
//!
//! Generates seeded rosters, balances them, and checks the results against
//! an invariant oracle. A failing seed can be replayed with [`replay_seed`].
//!
//! # Conventions
//!
//! - **Errors**: Use `anyhow::Result` for return types.
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).

pub mod campaign;
pub mod oracle;
pub mod rng;
pub mod roster;

pub use campaign::{
    CampaignConfig, CampaignReport, DetailedTrace, SeedFailure, load_campaign_config,
    replay_seed, run_campaign, run_single_seed,
};
pub use oracle::{BalanceOracle, InvariantViolation, OracleResult};
pub use rng::DeterministicRng;
pub use roster::{Roster, RosterShape, generate_roster};
