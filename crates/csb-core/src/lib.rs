#![forbid(unsafe_code)]
//! csb-core library.
//!
//! Matches customers to the agent whose score threshold is the smallest one at
//! or above the customer's score, then reports which agent serves the most
//! customers.
//!
//! ```
//! use csb_core::{balance, entities_from_scores};
//!
//! let agents = entities_from_scores(&[60.0, 20.0, 95.0, 75.0]);
//! let customers = entities_from_scores(&[90.0, 20.0, 70.0, 40.0, 60.0, 10.0]);
//! assert_eq!(balance(&agents, &customers, &[2, 4]), Ok(1));
//! ```
//!
//! # Conventions
//!
//! - **Errors**: [`BalanceError`] for balancing failures, `anyhow::Result` for
//!   config loading.
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).

pub mod aggregate;
pub mod assign;
pub mod availability;
pub mod balancer;
pub mod config;
pub mod error;
pub mod model;
pub mod sort;

pub use aggregate::{Outcome, aggregate};
pub use assign::{RangeCounting, assign_ranges};
pub use availability::{away_limit, filter_available, validate_away_count};
pub use balancer::{BalanceReport, Balancer, balance};
pub use config::{BalanceConfig, load_config};
pub use error::{BalanceError, ErrorCode};
pub use model::{Agent, AssignmentRecord, Customer, Entity, EntityId, Scored, entities_from_scores};
pub use sort::merge_sort_by_score;
