//! The balancing pipeline: validate, filter, sort, assign, aggregate.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::aggregate::{Outcome, aggregate};
use crate::assign::assign_ranges;
use crate::availability::{filter_available, validate_away_count};
use crate::config::BalanceConfig;
use crate::error::BalanceError;
use crate::model::{Agent, AssignmentRecord, Customer, EntityId};
use crate::sort::merge_sort_by_score;

/// Per-agent counts plus the aggregate, from one balancing run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceReport {
    /// One record per available agent, in ascending threshold order.
    pub records: Vec<AssignmentRecord>,
    pub outcome: Outcome,
}

/// Runs the balancing pipeline with a fixed [`BalanceConfig`].
///
/// Holds no state besides its config; one instance may serve any number of
/// concurrent calls.
#[derive(Debug, Clone, Default)]
pub struct Balancer {
    config: BalanceConfig,
}

impl Balancer {
    #[must_use]
    pub const fn new(config: BalanceConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &BalanceConfig {
        &self.config
    }

    /// Assign `customers` to the available `agents` and find the busiest one.
    ///
    /// # Errors
    ///
    /// Returns [`BalanceError::InvalidAwayCount`] when `away` is longer than
    /// half of `agents` (rounded down). Nothing is sorted or assigned in that
    /// case.
    #[instrument(
        skip_all,
        fields(
            agents = agents.len(),
            customers = customers.len(),
            away = away.len(),
            counting = ?self.config.counting,
        )
    )]
    pub fn run(
        &self,
        agents: &[Agent],
        customers: &[Customer],
        away: &[EntityId],
    ) -> Result<BalanceReport, BalanceError> {
        validate_away_count(agents.len(), away.len())?;

        let available = filter_available(agents, away);
        let sorted_agents = merge_sort_by_score(&available);
        let sorted_customers = merge_sort_by_score(customers);
        debug!(available = sorted_agents.len(), "sorted roster");

        let records = assign_ranges(&sorted_agents, &sorted_customers, self.config.counting);
        let outcome = aggregate(&records);
        debug!(?outcome, "balanced");

        Ok(BalanceReport { records, outcome })
    }
}

/// Id of the agent serving the most customers, or `0` when there is no
/// unique one.
///
/// Uses the default (reference) counting rule.
///
/// # Errors
///
/// Returns [`BalanceError::InvalidAwayCount`] when `away` is longer than
/// half of `agents` (rounded down).
pub fn balance(
    agents: &[Agent],
    customers: &[Customer],
    away: &[EntityId],
) -> Result<EntityId, BalanceError> {
    Balancer::default()
        .run(agents, customers, away)
        .map(|report| report.outcome.agent_id())
}
