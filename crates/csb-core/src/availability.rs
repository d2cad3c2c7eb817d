//! Away-list validation and filtering.

use std::collections::HashSet;

use tracing::debug;

use crate::error::BalanceError;
use crate::model::{Agent, EntityId};

/// Largest away list allowed for a roster of `agent_count` agents.
#[must_use]
pub const fn away_limit(agent_count: usize) -> usize {
    agent_count / 2
}

/// Reject away lists longer than half of the full roster (rounded down).
///
/// `agent_count` is the unfiltered roster size and `away_count` the raw away
/// list length, duplicates and unknown ids included.
///
/// # Errors
///
/// Returns [`BalanceError::InvalidAwayCount`] when
/// `away_count > agent_count / 2`.
pub fn validate_away_count(agent_count: usize, away_count: usize) -> Result<(), BalanceError> {
    let limit = away_limit(agent_count);
    if away_count > limit {
        debug!(agent_count, away_count, limit, "rejecting away list");
        return Err(BalanceError::InvalidAwayCount {
            away: away_count,
            agents: agent_count,
            limit,
        });
    }
    Ok(())
}

/// Agents whose id is not in `away`, in input order.
///
/// Away ids that match no agent are ignored. Duplicate agents are kept.
#[must_use]
pub fn filter_available(agents: &[Agent], away: &[EntityId]) -> Vec<Agent> {
    let away: HashSet<EntityId> = away.iter().copied().collect();
    agents
        .iter()
        .filter(|agent| !away.contains(&agent.id))
        .copied()
        .collect()
}
