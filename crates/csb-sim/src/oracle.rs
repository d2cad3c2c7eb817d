use std::collections::HashSet;

use csb_core::{
    BalanceConfig, BalanceError, BalanceReport, Balancer, EntityId, Outcome, RangeCounting,
    away_limit, filter_available, merge_sort_by_score,
};
use serde::{Deserialize, Serialize};

use crate::roster::Roster;

// ── Core result types ─────────────────────────────────────────────────────────

/// Oracle result for an invariant check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OracleResult {
    /// `true` iff no violations were found.
    pub passed: bool,
    pub violations: Vec<InvariantViolation>,
}

impl OracleResult {
    #[must_use]
    const fn pass() -> Self {
        Self {
            passed: true,
            violations: Vec::new(),
        }
    }

    #[must_use]
    fn from_violations(violations: Vec<InvariantViolation>) -> Self {
        Self {
            passed: violations.is_empty(),
            violations,
        }
    }

    /// Merge another result into this one (failures accumulate).
    #[must_use]
    fn merge(mut self, other: Self) -> Self {
        if !other.passed {
            self.passed = false;
            self.violations.extend(other.violations);
        }
        self
    }
}

// ── Invariant violation diagnostics ──────────────────────────────────────────

/// Diagnostic information for a single failed invariant check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InvariantViolation {
    /// An away list over the limit was accepted.
    AcceptedOverfullAway { away: usize, limit: usize },

    /// An away list within the limit was rejected.
    RejectedValidAway { away: usize, limit: usize },

    /// The winner is not an available agent.
    ForeignWinner { agent_id: EntityId },

    /// The outcome disagrees with the per-agent counts.
    OutcomeMismatch {
        outcome: Outcome,
        max: usize,
        /// Agents holding `max`, in record order.
        at_max: Vec<EntityId>,
    },

    /// Record count differs from the number of available agents.
    RecordCount { expected: usize, actual: usize },

    /// More customers credited than exist.
    OverCredited { credited: usize, customers: usize },

    /// Sorted output is out of order at `position`.
    Unsorted { position: usize },

    /// Sorted output is not a permutation of its input.
    SortLostEntities { expected: usize, actual: usize },

    /// Corrected counting credited an agent less than reference counting.
    CorrectedUndercount {
        agent_id: EntityId,
        reference: usize,
        corrected: usize,
    },

    /// Corrected counts do not add up to the customers under the top tier.
    CoverageMismatch { expected: usize, actual: usize },
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AcceptedOverfullAway { away, limit } => {
                write!(f, "accepted {away} away agents over limit {limit}")
            }
            Self::RejectedValidAway { away, limit } => {
                write!(f, "rejected {away} away agents within limit {limit}")
            }
            Self::ForeignWinner { agent_id } => {
                write!(f, "winner {agent_id} is not an available agent")
            }
            Self::OutcomeMismatch {
                outcome,
                max,
                at_max,
            } => write!(f, "outcome {outcome:?} but agents {at_max:?} hold max {max}"),
            Self::RecordCount { expected, actual } => {
                write!(f, "{actual} records for {expected} available agents")
            }
            Self::OverCredited {
                credited,
                customers,
            } => write!(f, "credited {credited} of {customers} customers"),
            Self::Unsorted { position } => write!(f, "sort out of order at {position}"),
            Self::SortLostEntities { expected, actual } => {
                write!(f, "sort returned {actual} ids, expected {expected}")
            }
            Self::CorrectedUndercount {
                agent_id,
                reference,
                corrected,
            } => write!(
                f,
                "agent {agent_id}: corrected {corrected} < reference {reference}"
            ),
            Self::CoverageMismatch { expected, actual } => {
                write!(f, "corrected counts sum to {actual}, expected {expected}")
            }
        }
    }
}

// ── Oracle ────────────────────────────────────────────────────────────────────

/// Checks balancing invariants against one roster.
///
/// # Invariants checked
///
/// 1. **Validation** (`check_validation`) — rejection iff the away list is
///    over the limit.
/// 2. **Outcome** (`check_outcome`) — the winner is available and is the
///    unique holder of the max count, or there is no unique holder.
/// 3. **Sort** (`check_sort`) — both sorted lists are ascending permutations.
/// 4. **Counting** (`check_counting`) — corrected counts dominate reference
///    counts and cover everyone under the top tier.
pub struct BalanceOracle;

impl BalanceOracle {
    /// Run every check for `roster`, balancing with `counting`.
    #[must_use]
    pub fn check_all(roster: &Roster, counting: RangeCounting) -> OracleResult {
        let balancer = Balancer::new(BalanceConfig { counting });
        let result = balancer.run(&roster.agents, &roster.customers, &roster.away);

        let validation = Self::check_validation(roster, result.as_ref().map(|_| ()));
        let Ok(report) = result else {
            return validation;
        };

        validation
            .merge(Self::check_outcome(roster, &report))
            .merge(Self::check_sort(roster))
            .merge(Self::check_counting(roster))
    }

    // ── Invariant 1: Validation ──────────────────────────────────────────────

    /// Rejection must happen exactly when the away list is over the limit.
    #[must_use]
    pub fn check_validation(roster: &Roster, result: Result<(), &BalanceError>) -> OracleResult {
        let away = roster.away.len();
        let limit = away_limit(roster.agents.len());
        let violation = match (roster.is_overfull(), result) {
            (true, Ok(())) => Some(InvariantViolation::AcceptedOverfullAway { away, limit }),
            (false, Err(_)) => Some(InvariantViolation::RejectedValidAway { away, limit }),
            _ => None,
        };
        violation.map_or_else(OracleResult::pass, |v| OracleResult::from_violations(vec![v]))
    }

    // ── Invariant 2: Outcome ─────────────────────────────────────────────────

    #[must_use]
    pub fn check_outcome(roster: &Roster, report: &BalanceReport) -> OracleResult {
        let available = filter_available(&roster.agents, &roster.away);
        let available_ids: HashSet<EntityId> = available.iter().map(|a| a.id).collect();
        let mut violations = Vec::new();

        if report.records.len() != available.len() {
            violations.push(InvariantViolation::RecordCount {
                expected: available.len(),
                actual: report.records.len(),
            });
        }

        let credited: usize = report.records.iter().map(|r| r.customers_quantity).sum();
        if credited > roster.customers.len() {
            violations.push(InvariantViolation::OverCredited {
                credited,
                customers: roster.customers.len(),
            });
        }

        let max = report
            .records
            .iter()
            .map(|r| r.customers_quantity)
            .max()
            .unwrap_or(0);
        let at_max: Vec<EntityId> = report
            .records
            .iter()
            .filter(|r| r.customers_quantity == max)
            .map(|r| r.agent_id)
            .collect();

        let consistent = match report.outcome {
            Outcome::Winner(id) => at_max == [id],
            Outcome::NoUniqueWinner => at_max.len() != 1,
        };
        if !consistent {
            violations.push(InvariantViolation::OutcomeMismatch {
                outcome: report.outcome,
                max,
                at_max,
            });
        }

        if let Outcome::Winner(agent_id) = report.outcome
            && !available_ids.contains(&agent_id)
        {
            violations.push(InvariantViolation::ForeignWinner { agent_id });
        }

        OracleResult::from_violations(violations)
    }

    // ── Invariant 3: Sort ────────────────────────────────────────────────────

    #[must_use]
    pub fn check_sort(roster: &Roster) -> OracleResult {
        let mut violations = Vec::new();

        for list in [&roster.agents, &roster.customers] {
            let sorted = merge_sort_by_score(list);

            if let Some(position) = sorted.windows(2).position(|w| w[0].score > w[1].score) {
                violations.push(InvariantViolation::Unsorted { position });
            }

            let mut before: Vec<EntityId> = list.iter().map(|e| e.id).collect();
            let mut after: Vec<EntityId> = sorted.iter().map(|e| e.id).collect();
            before.sort_unstable();
            after.sort_unstable();
            if before != after {
                violations.push(InvariantViolation::SortLostEntities {
                    expected: before.len(),
                    actual: after.len(),
                });
            }
        }

        OracleResult::from_violations(violations)
    }

    // ── Invariant 4: Counting rules ──────────────────────────────────────────

    /// Compare reference and corrected counts for the same roster.
    #[must_use]
    pub fn check_counting(roster: &Roster) -> OracleResult {
        let run = |counting| {
            Balancer::new(BalanceConfig { counting }).run(
                &roster.agents,
                &roster.customers,
                &roster.away,
            )
        };
        let (Ok(reference), Ok(corrected)) =
            (run(RangeCounting::Reference), run(RangeCounting::Corrected))
        else {
            return OracleResult::pass();
        };

        let mut violations: Vec<InvariantViolation> = reference
            .records
            .iter()
            .zip(&corrected.records)
            .filter(|(r, c)| r.customers_quantity > c.customers_quantity)
            .map(|(r, c)| InvariantViolation::CorrectedUndercount {
                agent_id: r.agent_id,
                reference: r.customers_quantity,
                corrected: c.customers_quantity,
            })
            .collect();

        let top_tier = filter_available(&roster.agents, &roster.away)
            .iter()
            .map(|a| a.score)
            .reduce(f64::max);
        let expected = top_tier.map_or(0, |top| {
            roster.customers.iter().filter(|c| c.score <= top).count()
        });
        let actual: usize = corrected.records.iter().map(|r| r.customers_quantity).sum();
        if expected != actual {
            violations.push(InvariantViolation::CoverageMismatch { expected, actual });
        }

        OracleResult::from_violations(violations)
    }
}
