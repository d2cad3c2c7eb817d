//! Range assignment of sorted customers to sorted agent tiers.
//!
//! Agents are visited in ascending threshold order while a cursor walks
//! forward through the sorted customers. For each threshold `t`, `cut` is the
//! index of the first customer scoring strictly above `t` (`len` if none), and
//! the agent is credited with the block between the cursor and `cut`.
//!
//! Two counting rules exist:
//!
//! - [`RangeCounting::Reference`] is the long-standing behavior and the
//!   default. It credits `(cut - 1) - cursor`, leaving out the boundary
//!   customer at `cut - 1`. When every customer fits under `t` the block end
//!   sits at `len - 2`, so the last two customers are left out, and every
//!   later agent gets zero.
//! - [`RangeCounting::Corrected`] credits `cut - cursor`: exactly the
//!   customers scoring in `(previous threshold, t]`.
//!
//! Customers scoring below every threshold, and customers past the last
//! block, are never credited to anyone.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::model::{Agent, AssignmentRecord, Customer};

/// Which block-size rule the range assigner applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeCounting {
    /// Boundary-excluding counts, compatible with existing consumers.
    #[default]
    Reference,
    /// Inclusive counts.
    Corrected,
}

/// Credit each agent with its block of customers.
///
/// Both slices must already be sorted ascending by score. Returns one record
/// per agent, in agent order.
#[must_use]
pub fn assign_ranges(
    sorted_agents: &[Agent],
    sorted_customers: &[Customer],
    counting: RangeCounting,
) -> Vec<AssignmentRecord> {
    let len = sorted_customers.len();
    let mut cursor = Cursor::At(0);

    sorted_agents
        .iter()
        .map(|agent| {
            let cut = sorted_customers.partition_point(|c| c.score <= agent.score);
            let customers_quantity = match counting {
                RangeCounting::Reference => cursor.advance_reference(cut, len),
                RangeCounting::Corrected => cursor.advance_corrected(cut),
            };
            trace!(
                agent_id = agent.id,
                threshold = agent.score,
                cut,
                customers_quantity,
                "assigned block"
            );
            AssignmentRecord {
                agent_id: agent.id,
                customers_quantity,
            }
        })
        .collect()
}

/// Lower bound of the next block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cursor {
    At(usize),
    /// Every customer already fell under an earlier threshold.
    Exhausted,
}

impl Cursor {
    fn advance_reference(&mut self, cut: usize, len: usize) -> usize {
        let Self::At(start) = *self else {
            return 0;
        };

        if cut == len {
            *self = Self::Exhausted;
            return len.saturating_sub(2).saturating_sub(start);
        }
        if cut == 0 {
            return 0;
        }

        *self = Self::At(cut);
        (cut - 1).saturating_sub(start)
    }

    fn advance_corrected(&mut self, cut: usize) -> usize {
        let start = match *self {
            Self::At(start) => start,
            Self::Exhausted => cut,
        };
        *self = Self::At(cut.max(start));
        cut.saturating_sub(start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Entity, entities_from_scores};

    fn quantities(records: &[AssignmentRecord]) -> Vec<usize> {
        records.iter().map(|r| r.customers_quantity).collect()
    }

    fn ten_customers() -> Vec<Entity> {
        entities_from_scores(&[10.0, 10.0, 10.0, 20.0, 20.0, 20.0, 30.0, 30.0, 30.0, 60.0])
    }

    #[test]
    fn reference_excludes_boundary_customer() {
        let agents = [Entity::new(4, 11.0), Entity::new(5, 21.0), Entity::new(6, 31.0)];
        let records = assign_ranges(&agents, &ten_customers(), RangeCounting::Reference);
        assert_eq!(quantities(&records), vec![2, 2, 2]);
        assert_eq!(records[0].agent_id, 4);
    }

    #[test]
    fn corrected_counts_whole_block() {
        let agents = [Entity::new(4, 11.0), Entity::new(5, 21.0), Entity::new(6, 31.0)];
        let records = assign_ranges(&agents, &ten_customers(), RangeCounting::Corrected);
        assert_eq!(quantities(&records), vec![3, 3, 3]);
    }

    #[test]
    fn threshold_below_every_customer_gets_nothing() {
        let agents = [Entity::new(1, 1.0), Entity::new(2, 2.0), Entity::new(3, 11.0)];
        let reference = assign_ranges(&agents, &ten_customers(), RangeCounting::Reference);
        assert_eq!(quantities(&reference), vec![0, 0, 2]);

        let corrected = assign_ranges(&agents, &ten_customers(), RangeCounting::Corrected);
        assert_eq!(quantities(&corrected), vec![0, 0, 3]);
    }

    #[test]
    fn reference_all_fit_drops_last_two_then_exhausts() {
        let agents = [Entity::new(3, 88.0), Entity::new(2, 99.0), Entity::new(1, 100.0)];
        let records = assign_ranges(&agents, &ten_customers(), RangeCounting::Reference);
        assert_eq!(quantities(&records), vec![8, 0, 0]);
    }

    #[test]
    fn reference_all_fit_after_a_partial_block() {
        // sorted customers: 10 20 40 60 70 90
        let customers = [10.0, 20.0, 40.0, 60.0, 70.0, 90.0].map(|s| Entity::new(1, s));
        let agents = [Entity::new(1, 60.0), Entity::new(3, 95.0)];
        let records = assign_ranges(&agents, &customers, RangeCounting::Reference);
        // 60 -> cut 4, credits indices 0..3; 95 -> block end at len-2 == cursor
        assert_eq!(quantities(&records), vec![3, 0]);

        let records = assign_ranges(&agents, &customers, RangeCounting::Corrected);
        assert_eq!(quantities(&records), vec![4, 2]);
    }

    #[test]
    fn shared_threshold_second_agent_gets_nothing() {
        let agents = [Entity::new(1, 20.0), Entity::new(2, 20.0)];
        let reference = assign_ranges(&agents, &ten_customers(), RangeCounting::Reference);
        assert_eq!(quantities(&reference), vec![5, 0]);

        let corrected = assign_ranges(&agents, &ten_customers(), RangeCounting::Corrected);
        assert_eq!(quantities(&corrected), vec![6, 0]);
    }

    #[test]
    fn empty_customers_credit_zero() {
        let agents = entities_from_scores(&[1.0, 2.0]);
        for counting in [RangeCounting::Reference, RangeCounting::Corrected] {
            let records = assign_ranges(&agents, &[], counting);
            assert_eq!(quantities(&records), vec![0, 0]);
        }
    }

    #[test]
    fn single_customer_that_fits_is_not_counted_by_reference() {
        let agents = [Entity::new(1, 50.0)];
        let customers = [Entity::new(1, 10.0)];
        assert_eq!(
            quantities(&assign_ranges(&agents, &customers, RangeCounting::Reference)),
            vec![0]
        );
        assert_eq!(
            quantities(&assign_ranges(&agents, &customers, RangeCounting::Corrected)),
            vec![1]
        );
    }

    #[test]
    fn no_agents_no_records() {
        assert!(assign_ranges(&[], &ten_customers(), RangeCounting::Reference).is_empty());
    }

    #[test]
    fn counting_parses_snake_case() {
        #[derive(Deserialize)]
        struct Wrapper {
            counting: RangeCounting,
        }
        let parsed: Wrapper = toml::from_str("counting = \"corrected\"").expect("parse counting");
        assert_eq!(parsed.counting, RangeCounting::Corrected);
    }
}
