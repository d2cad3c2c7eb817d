//! Seeded roster synthesis.

use csb_core::{Entity, EntityId, away_limit};
use serde::{Deserialize, Serialize};

use crate::rng::DeterministicRng;

/// One balancing input, reproducible from its seed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    pub seed: u64,
    pub agents: Vec<Entity>,
    pub customers: Vec<Entity>,
    pub away: Vec<EntityId>,
}

impl Roster {
    /// Whether the away list exceeds half of the roster.
    #[must_use]
    pub const fn is_overfull(&self) -> bool {
        self.away.len() > away_limit(self.agents.len())
    }
}

/// Shape parameters for generated rosters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterShape {
    pub max_agents: usize,
    pub max_customers: usize,
    /// Scores are integers in `[0, max_score]`; a small range forces ties.
    pub max_score: u32,
    /// Chance (percent) of an away list longer than the limit.
    pub overfull_percent: u8,
}

impl Default for RosterShape {
    fn default() -> Self {
        Self {
            max_agents: 12,
            max_customers: 40,
            max_score: 30,
            overfull_percent: 10,
        }
    }
}

/// Build the roster for `seed`.
#[must_use]
pub fn generate_roster(seed: u64, shape: &RosterShape) -> Roster {
    let mut rng = DeterministicRng::new(seed);

    let agent_count = rng.next_len(shape.max_agents);
    let customer_count = rng.next_len(shape.max_customers);
    let agents = entities(&mut rng, agent_count, shape.max_score);
    let customers = entities(&mut rng, customer_count, shape.max_score);

    let limit = away_limit(agent_count);
    let away_count = if rng.hit_rate_percent(shape.overfull_percent) {
        limit + 1 + rng.next_len(2)
    } else {
        rng.next_len(limit)
    };

    // Ids up to two past the roster so some away entries match nobody.
    let id_space = u64::try_from(agent_count).unwrap_or(u64::MAX - 2) + 2;
    let away = (0..away_count)
        .map(|_| EntityId::try_from(rng.next_bounded(id_space) + 1).unwrap_or(EntityId::MAX))
        .collect();

    Roster {
        seed,
        agents,
        customers,
        away,
    }
}

fn entities(rng: &mut DeterministicRng, count: usize, max_score: u32) -> Vec<Entity> {
    (1..)
        .take(count)
        .map(|id| {
            let score = rng.next_bounded(u64::from(max_score) + 1);
            let score = u32::try_from(score).unwrap_or(max_score);
            Entity::new(id, f64::from(score))
        })
        .collect()
}
