//! Entities and the derived per-agent assignment records.
//!
//! Agents and customers share one shape: an id that is unique within its own
//! list and a real-valued score. For an agent the score is its capacity
//! threshold, the inclusive upper bound of the customer scores it may serve.

use serde::{Deserialize, Serialize};

/// Identifier of an agent or customer. Unique within its own list only.
pub type EntityId = u32;

/// An id/score pair. Used for both agents and customers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub score: f64,
}

impl Entity {
    #[must_use]
    pub const fn new(id: EntityId, score: f64) -> Self {
        Self { id, score }
    }
}

/// A customer-success representative; `score` is its tier threshold.
pub type Agent = Entity;

/// A customer to be matched to exactly one agent tier.
pub type Customer = Entity;

/// Anything that can be ordered by a real-valued score.
pub trait Scored {
    fn score(&self) -> f64;
}

impl Scored for Entity {
    fn score(&self) -> f64 {
        self.score
    }
}

/// How many customers one surviving agent ended up with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentRecord {
    pub agent_id: EntityId,
    pub customers_quantity: usize,
}

/// Build entities whose ids are their 1-based positions in `scores`.
///
/// Rosters are usually described as a bare list of scores; this is the
/// canonical way to turn one into entities.
#[must_use]
pub fn entities_from_scores(scores: &[f64]) -> Vec<Entity> {
    scores
        .iter()
        .zip(1..)
        .map(|(&score, id)| Entity { id, score })
        .collect()
}
