use serde::{Deserialize, Serialize};

use crate::model::{AssignmentRecord, EntityId};

/// Who serves the most customers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "agent_id")]
pub enum Outcome {
    /// Exactly one agent has the strictly largest count.
    Winner(EntityId),
    /// No agents, or several agents share the largest count (zero included).
    NoUniqueWinner,
}

impl Outcome {
    /// Integer form used on the wire when there is no unique winner.
    pub const SENTINEL: EntityId = 0;

    /// The winner's id, or [`Outcome::SENTINEL`].
    #[must_use]
    pub const fn agent_id(self) -> EntityId {
        match self {
            Self::Winner(id) => id,
            Self::NoUniqueWinner => Self::SENTINEL,
        }
    }

    #[must_use]
    pub const fn is_winner(self) -> bool {
        matches!(self, Self::Winner(_))
    }
}

impl From<Outcome> for EntityId {
    fn from(outcome: Outcome) -> Self {
        outcome.agent_id()
    }
}

/// Pick the agent with the strictly largest customer count.
#[must_use]
pub fn aggregate(records: &[AssignmentRecord]) -> Outcome {
    let max = records
        .iter()
        .map(|r| r.customers_quantity)
        .max()
        .unwrap_or(0);

    let mut at_max = records.iter().filter(|r| r.customers_quantity == max);
    match (at_max.next(), at_max.next()) {
        (Some(only), None) => Outcome::Winner(only.agent_id),
        _ => Outcome::NoUniqueWinner,
    }
}
