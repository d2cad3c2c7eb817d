use thiserror::Error;

/// Machine-readable error codes for callers that branch on failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    InvalidAwayCount,
}

impl ErrorCode {
    /// Stable code identifier (`E####`) for machine parsing.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::InvalidAwayCount => "E1001",
        }
    }

    /// Short human-facing summary for logs and terminal output.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::InvalidAwayCount => "Too many agents away",
        }
    }

    /// Optional remediation hint.
    #[must_use]
    pub const fn hint(self) -> Option<&'static str> {
        match self {
            Self::InvalidAwayCount => {
                Some("At most half of the agents (rounded down) may be marked away.")
            }
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Balancing error.
///
/// Raised before any sorting or assignment happens, so no partial result
/// exists when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BalanceError {
    /// The away list is longer than half of the full agent roster.
    #[error("{away} agents away exceeds the limit of {limit} for {agents} agents")]
    InvalidAwayCount {
        /// Length of the away list, duplicates included.
        away: usize,
        /// Unfiltered agent count.
        agents: usize,
        /// `agents / 2`, rounded down.
        limit: usize,
    },
}

impl BalanceError {
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidAwayCount { .. } => ErrorCode::InvalidAwayCount,
        }
    }
}
