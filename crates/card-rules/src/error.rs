//! Error types for the card-rules crate.

use thiserror::Error;

/// Raised when a hiring-trait policy name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown hiring trait policy '{value}': expected 'up-to-three-words' or 'single-word'")]
pub struct PolicyParseError {
    /// The rejected input.
    pub value: String,
}

/// Raised when a vote transition is requested from the wrong state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VoteTransitionError {
    /// `confirm` or `rollback` was called while no vote was in flight.
    #[error("no vote is in flight for this submission")]
    NotVoting,
}
