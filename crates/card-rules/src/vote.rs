//! Client-side vote state for a single card.
//!
//! A card's vote button moves `NotVoted -> Voting -> Voted`, or back from
//! `Voting` to `NotVoted` when the server rejects the vote. The displayed
//! count is bumped optimistically on [`VoteCast::begin`] and restored on
//! [`VoteCast::rollback`]. A persistent [`VotedMarkers`] cache remembers which
//! cards this browser already voted for; it is advisory and the server never
//! consults it.

use std::collections::HashSet;

use crate::error::VoteTransitionError;

/// Storage key used for a submission's voted marker.
///
/// # Examples
///
/// ```
/// assert_eq!(card_rules::vote::marker_key("abc"), "voted_abc");
/// ```
#[must_use]
pub fn marker_key(submission_id: &str) -> String {
    format!("voted_{submission_id}")
}

/// Persistent record of cards this client has voted for.
pub trait VotedMarkers {
    /// Return `true` when a marker exists for the submission.
    fn has_voted(&self, submission_id: &str) -> bool;

    /// Record that the client voted for the submission.
    fn mark_voted(&mut self, submission_id: &str);

    /// Forget a previously recorded vote.
    fn clear_vote(&mut self, submission_id: &str);
}

/// [`VotedMarkers`] held in memory, keyed by [`marker_key`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryVotedMarkers {
    keys: HashSet<String>,
}

impl InMemoryVotedMarkers {
    /// Create an empty marker set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored markers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Return `true` when no marker is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl VotedMarkers for InMemoryVotedMarkers {
    fn has_voted(&self, submission_id: &str) -> bool {
        self.keys.contains(&marker_key(submission_id))
    }

    fn mark_voted(&mut self, submission_id: &str) {
        self.keys.insert(marker_key(submission_id));
    }

    fn clear_vote(&mut self, submission_id: &str) {
        self.keys.remove(&marker_key(submission_id));
    }
}

/// Where a card's vote button currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteState {
    /// The client has not voted; the button is enabled.
    NotVoted,
    /// A vote request is in flight.
    Voting,
    /// The vote was recorded.
    Voted,
}

/// Side effect the caller should perform after a settled vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteEffect {
    /// Re-fetch the listing so ordering reflects the new count.
    RefreshListing,
    /// Tell the user the vote failed.
    NotifyFailure,
}

/// Vote state and displayed count for one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteCast {
    submission_id: String,
    votes: u64,
    state: VoteState,
}

impl VoteCast {
    /// Rebuild the card state from the server count and local markers.
    ///
    /// # Examples
    ///
    /// ```
    /// use card_rules::vote::{InMemoryVotedMarkers, VoteCast, VoteState, VotedMarkers};
    ///
    /// let mut markers = InMemoryVotedMarkers::new();
    /// markers.mark_voted("card-1");
    /// let cast = VoteCast::restore("card-1", 4, &markers);
    /// assert_eq!(cast.state(), VoteState::Voted);
    /// ```
    pub fn restore<M>(submission_id: impl Into<String>, votes: u64, markers: &M) -> Self
    where
        M: VotedMarkers + ?Sized,
    {
        let submission_id = submission_id.into();
        let state = if markers.has_voted(&submission_id) {
            VoteState::Voted
        } else {
            VoteState::NotVoted
        };
        Self {
            submission_id,
            votes,
            state,
        }
    }

    /// Identifier of the submission this state belongs to.
    #[must_use]
    pub fn submission_id(&self) -> &str {
        &self.submission_id
    }

    /// Count currently shown to the user.
    #[must_use]
    pub const fn votes(&self) -> u64 {
        self.votes
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> VoteState {
        self.state
    }

    /// Start a vote: bump the count, set the marker and enter `Voting`.
    ///
    /// Returns the new displayed count, or `None` when the card is already
    /// voting or voted and the trigger is ignored.
    pub fn begin<M>(&mut self, markers: &mut M) -> Option<u64>
    where
        M: VotedMarkers + ?Sized,
    {
        if self.state != VoteState::NotVoted {
            return None;
        }
        self.votes = self.votes.saturating_add(1);
        markers.mark_voted(&self.submission_id);
        self.state = VoteState::Voting;
        Some(self.votes)
    }

    /// Settle a successful vote.
    ///
    /// # Errors
    ///
    /// Returns [`VoteTransitionError::NotVoting`] unless a vote is in flight.
    pub fn confirm(&mut self) -> Result<VoteEffect, VoteTransitionError> {
        self.ensure_voting()?;
        self.state = VoteState::Voted;
        Ok(VoteEffect::RefreshListing)
    }

    /// Undo an optimistic vote after the server rejected it.
    ///
    /// # Errors
    ///
    /// Returns [`VoteTransitionError::NotVoting`] unless a vote is in flight.
    pub fn rollback<M>(&mut self, markers: &mut M) -> Result<VoteEffect, VoteTransitionError>
    where
        M: VotedMarkers + ?Sized,
    {
        self.ensure_voting()?;
        self.votes = self.votes.saturating_sub(1);
        markers.clear_vote(&self.submission_id);
        self.state = VoteState::NotVoted;
        Ok(VoteEffect::NotifyFailure)
    }

    fn ensure_voting(&self) -> Result<(), VoteTransitionError> {
        if self.state == VoteState::Voting {
            Ok(())
        } else {
            Err(VoteTransitionError::NotVoting)
        }
    }
}
