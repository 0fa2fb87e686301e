//! Driving port for reading the wall.

use async_trait::async_trait;

use crate::domain::{Error, SortKey, Submission};

/// Driving port for submission listings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionQuery: Send + Sync {
    /// Return every card in the requested order.
    async fn list(&self, sort: SortKey) -> Result<Vec<Submission>, Error>;
}

/// Fixture query returning an empty wall.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureSubmissionQuery;

#[async_trait]
impl SubmissionQuery for FixtureSubmissionQuery {
    async fn list(&self, _sort: SortKey) -> Result<Vec<Submission>, Error> {
        Ok(Vec::new())
    }
}
