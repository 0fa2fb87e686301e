//! Driven port for submission persistence.
//!
//! Adapters store cards, bump vote counters atomically, and return ordered
//! listings. Nothing but the vote counter is ever modified after insert.

use async_trait::async_trait;

use crate::domain::{NewSubmissionRecord, SortKey, Submission, SubmissionId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by submission repository adapters.
    pub enum SubmissionRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "submission repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "submission repository query failed: {message}",
        /// No submission exists with the given identifier.
        NotFound { id: SubmissionId } =>
            "submission {id} not found",
    }
}

/// Port for creating, voting on, and listing submissions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    /// Store a new card with zero votes and return it.
    async fn insert(
        &self,
        record: &NewSubmissionRecord,
    ) -> Result<Submission, SubmissionRepositoryError>;

    /// Atomically add one vote and return the updated card.
    ///
    /// Concurrent calls for the same id must never lose an increment.
    async fn increment_votes(
        &self,
        id: &SubmissionId,
    ) -> Result<Submission, SubmissionRepositoryError>;

    /// Return every card in the requested order.
    async fn list(&self, sort: SortKey) -> Result<Vec<Submission>, SubmissionRepositoryError>;
}

/// Fixture implementation for tests that do not exercise persistence.
///
/// Inserts echo the record back, votes always miss, listings are empty.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureSubmissionRepository;

#[async_trait]
impl SubmissionRepository for FixtureSubmissionRepository {
    async fn insert(
        &self,
        record: &NewSubmissionRecord,
    ) -> Result<Submission, SubmissionRepositoryError> {
        Ok(Submission::from(record.clone()))
    }

    async fn increment_votes(
        &self,
        id: &SubmissionId,
    ) -> Result<Submission, SubmissionRepositoryError> {
        Err(SubmissionRepositoryError::not_found(*id))
    }

    async fn list(&self, _sort: SortKey) -> Result<Vec<Submission>, SubmissionRepositoryError> {
        Ok(Vec::new())
    }
}
