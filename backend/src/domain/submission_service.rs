//! Submission domain service.
//!
//! Implements the submission driving ports over a repository. Creation
//! re-validates every card, assigns identity, timestamp and colour, then
//! persists. Votes delegate to the repository's atomic increment.

use std::sync::Arc;

use async_trait::async_trait;
use card_rules::HiringTraitPolicy;
use mockable::Clock;
use tracing::{debug, error, info, warn};

use crate::domain::ports::{
    CardColorPicker, CreateSubmissionRequest, NoOpSubmissionMetrics, RandomCardColorPicker,
    SubmissionCommand, SubmissionMetrics, SubmissionMetricsError, SubmissionQuery,
    SubmissionRepository, SubmissionRepositoryError,
};
use crate::domain::{
    Error, NewSubmissionRecord, SortKey, Submission, SubmissionId, validate_submission,
};

const CREATE_FAILED: &str = "Failed to create submission";
const VOTE_FAILED: &str = "Failed to vote on submission";
const LIST_FAILED: &str = "Failed to fetch submissions";
const NOT_FOUND: &str = "Submission not found";

/// Translate a repository failure into a client-safe domain error.
///
/// The cause is logged; only `generic` reaches the caller.
fn map_repository_error(err: SubmissionRepositoryError, generic: &'static str) -> Error {
    match err {
        SubmissionRepositoryError::NotFound { id } => {
            debug!(submission_id = %id, "submission not found");
            Error::not_found(NOT_FOUND)
        }
        SubmissionRepositoryError::Connection { message }
        | SubmissionRepositoryError::Query { message } => {
            error!(error = %message, operation = generic, "submission store failure");
            Error::internal(generic)
        }
    }
}

fn log_metrics_failure(result: Result<(), SubmissionMetricsError>) {
    if let Err(err) = result {
        warn!(error = %err, "failed to record submission metric");
    }
}

/// Submission service implementing [`SubmissionCommand`] and
/// [`SubmissionQuery`].
#[derive(Clone)]
pub struct SubmissionService<R> {
    repo: Arc<R>,
    clock: Arc<dyn Clock>,
    colors: Arc<dyn CardColorPicker>,
    metrics: Arc<dyn SubmissionMetrics>,
    policy: HiringTraitPolicy,
}

impl<R> SubmissionService<R> {
    /// Create a service with random colours, no-op metrics and the default
    /// hiring-trait policy.
    pub fn new(repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self {
            repo,
            clock,
            colors: Arc::new(RandomCardColorPicker),
            metrics: Arc::new(NoOpSubmissionMetrics),
            policy: HiringTraitPolicy::default(),
        }
    }

    /// Replace the colour picker.
    #[must_use]
    pub fn with_color_picker(mut self, colors: Arc<dyn CardColorPicker>) -> Self {
        self.colors = colors;
        self
    }

    /// Replace the metrics recorder.
    #[must_use]
    pub fn with_metrics(mut self, metrics: Arc<dyn SubmissionMetrics>) -> Self {
        self.metrics = metrics;
        self
    }

    /// Select the hiring-trait policy enforced on creation.
    #[must_use]
    pub fn with_policy(mut self, policy: HiringTraitPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Hiring-trait policy enforced on creation.
    #[must_use]
    pub const fn policy(&self) -> HiringTraitPolicy {
        self.policy
    }
}

#[async_trait]
impl<R> SubmissionCommand for SubmissionService<R>
where
    R: SubmissionRepository,
{
    async fn create(&self, request: CreateSubmissionRequest) -> Result<Submission, Error> {
        let card = match validate_submission(&request, self.policy) {
            Ok(card) => card,
            Err(rejection) => {
                debug!(
                    field = rejection.field.as_str(),
                    code = rejection.code,
                    "submission rejected"
                );
                log_metrics_failure(
                    self.metrics
                        .record_rejected(rejection.field.as_str(), rejection.code)
                        .await,
                );
                return Err(rejection.into());
            }
        };

        let record = NewSubmissionRecord {
            id: SubmissionId::random(),
            name: card.name,
            role: card.role,
            advice: card.advice,
            hiring_trait: card.hiring_trait,
            color: self.colors.pick(),
            created_at: self.clock.utc(),
        };

        let stored = self
            .repo
            .insert(&record)
            .await
            .map_err(|err| map_repository_error(err, CREATE_FAILED))?;

        info!(submission_id = %stored.id, color = %stored.color, "submission created");
        log_metrics_failure(self.metrics.record_created().await);
        Ok(stored)
    }

    async fn vote(&self, id: &SubmissionId) -> Result<Submission, Error> {
        let updated = self
            .repo
            .increment_votes(id)
            .await
            .map_err(|err| map_repository_error(err, VOTE_FAILED))?;

        debug!(submission_id = %updated.id, votes = updated.votes, "vote recorded");
        log_metrics_failure(self.metrics.record_vote().await);
        Ok(updated)
    }
}

#[async_trait]
impl<R> SubmissionQuery for SubmissionService<R>
where
    R: SubmissionRepository,
{
    async fn list(&self, sort: SortKey) -> Result<Vec<Submission>, Error> {
        self.repo
            .list(sort)
            .await
            .map_err(|err| map_repository_error(err, LIST_FAILED))
    }
}

#[cfg(test)]
#[path = "submission_service_tests.rs"]
mod tests;
