//! Domain port surface for recording submission activity metrics.
//!
//! This port enables observability of card creation, votes, and rejected
//! submissions without coupling domain logic to a specific metrics backend.
//! Implementations may export to Prometheus or simply discard metrics in
//! tests. Callers log and ignore failures; metrics never fail a request.

use async_trait::async_trait;

use super::define_port_error;

define_port_error! {
    /// Errors exposed when recording submission metrics.
    pub enum SubmissionMetricsError {
        /// Metric exporter rejected the write.
        Export { message: String } => "submission metrics exporter failed: {message}",
    }
}

/// Metrics recording port for submission outcomes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionMetrics: Send + Sync {
    /// Record a stored card.
    async fn record_created(&self) -> Result<(), SubmissionMetricsError>;

    /// Record an accepted vote.
    async fn record_vote(&self) -> Result<(), SubmissionMetricsError>;

    /// Record a card rejected by validation.
    ///
    /// `field` is the wire name of the offending field and `code` the rule
    /// that failed.
    async fn record_rejected(&self, field: &str, code: &str)
    -> Result<(), SubmissionMetricsError>;
}

/// No-op implementation for when metrics are disabled or in tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpSubmissionMetrics;

#[async_trait]
impl SubmissionMetrics for NoOpSubmissionMetrics {
    async fn record_created(&self) -> Result<(), SubmissionMetricsError> {
        Ok(())
    }

    async fn record_vote(&self) -> Result<(), SubmissionMetricsError> {
        Ok(())
    }

    async fn record_rejected(
        &self,
        _field: &str,
        _code: &str,
    ) -> Result<(), SubmissionMetricsError> {
        Ok(())
    }
}
