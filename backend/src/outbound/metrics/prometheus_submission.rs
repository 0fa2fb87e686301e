//! Prometheus adapter for submission lifecycle metrics.
//!
//! Counters are registered on the registry that backs the `/metrics`
//! endpoint, so they appear next to the request metrics from
//! `actix-web-prom`.

use async_trait::async_trait;
use prometheus::{IntCounter, IntCounterVec, Opts, Registry};

use crate::domain::ports::{SubmissionMetrics, SubmissionMetricsError};

/// Prometheus-backed submission metrics recorder.
///
/// # Metrics
///
/// - `wisdom_submissions_created_total`: cards stored.
/// - `wisdom_votes_total`: votes recorded.
/// - `wisdom_submissions_rejected_total{field, code}`: validation failures by
///   the first failing field and its rule code.
pub struct PrometheusSubmissionMetrics {
    created_total: IntCounter,
    votes_total: IntCounter,
    rejected_total: IntCounterVec,
}

impl PrometheusSubmissionMetrics {
    /// Create and register the counters with the given registry.
    ///
    /// # Errors
    ///
    /// Returns an error if a counter with the same name is already registered.
    pub fn new(registry: &Registry) -> Result<Self, prometheus::Error> {
        let created_total = IntCounter::with_opts(Opts::new(
            "wisdom_submissions_created_total",
            "Total wisdom cards stored",
        ))?;
        let votes_total = IntCounter::with_opts(Opts::new(
            "wisdom_votes_total",
            "Total votes recorded across all cards",
        ))?;
        let rejected_total = IntCounterVec::new(
            Opts::new(
                "wisdom_submissions_rejected_total",
                "Submissions rejected by validation, by field and rule",
            ),
            &["field", "code"],
        )?;

        registry.register(Box::new(created_total.clone()))?;
        registry.register(Box::new(votes_total.clone()))?;
        registry.register(Box::new(rejected_total.clone()))?;

        Ok(Self {
            created_total,
            votes_total,
            rejected_total,
        })
    }
}

#[async_trait]
impl SubmissionMetrics for PrometheusSubmissionMetrics {
    async fn record_created(&self) -> Result<(), SubmissionMetricsError> {
        self.created_total.inc();
        Ok(())
    }

    async fn record_vote(&self) -> Result<(), SubmissionMetricsError> {
        self.votes_total.inc();
        Ok(())
    }

    async fn record_rejected(&self, field: &str, code: &str) -> Result<(), SubmissionMetricsError> {
        self.rejected_total.with_label_values(&[field, code]).inc();
        Ok(())
    }
}
