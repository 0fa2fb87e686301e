//! Builders wiring the submission service to its adapters.

use std::sync::Arc;

use mockable::DefaultClock;
use tracing::info;
use wisdom_wall::domain::SubmissionService;
use wisdom_wall::domain::ports::{NoOpSubmissionMetrics, SubmissionMetrics, SubmissionRepository};
use wisdom_wall::inbound::http::state::HttpState;
use wisdom_wall::outbound::memory::InMemorySubmissionRepository;
#[cfg(feature = "metrics")]
use wisdom_wall::outbound::metrics::PrometheusSubmissionMetrics;
use wisdom_wall::outbound::persistence::DieselSubmissionRepository;

use super::ServerConfig;

/// Pick the metrics recorder: Prometheus when a registry is configured,
/// otherwise a no-op.
///
/// # Errors
/// Returns [`std::io::Error`] if counter registration fails.
#[cfg(feature = "metrics")]
fn build_submission_metrics(config: &ServerConfig) -> std::io::Result<Arc<dyn SubmissionMetrics>> {
    match &config.prometheus {
        Some(prom) => {
            let metrics = PrometheusSubmissionMetrics::new(&prom.registry).map_err(|e| {
                std::io::Error::other(format!("submission metrics registration failed: {e}"))
            })?;
            Ok(Arc::new(metrics))
        }
        None => Ok(Arc::new(NoOpSubmissionMetrics)),
    }
}

#[cfg(not(feature = "metrics"))]
fn build_submission_metrics(
    _config: &ServerConfig,
) -> std::io::Result<Arc<dyn SubmissionMetrics>> {
    Ok(Arc::new(NoOpSubmissionMetrics))
}

fn state_for<R>(
    repo: Arc<R>,
    metrics: Arc<dyn SubmissionMetrics>,
    config: &ServerConfig,
) -> HttpState
where
    R: SubmissionRepository + 'static,
{
    let service = Arc::new(
        SubmissionService::new(repo, Arc::new(DefaultClock))
            .with_metrics(metrics)
            .with_policy(config.hiring_trait_policy),
    );
    info!(policy = %service.policy(), "hiring-trait policy in force");
    HttpState::new(service.clone(), service)
}

/// Build HTTP state backed by PostgreSQL when a pool is configured, or by the
/// in-process store otherwise.
///
/// # Errors
/// Returns [`std::io::Error`] if metrics registration fails.
pub(super) fn build_http_state(config: &ServerConfig) -> std::io::Result<HttpState> {
    let metrics = build_submission_metrics(config)?;
    let state = match &config.db_pool {
        Some(pool) => {
            info!("serving submissions from PostgreSQL");
            state_for(
                Arc::new(DieselSubmissionRepository::new(pool.clone())),
                metrics,
                config,
            )
        }
        None => {
            info!("no database configured; submissions are kept in memory");
            state_for(Arc::new(InMemorySubmissionRepository::new()), metrics, config)
        }
    };
    Ok(state)
}
