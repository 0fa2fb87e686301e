//! Prometheus-backed implementations of the metrics ports.
//!
//! Feature-gated behind `metrics`.

mod prometheus_submission;

pub use prometheus_submission::PrometheusSubmissionMetrics;
