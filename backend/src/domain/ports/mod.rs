//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`SubmissionRepository`, `SubmissionMetrics`,
//! `CardColorPicker`) are implemented by outbound adapters. Driving ports
//! (`SubmissionCommand`, `SubmissionQuery`) are implemented by domain
//! services and consumed by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod card_color_picker;
mod submission_command;
mod submission_metrics;
mod submission_query;
mod submission_repository;

pub use card_color_picker::{CardColorPicker, FixtureCardColorPicker, RandomCardColorPicker};
#[cfg(test)]
pub use submission_command::MockSubmissionCommand;
pub use submission_command::{
    CreateSubmissionRequest, FixtureSubmissionCommand, SubmissionCommand,
};
#[cfg(test)]
pub use submission_metrics::MockSubmissionMetrics;
pub use submission_metrics::{NoOpSubmissionMetrics, SubmissionMetrics, SubmissionMetricsError};
#[cfg(test)]
pub use submission_query::MockSubmissionQuery;
pub use submission_query::{FixtureSubmissionQuery, SubmissionQuery};
#[cfg(test)]
pub use submission_repository::MockSubmissionRepository;
pub use submission_repository::{
    FixtureSubmissionRepository, SubmissionRepository, SubmissionRepositoryError,
};
