//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    FixtureSubmissionCommand, FixtureSubmissionQuery, SubmissionCommand, SubmissionQuery,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub submissions: Arc<dyn SubmissionCommand>,
    pub submissions_query: Arc<dyn SubmissionQuery>,
}

impl HttpState {
    /// Construct state from the submission driving ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use wisdom_wall::domain::ports::{FixtureSubmissionCommand, FixtureSubmissionQuery};
    /// use wisdom_wall::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(
    ///     Arc::new(FixtureSubmissionCommand),
    ///     Arc::new(FixtureSubmissionQuery),
    /// );
    /// let _ = state.submissions.clone();
    /// ```
    pub fn new(
        submissions: Arc<dyn SubmissionCommand>,
        submissions_query: Arc<dyn SubmissionQuery>,
    ) -> Self {
        Self {
            submissions,
            submissions_query,
        }
    }
}

impl Default for HttpState {
    fn default() -> Self {
        Self::new(
            Arc::new(FixtureSubmissionCommand),
            Arc::new(FixtureSubmissionQuery),
        )
    }
}
