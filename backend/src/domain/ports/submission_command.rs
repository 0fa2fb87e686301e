//! Driving port for submission mutations: creating cards and voting.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{Error, Submission, SubmissionId};

/// Raw card fields as received at the boundary.
///
/// Every field is optional so that missing input reaches the domain's
/// required-fields gate instead of failing deserialisation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubmissionRequest {
    /// Author's name.
    pub name: Option<String>,
    /// Author's role.
    pub role: Option<String>,
    /// Advice text.
    pub advice: Option<String>,
    /// Hiring trait.
    pub hiring_trait: Option<String>,
    /// Publication consent.
    pub consent: Option<bool>,
}

/// Driving port for submission write operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionCommand: Send + Sync {
    /// Validate and store a new card.
    ///
    /// Validation failures surface as [`crate::domain::ErrorCode::InvalidRequest`]
    /// without touching the store; storage failures as
    /// [`crate::domain::ErrorCode::InternalError`].
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use wisdom_wall::domain::ports::{CreateSubmissionRequest, FixtureSubmissionCommand, SubmissionCommand};
    /// # async fn example() -> Result<(), wisdom_wall::domain::Error> {
    /// let command = FixtureSubmissionCommand;
    /// let created = command
    ///     .create(CreateSubmissionRequest {
    ///         name: Some("Ada".into()),
    ///         role: Some("Engineer".into()),
    ///         advice: Some("Ship small".into()),
    ///         hiring_trait: Some("Curiosity".into()),
    ///         consent: Some(true),
    ///     })
    ///     .await?;
    /// assert_eq!(created.votes, 0);
    /// # Ok(())
    /// # }
    /// ```
    async fn create(&self, request: CreateSubmissionRequest) -> Result<Submission, Error>;

    /// Add one vote to an existing card and return it.
    async fn vote(&self, id: &SubmissionId) -> Result<Submission, Error>;
}

/// Fixture command for handler tests that do not need persistence.
///
/// Creation echoes the trimmed request as a blue card; voting always reports
/// the card as missing.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureSubmissionCommand;

#[async_trait]
impl SubmissionCommand for FixtureSubmissionCommand {
    async fn create(&self, request: CreateSubmissionRequest) -> Result<Submission, Error> {
        let text = |value: Option<String>| value.map(|v| v.trim().to_owned()).unwrap_or_default();
        Ok(Submission {
            id: SubmissionId::random(),
            name: text(request.name),
            role: text(request.role),
            advice: text(request.advice),
            hiring_trait: text(request.hiring_trait),
            color: crate::domain::CardColor::Blue,
            votes: 0,
            created_at: chrono::Utc::now(),
        })
    }

    async fn vote(&self, _id: &SubmissionId) -> Result<Submission, Error> {
        Err(Error::not_found("Submission not found"))
    }
}
