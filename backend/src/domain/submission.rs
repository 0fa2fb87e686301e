//! Submission entity and its value types.
//!
//! A submission is a wisdom card shared on the wall. Everything except the
//! vote counter is fixed at creation; the counter only ever grows.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Validation errors raised by [`SubmissionId::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionIdValidationError {
    /// The identifier was empty once trimmed.
    #[error("submission id must not be empty")]
    Empty,
    /// The identifier is not a UUID.
    #[error("submission id must be a valid UUID")]
    InvalidUuid,
}

/// Stable submission identifier (UUID v4).
///
/// # Examples
/// ```
/// use wisdom_wall::domain::SubmissionId;
///
/// let id = SubmissionId::new("3fa85f64-5717-4562-b3fc-2c963f66afa6").expect("valid id");
/// assert_eq!(id.to_string(), "3fa85f64-5717-4562-b3fc-2c963f66afa6");
/// assert!(SubmissionId::new("nope").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionId(Uuid);

impl SubmissionId {
    /// Parse an identifier from its textual form.
    ///
    /// # Errors
    /// Returns [`SubmissionIdValidationError`] when the input is blank or not
    /// a UUID.
    pub fn new(value: impl AsRef<str>) -> Result<Self, SubmissionIdValidationError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(SubmissionIdValidationError::Empty);
        }
        Uuid::parse_str(trimmed)
            .map(Self)
            .map_err(|_| SubmissionIdValidationError::InvalidUuid)
    }

    /// Generate a fresh random identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Access the inner UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SubmissionId {
    type Err = SubmissionIdValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Raised when a stored colour name is not one of the card colours.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown card colour '{value}'")]
pub struct CardColorParseError {
    /// The rejected input.
    pub value: String,
}

/// Background colour assigned to a card at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardColor {
    /// Red card.
    Red,
    /// Green card.
    Green,
    /// Blue card.
    Blue,
}

impl CardColor {
    /// Every colour a card may be given.
    pub const ALL: [Self; 3] = [Self::Red, Self::Green, Self::Blue];

    /// Wire and storage name of the colour.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
        }
    }
}

impl fmt::Display for CardColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CardColor {
    type Err = CardColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "red" => Ok(Self::Red),
            "green" => Ok(Self::Green),
            "blue" => Ok(Self::Blue),
            other => Err(CardColorParseError {
                value: other.to_owned(),
            }),
        }
    }
}

/// Listing order for the wall.
///
/// Ties are broken deterministically so a single listing is stable:
/// `top` falls back to newest first and then identifier, `latest` falls back
/// to identifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Most votes first.
    #[default]
    Top,
    /// Most recently created first.
    Latest,
}

impl SortKey {
    /// Interpret a raw `sort` query value.
    ///
    /// Absent or unrecognised values select [`SortKey::Top`].
    ///
    /// # Examples
    /// ```
    /// use wisdom_wall::domain::SortKey;
    ///
    /// assert_eq!(SortKey::from_query(Some("latest")), SortKey::Latest);
    /// assert_eq!(SortKey::from_query(Some("oldest")), SortKey::Top);
    /// assert_eq!(SortKey::from_query(None), SortKey::Top);
    /// ```
    #[must_use]
    pub fn from_query(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("latest") => Self::Latest,
            _ => Self::Top,
        }
    }

    /// Query-string name of the key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Latest => "latest",
        }
    }

    /// Compare two submissions in listing order.
    #[must_use]
    pub fn compare(self, a: &Submission, b: &Submission) -> Ordering {
        let newest_first = b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id));
        match self {
            Self::Top => b.votes.cmp(&a.votes).then(newest_first),
            Self::Latest => newest_first,
        }
    }

    /// Sort a slice of submissions in place.
    pub fn sort(self, submissions: &mut [Submission]) {
        submissions.sort_by(|a, b| self.compare(a, b));
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored wisdom card.
///
/// ## Invariants
/// - Text fields are trimmed and within the card length limits.
/// - `votes` never decreases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Stable identifier.
    pub id: SubmissionId,
    /// Author's name.
    pub name: String,
    /// Author's role.
    pub role: String,
    /// Shared advice.
    pub advice: String,
    /// Trait the author values when hiring.
    pub hiring_trait: String,
    /// Card background colour.
    pub color: CardColor,
    /// Number of votes received.
    pub votes: u64,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// A validated card ready to be stored, before any vote is cast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSubmissionRecord {
    /// Identifier assigned by the domain.
    pub id: SubmissionId,
    /// Trimmed name.
    pub name: String,
    /// Trimmed role.
    pub role: String,
    /// Trimmed advice.
    pub advice: String,
    /// Trimmed hiring trait.
    pub hiring_trait: String,
    /// Assigned colour.
    pub color: CardColor,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<NewSubmissionRecord> for Submission {
    fn from(value: NewSubmissionRecord) -> Self {
        Self {
            id: value.id,
            name: value.name,
            role: value.role,
            advice: value.advice,
            hiring_trait: value.hiring_trait,
            color: value.color,
            votes: 0,
            created_at: value.created_at,
        }
    }
}
