//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::submissions;

/// Row struct for reading from the submissions table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = submissions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct SubmissionRow {
    pub id: Uuid,
    pub name: String,
    pub role: String,
    pub advice: String,
    pub hiring_trait: String,
    pub color: String,
    pub votes: i64,
    pub created_at: DateTime<Utc>,
}

/// Insertable struct for new cards; `votes` takes the column default.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = submissions)]
pub(crate) struct NewSubmissionRow<'a> {
    pub id: Uuid,
    pub name: &'a str,
    pub role: &'a str,
    pub advice: &'a str,
    pub hiring_trait: &'a str,
    pub color: &'a str,
    pub created_at: DateTime<Utc>,
}
