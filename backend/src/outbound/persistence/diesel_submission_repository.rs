//! PostgreSQL-backed `SubmissionRepository` implementation using Diesel ORM.
//!
//! Vote increments are a single `UPDATE ... SET votes = votes + 1 RETURNING`
//! statement, so concurrent votes never lose an update.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{SubmissionRepository, SubmissionRepositoryError};
use crate::domain::{CardColor, NewSubmissionRecord, SortKey, Submission, SubmissionId};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewSubmissionRow, SubmissionRow};
use super::pool::DbPool;
use super::schema::submissions;

/// Diesel-backed implementation of the submission repository port.
#[derive(Clone)]
pub struct DieselSubmissionRepository {
    pool: DbPool,
}

impl DieselSubmissionRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Convert a database row into a domain submission.
fn row_to_submission(row: SubmissionRow) -> Result<Submission, SubmissionRepositoryError> {
    let SubmissionRow {
        id,
        name,
        role,
        advice,
        hiring_trait,
        color,
        votes,
        created_at,
    } = row;

    let color = color
        .parse::<CardColor>()
        .map_err(|err| SubmissionRepositoryError::query(err.to_string()))?;
    let votes = u64::try_from(votes)
        .map_err(|_| SubmissionRepositoryError::query(format!("negative vote count {votes}")))?;

    Ok(Submission {
        id: SubmissionId::from_uuid(id),
        name,
        role,
        advice,
        hiring_trait,
        color,
        votes,
        created_at,
    })
}

fn rows_to_submissions(
    rows: Vec<SubmissionRow>,
) -> Result<Vec<Submission>, SubmissionRepositoryError> {
    rows.into_iter().map(row_to_submission).collect()
}

#[async_trait]
impl SubmissionRepository for DieselSubmissionRepository {
    async fn insert(
        &self,
        record: &NewSubmissionRecord,
    ) -> Result<Submission, SubmissionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewSubmissionRow {
            id: *record.id.as_uuid(),
            name: &record.name,
            role: &record.role,
            advice: &record.advice,
            hiring_trait: &record.hiring_trait,
            color: record.color.as_str(),
            created_at: record.created_at,
        };

        let row = diesel::insert_into(submissions::table)
            .values(&new_row)
            .returning(SubmissionRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        row_to_submission(row)
    }

    async fn increment_votes(
        &self,
        id: &SubmissionId,
    ) -> Result<Submission, SubmissionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = diesel::update(submissions::table.find(*id.as_uuid()))
            .set(submissions::votes.eq(submissions::votes + 1))
            .returning(SubmissionRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map_or_else(
            || Err(SubmissionRepositoryError::not_found(*id)),
            row_to_submission,
        )
    }

    async fn list(&self, sort: SortKey) -> Result<Vec<Submission>, SubmissionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let query = submissions::table.select(SubmissionRow::as_select());
        let rows: Vec<SubmissionRow> = match sort {
            SortKey::Top => {
                query
                    .order((
                        submissions::votes.desc(),
                        submissions::created_at.desc(),
                        submissions::id.asc(),
                    ))
                    .load(&mut conn)
                    .await
            }
            SortKey::Latest => {
                query
                    .order((submissions::created_at.desc(), submissions::id.asc()))
                    .load(&mut conn)
                    .await
            }
        }
        .map_err(map_diesel_error)?;

        rows_to_submissions(rows)
    }
}
